/// Returns `true` if a character separates words.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'   // \t
        | '\u{000A}' // \n
        | '\u{000B}' // vertical tab
        | '\u{000C}' // form feed
        | '\u{000D}' // \r
        | '\u{0020}' // space
    )
}

/// Returns `true` if a character is an operator that ends an unquoted word.
pub fn is_operator(c: char) -> bool {
    matches!(c, '|' | '<' | '>')
}
