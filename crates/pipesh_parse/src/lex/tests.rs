use super::lexer::*;
use crate::{Span, Token, TokenContents::*};

fn tokens(src: &str) -> Vec<Token> {
    lex(src).expect("input should be lexed")
}

fn word(text: &str, start: usize, end: usize) -> Token {
    Token::new(Word(text.into()), Span::new(start, end))
}

#[test]
fn lex_operators() {
    assert_eq!(tokens("|"), vec![Token::new(Pipe, Span::new(0, 1))]);
    assert_eq!(tokens("<"), vec![Token::new(FileRead, Span::new(0, 1))]);
    assert_eq!(tokens(">"), vec![Token::new(FileWrite, Span::new(0, 1))]);
    assert_eq!(tokens(">>"), vec![Token::new(FileAppend, Span::new(0, 2))]);
}

#[test]
fn lex_empty_input() {
    assert_eq!(tokens(""), Vec::new());
    assert_eq!(tokens(" \t\r\n"), Vec::new());
}

#[test]
fn lex_comment() {
    assert_eq!(
        tokens("# This is a comment"),
        vec![Token::new(Comment, Span::new(0, 19))]
    );
    assert_eq!(
        tokens("ls # list"),
        vec![word("ls", 0, 2), Token::new(Comment, Span::new(3, 9))]
    );
}

#[test]
fn lex_words() {
    assert_eq!(
        tokens("ls -lah\t/tmp"),
        vec![word("ls", 0, 2), word("-lah", 3, 7), word("/tmp", 8, 12)]
    );
}

#[test]
fn lex_words_ending_at_operators() {
    assert_eq!(
        tokens("a|b>c>>d<e"),
        vec![
            word("a", 0, 1),
            Token::new(Pipe, Span::new(1, 2)),
            word("b", 2, 3),
            Token::new(FileWrite, Span::new(3, 4)),
            word("c", 4, 5),
            Token::new(FileAppend, Span::new(5, 7)),
            word("d", 7, 8),
            Token::new(FileRead, Span::new(8, 9)),
            word("e", 9, 10),
        ]
    );
}

#[test]
fn lex_hash_inside_word() {
    assert_eq!(tokens("a#b"), vec![word("a#b", 0, 3)]);
}

#[test]
fn lex_single_quoted_words() {
    assert_eq!(tokens("'a | b'"), vec![word("a | b", 0, 7)]);
    assert_eq!(tokens(r"'a\b'"), vec![word(r"a\b", 0, 5)]);
    assert_eq!(tokens("''"), vec![word("", 0, 2)]);
}

#[test]
fn lex_double_quoted_words() {
    assert_eq!(tokens(r#""a > b""#), vec![word("a > b", 0, 7)]);
    assert_eq!(tokens(r#""say \"hi\"""#), vec![word(r#"say "hi""#, 0, 12)]);
    assert_eq!(tokens(r#""a\nb""#), vec![word(r"a\nb", 0, 6)]);
}

#[test]
fn lex_concatenated_quotes() {
    assert_eq!(tokens(r#"a'b c'"d e"f"#), vec![word("ab cd ef", 0, 12)]);
}

#[test]
fn lex_escapes() {
    assert_eq!(tokens(r"a\ b"), vec![word("a b", 0, 4)]);
    assert_eq!(tokens(r"\|"), vec![word("|", 0, 2)]);
}

#[test]
fn lex_unterminated_quotes() {
    assert_eq!(
        lex("echo 'abc"),
        Err(LexError::UnterminatedQuote(Span::new(5, 9)))
    );
    assert_eq!(
        lex(r#"echo "abc"#),
        Err(LexError::UnterminatedQuote(Span::new(5, 9)))
    );
}

#[test]
fn lex_trailing_escape() {
    assert_eq!(lex(r"echo \"), Err(LexError::TrailingEscape(Span::new(5, 6))));
}
