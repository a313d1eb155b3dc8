use pipesh_ast::CommandGraph;

use crate::{
    lex::lexer::{lex, LexError},
    ParseError,
};

use self::parser::Parser;

mod parser;

#[cfg(test)]
mod tests;

/// A specialized [`Result`] type for parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a single line of input into a [`CommandGraph`].
///
/// Returns `Ok(None)` if the input does not contain a command, such as for
/// blank lines and comments.
///
/// # Errors
///
/// This function will return an error if the input can't be parsed.
pub fn parse(src: &str) -> ParseResult<Option<CommandGraph>> {
    match lex(src) {
        Ok(tokens) => Parser::new(tokens).parse_graph(),
        Err(LexError::UnterminatedQuote(span)) => Err(ParseError::UnterminatedQuote(span)),
        Err(LexError::TrailingEscape(span)) => Err(ParseError::TrailingEscape(span)),
    }
}
