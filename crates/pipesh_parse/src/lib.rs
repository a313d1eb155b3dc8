mod error;
mod lex;
mod parse;
mod token;

pub use error::ParseError;
pub use lex::lexer::{lex, LexError};
pub use parse::{parse, ParseResult};
pub use token::{Span, Token, TokenContents};
