use std::iter::Peekable;
use std::str::CharIndices;

use crate::lex::input::{is_operator, is_whitespace};
use crate::token::TokenContents::*;
use crate::{Span, Token, TokenContents};

type Input<'a> = Peekable<CharIndices<'a>>;
type LexResult = Result<Option<Token>, LexError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A quote starting at the span is never closed.
    UnterminatedQuote(Span),
    /// The input ends directly after an escape character.
    TrailingEscape(Span),
}

/// Lexes some input `str` and returns all tokens within the input.
pub fn lex(src: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}

/// A lexer takes some `str` input and tokenizes it, returning identified tokens
/// from the original input.
pub struct Lexer<'a> {
    input: Input<'a>,
    input_length: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            input: src.char_indices().peekable(),
            input_length: src.len(),
        }
    }

    /// Advances the cursor and returns the next token, or `None` at the end of input.
    pub fn next_token(&mut self) -> LexResult {
        self.skip_whitespace();

        let Some(&(start, ch)) = self.input.peek() else {
            return Ok(None);
        };

        match ch {
            '#' => Ok(Some(self.eat_comment(start))),
            '|' => Ok(Some(self.eat_char(start, Pipe))),
            '<' => Ok(Some(self.eat_char(start, FileRead))),
            '>' => Ok(Some(self.eat_write_or_append(start))),
            _ => self.eat_word(start).map(Some),
        }
    }

    /// Returns the byte position of the next character, or the input length at the end of input.
    fn position(&mut self) -> usize {
        self.input
            .peek()
            .map(|(pos, _)| *pos)
            .unwrap_or(self.input_length)
    }

    fn skip_whitespace(&mut self) {
        while self.input.next_if(|(_, c)| is_whitespace(*c)).is_some() {}
    }

    fn eat_char(&mut self, start: usize, contents: TokenContents) -> Token {
        self.input.next();
        Token::new(contents, Span::new(start, self.position()))
    }

    fn eat_comment(&mut self, start: usize) -> Token {
        while self.input.next_if(|(_, c)| *c != '\n').is_some() {}
        Token::new(Comment, Span::new(start, self.position()))
    }

    fn eat_write_or_append(&mut self, start: usize) -> Token {
        self.input.next();
        let contents = match self.input.next_if(|(_, c)| *c == '>') {
            Some(_) => FileAppend,
            None => FileWrite,
        };
        Token::new(contents, Span::new(start, self.position()))
    }

    /// Consumes a word, removing quotes and escape characters.
    ///
    /// A word ends at unquoted whitespace, at an unquoted operator, or at the end of input.
    fn eat_word(&mut self, start: usize) -> Result<Token, LexError> {
        let mut word = String::new();

        while let Some(&(pos, ch)) = self.input.peek() {
            if is_whitespace(ch) || is_operator(ch) {
                break;
            }

            self.input.next();
            match ch {
                '\'' => self.eat_single_quoted(pos, &mut word)?,
                '"' => self.eat_double_quoted(pos, &mut word)?,
                '\\' => match self.input.next() {
                    Some((_, escaped)) => word.push(escaped),
                    None => return Err(LexError::TrailingEscape(Span::new(pos, pos + 1))),
                },
                _ => word.push(ch),
            }
        }

        Ok(Token::new(Word(word), Span::new(start, self.position())))
    }

    /// Consumes the contents of a single-quoted string. Nothing is escaped within single quotes.
    fn eat_single_quoted(&mut self, quote: usize, word: &mut String) -> Result<(), LexError> {
        for (_, ch) in self.input.by_ref() {
            if ch == '\'' {
                return Ok(());
            }
            word.push(ch);
        }

        Err(LexError::UnterminatedQuote(Span::new(
            quote,
            self.input_length,
        )))
    }

    /// Consumes the contents of a double-quoted string.
    ///
    /// Only `\"` and `\\` are treated as escape sequences within double quotes.
    fn eat_double_quoted(&mut self, quote: usize, word: &mut String) -> Result<(), LexError> {
        while let Some((_, ch)) = self.input.next() {
            match ch {
                '"' => return Ok(()),
                '\\' => match self.input.next_if(|(_, c)| matches!(c, '"' | '\\')) {
                    Some((_, escaped)) => word.push(escaped),
                    None => word.push('\\'),
                },
                _ => word.push(ch),
            }
        }

        Err(LexError::UnterminatedQuote(Span::new(
            quote,
            self.input_length,
        )))
    }
}
