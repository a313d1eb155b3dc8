use std::{iter::Peekable, vec::IntoIter};

use pipesh_ast::{CommandGraph, OutputSink, Stage};

use crate::{ParseError, ParseResult, Span, Token, TokenContents};

/// A parser turns a sequence of tokens into a [`CommandGraph`].
///
/// Comments are discarded before parsing.
pub(crate) struct Parser {
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| token.contents != TokenContents::Comment)
            .collect();

        Self {
            tokens: tokens.into_iter().peekable(),
        }
    }

    /// Parses all remaining tokens as a pipeline.
    ///
    /// Returns `Ok(None)` if there are no tokens to parse.
    pub(crate) fn parse_graph(&mut self) -> ParseResult<Option<CommandGraph>> {
        if self.tokens.peek().is_none() {
            return Ok(None);
        }

        let mut stages = Vec::new();
        let mut start = Span::new(0, 0);

        loop {
            let mut stage = self.parse_stage(start)?;

            match self.tokens.next() {
                Some(Token {
                    contents: TokenContents::Pipe,
                    span,
                }) => {
                    if stage.output != OutputSink::Inherit {
                        return Err(ParseError::OutputBeforePipe(span));
                    }
                    stage.output = OutputSink::PipeToNext;
                    stages.push(stage);
                    start = span;
                }
                None => {
                    stages.push(stage);
                    break;
                }
                Some(token) => unreachable!("stages end at a pipe or at the end of input: {token:?}"),
            }
        }

        // Every stage but the last is piped at this point, which leaves an empty
        // pipeline as the only graph that can be rejected.
        CommandGraph::new(stages)
            .map(Some)
            .map_err(|_| ParseError::EmptyCommand(start))
    }

    /// Parses words and redirections up until the next pipe or the end of input.
    ///
    /// The `start` span points at the pipe preceding the stage, and is used to
    /// report stages without a command.
    pub(crate) fn parse_stage(&mut self, start: Span) -> ParseResult<Stage> {
        let mut stage = Stage::default();

        while let Some(token) = self
            .tokens
            .next_if(|token| token.contents != TokenContents::Pipe)
        {
            match token.contents {
                TokenContents::Word(word) => stage.argv.push(word),
                TokenContents::FileRead => {
                    let path = self.parse_redirect_target(token.span)?;
                    if stage.input.is_some() {
                        return Err(ParseError::DuplicateInput(token.span));
                    }
                    stage.input = Some(path.into());
                }
                TokenContents::FileWrite => {
                    let path = self.parse_redirect_target(token.span)?;
                    set_output(&mut stage, OutputSink::TruncateFile(path.into()), token.span)?;
                }
                TokenContents::FileAppend => {
                    let path = self.parse_redirect_target(token.span)?;
                    set_output(&mut stage, OutputSink::AppendFile(path.into()), token.span)?;
                }
                TokenContents::Comment | TokenContents::Pipe => {
                    unreachable!("comments and pipes are never consumed here")
                }
            }
        }

        if stage.argv.is_empty() {
            let span = self.tokens.peek().map(|token| token.span).unwrap_or(start);
            return Err(ParseError::EmptyCommand(span));
        }

        Ok(stage)
    }

    /// Parses the file name following a redirection operator.
    fn parse_redirect_target(&mut self, operator: Span) -> ParseResult<String> {
        match self.tokens.next_if(|token| matches!(token.contents, TokenContents::Word(_))) {
            Some(Token {
                contents: TokenContents::Word(path),
                ..
            }) => Ok(path),
            _ => Err(ParseError::MissingRedirectTarget(operator)),
        }
    }
}

/// Redirects the output of a stage, unless it has already been redirected.
fn set_output(stage: &mut Stage, output: OutputSink, span: Span) -> ParseResult<()> {
    if stage.output != OutputSink::Inherit {
        return Err(ParseError::DuplicateOutput(span));
    }
    stage.output = output;
    Ok(())
}
