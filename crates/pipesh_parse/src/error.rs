use thiserror::Error;

use crate::Span;

/// Parse errors are returned when a line of input cannot be turned into a
/// command graph.
///
/// The display text of each error is the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quoted word is missing its closing quote.
    #[error("unterminated quote")]
    UnterminatedQuote(Span),

    /// The input ends with an escape character.
    #[error("unexpected end of input after escape character")]
    TrailingEscape(Span),

    /// A redirection operator is not followed by a file name.
    #[error("missing file name for redirection")]
    MissingRedirectTarget(Span),

    /// A pipeline stage does not name a program.
    #[error("missing command")]
    EmptyCommand(Span),

    /// A stage redirects its input more than once.
    #[error("multiple input redirections")]
    DuplicateInput(Span),

    /// A stage redirects its output more than once.
    #[error("multiple output redirections")]
    DuplicateOutput(Span),

    /// A stage redirects its output to a file and pipes it to the next stage.
    #[error("output redirection cannot be combined with a pipe")]
    OutputBeforePipe(Span),
}
