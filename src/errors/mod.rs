mod lexical_error;
mod pattern_error;

pub use lexical_error::LexicalError;
pub use pattern_error::PatternError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all rulelex errors.
#[derive(Debug, Error, Diagnostic)]
pub enum LexError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexicalError),
}
