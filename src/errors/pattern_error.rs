use miette::Diagnostic;
use thiserror::Error;

/// A rule's pattern failed to compile.
///
/// Raised at compile time, before any matching happens; distinct from
/// [`LexicalError`](crate::errors::LexicalError), which only ever reports
/// unmatched input. For a failure of the assembled alternation itself
/// (for example two rules reusing one named capture group, each valid on
/// its own), `rule` is `"<composite>"` and `pattern` is the full
/// alternation.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid pattern for rule `{rule}`: {source}")]
#[diagnostic(help("rule patterns are regex fragments; see the regex crate syntax"))]
pub struct PatternError {
    pub rule: String,
    pub pattern: String,

    #[source]
    pub source: regex::Error,
}

impl PatternError {
    pub fn new(rule: impl Into<String>, pattern: impl Into<String>, source: regex::Error) -> Self {
        Self {
            rule: rule.into(),
            pattern: pattern.into(),
            source,
        }
    }

    pub fn composite(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::new("<composite>", pattern, source)
    }
}
