use miette::Diagnostic;
use thiserror::Error;

/// No rule matched the input at the current cursor position.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid token '{character}' at ({line}:{col})")]
#[diagnostic(help("no rule matches here; check rule order and coverage"))]
pub struct LexicalError {
    /// The offending character.
    pub character: char,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column of the offending character.
    pub col: usize,

    #[label("no rule matches this character")]
    pub span: miette::SourceSpan,
}

impl LexicalError {
    pub fn new(character: char, line: usize, col: usize, offset: usize) -> Self {
        Self {
            character,
            line,
            col,
            span: (offset, character.len_utf8()).into(),
        }
    }
}
