use std::fmt;

use serde::Serialize;

/// A single classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Kind tag of the rule that matched. Serializes as `"type"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Name of the rule that matched.
    pub name: String,
    /// Exact matched substring.
    pub value: String,
    /// 1-based line where the match began.
    pub line: usize,
    /// 1-based column where the match began.
    pub col: usize,
    /// 0-based byte offset where the match began.
    pub pos: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(type={}, value={})", self.kind, self.value)
    }
}
