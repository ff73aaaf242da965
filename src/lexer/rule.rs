use serde::Serialize;

/// Describes one lexeme category: a kind tag, a name, and an un-anchored
/// `regex` fragment.
///
/// The pattern is interpreted as "must match starting exactly at the current
/// cursor position", never as a search ahead. Construction performs no
/// validation; a malformed pattern surfaces as a
/// [`PatternError`](crate::errors::PatternError) when the engine compiles
/// its rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub pattern: String,
}

impl Rule {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}
