pub mod cursor;
pub mod engine;
pub mod rule;
pub mod token;

pub use cursor::Cursor;
pub use engine::{Extension, Lexer};
pub use rule::Rule;
pub use token::Token;

use crate::errors::LexError;

/// Build an engine from `rules`, compile it, and tokenize `source` in one
/// call.
pub fn lex(rules: Vec<Rule>, source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(rules);
    lexer.compile()?;
    lexer.load(source);
    lexer.tokenize()
}
