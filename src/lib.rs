pub mod errors;
pub mod lexer;

pub use errors::{LexError, LexicalError, PatternError};
pub use lexer::{Cursor, Extension, Lexer, Rule, Token, lex};
