/// Scan state over one loaded source buffer.
///
/// Tracks the absolute byte offset plus the 1-based line and column, with
/// columns counted in characters. One cursor serves exactly one
/// tokenization session; loading a new source replaces it wholesale.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    pos: usize,
    line: usize,
    col: usize,
}

impl Cursor {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the current position.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the current position.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Peek at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Move the cursor forward to `new_pos`, a byte offset on a character
    /// boundary with `pos <= new_pos <= source.len()`.
    ///
    /// The whole consumed span is rescanned for line terminators: the line
    /// count grows once per `'\n'` found and the column restarts relative
    /// to the last one, so multi-character and multi-line spans keep
    /// line/column exact. Inspecting only the character at `new_pos` would
    /// not. A terminator occupies column 1 of the line it opens, so the
    /// character after it sits at column 2.
    pub fn advance_to(&mut self, new_pos: usize) {
        debug_assert!(new_pos >= self.pos && new_pos <= self.source.len());
        for ch in self.source[self.pos..new_pos].chars() {
            if ch == '\n' {
                self.line += 1;
                self.col = 2;
            } else {
                self.col += 1;
            }
        }
        self.pos = new_pos;
    }
}
