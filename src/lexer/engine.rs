use regex::Regex;

use super::cursor::Cursor;
use super::rule::Rule;
use super::token::Token;
use crate::errors::{LexError, LexicalError, PatternError};

/// Rules to insert around the engine's current rule list.
///
/// `prepend` rules go before all current rules and take highest precedence;
/// `append` rules go after all current rules and take lowest.
#[derive(Debug, Clone, Default)]
pub struct Extension {
    pub prepend: Vec<Rule>,
    pub append: Vec<Rule>,
}

/// Composite matcher built from the current rule list.
#[derive(Debug)]
struct Compiled {
    matcher: Regex,
    /// Capture-group name of each rule's branch, indexed by rule order.
    /// Resolving a match walks this array front to back, so precedence is
    /// decided by rule order and nothing else.
    branches: Vec<String>,
}

impl Compiled {
    fn build(rules: &[Rule]) -> Result<Self, PatternError> {
        // Each fragment compiles on its own first, so a bad pattern is
        // reported against the rule that carries it.
        for rule in rules {
            Regex::new(&rule.pattern)
                .map_err(|err| PatternError::new(&rule.name, &rule.pattern, err))?;
        }

        let branches: Vec<String> = rules
            .iter()
            .enumerate()
            .map(|(idx, rule)| format!("{}_{idx}", group_ident(&rule.name)))
            .collect();

        let alternation = rules
            .iter()
            .zip(&branches)
            .map(|(rule, branch)| format!("(?P<{branch}>{})", rule.pattern))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"\A(?:{alternation})");

        // Individually valid fragments can still clash in the alternation,
        // e.g. two rules reusing one named capture group.
        let matcher = Regex::new(&pattern).map_err(|err| PatternError::composite(pattern, err))?;

        Ok(Self { matcher, branches })
    }
}

/// Rule-driven tokenizer engine.
///
/// Owns an ordered rule list, the matcher compiled from it, and the cursor
/// over the currently loaded source. Alternation resolves by ordered
/// choice: the first rule in list order that matches at the cursor wins,
/// even when a later rule would match a longer span. Callers must order
/// multi-character rules (`"=="`) ahead of their single-character prefixes
/// (`"="`); the engine does not reorder for them.
#[derive(Debug)]
pub struct Lexer {
    rules: Vec<Rule>,
    compiled: Option<Compiled>,
    cursor: Option<Cursor>,
}

impl Lexer {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            compiled: None,
            cursor: None,
        }
    }

    /// Current rule list in precedence order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Build the composite matcher from the current rule list.
    ///
    /// Idempotent: calling it again without an intervening [`extend`]
    /// reuses the existing matcher. Skipping it entirely is also fine;
    /// tokenization compiles on first use.
    ///
    /// [`extend`]: Lexer::extend
    pub fn compile(&mut self) -> Result<&mut Self, PatternError> {
        self.ensure_compiled()?;
        Ok(self)
    }

    /// Insert rules around the current list, per [`Extension`].
    ///
    /// The compiled matcher goes stale and is rebuilt lazily on next use,
    /// so no manual recompile is ever required.
    pub fn extend(&mut self, extension: Extension) -> &mut Self {
        let Extension { prepend, append } = extension;
        if !prepend.is_empty() {
            self.rules.splice(0..0, prepend);
        }
        self.rules.extend(append);
        self.compiled = None;
        self
    }

    /// Reset tokenization to a fresh cursor over `source`, discarding any
    /// prior cursor.
    pub fn load(&mut self, source: impl Into<String>) -> &mut Self {
        self.cursor = Some(Cursor::new(source));
        self
    }

    /// Match one token at the cursor and advance past it.
    ///
    /// Returns `Ok(None)` at end of input (or when no source is loaded).
    /// The emitted token carries the cursor's line/col/pos from before the
    /// advance. When no rule matches the current position, fails with a
    /// [`LexicalError`] naming the offending character; the cursor stays
    /// put and the call is not retried internally. A rule matching the
    /// empty string counts as no match, so nullable patterns cannot stall
    /// the engine.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.ensure_compiled()?;
        let (Some(compiled), Some(cursor)) = (self.compiled.as_ref(), self.cursor.as_mut()) else {
            return Ok(None);
        };
        let Some(character) = cursor.peek() else {
            return Ok(None);
        };

        let rest = cursor.rest();
        let hit = compiled.matcher.captures(rest).and_then(|caps| {
            compiled
                .branches
                .iter()
                .enumerate()
                .find_map(|(idx, branch)| caps.name(branch).map(|m| (idx, m.end())))
        });
        let Some((idx, len)) = hit.filter(|&(_, len)| len > 0) else {
            return Err(
                LexicalError::new(character, cursor.line(), cursor.col(), cursor.pos()).into(),
            );
        };

        let rule = &self.rules[idx];
        let token = Token {
            kind: rule.kind.clone(),
            name: rule.name.clone(),
            value: rest[..len].to_owned(),
            line: cursor.line(),
            col: cursor.col(),
            pos: cursor.pos(),
        };
        let end = cursor.pos() + len;
        cursor.advance_to(end);
        Ok(Some(token))
    }

    /// Tokenize the remaining input eagerly.
    ///
    /// Collects tokens until end of input. The first lexical failure
    /// aborts the whole call; skip-and-continue recovery, if wanted, is
    /// the caller's policy.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn ensure_compiled(&mut self) -> Result<(), PatternError> {
        if self.compiled.is_none() {
            self.compiled = Some(Compiled::build(&self.rules)?);
        }
        Ok(())
    }
}

/// Capture-group names must be identifiers; rule names are arbitrary
/// strings. The rule index appended by the caller keeps same-named rules
/// apart, so this only has to produce something the regex syntax accepts.
fn group_ident(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    if ident.chars().next().is_none_or(|ch| ch.is_ascii_digit()) {
        ident.insert(0, 'r');
    }
    ident
}
