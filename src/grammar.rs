//! Grammar expansion: rule parsing and repeated parallel rewriting.
//!
//! A [`RuleSet`] maps single-character symbols to replacement strings. Each rewrite pass
//! replaces every symbol of the current word at once; symbols without a rule are terminals
//! and are copied through unchanged.
//!
//! Expanding grammars grow geometrically with the iteration count (the dragon curve roughly
//! doubles per pass, the plant grammar grows about fourfold). [`expand`] applies no limit;
//! [`Expander`] checks the length of every pass against a ceiling before allocating it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Default ceiling on the length of an expanded instruction string.
pub const DEFAULT_MAX_INSTRUCTION_LEN: usize = 1 << 22;

/// Total symbols an [`Expander`] may produce, as a multiple of its length ceiling.
pub const WORK_FACTOR: usize = 4;

/// Production rules keyed by symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: HashMap<char, String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses rule text with one `symbol:replacement` pair per line.
    ///
    /// Lines are split on the first colon and both halves are trimmed, so the replacement may
    /// itself contain colons. Lines without a colon, or whose key is not exactly one character,
    /// are skipped without error. A repeated key keeps the last replacement.
    pub fn parse(text: &str) -> Self {
        let mut set = Self::new();
        for line in text.lines() {
            let Some((left, right)) = line.split_once(':') else {
                if !line.trim().is_empty() {
                    trace!(line, "skipping rule line without separator");
                }
                continue;
            };
            let mut key = left.trim().chars();
            match (key.next(), key.next()) {
                (Some(symbol), None) => set.insert(symbol, right.trim()),
                _ => trace!(line, "skipping rule line with non-symbol key"),
            }
        }
        set
    }

    /// Adds or replaces the rule for `symbol`.
    pub fn insert(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates rules in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        let mut entries: Vec<_> = self.rules.iter().map(|(&k, v)| (k, v.as_str())).collect();
        entries.sort_unstable_by_key(|&(k, _)| k);
        entries.into_iter()
    }

    /// Renders the rules back to the one-per-line text form accepted by [`RuleSet::parse`].
    pub fn to_text(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of symbols in `word` after one rewrite pass, without building it.
    pub fn rewritten_len(&self, word: &str) -> usize {
        word.chars()
            .map(|c| self.get(c).map_or(1, |r| r.chars().count()))
            .sum()
    }
}

impl<K: Into<char>, V: Into<String>> FromIterator<(K, V)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k.into(), v);
        }
        set
    }
}

/// Applies one rewrite pass to `word`.
pub fn rewrite(rules: &RuleSet, word: &str) -> String {
    let mut next = String::with_capacity(word.len());
    for c in word.chars() {
        match rules.get(c) {
            Some(replacement) => next.push_str(replacement),
            None => next.push(c),
        }
    }
    next
}

/// Applies exactly `iterations` rewrite passes to `axiom`, with no length ceiling.
pub fn expand(axiom: &str, rules: &RuleSet, iterations: usize) -> String {
    let mut word = axiom.to_string();
    for i in 0..iterations {
        word = rewrite(rules, &word);
        debug!(iteration = i + 1, len = word.chars().count(), "rewrite pass");
    }
    word
}

/// Expands grammars under a ceiling on the instruction string length and on total work.
///
/// Work is the number of symbols produced across all passes, plus one per pass, so grammars
/// that cycle without growing (`A:B`, `B:A`) still terminate for huge iteration counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expander {
    /// Maximum symbols in any single word, axiom included.
    pub max_len: usize,
    /// Maximum symbols produced summed over every pass.
    pub max_work: usize,
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INSTRUCTION_LEN)
    }
}

impl Expander {
    /// Ceiling of `max_len` symbols per word and `WORK_FACTOR * max_len` symbols overall.
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            max_work: max_len.saturating_mul(WORK_FACTOR),
        }
    }

    /// Applies `iterations` passes, failing before any pass that would exceed either ceiling.
    ///
    /// The axiom itself is also held to the length ceiling. Once a pass leaves the word
    /// unchanged (no rule applies), the remaining passes are skipped.
    pub fn expand(&self, axiom: &str, rules: &RuleSet, iterations: usize) -> Result<String> {
        self.check_len(0, axiom.chars().count())?;
        let mut word = axiom.to_string();
        let mut work = 0usize;
        for i in 0..iterations {
            let len = rules.rewritten_len(&word);
            self.check_len(i + 1, len)?;
            work = work.saturating_add(len).saturating_add(1);
            if work > self.max_work {
                warn!(iteration = i + 1, work, max = self.max_work, "work limit exceeded");
                return Err(Error::WorkLimit {
                    iteration: i + 1,
                    work,
                    max: self.max_work,
                });
            }
            let next = rewrite(rules, &word);
            debug!(iteration = i + 1, len, "rewrite pass");
            if next == word {
                debug!(iteration = i + 1, "word reached a fixed point");
                break;
            }
            word = next;
        }
        Ok(word)
    }

    fn check_len(&self, iteration: usize, len: usize) -> Result<()> {
        if len > self.max_len {
            warn!(iteration, len, max = self.max_len, "instruction limit exceeded");
            return Err(Error::InstructionLimit {
                iteration,
                len,
                max: self.max_len,
            });
        }
        Ok(())
    }
}
