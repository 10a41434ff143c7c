//! L-System rule tables and string rewriting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered sequence of symbols produced by rewriting.
pub type Production = Vec<char>;

/// A context-free L-System: an axiom plus one replacement per non-terminal.
///
/// Replacements may reference any symbol. Symbols without a rule are terminals
/// and survive rewriting unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    /// The symbol sequence rewriting starts from.
    pub axiom: String,

    /// Non-terminal symbol to replacement sequence.
    pub rules: BTreeMap<char, String>,
}

impl Grammar {
    /// Creates a grammar with the given axiom and no rules.
    pub fn new(axiom: impl Into<String>) -> Self {
        Self {
            axiom: axiom.into(),
            rules: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the rule for `symbol` (builder pattern).
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.rules.insert(symbol, replacement.into());
        self
    }

    /// The Hilbert curve: axiom `A`, `A -> -BF+AFA+FB-`, `B -> +AF-BFB-FA+`.
    pub fn hilbert() -> Self {
        Self::new("A")
            .with_rule('A', "-BF+AFA+FB-")
            .with_rule('B', "+AF-BFB-FA+")
    }

    /// Returns the replacement for `symbol`, if it is a non-terminal.
    pub fn rule(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Whether `symbol` has a rule and is rewritten each generation.
    pub fn is_non_terminal(&self, symbol: char) -> bool {
        self.rules.contains_key(&symbol)
    }

    /// Iterates over every symbol that has a rule.
    pub fn non_terminals(&self) -> impl Iterator<Item = char> + '_ {
        self.rules.keys().copied()
    }

    /// Rewrites this grammar's axiom for `generations` steps.
    pub fn produce(&self, generations: usize) -> Production {
        expand(&self.axiom.chars().collect::<Vec<_>>(), self, generations)
    }
}

/// Rewrites `axiom` through `generations` rounds of `grammar`.
///
/// Each round replaces every symbol left to right with its rule, or keeps it
/// when no rule exists. The output grows exponentially with `generations` for
/// most grammars; bounding it is the caller's job.
pub fn expand(axiom: &[char], grammar: &Grammar, generations: usize) -> Production {
    let mut current: Production = axiom.to_vec();
    let mut next = Vec::new();

    for _ in 0..generations {
        next.clear();
        for &symbol in &current {
            match grammar.rule(symbol) {
                Some(replacement) => next.extend(replacement.chars()),
                None => next.push(symbol),
            }
        }
        std::mem::swap(&mut current, &mut next);
    }

    current
}
