//! Rule decoding for elementary cellular automata.
//!
//! A rule number `n` enumerates the output for each of the eight possible
//! three-cell neighbourhoods. The neighbourhood `(left, center, right)` is read
//! as the index `4*left + 2*center + right`, and the output is bit `index` of
//! `n`.
//!
//! ```text
//! neighbourhood  111 110 101 100 011 010 001 000
//! rule 30          0   0   0   1   1   1   1   0
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AutomatonError;
use crate::generation::Cell;

/// Rule 30 - chaotic, used for pseudo-random generation.
pub const RULE_30: u8 = 30;

/// Rule 90 - Sierpinski triangle from a single seed.
pub const RULE_90: u8 = 90;

/// Rule 110 - Turing complete.
pub const RULE_110: u8 = 110;

/// Rule 184 - traffic flow.
pub const RULE_184: u8 = 184;

/// Index of a neighbourhood in the rule table (0-7).
#[inline]
pub fn neighbourhood_index(left: Cell, center: Cell, right: Cell) -> usize {
    (((left & 1) << 2) | ((center & 1) << 1) | (right & 1)) as usize
}

/// A decoded elementary rule.
///
/// Holds the rule number and the precomputed output for every neighbourhood,
/// so evaluation is a single table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct ElementaryRule {
    number: u8,
    table: [Cell; 8],
}

impl ElementaryRule {
    /// Decode a rule number in `0..=255`.
    pub const fn new(number: u8) -> Self {
        let mut table = [0; 8];
        let mut idx = 0;
        while idx < 8 {
            table[idx] = (number >> idx) & 1;
            idx += 1;
        }
        Self { number, table }
    }

    /// Decode an arbitrary integer rule number.
    ///
    /// Only bits 0-7 are ever consulted, so values outside `0..=255` behave
    /// exactly like their low eight bits (two's complement for negatives).
    pub fn from_number(number: i64) -> Self {
        let reduced = number as u8;
        if i64::from(reduced) != number {
            warn!(
                requested = number,
                effective = reduced,
                "rule_number_out_of_range"
            );
        }
        Self::new(reduced)
    }

    /// The effective rule number (0-255).
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Output for each neighbourhood, indexed by [`neighbourhood_index`].
    pub fn table(&self) -> &[Cell; 8] {
        &self.table
    }

    /// Evaluate the rule for one neighbourhood.
    #[inline]
    pub fn apply(&self, left: Cell, center: Cell, right: Cell) -> Cell {
        self.table[neighbourhood_index(left, center, right)]
    }

    /// Neighbourhoods paired with their outputs, from `111` down to `000`.
    pub fn neighbourhoods(&self) -> impl Iterator<Item = ([Cell; 3], Cell)> + '_ {
        (0..8usize).rev().map(move |idx| {
            let pattern = [((idx >> 2) & 1) as Cell, ((idx >> 1) & 1) as Cell, (idx & 1) as Cell];
            (pattern, self.table[idx])
        })
    }
}

impl Default for ElementaryRule {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<u8> for ElementaryRule {
    fn from(number: u8) -> Self {
        Self::new(number)
    }
}

impl From<ElementaryRule> for u8 {
    fn from(rule: ElementaryRule) -> Self {
        rule.number
    }
}

impl fmt::Display for ElementaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.number)
    }
}

impl FromStr for ElementaryRule {
    type Err = AutomatonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .map(Self::from_number)
            .map_err(|_| AutomatonError::InvalidRuleNumber {
                input: trimmed.to_string(),
            })
    }
}
