//! A single row of cells at one point in time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A binary cell value, always `0` (dead) or `1` (alive).
pub type Cell = u8;

/// Dead cell.
pub const DEAD: Cell = 0;

/// Live cell.
pub const ALIVE: Cell = 1;

/// Glyph used for live cells by the [`Display`](fmt::Display) impl.
pub const ALIVE_GLYPH: char = '█';

/// Glyph used for dead cells by the [`Display`](fmt::Display) impl.
pub const DEAD_GLYPH: char = ' ';

/// One generation of the automaton.
///
/// Generations are immutable once produced; the engine replaces its current
/// generation wholesale on every step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation(Vec<Cell>);

impl Generation {
    /// An all-dead row of the given width.
    pub fn dead(width: usize) -> Self {
        Self(vec![DEAD; width])
    }

    /// An all-dead row with a single live cell at `width / 2`.
    pub fn seeded(width: usize) -> Self {
        let mut cells = vec![DEAD; width];
        if let Some(center) = cells.get_mut(width / 2) {
            *center = ALIVE;
        }
        Self(cells)
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the cleared, uninitialised row.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cell values in order.
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Cell at `index`, or [`DEAD`] outside the row (closed boundary).
    #[inline]
    pub fn get(&self, index: isize) -> Cell {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.0.get(i).copied())
            .unwrap_or(DEAD)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.0.iter().filter(|&&c| c == ALIVE).count()
    }

    /// Render the row with custom glyphs.
    pub fn render(&self, alive: char, dead: char) -> String {
        self.0
            .iter()
            .map(|&c| if c == ALIVE { alive } else { dead })
            .collect()
    }
}

impl From<Vec<Cell>> for Generation {
    fn from(cells: Vec<Cell>) -> Self {
        Self(cells.into_iter().map(|c| c & 1).collect())
    }
}

impl FromIterator<Cell> for Generation {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self(iter.into_iter().map(|c| c & 1).collect())
    }
}

impl AsRef<[Cell]> for Generation {
    fn as_ref(&self) -> &[Cell] {
        &self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(ALIVE_GLYPH, DEAD_GLYPH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sets_floor_center() {
        assert_eq!(Generation::seeded(5).cells(), &[0, 0, 1, 0, 0]);
        assert_eq!(Generation::seeded(4).cells(), &[0, 0, 1, 0]);
        assert_eq!(Generation::seeded(1).cells(), &[1]);
    }

    #[test]
    fn test_get_is_closed_at_both_ends() {
        let row = Generation::from(vec![1, 1, 1]);
        assert_eq!(row.get(-1), DEAD);
        assert_eq!(row.get(0), ALIVE);
        assert_eq!(row.get(2), ALIVE);
        assert_eq!(row.get(3), DEAD);
    }

    #[test]
    fn test_population_and_render() {
        let row = Generation::from(vec![1, 0, 1, 1]);
        assert_eq!(row.population(), 3);
        assert_eq!(row.render('#', '.'), "#.##");
        assert_eq!(row.to_string(), "█ ██");
    }

    #[test]
    fn test_from_masks_to_binary() {
        let row: Generation = vec![2u8, 3, 0].into_iter().collect();
        assert_eq!(row.cells(), &[0, 1, 0]);
    }
}
