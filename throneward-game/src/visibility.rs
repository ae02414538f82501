//! Fog-of-war tracking over the campaign map.

use serde::{Deserialize, Serialize};

use crate::constants::WORLD_SIZE;

/// Which tiles the warband has seen, stored row-major like the map itself.
///
/// Tiles only ever flip from hidden to seen; nothing re-hides them, so the
/// revealed count is monotone over a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityGrid {
    size: usize,
    seen: Vec<bool>,
}

impl VisibilityGrid {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            seen: vec![false; size * size],
        }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Reveal the square of Chebyshev radius `radius` around `(x, y)`,
    /// clamped to the map edges.
    pub fn reveal(&mut self, x: usize, y: usize, radius: usize) {
        if self.size == 0 {
            return;
        }
        let edge = self.size - 1;
        let min_x = x.saturating_sub(radius);
        let min_y = y.saturating_sub(radius);
        let max_x = x.saturating_add(radius).min(edge);
        let max_y = y.saturating_add(radius).min(edge);
        for yy in min_y..=max_y {
            for xx in min_x..=max_x {
                if let Some(cell) = self.seen.get_mut(yy * self.size + xx) {
                    *cell = true;
                }
            }
        }
    }

    /// `false` for out-of-range coordinates.
    #[must_use]
    pub fn is_revealed(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        self.seen.get(y * self.size + x).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.seen.iter().filter(|seen| **seen).count()
    }
}

impl Default for VisibilityGrid {
    fn default() -> Self {
        Self::new(WORLD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_covers_a_chebyshev_square() {
        let mut grid = VisibilityGrid::new(8);
        grid.reveal(3, 3, 1);
        for y in 2..=4 {
            for x in 2..=4 {
                assert!(grid.is_revealed(x, y), "({x}, {y}) should be seen");
            }
        }
        assert!(!grid.is_revealed(3, 5));
        assert!(!grid.is_revealed(5, 3));
        assert_eq!(grid.revealed_count(), 9);
    }

    #[test]
    fn reveal_clamps_at_the_corner() {
        let mut grid = VisibilityGrid::new(8);
        grid.reveal(0, 0, 2);
        assert_eq!(grid.revealed_count(), 9);
        assert!(grid.is_revealed(2, 2));
        assert!(!grid.is_revealed(3, 0));
    }

    #[test]
    fn reveals_accumulate_and_never_rescind() {
        let mut grid = VisibilityGrid::new(8);
        grid.reveal(0, 0, 1);
        let after_first = grid.revealed_count();
        grid.reveal(7, 7, 1);
        let after_second = grid.revealed_count();
        assert!(after_second > after_first);
        grid.reveal(0, 0, 0);
        assert_eq!(grid.revealed_count(), after_second);
        assert!(grid.is_revealed(0, 0));
    }

    #[test]
    fn out_of_range_queries_answer_false() {
        let grid = VisibilityGrid::new(8);
        assert!(!grid.is_revealed(8, 0));
        assert!(!grid.is_revealed(0, 8));
    }
}
