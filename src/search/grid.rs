//! Cartesian-product enumeration over a candidate table.
//!
//! The grid walks `candidates^dims` with an index vector used as an odometer:
//! the last position turns fastest and the first position slowest. This is the
//! same order as `dims` hand-written nested loops, which the search relies on
//! for its first-found tie-break.

/// Number of tuples in `candidates^dims`, or `None` on overflow.
pub fn grid_len(candidates: &[f64], dims: usize) -> Option<usize> {
    let dims = u32::try_from(dims).ok()?;
    candidates.len().checked_pow(dims)
}

/// Lazy iterator over every `dims`-tuple drawn from `candidates`.
#[derive(Debug, Clone)]
pub struct ExponentGrid<'a> {
    candidates: &'a [f64],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a> ExponentGrid<'a> {
    pub fn new(candidates: &'a [f64], dims: usize) -> Self {
        Self {
            candidates,
            indices: vec![0; dims],
            // With zero dimensions there is exactly one (empty) tuple.
            exhausted: candidates.is_empty() && dims > 0,
        }
    }

    fn current(&self) -> Vec<f64> {
        self.indices.iter().map(|&i| self.candidates[i]).collect()
    }

    /// Advance the odometer; returns `false` once every position has rolled over.
    fn advance(&mut self) -> bool {
        for slot in self.indices.iter_mut().rev() {
            *slot += 1;
            if *slot < self.candidates.len() {
                return true;
            }
            *slot = 0;
        }
        false
    }
}

impl Iterator for ExponentGrid<'_> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let tuple = self.current();
        self.exhausted = !self.advance();
        Some(tuple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_in_nested_loop_order() {
        let grid: Vec<Vec<f64>> = ExponentGrid::new(&[1.0, 2.0, 3.0], 2).collect();

        let mut expected = Vec::new();
        for a in [1.0, 2.0, 3.0] {
            for b in [1.0, 2.0, 3.0] {
                expected.push(vec![a, b]);
            }
        }
        assert_eq!(grid, expected);
    }

    #[test]
    fn length_matches_grid_len() {
        let candidates = [0.0, 0.5, 1.0, 2.0, 3.0];
        let count = ExponentGrid::new(&candidates, 4).count();
        assert_eq!(Some(count), grid_len(&candidates, 4));
        assert_eq!(count, 625);
    }

    #[test]
    fn first_position_turns_slowest() {
        let candidates = [-1.0, 0.0, 1.0];
        let mut grid = ExponentGrid::new(&candidates, 3);
        assert_eq!(grid.next(), Some(vec![-1.0, -1.0, -1.0]));
        assert_eq!(grid.next(), Some(vec![-1.0, -1.0, 0.0]));
        assert_eq!(grid.last(), Some(vec![1.0, 1.0, 1.0]));
    }

    #[test]
    fn degenerate_shapes() {
        assert_eq!(ExponentGrid::new(&[], 3).count(), 0);
        assert_eq!(ExponentGrid::new(&[1.0, 2.0], 0).collect::<Vec<_>>(), vec![Vec::<f64>::new()]);
        assert_eq!(grid_len(&[], 3), Some(0));
        assert_eq!(grid_len(&[1.0, 2.0], 0), Some(1));
    }
}
