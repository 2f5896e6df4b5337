//! Automaton construction, the transition table and the generation pass.

use crate::error::{CoreError, Result};
use crate::grid::Grid;
use crate::rule::Rule;

/// One-dimensional elementary cellular automaton over a fixed-size grid.
///
/// Row 0 is the initial generation: a single active cell at the horizontal
/// midpoint. Each later row is derived from the row above it by [`run`].
///
/// [`run`]: Automaton::run
#[derive(Debug, Clone)]
pub struct Automaton {
    grid: Grid,
    rule: Rule,
}

impl Automaton {
    /// Creates an automaton with an all-zero grid and `grid[0][cols / 2]`
    /// seeded to 1.
    ///
    /// Fails with [`CoreError::DegenerateGrid`] when `rows < 2` or
    /// `cols < 3` - below that the transition pass cannot do any work.
    pub fn new(rows: usize, cols: usize, rule: Rule) -> Result<Self> {
        if rows < 2 || cols < 3 {
            return Err(CoreError::DegenerateGrid { rows, cols });
        }
        let mut grid = Grid::zeroed(rows, cols);
        grid.set(0, cols / 2, 1);
        tracing::debug!(rows, cols, rule = rule.value(), "automaton created");
        Ok(Self { grid, rule })
    }

    /// The stored rule value.
    #[must_use]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Read access to the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replaces the stored rule and overlays its decimal digits onto row 1.
    ///
    /// Digits are written verbatim starting at column `max(0, cols/2 - 3)`,
    /// stopping when they run out or the column index reaches `cols`. This is
    /// a cosmetic overlay; the transition table never reads the rule.
    ///
    /// Call order against [`run`] matters: `run` rewrites the interior of
    /// row 1 from row 0, so a preview applied first survives only in
    /// column 0 or `cols - 1` (reachable when `cols <= 6`).
    ///
    /// [`run`]: Automaton::run
    pub fn set_rule_preview(&mut self, rule: Rule) {
        self.rule = rule;
        let start = (self.grid.cols() / 2).saturating_sub(3);
        for (offset, digit) in rule.digits().enumerate() {
            let col = start + offset;
            if col >= self.grid.cols() {
                break;
            }
            self.grid.set(1, col, digit);
        }
    }

    /// Derives every generation from row 0 downward and returns the grid.
    ///
    /// For each row `i` the pass reads the 3-cell neighborhoods of row `i`
    /// and writes results into the interior of row `i + 1`; columns 0 and
    /// `cols - 1` of rows >= 1 are never written. Repeated calls recompute
    /// the same grid from row 0. The stored rule does not participate.
    pub fn run(&mut self) -> &Grid {
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        for i in 0..rows - 1 {
            for j in 0..cols - 2 {
                let next = transition(
                    self.grid.get(i, j),
                    self.grid.get(i, j + 1),
                    self.grid.get(i, j + 2),
                );
                self.grid.set(i + 1, j + 1, next);
            }
        }
        tracing::debug!(rows, cols, "generation pass complete");
        &self.grid
    }
}

/// The fixed 3-neighbor transition table.
///
/// For binary inputs this is `left XOR right` regardless of `center`. Any
/// neighborhood containing a non-binary cell value (a surviving preview
/// digit) falls through to 0.
#[must_use]
pub fn transition(left: u8, center: u8, right: u8) -> u8 {
    match (left, center, right) {
        (0, 0, 0) | (0, 1, 0) | (1, 0, 1) | (1, 1, 1) => 0,
        (0, 0, 1) | (0, 1, 1) | (1, 0, 0) | (1, 1, 0) => 1,
        _ => 0,
    }
}
