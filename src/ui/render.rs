//! Text rendering of a finished grid.

use std::io::{self, Write};

use elementum_core::Grid;

use crate::model::config::DisplayConfig;

/// Writes the grid as glyph rows, one line per generation.
///
/// A cell renders as the alive glyph exactly when its value is 1; every
/// other value (0, or a surviving preview digit) renders as the dead glyph.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid, display: &DisplayConfig) -> io::Result<()> {
    let mut line = String::with_capacity(grid.cols());
    for row in grid.iter_rows() {
        line.clear();
        for &cell in row {
            line.push(if cell == 1 {
                display.alive_glyph
            } else {
                display.dead_glyph
            });
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}
