//! Neighbor counting and generation stepping.
//!
//! The update loop computes every cell's next state from an immutable
//! snapshot of the previous generation:
//! 1. [`count_live_neighbors`] — sum the 8 Moore neighbors through
//!    [`Grid::get`], so off-grid neighbors read as dead.
//! 2. [`step_into`] — apply the B3/S23 rules cell by cell, writing into a
//!    separate buffer so partially-updated state is never read.

use crate::grid::Grid;
use crate::types::Coord;

/// Offsets of the Moore neighborhood around a cell.
const NEIGHBOR_OFFSETS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Counts the live Moore neighbors of `(x, y)`.
///
/// Every neighbor is read through [`Grid::get`], so neighbors that fall
/// outside the grid count as dead. The cell itself is not counted.
///
/// ### Parameters
/// - `grid` - The grid to read; only read access is required.
/// - `x`, `y` - Coordinates of the cell whose neighborhood is summed.
///   The cell itself may lie outside the grid.
///
/// ### Returns
/// The number of live neighbors, in `0..=8`.
pub fn count_live_neighbors(grid: &Grid, x: Coord, y: Coord) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.get(x + dx, y + dy))
        .count() as u8
}

/// Writes the next generation of `src` into `dst`.
///
/// For each cell the next state follows the standard rules, evaluated
/// against the unmodified `src` snapshot:
///
/// - alive with fewer than 2 live neighbors → dead,
/// - alive with 2 or 3 live neighbors → alive,
/// - alive with more than 3 live neighbors → dead,
/// - dead with exactly 3 live neighbors → alive,
/// - every other cell stays dead.
///
/// ### Parameters
/// - `src` - Previous generation; only read access is required.
/// - `dst` - Buffer the next generation is written into. Every cell of
///   `dst` is overwritten.
///
/// ### Panics
/// Panics if `src` and `dst` have different dimensions.
pub fn step_into(src: &Grid, dst: &mut Grid) {
    assert_eq!(src.width(), dst.width());
    assert_eq!(src.height(), dst.height());

    for y in 0..src.height() as Coord {
        for x in 0..src.width() as Coord {
            let alive = src.get(x, y);
            let neighbors = count_live_neighbors(src, x, y);

            // B3/S23: birth on 3, survival on 2 or 3, death otherwise.
            let next = match (alive, neighbors) {
                (true, 2) | (true, 3) => true,
                (false, 3) => true,
                _ => false,
            };

            dst.set(x, y, next);
        }
    }
}

/// Returns the next generation of `grid` as a fresh buffer.
///
/// Allocating convenience over [`step_into`]; the simulation loop keeps a
/// scratch grid and swaps instead.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height());
    step_into(grid, &mut next);
    next
}
