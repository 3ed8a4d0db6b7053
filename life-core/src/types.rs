/// Signed cell coordinate on a [`crate::grid::Grid`].
///
/// Neighbor lookups step off the grid (e.g. `x - 1` in the first column),
/// so coordinates are signed; the grid reads any out-of-range position
/// as dead.
pub type Coord = i32;
