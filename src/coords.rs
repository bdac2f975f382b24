use crate::GridPos;
use crate::Px;
use crate::ScreenPos;
use crate::viewport::Viewport;

/// Where the surface sits on screen: its top-left corner and displayed
/// size, in terminal character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub col: ScreenPos,
    pub row: ScreenPos,
    pub cols: ScreenPos,
    pub rows: ScreenPos,
}

/// Map a pointer position to the `(row, col)` grid cell under it.
///
/// A pointer outside the displayed surface maps to `None`; the terminal
/// reports pointer events everywhere, not just over the surface. Inside,
/// the pointer scales from displayed cells to surface pixels (the surface
/// packs several pixels per character cell), then floor-divides by the cell
/// pitch. Both axes clamp to the grid, so a pointer on the trailing border
/// still lands on the last cell, and a pointer on a separator lands on the
/// cell the floor picks.
pub fn pointer_to_cell(
    pointer: (ScreenPos, ScreenPos),
    bounds: Bounds,
    surface_px: (Px, Px),
    viewport: &Viewport,
    grid: (GridPos, GridPos),
) -> Option<(GridPos, GridPos)> {
    let (pointer_col, pointer_row) = pointer;

    if pointer_col < bounds.col || pointer_row < bounds.row {
        return None;
    }

    if pointer_col >= bounds.col + bounds.cols || pointer_row >= bounds.row + bounds.rows {
        return None;
    }

    let scale_x = surface_px.0 as f64 / bounds.cols as f64;
    let scale_y = surface_px.1 as f64 / bounds.rows as f64;

    let px = (pointer_col - bounds.col) as f64 * scale_x;
    let py = (pointer_row - bounds.row) as f64 * scale_y;

    let pitch = viewport.pitch() as f64;
    let (grid_w, grid_h) = grid;

    let col = ((px / pitch).floor() as GridPos).min(grid_w - 1);
    let row = ((py / pitch).floor() as GridPos).min(grid_h - 1);

    Some((row, col))
}
