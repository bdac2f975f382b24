use crate::GridPos;
use crate::Px;

/// Width of the separator between adjacent cells, in surface pixels.
pub const BORDER_WIDTH: Px = 1;

/// Smallest cell the sizer will produce. A viewport too small for the grid
/// clamps here instead of vanishing.
pub const MIN_CELL_SIZE: Px = 2;

/// The current cell pixel size, and the surface dimensions derived from it.
///
/// Starts unfitted (cell size zero) so the first [`Viewport::fit`] always
/// reports a surface size.
pub struct Viewport {
    cell_size: Px,
}

impl Viewport {
    pub fn new() -> Self {
        Self { cell_size: 0 }
    }

    pub fn cell_size(&self) -> Px {
        self.cell_size
    }

    /// One cell plus its separator.
    pub fn pitch(&self) -> Px {
        self.cell_size + BORDER_WIDTH
    }

    /// Surface dimensions for `grid` at the current cell size: each axis is
    /// `dim * (cell_size + border) + border`, the interiors plus the lattice.
    pub fn surface_size(&self, grid: (GridPos, GridPos)) -> (Px, Px) {
        let (grid_w, grid_h) = grid;

        (
            grid_w * self.pitch() + BORDER_WIDTH,
            grid_h * self.pitch() + BORDER_WIDTH,
        )
    }

    /// Fit the cell size to the available viewport.
    ///
    /// Returns the new surface dimensions if the fit changed, `None` if the
    /// current size still fits. Resizing the surface clears it, so callers
    /// must not reallocate on an unchanged fit.
    pub fn fit(&mut self, avail: (Px, Px), grid: (GridPos, GridPos)) -> Option<(Px, Px)> {
        let (avail_w, avail_h) = avail;
        let (grid_w, grid_h) = grid;

        // pixels left for cell interiors once every separator is paid for
        let budget_w = avail_w.saturating_sub(grid_w * BORDER_WIDTH + BORDER_WIDTH);
        let budget_h = avail_h.saturating_sub(grid_h * BORDER_WIDTH + BORDER_WIDTH);

        let fit = (budget_w / grid_w).min(budget_h / grid_h).max(MIN_CELL_SIZE);

        if fit == self.cell_size {
            return None;
        }

        self.cell_size = fit;

        Some(self.surface_size(grid))
    }
}
