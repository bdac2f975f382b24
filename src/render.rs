use crate::GridPos;
use crate::Px;
use crate::engine::CellState;
use crate::engine::Engine;
use crate::surface::Surface;
use crate::viewport::BORDER_WIDTH;
use crate::viewport::Viewport;

/// Stroke the cell lattice: `grid_w + 1` vertical and `grid_h + 1`
/// horizontal separator lines. The surface is exactly one border wider than
/// the cell interiors per axis, so every line lands on it.
pub fn draw_grid(surface: &mut Surface, viewport: &Viewport, grid: (GridPos, GridPos)) {
    let pitch = viewport.pitch();
    let (grid_w, grid_h) = grid;

    for i in 0..=grid_w {
        surface.vline(i * pitch);
    }

    for j in 0..=grid_h {
        surface.hline(j * pitch);
    }
}

/// Fill the cell interiors from the engine's current buffer.
///
/// The buffer is acquired here, after any mutation this frame, and the
/// borrow ends on return. Two full traversals: alive cells first with ink
/// on, then dead cells with ink off, one ink change per pass instead of one
/// per cell. Each interior is `cell_size` square, inset one border from the
/// cell's top-left line crossing.
pub fn draw_cells<E: Engine>(surface: &mut Surface, viewport: &Viewport, engine: &E) {
    let pitch = viewport.pitch();
    let size = viewport.cell_size();
    let (grid_w, grid_h) = (engine.width(), engine.height());

    let cells = engine.cells();

    // alive pass
    for row in 0..grid_h {
        for col in 0..grid_w {
            if cells[(row * grid_w + col) as usize] != CellState::Alive {
                continue;
            }

            surface.fill_rect(
                col * pitch + BORDER_WIDTH,
                row * pitch + BORDER_WIDTH,
                size,
                size,
                true,
            );
        }
    }

    // dead pass
    for row in 0..grid_h {
        for col in 0..grid_w {
            if cells[(row * grid_w + col) as usize] != CellState::Dead {
                continue;
            }

            surface.fill_rect(
                col * pitch + BORDER_WIDTH,
                row * pitch + BORDER_WIDTH,
                size,
                size,
                false,
            );
        }
    }
}

/// Draw one full frame: refit the viewport (a changed fit resizes the
/// surface, which clears it), then the lattice, then the cell interiors.
pub fn draw_frame<E: Engine>(
    engine: &E,
    viewport: &mut Viewport,
    surface: &mut Surface,
    avail: (Px, Px),
) {
    let grid = (engine.width(), engine.height());

    if let Some((w, h)) = viewport.fit(avail, grid) {
        surface.resize(w, h);
    }

    draw_grid(surface, viewport, grid);
    draw_cells(surface, viewport, engine);
}
