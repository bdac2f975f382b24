use std::mem;

use thiserror::Error;
use tracing::debug;

use crate::GridPos;
use crate::Px;
use crate::ScreenPos;
use crate::animation::Animation;
use crate::animation::FrameHandle;
use crate::animation::FrameScheduler;
use crate::coords::Bounds;
use crate::coords::pointer_to_cell;
use crate::engine::Engine;
use crate::events::ControlEvent;
use crate::events::Event;
use crate::events::PointerEvent;
use crate::render;
use crate::surface::DOTS_X;
use crate::surface::DOTS_Y;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// Terminal rows reserved above the surface for the status line.
pub const STATUS_ROWS: ScreenPos = 1;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("engine reports an empty {width}x{height} grid")]
    EmptyGrid { width: GridPos, height: GridPos },

    #[error("engine buffer holds {len} cells, expected {expected} for a {width}x{height} grid")]
    BufferMismatch {
        len: usize,
        expected: usize,
        width: GridPos,
        height: GridPos,
    },
}

/// Top-level coordinator.
///
/// Owns the engine, the viewport state, the surface, and the animation
/// controller, and turns events into engine calls followed by a redraw
/// request. Nothing here lives in module state; the loop holds exactly one
/// of these.
pub struct App<E> {
    engine: E,
    viewport: Viewport,
    surface: Surface,
    animation: Animation,

    /// Surface pixels the terminal currently offers to the grid
    avail: (Px, Px),

    /// Generations advanced since startup or the last clear
    generation: u64,

    /// One-shot: a presentation is wanted at the end of this loop pass
    redraw: bool,
}

impl<E: Engine> App<E> {
    /// The engine's dimensions are fixed for its lifetime, so a buffer that
    /// disagrees with them is a startup defect, surfaced here once rather
    /// than checked per frame.
    pub fn new(engine: E, term: (ScreenPos, ScreenPos)) -> Result<Self, AppError> {
        let (width, height) = (engine.width(), engine.height());

        if width == 0 || height == 0 {
            return Err(AppError::EmptyGrid { width, height });
        }

        let expected = (width as usize) * (height as usize);
        let len = engine.cells().len();

        if len != expected {
            return Err(AppError::BufferMismatch {
                len,
                expected,
                width,
                height,
            });
        }

        Ok(Self {
            engine,
            viewport: Viewport::new(),
            surface: Surface::new(0, 0),
            animation: Animation::new(),
            avail: Self::avail_for(term),
            generation: 0,
            redraw: true,
        })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn is_paused(&self) -> bool {
        self.animation.is_paused()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Take the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> bool {
        mem::take(&mut self.redraw)
    }

    /// Start playback. Called once at startup, and again from the
    /// play/pause control.
    pub fn play<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if self.animation.play(scheduler) {
            self.step();
        }
    }

    pub fn handle_event<S: FrameScheduler>(&mut self, event: Event, scheduler: &mut S) {
        match event {
            Event::Pointer(PointerEvent::Press { col, row }) => {
                if let Some((r, c)) = self.cell_under((col, row)) {
                    self.engine.toggle_cell(r, c);
                    self.redraw = true;
                }
            }

            Event::Pointer(PointerEvent::Drag { col, row }) => {
                if let Some((r, c)) = self.cell_under((col, row)) {
                    // painting over an already-alive cell repaints nothing
                    if self.engine.set_cell_alive(r, c) {
                        self.redraw = true;
                    }
                }
            }

            Event::Control(ControlEvent::PlayPause) => {
                if self.animation.toggle(scheduler) {
                    self.step();
                }
            }

            Event::Control(ControlEvent::Step) => self.step(),

            Event::Control(ControlEvent::Clear) => {
                self.engine.clear();
                self.generation = 0;
                self.redraw = true;
            }

            Event::Resize { cols, rows } => {
                self.avail = Self::avail_for((cols, rows));
                debug!("viewport now {}x{} px", self.avail.0, self.avail.1);

                // while running, the next scheduled frame picks the new
                // size up on its own
                if self.animation.is_paused() {
                    self.redraw = true;
                }
            }

            // the loop exits before this is ever reached
            Event::Exit => {}
        }
    }

    /// A scheduled frame callback fired.
    pub fn frame<S: FrameScheduler>(&mut self, fired: FrameHandle, scheduler: &mut S) {
        if self.animation.frame(fired, scheduler) {
            self.step();
        }
    }

    /// Render one frame into the surface and return the braille text.
    pub fn render_frame(&mut self) -> &str {
        render::draw_frame(&self.engine, &mut self.viewport, &mut self.surface, self.avail);

        self.surface.render()
    }

    /// The status line. The glyph is the action the play/pause control
    /// would take next.
    pub fn status(&self) -> String {
        let glyph = if self.animation.is_paused() {
            "▶ paused"
        } else {
            "⏸ running"
        };

        format!(
            "{glyph} · gen {} · space play/pause · n step · c clear · q quit",
            self.generation,
        )
    }

    /// Advance one generation and request a redraw. Playback state is not
    /// touched: stepping works paused and mid-playback alike.
    fn step(&mut self) {
        self.engine.tick();
        self.generation += 1;
        self.redraw = true;
    }

    /// Surface pixels available to the grid: the terminal minus the status
    /// line, in dots.
    fn avail_for((cols, rows): (ScreenPos, ScreenPos)) -> (Px, Px) {
        (
            cols as Px * DOTS_X,
            rows.saturating_sub(STATUS_ROWS) as Px * DOTS_Y,
        )
    }

    fn cell_under(&self, pointer: (ScreenPos, ScreenPos)) -> Option<(GridPos, GridPos)> {
        pointer_to_cell(
            pointer,
            self.bounds(),
            (self.surface.width(), self.surface.height()),
            &self.viewport,
            (self.engine.width(), self.engine.height()),
        )
    }

    /// Displayed bounding box of the surface: below the status line, at the
    /// surface's current displayed size. Before the first frame the surface
    /// is empty and no pointer hits it.
    fn bounds(&self) -> Bounds {
        Bounds {
            col: 0,
            row: STATUS_ROWS,
            cols: self.surface.cols() as ScreenPos,
            rows: self.surface.rows() as ScreenPos,
        }
    }
}
