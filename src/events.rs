use crate::ScreenPos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Pointer(PointerEvent),
    Control(ControlEvent),

    /// The terminal changed size
    Resize { cols: ScreenPos, rows: ScreenPos },

    /// Leave the application
    Exit,
}

/// Mouse input, positioned in displayed terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed
    Press { col: ScreenPos, row: ScreenPos },

    /// Pointer moved with the primary button held
    Drag { col: ScreenPos, row: ScreenPos },
}

/// Playback and grid controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    PlayPause,
    Step,
    Clear,
}
