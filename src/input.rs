use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::ControlEvent;
use crate::events::Event;
use crate::events::PointerEvent;

/// Converts a crossterm event into an application event.
///
/// Unbound input maps to `None`. The step key accepts only an initial
/// press, so holding it down advances one generation, not one per repeat.
pub fn convert_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key_event) => convert_key(key_event),
        CrosstermEvent::Mouse(mouse_event) => convert_mouse(mouse_event),
        CrosstermEvent::Resize(cols, rows) => Some(Event::Resize { cols, rows }),
        _ => None,
    }
}

fn convert_key(event: KeyEvent) -> Option<Event> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event {
        KeyEvent {
            code: KeyCode::Char('q'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Event::Exit),

        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Some(Event::Control(ControlEvent::PlayPause)),

        KeyEvent {
            code: KeyCode::Char('n') | KeyCode::Right,
            kind: KeyEventKind::Press,
            ..
        } => Some(Event::Control(ControlEvent::Step)),

        KeyEvent {
            code: KeyCode::Char('c'),
            ..
        } => Some(Event::Control(ControlEvent::Clear)),

        _ => None,
    }
}

fn convert_mouse(event: MouseEvent) -> Option<Event> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Event::Pointer(PointerEvent::Press {
            col: event.column,
            row: event.row,
        })),

        MouseEventKind::Drag(MouseButton::Left) => Some(Event::Pointer(PointerEvent::Drag {
            col: event.column,
            row: event.row,
        })),

        _ => None,
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::Event as CrosstermEvent;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyEventKind;
    use crossterm::event::KeyModifiers;
    use crossterm::event::MouseButton;
    use crossterm::event::MouseEvent;
    use crossterm::event::MouseEventKind;

    use super::convert_event;
    use crate::events::ControlEvent;
    use crate::events::Event;
    use crate::events::PointerEvent;

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, col: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn playback_keys() {
        assert_eq!(
            convert_event(key(KeyCode::Char(' '))),
            Some(Event::Control(ControlEvent::PlayPause)),
        );
        assert_eq!(
            convert_event(key(KeyCode::Char('n'))),
            Some(Event::Control(ControlEvent::Step)),
        );
        assert_eq!(
            convert_event(key(KeyCode::Right)),
            Some(Event::Control(ControlEvent::Step)),
        );
        assert_eq!(
            convert_event(key(KeyCode::Char('c'))),
            Some(Event::Control(ControlEvent::Clear)),
        );
    }

    #[test]
    fn exit_keys() {
        assert_eq!(convert_event(key(KeyCode::Char('q'))), Some(Event::Exit));

        let ctrl_c = CrosstermEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(convert_event(ctrl_c), Some(Event::Exit));
    }

    #[test]
    fn step_ignores_key_repeat() {
        let repeat = CrosstermEvent::Key(KeyEvent::new_with_kind(
            KeyCode::Char('n'),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        ));

        assert_eq!(convert_event(repeat), None);
    }

    #[test]
    fn releases_are_never_bound() {
        let release = CrosstermEvent::Key(KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));

        assert_eq!(convert_event(release), None);
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(convert_event(key(KeyCode::Char('x'))), None);
        assert_eq!(convert_event(key(KeyCode::Esc)), None);
    }

    #[test]
    fn left_button_press_and_drag() {
        assert_eq!(
            convert_event(mouse(MouseEventKind::Down(MouseButton::Left), 4, 2)),
            Some(Event::Pointer(PointerEvent::Press { col: 4, row: 2 })),
        );
        assert_eq!(
            convert_event(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 2)),
            Some(Event::Pointer(PointerEvent::Drag { col: 5, row: 2 })),
        );
    }

    #[test]
    fn other_mouse_input_is_ignored() {
        assert_eq!(
            convert_event(mouse(MouseEventKind::Down(MouseButton::Right), 4, 2)),
            None,
        );
        assert_eq!(convert_event(mouse(MouseEventKind::Moved, 4, 2)), None);
        assert_eq!(
            convert_event(mouse(MouseEventKind::Up(MouseButton::Left), 4, 2)),
            None,
        );
    }

    #[test]
    fn resize_passes_through() {
        assert_eq!(
            convert_event(CrosstermEvent::Resize(120, 40)),
            Some(Event::Resize {
                cols: 120,
                rows: 40
            }),
        );
    }
}
