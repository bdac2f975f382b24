use std::io;
use std::time;
use std::time::Instant;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;

use cellscope::GridPos;
use cellscope::animation::FramePacer;
use cellscope::app::App;
use cellscope::engine::Engine;
use cellscope::events::Event;
use cellscope::input::convert_event;
use cellscope::universe::Universe;

const GRID_WIDTH: GridPos = 64;
const GRID_HEIGHT: GridPos = 64;

const FRAMERATE: u32 = 60;
const FRAMETIME: time::Duration =
    time::Duration::from_millis(((1f64 / FRAMERATE as f64) * 1_000f64) as u64);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut universe = Universe::new(GRID_WIDTH, GRID_HEIGHT)?;
    universe.initialize();

    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide,
    )?;

    let res = run(&mut stdout, universe);

    execute!(
        stdout,
        cursor::Show,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen,
    )?;
    terminal::disable_raw_mode()?;

    res
}

fn run(stdout: &mut io::Stdout, universe: Universe) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size()?;

    let mut app = App::new(universe, (cols, rows))?;
    let mut pacer = FramePacer::new();

    // auto-play on startup
    app.play(&mut pacer);

    loop {
        let deadline = Instant::now() + FRAMETIME;

        // drain input until the frame deadline
        loop {
            let left = deadline.saturating_duration_since(Instant::now());

            if left.is_zero() || !event::poll(left)? {
                break;
            }

            match convert_event(event::read()?) {
                Some(Event::Exit) => return Ok(()),
                Some(event) => app.handle_event(event, &mut pacer),
                None => {}
            }
        }

        // at the deadline, at most one scheduled callback fires
        if let Some(handle) = pacer.fire() {
            app.frame(handle, &mut pacer);
        }

        if app.take_redraw() {
            present(stdout, &mut app)?;
        }
    }
}

fn present<E: Engine>(stdout: &mut io::Stdout, app: &mut App<E>) -> anyhow::Result<()> {
    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        style::Print(app.status()),
        cursor::MoveToNextLine(1),
    )?;

    let frame = app.render_frame();

    for line in frame.lines() {
        execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    Ok(())
}
