//! Terminal playback with crossterm.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor, event, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{Board, Point};
use pathviz_search::{PlaybackConfig, SearchResult, Timeline};

use crate::render::{Canvas, Mark, summary};

fn color(mark: Mark) -> Color {
    match mark {
        Mark::Open => Color::DarkGrey,
        Mark::Wall => Color::Grey,
        Mark::Start => Color::Green,
        Mark::Finish => Color::Red,
        Mark::Visited => Color::Cyan,
        Mark::Path => Color::Yellow,
    }
}

fn draw(out: &mut impl Write, p: Point, mark: Mark) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(p.x as u16, p.y as u16),
        SetForegroundColor(color(mark)),
        Print(mark.glyph())
    )
}

/// Animate `result` over `board` on the alternate screen, then wait for a
/// key. The terminal is restored even when drawing fails.
pub fn animate(board: &Board, result: &SearchResult, config: PlaybackConfig) -> io::Result<()> {
    let timeline = Timeline::from_result(result, config);
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    let res = execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All)
    )
    .and_then(|()| play(&mut stdout, board, result, &timeline));

    let _ = execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    res
}

fn play(
    out: &mut impl Write,
    board: &Board,
    result: &SearchResult,
    timeline: &Timeline,
) -> io::Result<()> {
    let mut canvas = Canvas::new(board);
    for p in board.bounds().iter() {
        draw(out, p, canvas.mark(p))?;
    }
    out.flush()?;

    let started = Instant::now();
    for step in timeline.steps() {
        let due = Duration::from_millis(step.at_ms);
        if let Some(wait) = due.checked_sub(started.elapsed()) {
            thread::sleep(wait);
        }
        if let Some(mark) = canvas.reveal(step) {
            draw(out, step.pos, mark)?;
            out.flush()?;
        }
    }

    let status_row = board.bounds().height() as u16 + 1;
    queue!(
        out,
        ResetColor,
        cursor::MoveTo(0, status_row),
        Print(summary(result)),
        cursor::MoveTo(0, status_row + 1),
        Print("press any key")
    )?;
    out.flush()?;

    loop {
        if let event::Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}
