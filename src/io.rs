use std::io;
use std::io::Write;
use std::time::Duration;
use std::time::Instant;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;

use crate::events::AppEvent;
use crate::events::Event;
use crate::events::EventSource;
use crate::render::Frame;
use crate::render::Presenter;
use crate::rule_set::RuleSet;

/// How many generations `f` skips ahead.
pub const FAST_FORWARD: usize = 10;

const KEY_HINT: &str = "ENTER: next generation, f: skip 10, q / CTRL+C: exit";

/// Converts a crossterm event into a lifecam event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    let CrossTermEvent::Key(key_event) = event else {
        return None;
    };

    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match key_event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        } => Some(Event::exit()),
        KeyEvent {
            code: KeyCode::Enter | KeyCode::Char(' ' | 'n'),
            ..
        } => Some(Event::advance(1)),
        KeyEvent {
            code: KeyCode::Char('f'),
            ..
        } => Some(Event::advance(FAST_FORWARD)),
        _ => None,
    }
}

/// Waits on the keyboard for every generation.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        loop {
            if let Some(event) = convert_event(event::read()?) {
                return Ok(event);
            }
        }
    }
}

/// Advances one generation every `interval`. Exit keys are still honoured while waiting, and the
/// run ends after `limit` generations when one is set.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    remaining: Option<u64>,
}

impl Ticker {
    pub fn new(interval: Duration, limit: Option<u64>) -> Self {
        Self {
            interval,
            remaining: limit,
        }
    }
}

impl EventSource for Ticker {
    fn next_event(&mut self) -> io::Result<Event> {
        if self.remaining == Some(0) {
            debug!("generation limit reached");
            return Ok(Event::exit());
        }

        let deadline = Instant::now() + self.interval;

        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                break;
            }

            if event::poll(left)? {
                if let Some(Event::AppEvent(AppEvent::Exit)) = convert_event(event::read()?) {
                    return Ok(Event::exit());
                }
            }
        }

        if let Some(n) = self.remaining.as_mut() {
            *n -= 1;
        }

        Ok(Event::advance(1))
    }
}

/// Draws frames as text on a terminal, optionally clearing it first.
pub struct TerminalPresenter<W: Write> {
    out: W,
    clear: bool,
    rules: RuleSet,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, clear: bool, rules: RuleSet) -> Self {
        Self { out, clear, rules }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        if self.clear {
            queue!(
                self.out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0),
            )?;
        }

        for line in frame.lines() {
            queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        let status = format!(
            "Generation {} | {} | population {}",
            frame.generation,
            self.rules,
            frame.grid.population()
        );

        queue!(
            self.out,
            style::Print(status),
            cursor::MoveToNextLine(1),
            style::Print(KEY_HINT),
            cursor::MoveToNextLine(1),
        )?;

        self.out.flush()
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        queue!(self.out, style::Print(message), cursor::MoveToNextLine(1))?;
        self.out.flush()
    }
}

/// Keeps the terminal in raw mode so single key presses reach us. Raw mode is left on drop.
pub struct RawMode(());

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        Ok(Self(()))
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
