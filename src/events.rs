use std::collections::VecDeque;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Advance the world state by `n` generations
    Advance(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application
    Exit,
}

impl Event {
    pub const fn advance(n: usize) -> Self {
        Event::EngineEvent(EngineEvent::Advance(n))
    }

    pub const fn exit() -> Self {
        Event::AppEvent(AppEvent::Exit)
    }
}

/// Where the driving loop waits for its next instruction.
pub trait EventSource {
    /// Block until the next event is available.
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Replays a fixed list of events, then asks to exit.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new<I: IntoIterator<Item = Event>>(events: I) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        Ok(self.events.pop_front().unwrap_or(Event::exit()))
    }
}
