use std::io;

use tracing::info;

use crate::camera::CameraTracker;
use crate::camera::Viewport;
use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;
use crate::events::EventSource;
use crate::render::Presenter;
use crate::rule_set::RuleSet;
use crate::world::SimulationState;

pub const EXTINCT_MESSAGE: &str = "GAME OVER: No live cells remain.";
pub const QUIT_MESSAGE: &str = "Exiting the Game of Life.";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell died. Holds the final state.
    Extinct(SimulationState),

    /// The user asked to stop. Holds the state shown last.
    Quit(SimulationState),
}

impl Outcome {
    pub fn state(&self) -> &SimulationState {
        match self {
            Outcome::Extinct(state) | Outcome::Quit(state) => state,
        }
    }
}

/// What stays fixed for a whole run.
pub struct Simulation<'a> {
    pub rules: RuleSet,
    pub tracker: &'a dyn CameraTracker,
    pub view: Viewport,
}

impl Simulation<'_> {
    /// Show the current generation, and wait for `events` to either advance or quit. Ends as soon
    /// as no live cell remains.
    pub fn run<E, P>(
        &self,
        mut state: SimulationState,
        events: &mut E,
        presenter: &mut P,
    ) -> io::Result<Outcome>
    where
        E: EventSource + ?Sized,
        P: Presenter + ?Sized,
    {
        info!(rules = %self.rules, view = ?self.view, "Starting simulation");

        loop {
            presenter.present(&state.frame(self.view))?;

            if !state.is_alive() {
                info!(generation = state.generation, "No live cells remain");
                presenter.notify(EXTINCT_MESSAGE)?;

                return Ok(Outcome::Extinct(state));
            }

            match events.next_event()? {
                Event::EngineEvent(EngineEvent::Advance(n)) => {
                    state = self.advance(state, n);
                }
                Event::AppEvent(AppEvent::Exit) => {
                    info!(generation = state.generation, "Exit requested");
                    presenter.notify(QUIT_MESSAGE)?;

                    return Ok(Outcome::Quit(state));
                }
            }
        }
    }

    /// Step `n` generations, stopping early on a dead grid.
    pub fn advance(&self, mut state: SimulationState, n: usize) -> SimulationState {
        for _ in 0..n {
            if !state.is_alive() {
                break;
            }

            state = state.advance(&self.rules, self.tracker, self.view);
        }

        state
    }
}
