use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lifecam::app::Outcome;
use lifecam::app::Simulation;
use lifecam::config::Args;
use lifecam::events::EventSource;
use lifecam::io::RawMode;
use lifecam::io::TerminalEvents;
use lifecam::io::TerminalPresenter;
use lifecam::io::Ticker;
use lifecam::map;
use lifecam::world::SimulationState;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<Outcome> {
    // Rules come first, so a bad choice never touches the map file
    let rules = args.resolve_rules(io::stdin().lock(), io::stdout())?;
    let grid = map::read_map(&args.map_file)?;

    let sim = Simulation {
        rules,
        tracker: &args.camera,
        view: args.viewport(),
    };

    let mut events: Box<dyn EventSource> = match args.tick_interval() {
        Some(interval) => Box::new(Ticker::new(interval, args.max_generations)),
        None => Box::new(TerminalEvents),
    };

    let mut presenter = TerminalPresenter::new(io::stdout(), !args.no_clear, rules);

    let _raw = RawMode::enable().context("Failed to put the terminal in raw mode")?;

    let outcome = sim
        .run(SimulationState::new(grid), events.as_mut(), &mut presenter)
        .context("Simulation failed")?;

    Ok(outcome)
}
