use clap::Args;
use pomotick_core::{Config, TimerEngine};

use crate::display::{describe, status_line};

#[derive(Args)]
pub struct SimulateArgs {
    /// Switch to this phase first (switching starts the clock)
    #[arg(long, allow_hyphen_values = true, value_parser = super::parse_phase_arg)]
    pub phase: Option<i64>,
    /// Number of ticks to apply
    #[arg(long, default_value_t = 0)]
    pub ticks: u64,
    /// Leave the clock stopped, so ticks have no effect
    #[arg(long)]
    pub stopped: bool,
    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut engine = TimerEngine::new(config.phase_list()?);

    if let Some(phase) = args.phase {
        let index = engine.checked_phase_index(phase)?;
        engine.switch_phase(index)?;
    }
    if args.stopped {
        engine.stop();
    } else {
        engine.start();
    }

    let events: Vec<_> = (0..args.ticks).filter_map(|_| engine.tick()).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    } else {
        for msg in events.iter().filter_map(describe) {
            println!("{msg}");
        }
        println!("{}", status_line(&engine));
    }
    Ok(())
}
