use clap::Args;
use pomotick_core::{Command, Config, Event, TimerEngine, TimerSession};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::display::{describe, status_line};

#[derive(Args)]
pub struct RunArgs {
    /// Phase to open on (0 = Focus, 1 = Short Break, 2 = Long Break); starts the clock
    #[arg(long, allow_hyphen_values = true, value_parser = super::parse_phase_arg)]
    pub phase: Option<i64>,
    /// Start the clock immediately
    #[arg(long)]
    pub start: bool,
}

const HELP: &str = "commands: start | stop | switch <n> | <n> | status | quit";

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let engine = TimerEngine::new(config.phase_list()?);
    let period = config.tick_period()?;

    // Ticks and commands share one thread; the engine is never shared.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(drive(engine, period, args))
}

async fn drive(
    engine: TimerEngine,
    period: std::time::Duration,
    args: RunArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = TimerSession::new(engine, period);
    if let Some(phase) = args.phase {
        session.apply(Command::SwitchPhase(phase))?;
    } else if args.start {
        session.apply(Command::Start)?;
    }

    eprintln!("{HELP}");
    println!("{}", status_line(session.engine()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let result = loop {
        tokio::select! {
            event = session.next_tick() => {
                if let Some(msg) = event.as_ref().and_then(describe) {
                    println!("{msg}");
                }
                println!("{}", status_line(session.engine()));
            }
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break Ok(()),
                    Err(e) => break Err(e.into()),
                };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match line.parse::<Command>() {
                    Ok(Command::Quit) => break Ok(()),
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("error: {e}");
                        continue;
                    }
                };
                debug!(?command, "command received");
                match session.apply(command) {
                    Ok(Some(Event::StateSnapshot { .. })) | Ok(None) => {}
                    Ok(Some(event)) => {
                        if let Some(msg) = describe(&event) {
                            println!("{msg}");
                        }
                    }
                    Err(e) => {
                        eprintln!("error: {e}");
                        continue;
                    }
                }
                println!("{}", status_line(session.engine()));
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break Ok(());
            }
        }
    };

    session.close();
    result
}
