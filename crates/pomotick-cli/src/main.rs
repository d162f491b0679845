use clap::{Parser, Subcommand};
use pomotick_core::Config;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "pomotick", version, about = "Pomotick Pomodoro timer")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive timer session
    Run(commands::run::RunArgs),
    /// Drive the timer headlessly for a fixed number of ticks
    Simulate(commands::simulate::SimulateArgs),
    /// List the configured phases
    Phases {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Format a number of seconds as HH:MM:SS
    Format {
        /// Seconds to format
        seconds: u64,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: bool) {
    // Only an existing config is read here; subcommands that need one
    // create it themselves.
    let mut config_error = None;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose {
            "debug".to_string()
        } else {
            match Config::load_existing() {
                Ok(Some(cfg)) => cfg.logging.level,
                Ok(None) => "info".to_string(),
                Err(e) => {
                    config_error = Some(e);
                    "info".to_string()
                }
            }
        };
        EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_error {
        warn!(error = %e, "ignoring log level from config");
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Simulate(args) => commands::simulate::run(args),
        Commands::Phases { json } => commands::phases::run(json),
        Commands::Format { seconds } => {
            println!("{}", pomotick_core::format_duration(seconds));
            Ok(())
        }
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
