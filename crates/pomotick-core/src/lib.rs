//! # Pomotick Core Library
//!
//! The Pomodoro timer core: a tick-driven engine over three fixed phases,
//! plus the pieces a host needs to run it.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a state machine advanced one second per `tick()`;
//!   break status, remaining time and progress are derived on demand
//! - **Ticker**: a cancelable tokio interval that pushes ticks into a channel
//! - **Session**: owns one engine and its ticker, keeping them in step
//! - **Storage**: TOML-based configuration (phase durations, tick period)
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`TimerSession`]: Engine plus tick source, driven by [`Command`]s
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, TimerError, ValidationError};
pub use events::Event;
pub use storage::Config;
pub use timer::{
    format_duration, parse_phase_index, Command, PhaseDefinition, PhaseKind, PhaseList, Tick, Ticker, TimerEngine,
    TimerSession,
};
