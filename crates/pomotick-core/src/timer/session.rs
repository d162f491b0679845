//! Host-side timer session.
//!
//! A `TimerSession` owns one `TimerEngine` and the `Ticker` feeding it. It
//! keeps the two in step: a running engine has exactly one live ticker, a
//! stopped engine has none, and a phase switch always restarts the ticker so
//! the new countdown gets a full first second.
//!
//! Commands and ticks are meant to be consumed from a single task (for
//! example with `tokio::select!`), so the engine is never shared.

use std::str::FromStr;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

use super::engine::TimerEngine;
use super::ticker::{Tick, Ticker};
use crate::error::{TimerError, ValidationError};
use crate::events::Event;

const TICK_BUFFER: usize = 8;

/// A user command for the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    /// Signed so that negative input reaches the range check.
    SwitchPhase(i64),
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = ValidationError;

    /// Accepts `start`, `stop`, `status`, `quit`, `switch <n>` or a bare `<n>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Err(invalid_command(s));
        }

        let parse_index = |raw: &str| {
            parse_phase_index(raw).ok_or_else(|| ValidationError::InvalidValue {
                field: "phase".into(),
                message: format!("'{raw}' is not a phase number"),
            })
        };

        match (head.as_str(), arg) {
            ("start" | "s", None) => Ok(Command::Start),
            ("stop" | "p", None) => Ok(Command::Stop),
            ("status", None) => Ok(Command::Status),
            ("quit" | "q" | "exit", None) => Ok(Command::Quit),
            ("switch", Some(raw)) => parse_index(raw).map(Command::SwitchPhase),
            (raw, None) if parse_phase_index(raw).is_some() => {
                parse_index(raw).map(Command::SwitchPhase)
            }
            _ => Err(invalid_command(s)),
        }
    }
}

/// Parse a phase number typed by a user.
///
/// Digit strings too large for `i64` saturate instead of failing, so they
/// still reach the range check and report `OutOfRange`.
pub fn parse_phase_index(raw: &str) -> Option<i64> {
    if let Ok(index) = raw.parse::<i64>() {
        return Some(index);
    }
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn invalid_command(input: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: "command".into(),
        message: format!("unrecognized command '{}'", input.trim()),
    }
}

pub struct TimerSession {
    engine: TimerEngine,
    period: Duration,
    tick_tx: mpsc::Sender<Tick>,
    tick_rx: mpsc::Receiver<Tick>,
    ticker: Option<Ticker>,
    generation: u64,
    closed: bool,
}

impl TimerSession {
    /// Wrap `engine`. Must be called inside a tokio runtime if the engine
    /// is already running, since that spawns the first ticker.
    pub fn new(engine: TimerEngine, period: Duration) -> Self {
        let (tick_tx, tick_rx) = mpsc::channel(TICK_BUFFER);
        let mut session = Self {
            engine,
            period,
            tick_tx,
            tick_rx,
            ticker: None,
            generation: 0,
            closed: false,
        };
        session.sync_ticker(false);
        session
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    /// Whether a tick source is currently live.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Apply a command and resynchronize the tick source.
    ///
    /// `Status` returns a snapshot; `Quit` releases the ticker and closes
    /// the session for good.
    ///
    /// # Errors
    ///
    /// `TimerError::OutOfRange` for a bad phase index. Neither the engine
    /// nor the ticker is touched in that case.
    pub fn apply(&mut self, command: Command) -> Result<Option<Event>, TimerError> {
        if self.closed {
            return Ok(None);
        }
        let event = match command {
            Command::Start => {
                let event = self.engine.start();
                self.sync_ticker(false);
                event
            }
            Command::Stop => {
                let event = self.engine.stop();
                self.sync_ticker(false);
                event
            }
            Command::SwitchPhase(index) => {
                let index = self.engine.checked_phase_index(index)?;
                let event = self.engine.switch_phase(index)?;
                self.sync_ticker(true);
                Some(event)
            }
            Command::Status => Some(self.engine.snapshot()),
            Command::Quit => {
                self.close();
                None
            }
        };
        Ok(event)
    }

    /// Wait for the next tick from the live ticker and apply it.
    ///
    /// Returns the engine's tick event (if any). Pends forever while no
    /// ticker is live. Cancel-safe.
    pub async fn next_tick(&mut self) -> Option<Event> {
        while let Some(tick) = self.tick_rx.recv().await {
            let live = self.ticker.as_ref().map(Ticker::generation);
            if live != Some(tick.generation) {
                trace!(generation = tick.generation, "discarding stale tick");
                continue;
            }
            return self.engine.tick();
        }
        // The session holds a sender, so the channel never closes.
        std::future::pending().await
    }

    /// Release the tick source. Further commands are ignored.
    pub fn close(&mut self) {
        self.closed = true;
        self.ticker = None;
    }

    fn sync_ticker(&mut self, restart: bool) {
        if self.closed || !self.engine.is_running() {
            self.ticker = None;
            return;
        }
        if restart || self.ticker.is_none() {
            // Abort the old task before its replacement exists.
            self.ticker = None;
            self.generation += 1;
            self.ticker = Some(Ticker::spawn(
                self.period,
                self.tick_tx.clone(),
                self.generation,
            ));
        }
    }
}
