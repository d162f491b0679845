//! Timer engine implementation.
//!
//! The engine is a tick-driven state machine. It owns no clock and no
//! thread: the host pushes one `tick()` per second while the timer runs.
//!
//! ## State
//!
//! ```text
//! Stopped <-> Running        (start / stop / switch_phase)
//! Focus   ->  Break          (derived: elapsed >= phase total)
//! ```
//!
//! Elapsed time is never clamped. Once it passes the phase total the timer
//! keeps counting and reports itself as on break until the next switch.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(PhaseList::standard());
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::BreakReached) at the boundary
//! ```

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::format::format_duration;
use super::phase::{PhaseDefinition, PhaseList};
use crate::error::TimerError;
use crate::events::Event;

const BREAK_LABEL: &str = "Break time";

/// Core timer engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerEngine {
    phases: PhaseList,
    active_phase_index: usize,
    elapsed_secs: u64,
    running: bool,
}

impl TimerEngine {
    /// Create a stopped engine on the first phase.
    pub fn new(phases: PhaseList) -> Self {
        Self {
            phases,
            active_phase_index: 0,
            elapsed_secs: 0,
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phases(&self) -> &PhaseList {
        &self.phases
    }

    pub fn active_phase_index(&self) -> usize {
        self.active_phase_index
    }

    /// Convert user-supplied (possibly negative) input into a phase index.
    ///
    /// # Errors
    ///
    /// `TimerError::OutOfRange` unless `0 <= index < phases().len()`.
    pub fn checked_phase_index(&self, index: i64) -> Result<usize, TimerError> {
        let len = self.phases.len();
        usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or(TimerError::OutOfRange { index, len })
    }

    pub fn active_phase(&self) -> &PhaseDefinition {
        // Construction and switch_phase both keep the index in bounds,
        // and PhaseList is never empty.
        &self.phases.as_slice()[self.active_phase_index]
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn total_secs(&self) -> u64 {
        self.active_phase().duration_secs()
    }

    pub fn is_on_break(&self) -> bool {
        self.elapsed_secs >= self.total_secs()
    }

    /// Seconds left in the active phase; stays at 0 past the boundary.
    pub fn remaining_secs(&self) -> u64 {
        self.total_secs().saturating_sub(self.elapsed_secs)
    }

    /// Fraction of the phase still remaining, 1.0 at the start.
    ///
    /// Not clamped: goes negative once elapsed time passes the phase total.
    pub fn progress_fraction(&self) -> f64 {
        let total = self.total_secs() as f64;
        (total - self.elapsed_secs as f64) / total
    }

    /// `progress_fraction` scaled to 0..100 (also unclamped).
    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction() * 100.0
    }

    /// Remaining time as `HH:MM:SS`.
    pub fn countdown(&self) -> String {
        format_duration(self.remaining_secs())
    }

    /// "Break time" once on break, otherwise the active phase name.
    pub fn status_label(&self) -> &str {
        if self.is_on_break() {
            BREAK_LABEL
        } else {
            &self.active_phase().name
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let phase = self.active_phase();
        Event::StateSnapshot {
            phase_index: self.active_phase_index,
            phase_kind: phase.kind,
            phase_name: phase.name.clone(),
            label: self.status_label().to_string(),
            running: self.running,
            on_break: self.is_on_break(),
            elapsed_secs: self.elapsed_secs,
            remaining_secs: self.remaining_secs(),
            total_secs: self.total_secs(),
            countdown: self.countdown(),
            progress_fraction: self.progress_fraction(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        debug!(phase = self.active_phase_index, elapsed = self.elapsed_secs, "timer started");
        Some(Event::TimerStarted {
            phase_index: self.active_phase_index,
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    pub fn stop(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        debug!(phase = self.active_phase_index, elapsed = self.elapsed_secs, "timer stopped");
        Some(Event::TimerStopped {
            phase_index: self.active_phase_index,
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// Advance one second. Returns `Some(Event::BreakReached)` on the tick
    /// that lands exactly on the phase total.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        if self.elapsed_secs != self.total_secs() {
            return None;
        }
        let phase = self.active_phase();
        info!(phase = %phase.name, "phase countdown finished");
        Some(Event::BreakReached {
            phase_index: self.active_phase_index,
            phase_kind: phase.kind,
            at: Utc::now(),
        })
    }

    /// Jump to `index`, restarting its countdown and the clock.
    ///
    /// # Errors
    ///
    /// `TimerError::OutOfRange` if `index` is not a valid phase. State is
    /// left untouched in that case.
    pub fn switch_phase(&mut self, index: usize) -> Result<Event, TimerError> {
        let Some(phase) = self.phases.get(index) else {
            let err = TimerError::OutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.phases.len(),
            };
            warn!(%err, "phase switch rejected");
            return Err(err);
        };
        let event = Event::PhaseSwitched {
            from_phase: self.active_phase_index,
            to_phase: index,
            phase_kind: phase.kind,
            duration_secs: phase.duration_secs(),
            at: Utc::now(),
        };
        self.active_phase_index = index;
        self.elapsed_secs = 0;
        self.running = true;
        debug!(phase = index, "phase switched");
        Ok(event)
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(PhaseList::standard())
    }
}
