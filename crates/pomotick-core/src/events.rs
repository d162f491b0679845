use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::PhaseKind;

/// Every timer state change produces an Event.
/// The host renders them; the engine never reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase_index: usize,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    TimerStopped {
        phase_index: usize,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    PhaseSwitched {
        from_phase: usize,
        to_phase: usize,
        phase_kind: PhaseKind,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// Elapsed time reached the phase total; the timer keeps counting.
    BreakReached {
        phase_index: usize,
        phase_kind: PhaseKind,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase_index: usize,
        phase_kind: PhaseKind,
        phase_name: String,
        label: String,
        running: bool,
        on_break: bool,
        elapsed_secs: u64,
        remaining_secs: u64,
        total_secs: u64,
        countdown: String,
        progress_fraction: f64,
        at: DateTime<Utc>,
    },
}
