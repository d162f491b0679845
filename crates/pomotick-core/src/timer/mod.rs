mod engine;
mod format;
mod phase;
mod session;
mod ticker;

pub use engine::TimerEngine;
pub use format::format_duration;
pub use phase::{PhaseDefinition, PhaseKind, PhaseList};
pub use session::{parse_phase_index, Command, TimerSession};
pub use ticker::{Tick, Ticker};
