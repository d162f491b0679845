//! Terminal rendering of timer state.

use pomotick_core::{Event, TimerEngine};

const BAR_WIDTH: usize = 20;

/// One status line: label, countdown, progress bar and percentage.
///
/// The bar is clamped to its width; the percentage is not, so it reads
/// negative once the countdown has passed zero.
pub fn status_line(engine: &TimerEngine) -> String {
    let fraction = engine.progress_fraction();
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));
    let state = if engine.is_running() { "" } else { " (stopped)" };
    format!(
        "{:<12} {}  [{}] {:>4.0}%{}",
        engine.status_label(),
        engine.countdown(),
        bar,
        engine.progress_percent(),
        state
    )
}

/// Short human description of an event, if it deserves one.
pub fn describe(event: &Event) -> Option<String> {
    match event {
        Event::TimerStarted { .. } => Some("started".into()),
        Event::TimerStopped { .. } => Some("stopped".into()),
        Event::PhaseSwitched {
            to_phase,
            duration_secs,
            ..
        } => Some(format!(
            "switched to phase {to_phase} ({})",
            pomotick_core::format_duration(*duration_secs)
        )),
        Event::BreakReached { .. } => Some("time is up: break time".into()),
        Event::StateSnapshot { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomotick_core::PhaseList;

    #[test]
    fn fresh_focus_line() {
        let engine = TimerEngine::new(PhaseList::standard());
        assert_eq!(
            status_line(&engine),
            "Focus time   00:25:00  [####################]  100% (stopped)"
        );
    }

    #[test]
    fn past_the_boundary_bar_is_empty_and_percent_negative() {
        let mut engine = TimerEngine::new(PhaseList::standard());
        engine.switch_phase(1).unwrap();
        for _ in 0..450 {
            engine.tick();
        }
        assert_eq!(
            status_line(&engine),
            "Break time   00:00:00  [--------------------]  -50%"
        );
    }

    #[test]
    fn describes_break() {
        let mut engine = TimerEngine::new(PhaseList::from_durations(1, 1, 1).unwrap());
        engine.start();
        let event = (0..60).filter_map(|_| engine.tick()).last().unwrap();
        assert_eq!(describe(&event).as_deref(), Some("time is up: break time"));
    }
}
