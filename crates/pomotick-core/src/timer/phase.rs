use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Focus,
    ShortBreak,
    LongBreak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDefinition {
    pub kind: PhaseKind,
    pub name: String,
    /// Duration in minutes. Always positive once inside a `PhaseList`.
    pub duration_min: u64,
}

impl PhaseDefinition {
    pub fn new(kind: PhaseKind, name: impl Into<String>, duration_min: u64) -> Self {
        Self {
            kind,
            name: name.into(),
            duration_min,
        }
    }

    /// Get phase duration in seconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn duration_secs(&self) -> u64 {
        self.duration_min.saturating_mul(60)
    }
}

/// Ordered, immutable list of phases the timer can switch between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseList {
    phases: Vec<PhaseDefinition>,
}

impl PhaseList {
    /// Build a validated phase list.
    ///
    /// # Errors
    ///
    /// Fails on an empty list or on any phase with a zero duration.
    pub fn new(phases: Vec<PhaseDefinition>) -> Result<Self, ValidationError> {
        if phases.is_empty() {
            return Err(ValidationError::EmptyCollection("phases".into()));
        }
        if let Some(bad) = phases.iter().find(|p| p.duration_min == 0) {
            return Err(ValidationError::InvalidValue {
                field: format!("phases.{}", bad.name),
                message: "duration must be at least one minute".into(),
            });
        }
        Ok(Self { phases })
    }

    /// Focus 25, Short Break 5, Long Break 15.
    pub fn standard() -> Self {
        Self {
            phases: standard_phases(25, 5, 15),
        }
    }

    /// The three standard phases with custom durations (minutes).
    pub fn from_durations(
        focus: u64,
        short_break: u64,
        long_break: u64,
    ) -> Result<Self, ValidationError> {
        Self::new(standard_phases(focus, short_break, long_break))
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PhaseDefinition> {
        self.phases.get(index)
    }

    pub fn as_slice(&self) -> &[PhaseDefinition] {
        &self.phases
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhaseDefinition> {
        self.phases.iter()
    }
}

fn standard_phases(focus: u64, short_break: u64, long_break: u64) -> Vec<PhaseDefinition> {
    vec![
        PhaseDefinition::new(PhaseKind::Focus, "Focus time", focus),
        PhaseDefinition::new(PhaseKind::ShortBreak, "Short Break", short_break),
        PhaseDefinition::new(PhaseKind::LongBreak, "Long Break", long_break),
    ]
}

impl Default for PhaseList {
    fn default() -> Self {
        Self::standard()
    }
}
