use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, ExerciseType, FocusArea, Position};

/// A single drill from the catalog.
/// Immutable once loaded; plans hold clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Seconds.
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: ExerciseType,
    pub difficulty: Difficulty,
}

/// A generated training plan.
/// The exercise order is the playback order and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub id: String,
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub position: Position,
    pub focus_area: FocusArea,
    pub difficulty: Difficulty,
    /// Sum of the exercise durations, in seconds.
    pub duration: u32,
}

impl Training {
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanParams {
    pub position: Position,
    pub focus_area: FocusArea,
    pub difficulty: Difficulty,
    pub custom_name: Option<String>,
}

impl Default for PlanParams {
    fn default() -> Self {
        Self {
            position: Position::Guard,
            focus_area: FocusArea::Shooting,
            difficulty: Difficulty::Intermediate,
            custom_name: None,
        }
    }
}
