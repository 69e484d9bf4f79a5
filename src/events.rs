use serde::Serialize;

/// Notifications for the display layer. Each fires once per transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event {
    PlanCreated { name: String },
    WorkoutComplete,
}
