//! Basketball training planner: generate drill plans from a catalog and play
//! them back with a per-exercise timer.

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod generator;
pub mod models;
pub mod player;
pub mod state;
pub mod timer;
pub mod types;
pub mod utils;

pub use catalog::Catalog;
pub use error::{CatalogError, ConfigError, PlanError};
pub use events::Event;
pub use models::{Exercise, PlanParams, Training};
pub use player::{Phase, Player, Session};
pub use state::AppState;
