//! Plan generation: filter the catalog by difficulty and focus, shuffle,
//! and keep between four and six drills.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::error::PlanError;
use crate::models::{Exercise, PlanParams, Training};
use crate::types::{Difficulty, FocusArea};
use crate::utils::capitalize;

pub const MIN_EXERCISES: usize = 4;
pub const MAX_EXERCISES: usize = 6;

/// Advanced training also pulls intermediate drills. No other pair blends.
pub fn difficulty_matches(exercise: Difficulty, wanted: Difficulty) -> bool {
    exercise == wanted || (wanted == Difficulty::Advanced && exercise == Difficulty::Intermediate)
}

pub fn is_eligible(exercise: &Exercise, difficulty: Difficulty, focus: FocusArea) -> bool {
    difficulty_matches(exercise.difficulty, difficulty) && focus.covers(exercise.kind)
}

/// Eligible drills in catalog order.
pub fn eligible<'a>(catalog: &'a Catalog, difficulty: Difficulty, focus: FocusArea) -> Vec<&'a Exercise> {
    catalog
        .exercises()
        .iter()
        .filter(|e| is_eligible(e, difficulty, focus))
        .collect()
}

/// `"<Difficulty> <Focus> for <Position>s"`.
pub fn synthesize_name(params: &PlanParams) -> String {
    format!(
        "{} {} for {}s",
        capitalize(params.difficulty.as_str()),
        capitalize(params.focus_area.as_str()),
        capitalize(params.position.as_str())
    )
}

/// Millisecond timestamp, bumped past anything already taken.
pub fn fresh_id(existing: &[Arc<Training>]) -> String {
    let taken: HashSet<&str> = existing.iter().map(|t| t.id.as_str()).collect();
    let mut candidate = Utc::now().timestamp_millis();
    while taken.contains(candidate.to_string().as_str()) {
        candidate += 1;
    }
    candidate.to_string()
}

pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    params: &PlanParams,
    existing: &[Arc<Training>],
    rng: &mut R,
) -> Result<Training, PlanError> {
    let mut pool: Vec<&Exercise> = eligible(catalog, params.difficulty, params.focus_area);
    if pool.is_empty() {
        return Err(PlanError::EmptySelection {
            difficulty: params.difficulty,
            focus_area: params.focus_area,
        });
    }

    pool.shuffle(rng);
    let count = rng.random_range(MIN_EXERCISES..=MAX_EXERCISES);
    debug!(
        "{} eligible for {}/{}, drew {}",
        pool.len(),
        params.difficulty,
        params.focus_area,
        count
    );

    let exercises: Vec<Exercise> = pool.into_iter().take(count).cloned().collect();
    let duration = exercises.iter().map(|e| e.duration).sum();

    let name = match params.custom_name.as_deref().map(str::trim) {
        Some(custom) if !custom.is_empty() => custom.to_string(),
        _ => synthesize_name(params),
    };

    Ok(Training {
        id: fresh_id(existing),
        name,
        exercises,
        position: params.position,
        focus_area: params.focus_area,
        difficulty: params.difficulty,
        duration,
    })
}
