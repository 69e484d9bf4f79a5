use std::collections::HashSet;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::models::Exercise;
use crate::types::{Difficulty, ExerciseType, best_suggestion, difficulty_names, type_names};

/// Longest drill a catalog may hold, in seconds (one day).
pub const MAX_DURATION: u32 = 86_400;

/// Read-only set of exercises the generator draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

#[derive(Deserialize)]
pub struct ExerciseDef {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
}

#[derive(Deserialize)]
pub struct ExerciseImport {
    #[serde(default)]
    pub exercise: Vec<ExerciseDef>,
}

fn ex(
    id: &str,
    name: &str,
    description: &str,
    duration: u32,
    kind: ExerciseType,
    difficulty: Difficulty,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        duration,
        kind,
        difficulty,
    }
}

static SAMPLE: Lazy<Catalog> = Lazy::new(|| {
    use Difficulty::*;
    use ExerciseType::*;

    Catalog {
        exercises: vec![
            ex(
                "1",
                "Spot-Up Shooting",
                "Practice shooting from 5 spots around the perimeter. Make 10 shots from each spot.",
                300,
                Shooting,
                Beginner,
            ),
            ex(
                "2",
                "Crossover Dribbling",
                "Practice crossover dribble while moving up and down the court. Focus on keeping the ball low.",
                180,
                Dribbling,
                Beginner,
            ),
            ex(
                "3",
                "Defensive Slides",
                "Practice defensive slides in a zigzag pattern down the court. Keep your body low and feet active.",
                240,
                Defense,
                Beginner,
            ),
            ex(
                "4",
                "Pull-Up Jumpers",
                "Dribble from half-court, perform a move, and shoot a pull-up jumper. Alternate sides.",
                360,
                Shooting,
                Intermediate,
            ),
            ex(
                "5",
                "Advanced Ball Handling",
                "Two-ball dribbling drills. Dribble two basketballs simultaneously, alternating heights.",
                300,
                Dribbling,
                Advanced,
            ),
            ex(
                "6",
                "Pick and Roll Defense",
                "Practice defending pick and roll situations with a partner. Focus on communication and positioning.",
                420,
                Defense,
                Advanced,
            ),
            ex(
                "7",
                "Full-Court Sprints",
                "Sprint from baseline to baseline. Complete 10 repetitions with 30 seconds rest between each.",
                300,
                Conditioning,
                Intermediate,
            ),
            ex(
                "8",
                "Post Move Sequence",
                "Practice a sequence of post moves: drop step, up-and-under, hook shot. 10 reps on each side.",
                360,
                Shooting,
                Intermediate,
            ),
            ex(
                "9",
                "3-Man Weave",
                "Practice 3-man weave drill full court, finishing with a layup. Focus on timing and spacing.",
                300,
                Teamwork,
                Intermediate,
            ),
            ex(
                "10",
                "Corner Three Shooting",
                "Take 20 three-point shots from each corner. Track your percentage.",
                240,
                Shooting,
                Advanced,
            ),
        ],
    }
});

impl Catalog {
    /// The ten built-in drills.
    pub fn sample() -> Catalog {
        SAMPLE.clone()
    }

    /// Build a catalog from already-typed exercises, enforcing the same
    /// invariants as the TOML loader.
    pub fn new(exercises: Vec<Exercise>) -> Result<Catalog, CatalogError> {
        if exercises.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (i, e) in exercises.iter().enumerate() {
            if e.id.trim().is_empty() {
                return Err(CatalogError::MissingId(i + 1));
            }
            if !seen.insert(e.id.as_str()) {
                return Err(CatalogError::DuplicateId(e.id.clone()));
            }
            if e.name.trim().is_empty() {
                return Err(CatalogError::MissingName(e.id.clone()));
            }
            if e.duration == 0 {
                return Err(CatalogError::ZeroDuration(e.id.clone()));
            }
            if e.duration > MAX_DURATION {
                return Err(CatalogError::DurationTooLong {
                    id: e.id.clone(),
                    duration: e.duration,
                });
            }
        }

        Ok(Catalog { exercises })
    }

    /// Parse `[[exercise]]` entries.
    pub fn from_toml_str(s: &str) -> Result<Catalog, CatalogError> {
        let import: ExerciseImport = toml::from_str(s)?;

        let exercises = import
            .exercise
            .into_iter()
            .map(ExerciseDef::into_exercise)
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Catalog::new(exercises)?;
        debug!("parsed catalog with {} exercises", catalog.len());
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Catalog::from_toml_str(&raw)
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }
}

impl ExerciseDef {
    fn into_exercise(self) -> Result<Exercise, CatalogError> {
        let kind = self
            .kind
            .parse::<ExerciseType>()
            .map_err(|value| CatalogError::UnknownType {
                id: self.id.clone(),
                suggestion: best_suggestion(&value, &type_names()),
                value,
            })?;

        let difficulty =
            self.difficulty
                .parse::<Difficulty>()
                .map_err(|value| CatalogError::UnknownDifficulty {
                    id: self.id.clone(),
                    suggestion: best_suggestion(&value, &difficulty_names()),
                    value,
                })?;

        Ok(Exercise {
            id: self.id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            duration: self.duration,
            kind,
            difficulty,
        })
    }
}
