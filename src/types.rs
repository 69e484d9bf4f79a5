use std::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseType {
    Shooting,
    Dribbling,
    Defense,
    Conditioning,
    Teamwork,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 5] = [
        Self::Shooting,
        Self::Dribbling,
        Self::Defense,
        Self::Conditioning,
        Self::Teamwork,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shooting => "shooting",
            Self::Dribbling => "dribbling",
            Self::Defense => "defense",
            Self::Conditioning => "conditioning",
            Self::Teamwork => "teamwork",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusArea {
    Shooting,
    BallHandling,
    Defense,
    AllAround,
}

impl FocusArea {
    pub const ALL: [FocusArea; 4] = [
        Self::Shooting,
        Self::BallHandling,
        Self::Defense,
        Self::AllAround,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shooting => "shooting",
            Self::BallHandling => "ball-handling",
            Self::Defense => "defense",
            Self::AllAround => "all-around",
        }
    }

    /// Whether an exercise of type `kind` trains this focus area.
    pub fn covers(self, kind: ExerciseType) -> bool {
        match self {
            Self::Shooting => kind == ExerciseType::Shooting,
            Self::BallHandling => {
                matches!(kind, ExerciseType::Dribbling | ExerciseType::Conditioning)
            }
            Self::Defense => matches!(kind, ExerciseType::Defense | ExerciseType::Conditioning),
            Self::AllAround => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Guard,
    Forward,
    Center,
    Wing,
}

impl Position {
    pub const ALL: [Position; 4] = [Self::Guard, Self::Forward, Self::Center, Self::Wing];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guard => "guard",
            Self::Forward => "forward",
            Self::Center => "center",
            Self::Wing => "wing",
        }
    }
}

macro_rules! display_and_parse {
    ($($ty:ty),+) => {$(
        impl Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| s.to_string())
            }
        }
    )+};
}

display_and_parse!(ExerciseType, Difficulty, FocusArea, Position);

/// Return the closest allowed name for `input`
/// if similarity ≥ 0.80 *and* clearly better than the runner-up.
/// Otherwise return `None` (no suggestion shown).
pub fn best_suggestion(input: &str, allowed: &[&'static str]) -> Option<&'static str> {
    let inp = input.trim().to_ascii_lowercase();
    if inp.is_empty() || allowed.is_empty() {
        return None;
    }

    let mut scores: Vec<(&'static str, f64)> = allowed
        .iter()
        .copied()
        .map(|name| (name, jaro_winkler(&inp, name)))
        .collect();

    // Highest score first.
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (best, best_score) = scores[0];
    let second_score = scores.get(1).map(|(_, s)| *s).unwrap_or(0.0);

    const MIN_SCORE: f64 = 0.80;
    const GAP: f64 = 0.02;

    if best_score >= MIN_SCORE && best_score - second_score >= GAP {
        Some(best)
    } else {
        None
    }
}

pub fn type_names() -> Vec<&'static str> {
    ExerciseType::ALL.iter().map(|t| t.as_str()).collect()
}

pub fn difficulty_names() -> Vec<&'static str> {
    Difficulty::ALL.iter().map(|d| d.as_str()).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFmt {
    Text,
    Json,
}

/// Print `value` as pretty JSON, or run `pretty` for the colorful text form.
pub fn emit<T: Serialize>(fmt: OutputFmt, value: &T, pretty: impl FnOnce()) -> anyhow::Result<()> {
    match fmt {
        OutputFmt::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFmt::Text => pretty(),
    }
    Ok(())
}
