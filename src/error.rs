use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Difficulty, FocusArea};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlanError {
    #[error("no {difficulty} exercises match the `{focus_area}` focus")]
    EmptySelection {
        difficulty: Difficulty,
        focus_area: FocusArea,
    },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not read catalog `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog has no [[exercise]] entries")]
    Empty,

    #[error("exercise #{0} has an empty id")]
    MissingId(usize),

    #[error("duplicate exercise id `{0}`")]
    DuplicateId(String),

    #[error("exercise `{0}` has an empty name")]
    MissingName(String),

    #[error("exercise `{0}` must last at least one second")]
    ZeroDuration(String),

    #[error("exercise `{id}` lasts {duration}s, longer than a day")]
    DurationTooLong { id: String, duration: u32 },

    #[error("exercise `{id}` has unknown type `{value}`{}", did_you_mean(.suggestion))]
    UnknownType {
        id: String,
        value: String,
        suggestion: Option<&'static str>,
    },

    #[error("exercise `{id}` has unknown difficulty `{value}`{}", did_you_mean(.suggestion))]
    UnknownDifficulty {
        id: String,
        value: String,
        suggestion: Option<&'static str>,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config io error at `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value `{value}` for `{key}`: expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("could not determine config directory")]
    NoConfigDir,
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(s) => format!(" -- did you mean `{s}`?"),
        None => String::new(),
    }
}
