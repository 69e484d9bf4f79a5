use anyhow::Result;
use colored::Colorize;
use swish::{
    Catalog, Exercise,
    types::{Difficulty, ExerciseType, OutputFmt, emit},
};

use super::exercise_line;

pub fn handle(
    catalog: &Catalog,
    kind: Option<ExerciseType>,
    difficulty: Option<Difficulty>,
    fmt: OutputFmt,
) -> Result<()> {
    let rows: Vec<&Exercise> = catalog
        .exercises()
        .iter()
        .filter(|e| kind.is_none_or(|k| e.kind == k))
        .filter(|e| difficulty.is_none_or(|d| e.difficulty == d))
        .collect();

    emit(fmt, &rows, || {
        if rows.is_empty() {
            println!("{}", "  (no exercises match)".dimmed());
            return;
        }

        println!("{}", "Exercises:".cyan().bold());
        for (i, ex) in rows.iter().enumerate() {
            println!("{}", exercise_line(i, ex));
        }
    })
}
