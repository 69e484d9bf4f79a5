use anyhow::Result;
use colored::Colorize;
use itertools::Itertools;
use swish::{
    AppState, Catalog, PlanError,
    config::Settings,
    types::{OutputFmt, emit},
};

use super::{make_rng, print_event, print_plan, resolve_params};
use crate::cli::PlanArgs;

pub fn handle(
    catalog: Catalog,
    settings: &Settings,
    args: PlanArgs,
    count: u32,
    fmt: OutputFmt,
) -> Result<()> {
    let mut state = AppState::new(catalog, resolve_params(&args, settings));
    let mut rng = make_rng(args.seed);
    let mut events = Vec::new();

    for _ in 0..count {
        match state.generate(&mut rng) {
            Ok(evs) => events.extend(evs),
            Err(e @ PlanError::EmptySelection { .. }) => {
                if fmt == OutputFmt::Text {
                    eprintln!(
                        "{} try another focus or difficulty (see `swish catalog`)",
                        "hint:".blue().bold()
                    );
                }
                return Err(e.into());
            }
        }
    }

    emit(fmt, &state.plans(), || {
        for event in &events {
            print_event(event);
        }

        println!(
            "\n{} ({})",
            "Your Training Plans".cyan().bold(),
            state.plans().len()
        );
        for plan in state.plans() {
            println!();
            print_plan(plan);
        }

        if let Some(short) = state.plans().iter().find(|p| p.len() < 4) {
            println!(
                "\n{} `{}` has only {} – the catalog has few matching drills ({})",
                "note:".blue().bold(),
                short.name,
                if short.len() == 1 { "1 exercise".to_string() } else { format!("{} exercises", short.len()) },
                short.exercises.iter().map(|e| e.name.as_str()).join(", ")
            );
        }
    })
}
