pub mod catalog;
pub mod config;
pub mod plan;
pub mod train;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use swish::{
    Event, Exercise, PlanParams, Training,
    config::Settings,
    utils::{format_clock, rounded_minutes},
};

use crate::cli::PlanArgs;

/// Flags win over config, config wins over the built-in defaults.
pub fn resolve_params(args: &PlanArgs, settings: &Settings) -> PlanParams {
    PlanParams {
        position: args.position.unwrap_or(settings.position),
        focus_area: args.focus.unwrap_or(settings.focus),
        difficulty: args.difficulty.unwrap_or(settings.difficulty),
        custom_name: args.name.clone(),
    }
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

pub fn print_event(event: &Event) {
    match event {
        Event::PlanCreated { name } => println!(
            "{} Training Plan Created – your {} plan is ready!",
            "ok:".green().bold(),
            name.bold()
        ),
        Event::WorkoutComplete => println!(
            "{} Workout Complete! You've completed your training session.",
            "ok:".green().bold()
        ),
    }
}

pub fn exercise_line(idx: usize, ex: &Exercise) -> String {
    format!(
        "{} • {} – {} {}",
        format!("{:>2}", idx + 1).yellow(),
        ex.name.bold(),
        format_clock(ex.duration),
        format!("[{} · {}]", ex.kind, ex.difficulty).dimmed()
    )
}

/// Plan card: name, summary, tags, then the drills in playback order.
pub fn print_plan(plan: &Training) {
    println!("{}", plan.name.cyan().bold());
    println!(
        "  {} exercises • {} min",
        plan.len(),
        rounded_minutes(plan.duration)
    );
    println!(
        "  {}",
        format!(
            "[{}] [{}] [{}]",
            plan.position, plan.focus_area, plan.difficulty
        )
        .dimmed()
    );

    for (i, ex) in plan.exercises.iter().enumerate() {
        println!("  {}", exercise_line(i, ex));
        if !ex.description.is_empty() {
            println!("       {}", ex.description.dimmed());
        }
    }
}
