use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use swish::{
    AppState, Catalog, Event, Phase, Session,
    config::Settings,
    timer::Ticker,
    types::OutputFmt,
    utils::{format_clock, progress_bar},
};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use super::{make_rng, print_event, print_plan, resolve_params};
use crate::cli::PlanArgs;

const BAR_WIDTH: usize = 24;

enum Input {
    Toggle,
    Skip,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "p" | "pause" | "resume" => Input::Toggle,
        "s" | "skip" | "finish" => Input::Skip,
        "q" | "quit" => Input::Quit,
        other => Input::Unknown(other.to_string()),
    }
}

/// Stdin lines from a plain thread: a blocking read cannot be cancelled,
/// and it must not hold up runtime shutdown.
fn spawn_stdin_reader() -> UnboundedReceiver<String> {
    let (tx, rx) = unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn render_events(events: &[Event], fmt: OutputFmt) -> Result<()> {
    for event in events {
        match fmt {
            OutputFmt::Json => println!("{}", serde_json::to_string(event)?),
            OutputFmt::Text => {
                println!();
                print_event(event);
            }
        }
    }
    Ok(())
}

fn print_exercise_header(session: &Session) {
    let Some(ex) = session.current_exercise() else {
        return;
    };
    println!(
        "\n{} {}/{}: {}",
        "Current Exercise".cyan().bold(),
        session.current_index() + 1,
        session.plan().len(),
        ex.name.bold()
    );
    if !ex.description.is_empty() {
        println!("  {}", ex.description.dimmed());
    }
}

fn print_status(session: &Session) -> Result<()> {
    let Some(ex) = session.current_exercise() else {
        return Ok(());
    };

    let toggle = if session.is_running() { "Pause" } else { "Resume" };
    let skip = if session.is_last() { "Finish" } else { "Skip" };
    let paused = if session.is_running() {
        String::new()
    } else {
        format!(" {}", "(paused)".yellow())
    };

    print!(
        "\r  {} {} / {}  {}{}",
        progress_bar(session.progress(), BAR_WIDTH).green(),
        format_clock(session.elapsed()),
        format_clock(ex.duration),
        format!("[p] {toggle}  [s] {skip}").dimmed(),
        paused
    );
    std::io::stdout().flush().context("Failed to flush stdout")
}

pub async fn handle(
    catalog: Catalog,
    settings: &Settings,
    args: PlanArgs,
    tick_ms: Option<u64>,
    fmt: OutputFmt,
) -> Result<()> {
    let period = tick_ms
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .unwrap_or(settings.tick);

    let mut state = AppState::new(catalog, resolve_params(&args, settings));
    let mut rng = make_rng(args.seed);

    let created = state.generate(&mut rng)?;

    match fmt {
        OutputFmt::Json => {
            if let Some(plan) = state.selected() {
                println!("{}", serde_json::to_string(plan)?);
            }
            render_events(&created, fmt)?;
        }
        OutputFmt::Text => {
            for event in &created {
                print_event(event);
            }
            if let Some(plan) = state.selected() {
                println!();
                print_plan(plan);
            }
        }
    }

    let (tx, mut rx) = unbounded_channel();
    let mut ticker = Ticker::new(period, tx);

    let started = state.start_selected().unwrap_or_default();
    ticker.restart(state.player.generation());
    render_events(&started, fmt)?;

    let mut shown_index = None;
    let mut lines = spawn_stdin_reader();
    let mut stdin_open = true;

    loop {
        let Some(session) = state.player.session() else {
            break;
        };

        if fmt == OutputFmt::Text && session.phase() == Phase::Active {
            if shown_index != Some(session.current_index()) {
                if shown_index.is_some() {
                    println!();
                }
                print_exercise_header(session);
                shown_index = Some(session.current_index());
            }
            print_status(session)?;
        }

        if session.phase() == Phase::Complete {
            break;
        }

        let events = tokio::select! {
            Some(tick) = rx.recv() => state.tick(tick.generation),

            line = lines.recv(), if stdin_open => {
                match line {
                    None => {
                        log::debug!("stdin closed, running without controls");
                        stdin_open = false;
                        Vec::new()
                    }
                    Some(line) => match parse_input(&line) {
                        Input::Toggle => {
                            state.toggle_run();
                            Vec::new()
                        }
                        Input::Skip => state.skip(),
                        Input::Quit => {
                            if let Some(s) = state.player.session() {
                                if fmt == OutputFmt::Text {
                                    println!(
                                        "\n{} workout stopped at exercise {}/{}",
                                        "info:".blue().bold(),
                                        s.current_index() + 1,
                                        s.plan().len()
                                    );
                                }
                            }
                            break;
                        }
                        Input::Unknown(other) => {
                            if fmt == OutputFmt::Text {
                                println!(
                                    "\n{} unknown command `{}` (p = pause/resume, s = skip, q = quit)",
                                    "warning:".yellow().bold(),
                                    other
                                );
                            }
                            Vec::new()
                        }
                    },
                }
            }

            else => break,
        };

        render_events(&events, fmt)?;
    }

    ticker.cancel();

    if let Some(session) = state.player.session() {
        if session.phase() == Phase::Complete && fmt == OutputFmt::Text {
            let plan = session.plan();
            println!(
                "{} finished `{}` – {} exercises, {}",
                "Summary:".cyan().bold(),
                plan.name,
                plan.len(),
                format_clock(plan.duration)
            );
        }
    }

    Ok(())
}
