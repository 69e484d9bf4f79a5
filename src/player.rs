//! Workout playback.
//!
//! A [`Player`] owns at most one [`Session`]. Each `start` bumps the
//! generation counter; ticks tagged with an older generation are dropped,
//! so a timer left over from a replaced session can never move the new one.

use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::events::Event;
use crate::models::{Exercise, Training};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Idle,
    Active,
    Complete,
}

#[derive(Debug, Clone)]
pub struct Session {
    plan: Arc<Training>,
    index: usize,
    elapsed: u32,
    running: bool,
    phase: Phase,
    generation: u64,
}

impl Session {
    fn new(plan: Arc<Training>, generation: u64) -> Self {
        Self {
            plan,
            index: 0,
            elapsed: 0,
            running: true,
            phase: Phase::Active,
            generation,
        }
    }

    pub fn plan(&self) -> &Arc<Training> {
        &self.plan
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.plan.exercises.get(self.index)
    }

    fn current_duration(&self) -> u32 {
        self.current_exercise().map(|e| e.duration).unwrap_or(0)
    }

    /// Seconds left in the current exercise.
    pub fn remaining(&self) -> u32 {
        self.current_duration().saturating_sub(self.elapsed)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.plan.len()
    }

    /// Fraction of the current exercise done, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.phase == Phase::Complete {
            return 1.0;
        }
        let duration = self.current_duration();
        if duration == 0 {
            return 1.0;
        }
        (self.elapsed as f64 / duration as f64).clamp(0.0, 1.0)
    }

    /// The tick that brings `elapsed` up to the drill's duration also advances,
    /// so a drill of `n` seconds takes exactly `n` ticks.
    fn tick(&mut self) -> Option<Event> {
        if self.phase != Phase::Active || !self.running {
            return None;
        }

        let duration = self.current_duration();
        if self.elapsed < duration {
            self.elapsed += 1;
        }
        if self.elapsed >= duration {
            return self.advance();
        }
        None
    }

    fn toggle_run(&mut self) {
        if self.phase == Phase::Active {
            self.running = !self.running;
            debug!("session {} running = {}", self.generation, self.running);
        }
    }

    fn skip(&mut self) -> Option<Event> {
        if self.phase != Phase::Active {
            return None;
        }
        self.advance()
    }

    /// Move to the next exercise, or finish on the last one.
    fn advance(&mut self) -> Option<Event> {
        if self.is_last() {
            self.elapsed = self.current_duration();
            self.running = false;
            self.phase = Phase::Complete;
            info!("workout `{}` complete", self.plan.name);
            Some(Event::WorkoutComplete)
        } else {
            self.index += 1;
            self.elapsed = 0;
            debug!(
                "session {} advanced to exercise {}/{}",
                self.generation,
                self.index + 1,
                self.plan.len()
            );
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct Player {
    generation: u64,
    session: Option<Session>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.session.as_ref().map(Session::phase).unwrap_or(Phase::Idle)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Generation of the current session, `0` before the first start.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace whatever was playing with `plan`, from the top.
    pub fn start(&mut self, plan: Arc<Training>) -> Option<Event> {
        self.generation += 1;
        debug!("starting `{}` as session {}", plan.name, self.generation);

        let mut session = Session::new(plan, self.generation);
        let event = if session.plan.is_empty() {
            session.advance()
        } else {
            None
        };
        self.session = Some(session);
        event
    }

    pub fn tick(&mut self) -> Option<Event> {
        self.session.as_mut().and_then(Session::tick)
    }

    /// Deliver a tick from the timer that was started for `generation`.
    pub fn tick_for(&mut self, generation: u64) -> Option<Event> {
        if generation != self.generation {
            debug!("dropping stale tick from session {generation}");
            return None;
        }
        self.tick()
    }

    pub fn toggle_run(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.toggle_run();
        }
    }

    pub fn skip(&mut self) -> Option<Event> {
        self.session.as_mut().and_then(Session::skip)
    }

    pub fn progress(&self) -> f64 {
        self.session.as_ref().map(Session::progress).unwrap_or(0.0)
    }

    pub fn percent(&self) -> f64 {
        self.progress() * 100.0
    }
}
