use std::sync::Arc;

use log::info;
use rand::Rng;

use crate::catalog::Catalog;
use crate::error::PlanError;
use crate::events::Event;
use crate::generator;
use crate::models::{PlanParams, Training};
use crate::player::Player;

/// Everything the app knows for the lifetime of the process.
///
/// Plans are append-only; the player shares them through `Arc` and never
/// mutates one.
#[derive(Debug)]
pub struct AppState {
    catalog: Catalog,
    pub params: PlanParams,
    plans: Vec<Arc<Training>>,
    selected: Option<Arc<Training>>,
    pub player: Player,
}

impl AppState {
    pub fn new(catalog: Catalog, params: PlanParams) -> Self {
        Self {
            catalog,
            params,
            plans: Vec::new(),
            selected: None,
            player: Player::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn plans(&self) -> &[Arc<Training>] {
        &self.plans
    }

    pub fn selected(&self) -> Option<&Arc<Training>> {
        self.selected.as_ref()
    }

    /// Generate a plan from the current params, append it and select it.
    /// Playback is not touched until the next `start`.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<Event>, PlanError> {
        let plan = Arc::new(generator::generate(
            &self.catalog,
            &self.params,
            &self.plans,
            rng,
        )?);
        info!(
            "created plan `{}` ({} exercises, {}s)",
            plan.name,
            plan.len(),
            plan.duration
        );

        let event = Event::PlanCreated {
            name: plan.name.clone(),
        };
        self.plans.push(plan.clone());
        self.selected = Some(plan);
        Ok(vec![event])
    }

    /// Select an existing plan by id.
    pub fn select(&mut self, id: &str) -> Option<&Arc<Training>> {
        let plan = self.plans.iter().find(|t| t.id == id)?.clone();
        self.selected = Some(plan);
        self.selected.as_ref()
    }

    /// Start playing the selected plan. Returns `None` when nothing is selected.
    pub fn start_selected(&mut self) -> Option<Vec<Event>> {
        let plan = self.selected.clone()?;
        Some(self.player.start(plan).into_iter().collect())
    }

    pub fn start(&mut self, plan: Arc<Training>) -> Vec<Event> {
        self.selected = Some(plan.clone());
        self.player.start(plan).into_iter().collect()
    }

    pub fn tick(&mut self, generation: u64) -> Vec<Event> {
        self.player.tick_for(generation).into_iter().collect()
    }

    pub fn toggle_run(&mut self) {
        self.player.toggle_run();
    }

    pub fn skip(&mut self) -> Vec<Event> {
        self.player.skip().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Phase;
    use crate::types::{Difficulty, FocusArea};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state(difficulty: Difficulty, focus_area: FocusArea) -> AppState {
        AppState::new(
            Catalog::sample(),
            PlanParams {
                difficulty,
                focus_area,
                ..PlanParams::default()
            },
        )
    }

    #[test]
    fn generate_appends_and_selects() {
        let mut s = state(Difficulty::Advanced, FocusArea::Shooting);
        let mut rng = StdRng::seed_from_u64(11);

        let events = s.generate(&mut rng).unwrap();
        assert_eq!(
            events,
            vec![Event::PlanCreated {
                name: "Advanced Shooting for Guards".into()
            }]
        );
        s.generate(&mut rng).unwrap();

        assert_eq!(s.plans().len(), 2);
        assert!(Arc::ptr_eq(s.selected().unwrap(), &s.plans()[1]));
        assert_ne!(s.plans()[0].id, s.plans()[1].id);
        assert_eq!(s.player.phase(), Phase::Idle);
    }

    #[test]
    fn empty_selection_leaves_state_alone() {
        let catalog = Catalog::new(vec![Catalog::sample().get("9").unwrap().clone()]).unwrap();
        let mut s = AppState::new(
            catalog,
            PlanParams {
                difficulty: Difficulty::Intermediate,
                focus_area: FocusArea::Shooting,
                ..PlanParams::default()
            },
        );

        assert!(s.generate(&mut StdRng::seed_from_u64(0)).is_err());
        assert!(s.plans().is_empty());
        assert!(s.selected().is_none());
    }

    #[test]
    fn generating_does_not_disturb_playback() {
        let mut s = state(Difficulty::Intermediate, FocusArea::AllAround);
        let mut rng = StdRng::seed_from_u64(2);
        s.generate(&mut rng).unwrap();
        s.start_selected().unwrap();
        let gen_before = s.player.generation();
        s.tick(gen_before);

        s.generate(&mut rng).unwrap();
        assert_eq!(s.player.generation(), gen_before);
        assert_eq!(s.player.session().unwrap().elapsed(), 1);
    }

    #[test]
    fn select_and_start_old_plan() {
        let mut s = state(Difficulty::Beginner, FocusArea::Defense);
        let mut rng = StdRng::seed_from_u64(4);
        s.generate(&mut rng).unwrap();
        s.generate(&mut rng).unwrap();

        let first = s.plans()[0].id.clone();
        assert!(s.select(&first).is_some());
        assert!(s.select("nope").is_none());

        s.start_selected().unwrap();
        assert_eq!(s.player.session().unwrap().plan().id, first);
    }

    #[test]
    fn start_without_selection() {
        let mut s = state(Difficulty::Beginner, FocusArea::Defense);
        assert!(s.start_selected().is_none());
    }

    #[test]
    fn skipping_through_fires_complete_once() {
        let mut s = state(Difficulty::Intermediate, FocusArea::AllAround);
        s.generate(&mut StdRng::seed_from_u64(8)).unwrap();
        s.start_selected().unwrap();

        let events: Vec<Event> = (0..10).flat_map(|_| s.skip()).collect();
        assert_eq!(events, vec![Event::WorkoutComplete]);
    }
}
