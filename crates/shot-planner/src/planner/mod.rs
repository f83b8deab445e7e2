//! The shot planner: candidates → evaluation → selection → noise, or a
//! safety when nothing can be potted.

mod candidates;
mod evaluate;
mod fallback;
mod noise;
mod select;

pub use candidates::eligible_targets;
pub use evaluate::{evaluate_shot, first_obstruction, Candidate};
pub use fallback::{defensive_shot, DEFENSIVE_BACKSPIN, DEFENSIVE_POWER, RANDOM_POWER};
pub use noise::{apply_noise, MAX_POWER, MIN_POWER, SPIN_CHANCE, SPIN_RANGE};
pub use select::{rank_candidates, select_candidate, BEST_SHOT_CHANCE, TOP_PICK};

use crate::config::PlannerConfig;
use crate::difficulty::{Difficulty, DifficultyProfile};
use crate::error::PlannerError;
use crate::plan::ShotPlan;
use crate::rng::RandomSource;
use crate::table::TableSnapshot;

/// AI opponent. Holds only its immutable configuration; randomness is
/// passed in per call, so one planner can serve any number of tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotPlanner {
    profile: DifficultyProfile,
    ball_radius: f32,
}

impl ShotPlanner {
    pub fn new(difficulty: Difficulty) -> Self {
        let config = PlannerConfig::for_difficulty(difficulty);
        Self {
            profile: config.profile,
            ball_radius: config.ball_radius,
        }
    }

    pub fn from_config(config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        Ok(Self {
            profile: config.profile,
            ball_radius: config.ball_radius,
        })
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn ball_radius(&self) -> f32 {
        self.ball_radius
    }

    /// Every makeable (target, pocket) pair, best first. Noise-free.
    pub fn candidates(&self, table: &TableSnapshot) -> Vec<Candidate> {
        let targets = eligible_targets(&table.balls, table.target_group);
        let mut candidates: Vec<Candidate> = targets
            .iter()
            .flat_map(|target| {
                table.pockets.iter().enumerate().filter_map(move |(i, pocket)| {
                    evaluate_shot(table.cue_ball, target, i, pocket, &table.balls, self.ball_radius)
                })
            })
            .collect();
        rank_candidates(&mut candidates);
        log::debug!(
            "{} targets x {} pockets -> {} open shots",
            targets.len(),
            table.pockets.len(),
            candidates.len()
        );
        candidates
    }

    /// Decide this turn's shot. Always returns a playable plan.
    pub fn calculate_shot<R: RandomSource + ?Sized>(
        &self,
        table: &TableSnapshot,
        rng: &mut R,
    ) -> ShotPlan {
        let candidates = self.candidates(table);
        let plan = match select_candidate(&candidates, &self.profile, rng) {
            Some(chosen) => apply_noise(&chosen, &self.profile, rng),
            None => defensive_shot(table.cue_ball, &table.balls, rng),
        };
        log::info!(
            "planned {} shot: angle {:.3} power {:.2} target {:?} pocket {:?}",
            match plan {
                ShotPlan::Offensive { .. } => "offensive",
                ShotPlan::Defensive { .. } => "defensive",
                ShotPlan::Random { .. } => "random",
            },
            plan.angle(),
            plan.power(),
            plan.target_ball_id(),
            plan.pocket_index()
        );
        plan
    }

    /// Advisory delay before showing the shot, in milliseconds.
    pub fn thinking_time_ms<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u32 {
        let (min, max) = self.profile.thinking_time_ms;
        if max <= min {
            return min;
        }
        let span = (max - min) as f32;
        min + ((rng.next_f32() * span) as u32).min(max - min)
    }
}

impl Default for ShotPlanner {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
