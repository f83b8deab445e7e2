pub mod config;
pub mod difficulty;
pub mod error;
pub mod geometry;
pub mod plan;
pub mod planner;
pub mod rng;
pub mod table;

// Re-export key types at crate root for convenience
pub use config::PlannerConfig;
pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::PlannerError;
pub use geometry::{cut_angle, ghost_ball, segment_point_distance};
pub use plan::{PlanRecord, ShotPlan, Spin};
pub use planner::{
    apply_noise, defensive_shot, eligible_targets, evaluate_shot, select_candidate, Candidate,
    ShotPlanner,
};
pub use rng::{RandomSource, Rng, SequenceRng};
pub use table::{Ball, BallGroup, Pocket, TableLayout, TableSnapshot, TargetGroup, BALL_RADIUS};
