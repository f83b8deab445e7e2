use thiserror::Error;

/// Errors at the configuration and snapshot-ingest boundary.
///
/// Planning itself never fails; these only come from building a planner
/// or parsing what the client sends in.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid difficulty profile: {field} = {value}")]
    InvalidProfile { field: &'static str, value: f32 },

    #[error("Invalid ball radius: {0}")]
    InvalidBallRadius(f32),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Snapshot has no cue ball")]
    MissingCueBall,
}
