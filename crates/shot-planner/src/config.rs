use serde::{Deserialize, Serialize};

use crate::difficulty::{Difficulty, DifficultyProfile};
use crate::error::PlannerError;
use crate::table::BALL_RADIUS;

/// Configuration for a planner instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Ball radius in table units (default: 14). Should match the physics
    /// engine's radius; it sets both the ghost-ball offset and the
    /// obstruction clearance.
    pub ball_radius: f32,
    /// Noise and selection behavior (default: Medium tier).
    pub profile: DifficultyProfile,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            profile: DifficultyProfile::default(),
        }
    }
}

impl PlannerConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            profile: difficulty.profile(),
            ..Self::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PlannerError> {
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(PlannerError::InvalidBallRadius(self.ball_radius));
        }
        self.profile.validate()
    }
}
