use glam::Vec2;
use serde::Deserialize;

use super::ball::{Ball, TargetGroup};
use super::pocket::Pocket;
use crate::error::PlannerError;

/// Table state handed to the planner for one decision.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    /// All balls, cue ball included.
    pub balls: Vec<Ball>,
    pub cue_ball: Vec2,
    pub pockets: Vec<Pocket>,
    pub target_group: TargetGroup,
}

impl TableSnapshot {
    pub fn new(
        balls: Vec<Ball>,
        cue_ball: Vec2,
        pockets: Vec<Pocket>,
        target_group: TargetGroup,
    ) -> Self {
        Self {
            balls,
            cue_ball,
            pockets,
            target_group,
        }
    }

    /// Build a snapshot taking the cue position from the id-0 ball.
    pub fn from_balls(
        balls: Vec<Ball>,
        pockets: Vec<Pocket>,
        target_group: TargetGroup,
    ) -> Result<Self, PlannerError> {
        let cue_ball = balls
            .iter()
            .find(|b| b.is_cue())
            .map(|b| b.pos)
            .ok_or(PlannerError::MissingCueBall)?;
        Ok(Self::new(balls, cue_ball, pockets, target_group))
    }

    /// Parse a snapshot sent by the game client.
    ///
    /// ```json
    /// {
    ///   "balls": [{ "id": 0, "x": 200, "y": 250 }, { "id": 3, "x": 500, "y": 250 }],
    ///   "pockets": [{ "x": 600, "y": 100 }],
    ///   "targetGroup": "solids"
    /// }
    /// ```
    ///
    /// `cueBall` (`{ "x", "y" }`) is optional and overrides the id-0 ball.
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        let raw: SnapshotRepr = serde_json::from_str(json)?;
        match raw.cue_ball {
            Some(cue) => Ok(Self::new(raw.balls, Vec2::new(cue.x, cue.y), raw.pockets, raw.target_group)),
            None => Self::from_balls(raw.balls, raw.pockets, raw.target_group),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRepr {
    balls: Vec<Ball>,
    #[serde(default)]
    cue_ball: Option<Point>,
    pockets: Vec<Pocket>,
    #[serde(default)]
    target_group: TargetGroup,
}

#[derive(Deserialize)]
struct Point {
    x: f32,
    y: f32,
}
