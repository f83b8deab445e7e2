//! The planner's output.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Side spin (`x`) and top/back spin (`y`), each in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

impl Spin {
    pub const NONE: Spin = Spin { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A shot for the physics layer to execute. Angles are radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ShotPlan {
    /// Aimed at a pocket.
    #[serde(rename_all = "camelCase")]
    Offensive {
        /// Executed aim, after noise.
        angle: f32,
        /// Aim straight at the ghost ball, before noise.
        ideal_angle: f32,
        power: f32,
        spin: Spin,
        target_ball: u8,
        /// Index into the snapshot's pocket list.
        pocket: usize,
        score: f32,
    },
    /// Safety: soft roll onto the nearest ball with a touch of draw.
    #[serde(rename_all = "camelCase")]
    Defensive {
        angle: f32,
        power: f32,
        spin: Spin,
        target_ball: u8,
    },
    /// Nothing left to hit.
    Random { angle: f32, power: f32 },
}

impl ShotPlan {
    pub fn angle(&self) -> f32 {
        match *self {
            ShotPlan::Offensive { angle, .. }
            | ShotPlan::Defensive { angle, .. }
            | ShotPlan::Random { angle, .. } => angle,
        }
    }

    pub fn power(&self) -> f32 {
        match *self {
            ShotPlan::Offensive { power, .. }
            | ShotPlan::Defensive { power, .. }
            | ShotPlan::Random { power, .. } => power,
        }
    }

    pub fn spin(&self) -> Spin {
        match *self {
            ShotPlan::Offensive { spin, .. } | ShotPlan::Defensive { spin, .. } => spin,
            ShotPlan::Random { .. } => Spin::NONE,
        }
    }

    pub fn target_ball_id(&self) -> Option<u8> {
        match *self {
            ShotPlan::Offensive { target_ball, .. } | ShotPlan::Defensive { target_ball, .. } => {
                Some(target_ball)
            }
            ShotPlan::Random { .. } => None,
        }
    }

    pub fn pocket_index(&self) -> Option<usize> {
        match *self {
            ShotPlan::Offensive { pocket, .. } => Some(pocket),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<f32> {
        match *self {
            ShotPlan::Offensive { score, .. } => Some(score),
            _ => None,
        }
    }

    pub fn is_defensive(&self) -> bool {
        matches!(self, ShotPlan::Defensive { .. })
    }

    pub fn is_offensive(&self) -> bool {
        matches!(self, ShotPlan::Offensive { .. })
    }
}

/// Plan kinds as carried in [`PlanRecord::kind`].
pub mod plan_kind {
    pub const OFFENSIVE: f32 = 0.0;
    pub const DEFENSIVE: f32 = 1.0;
    pub const RANDOM: f32 = 2.0;
}

/// Flat plan for zero-copy reads from JavaScript.
/// Fields a variant does not carry are `-1`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PlanRecord {
    pub kind: f32,
    pub angle: f32,
    pub power: f32,
    pub spin_x: f32,
    pub spin_y: f32,
    pub target_ball: f32,
    pub pocket: f32,
    pub score: f32,
}

impl PlanRecord {
    pub const FLOATS: usize = 8;

    pub fn as_floats(&self) -> &[f32; PlanRecord::FLOATS] {
        bytemuck::cast_ref(self)
    }
}

impl From<&ShotPlan> for PlanRecord {
    fn from(plan: &ShotPlan) -> Self {
        let kind = match plan {
            ShotPlan::Offensive { .. } => plan_kind::OFFENSIVE,
            ShotPlan::Defensive { .. } => plan_kind::DEFENSIVE,
            ShotPlan::Random { .. } => plan_kind::RANDOM,
        };
        let spin = plan.spin();
        PlanRecord {
            kind,
            angle: plan.angle(),
            power: plan.power(),
            spin_x: spin.x,
            spin_y: spin.y,
            target_ball: plan.target_ball_id().map_or(-1.0, f32::from),
            pocket: plan.pocket_index().map_or(-1.0, |p| p as f32),
            score: plan.score().unwrap_or(-1.0),
        }
    }
}
