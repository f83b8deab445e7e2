//! Ball identity and group membership.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Number carried by the cue ball.
pub const CUE_BALL_ID: u8 = 0;
/// Number carried by the 8-ball.
pub const EIGHT_BALL_ID: u8 = 8;

/// Group a ball belongs to, derived from its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallGroup {
    Cue,
    /// 1-7
    Solid,
    Eight,
    /// 9-15
    Stripe,
    /// Numbers past 15 (non-standard racks).
    Other,
}

impl BallGroup {
    pub fn of(id: u8) -> Self {
        match id {
            CUE_BALL_ID => BallGroup::Cue,
            1..=7 => BallGroup::Solid,
            EIGHT_BALL_ID => BallGroup::Eight,
            9..=15 => BallGroup::Stripe,
            _ => BallGroup::Other,
        }
    }
}

/// Group the AI is shooting at, as assigned by the rules layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetGroup {
    /// Open table: any object ball is fair.
    #[default]
    None,
    Solids,
    Stripes,
}

impl TargetGroup {
    /// Whether `group` counts as this target group's own balls.
    /// Always false for `None` (no group assigned yet).
    pub fn owns(self, group: BallGroup) -> bool {
        matches!(
            (self, group),
            (TargetGroup::Solids, BallGroup::Solid) | (TargetGroup::Stripes, BallGroup::Stripe)
        )
    }
}

/// A ball as reported by the physics layer for one decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BallRepr", into = "BallRepr")]
pub struct Ball {
    pub id: u8,
    pub pos: Vec2,
    pub pocketed: bool,
    /// Inactive balls (e.g. mid-respot) are ignored by the obstruction test.
    pub active: bool,
}

impl Ball {
    /// An active, un-pocketed ball at `(x, y)`.
    pub fn new(id: u8, x: f32, y: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            pocketed: false,
            active: true,
        }
    }

    /// Same ball, marked pocketed.
    pub fn pocketed(mut self) -> Self {
        self.pocketed = true;
        self
    }

    pub fn group(&self) -> BallGroup {
        BallGroup::of(self.id)
    }

    pub fn is_cue(&self) -> bool {
        self.id == CUE_BALL_ID
    }

    /// On the table and not the cue ball.
    pub fn is_object_ball_in_play(&self) -> bool {
        !self.pocketed && !self.is_cue()
    }
}

/// Wire shape used by the game client: flat `x`/`y` instead of a vector.
#[derive(Serialize, Deserialize)]
struct BallRepr {
    id: u8,
    x: f32,
    y: f32,
    #[serde(default)]
    pocketed: bool,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

impl From<BallRepr> for Ball {
    fn from(r: BallRepr) -> Self {
        Ball {
            id: r.id,
            pos: Vec2::new(r.x, r.y),
            pocketed: r.pocketed,
            active: r.active,
        }
    }
}

impl From<Ball> for BallRepr {
    fn from(b: Ball) -> Self {
        BallRepr {
            id: b.id,
            x: b.pos.x,
            y: b.pos.y,
            pocketed: b.pocketed,
            active: b.active,
        }
    }
}
