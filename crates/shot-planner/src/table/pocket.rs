use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pocket center on the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PocketRepr", into = "PocketRepr")]
pub struct Pocket {
    pub pos: Vec2,
}

impl Pocket {
    pub fn new(x: f32, y: f32) -> Self {
        Self { pos: Vec2::new(x, y) }
    }
}

#[derive(Serialize, Deserialize)]
struct PocketRepr {
    x: f32,
    y: f32,
}

impl From<PocketRepr> for Pocket {
    fn from(r: PocketRepr) -> Self {
        Pocket::new(r.x, r.y)
    }
}

impl From<Pocket> for PocketRepr {
    fn from(p: Pocket) -> Self {
        PocketRepr { x: p.pos.x, y: p.pos.y }
    }
}
