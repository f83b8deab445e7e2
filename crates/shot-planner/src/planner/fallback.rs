use std::f32::consts::TAU;

use glam::Vec2;

use crate::geometry::heading;
use crate::plan::{ShotPlan, Spin};
use crate::rng::RandomSource;
use crate::table::Ball;

/// Soft roll for safeties.
pub const DEFENSIVE_POWER: f32 = 0.3;
/// Draw on safeties so the cue ball stays near the contact point.
pub const DEFENSIVE_BACKSPIN: f32 = -0.3;
/// Power for the last-resort shot on an empty table.
pub const RANDOM_POWER: f32 = 0.4;

/// Shot for when nothing can be potted: roll softly onto the nearest
/// object ball, or hit in a random direction if none is left.
pub fn defensive_shot<R: RandomSource + ?Sized>(cue: Vec2, balls: &[Ball], rng: &mut R) -> ShotPlan {
    let nearest = balls
        .iter()
        .filter(|b| b.is_object_ball_in_play())
        .min_by(|a, b| a.pos.distance_squared(cue).total_cmp(&b.pos.distance_squared(cue)));

    match nearest {
        Some(ball) => ShotPlan::Defensive {
            angle: heading(ball.pos - cue),
            power: DEFENSIVE_POWER,
            spin: Spin::new(0.0, DEFENSIVE_BACKSPIN),
            target_ball: ball.id,
        },
        None => ShotPlan::Random {
            // rem_euclid keeps a rounded-up TAU inside [0, TAU)
            angle: (rng.next_f32() * TAU).rem_euclid(TAU),
            power: RANDOM_POWER,
        },
    }
}
