//! Ghost-ball evaluation of one (target, pocket) pair.

use glam::Vec2;

use crate::geometry::{cut_angle, ghost_ball, heading, segment_point_distance, EPSILON};
use crate::table::{Ball, Pocket};

/// Power bounds for a noise-free shot.
pub const MIN_BASE_POWER: f32 = 0.3;
pub const MAX_BASE_POWER: f32 = 0.85;
/// Total travel (cue→ghost + target→pocket) that maps to full power.
pub const POWER_DISTANCE_SCALE: f32 = 800.0;

/// Score weights. Cut angle (radians) dominates the two distances.
const SCORE_BASE: f32 = 100.0;
const GHOST_DISTANCE_DIVISOR: f32 = 10.0;
const POCKET_DISTANCE_DIVISOR: f32 = 5.0;
const CUT_ANGLE_WEIGHT: f32 = 30.0;

/// A makeable shot, before selection and noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub target_ball: u8,
    /// Index into the snapshot's pocket list.
    pub pocket: usize,
    /// Aim from the cue ball to the ghost ball, radians.
    pub angle: f32,
    pub power: f32,
    pub score: f32,
    pub cut_angle: f32,
    pub ghost: Vec2,
    pub dist_to_ghost: f32,
    pub dist_to_pocket: f32,
}

/// Evaluate sinking `target` into `pocket` from `cue`.
///
/// Returns `None` when another ball blocks the cue's path to the ghost
/// ball, or when the geometry is degenerate (target on the pocket, cue
/// already on the ghost point).
pub fn evaluate_shot(
    cue: Vec2,
    target: &Ball,
    pocket_index: usize,
    pocket: &Pocket,
    balls: &[Ball],
    ball_radius: f32,
) -> Option<Candidate> {
    let to_pocket = pocket.pos - target.pos;
    let dist_to_pocket = to_pocket.length();

    let Some(ghost) = ghost_ball(target.pos, pocket.pos, ball_radius) else {
        log::debug!("ball {} sits on pocket {}, skipped", target.id, pocket_index);
        return None;
    };

    let to_ghost = ghost - cue;
    let dist_to_ghost = to_ghost.length();
    if dist_to_ghost < EPSILON {
        log::debug!("cue already on ghost ball for {} -> pocket {}", target.id, pocket_index);
        return None;
    }

    if let Some(blocker) = first_obstruction(cue, ghost, target.id, balls, ball_radius) {
        log::debug!(
            "ball {} -> pocket {} blocked by ball {}",
            target.id,
            pocket_index,
            blocker
        );
        return None;
    }

    let cut = cut_angle(to_ghost, to_pocket);
    let score = SCORE_BASE
        - dist_to_ghost / GHOST_DISTANCE_DIVISOR
        - dist_to_pocket / POCKET_DISTANCE_DIVISOR
        - cut * CUT_ANGLE_WEIGHT;
    let power = ((dist_to_ghost + dist_to_pocket) / POWER_DISTANCE_SCALE)
        .clamp(MIN_BASE_POWER, MAX_BASE_POWER);

    Some(Candidate {
        target_ball: target.id,
        pocket: pocket_index,
        angle: heading(to_ghost),
        power,
        score,
        cut_angle: cut,
        ghost,
        dist_to_ghost,
        dist_to_pocket,
    })
}

/// Id of the first ball within one diameter of the cue→ghost segment.
/// The cue ball, the target, pocketed and inactive balls are ignored.
pub fn first_obstruction(
    cue: Vec2,
    ghost: Vec2,
    target_id: u8,
    balls: &[Ball],
    ball_radius: f32,
) -> Option<u8> {
    let clearance = ball_radius * 2.0;
    balls
        .iter()
        .filter(|b| b.active && b.is_object_ball_in_play() && b.id != target_id)
        .find(|b| segment_point_distance(cue, ghost, b.pos) < clearance)
        .map(|b| b.id)
}
