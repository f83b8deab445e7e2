//! Ghost-ball geometry. Pure functions over `Vec2`, no planner state.

use glam::Vec2;

/// Distances below this are treated as coincident points.
pub const EPSILON: f32 = 1e-4;

/// Distance from `point` to the segment `p1..p2` (projection clamped to the segment).
pub fn segment_point_distance(p1: Vec2, p2: Vec2, point: Vec2) -> f32 {
    let line = p2 - p1;
    let len_sq = line.length_squared();
    if len_sq < EPSILON {
        return p1.distance(point);
    }
    let t = ((point - p1).dot(line) / len_sq).clamp(0.0, 1.0);
    let projection = p1 + line * t;
    projection.distance(point)
}

/// Where the cue ball's center must be at contact to send `target` toward `pocket`:
/// one ball diameter behind the target along the pocket line.
///
/// Returns `None` when the target sits on the pocket and the line is undefined.
pub fn ghost_ball(target: Vec2, pocket: Vec2, ball_radius: f32) -> Option<Vec2> {
    let to_pocket = pocket - target;
    let dist = to_pocket.length();
    if dist < EPSILON {
        return None;
    }
    Some(target - to_pocket / dist * (ball_radius * 2.0))
}

/// Unsigned angle between two directions, in `[0, π]`.
///
/// `atan2(cross, dot)` handles the quadrant without a separate check and
/// does not need normalized inputs.
pub fn cut_angle(cue_dir: Vec2, object_dir: Vec2) -> f32 {
    cue_dir.perp_dot(object_dir).atan2(cue_dir.dot(object_dir)).abs()
}

/// Heading of `v` in radians, `(-π, π]`.
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
