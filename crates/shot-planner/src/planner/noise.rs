//! Execution error: turns an ideal candidate into the shot actually played.

use super::evaluate::Candidate;
use crate::difficulty::DifficultyProfile;
use crate::plan::{ShotPlan, Spin};
use crate::rng::RandomSource;

/// Executed power never leaves this range.
pub const MIN_POWER: f32 = 0.2;
pub const MAX_POWER: f32 = 1.0;
/// Chance of putting english on the ball.
pub const SPIN_CHANCE: f32 = 0.3;
/// Maximum spin on either axis when spin is applied.
pub const SPIN_RANGE: f32 = 0.6;

/// Apply the profile's execution error to `candidate`.
///
/// Draw order is fixed: accuracy roll, angle error (only on a miss),
/// power error, spin roll, then spin x and y (only when spin is applied).
pub fn apply_noise<R: RandomSource + ?Sized>(
    candidate: &Candidate,
    profile: &DifficultyProfile,
    rng: &mut R,
) -> ShotPlan {
    let mut angle = candidate.angle;
    if rng.next_f32() > profile.accuracy {
        angle += rng.signed(profile.angle_error);
    }

    let power = (candidate.power * (1.0 + rng.signed(profile.power_error))).clamp(MIN_POWER, MAX_POWER);

    let spin = if rng.chance(SPIN_CHANCE) {
        let x = rng.signed(SPIN_RANGE);
        let y = rng.signed(SPIN_RANGE);
        Spin::new(x, y)
    } else {
        Spin::NONE
    };

    ShotPlan::Offensive {
        angle,
        ideal_angle: candidate.angle,
        power,
        spin,
        target_ball: candidate.target_ball,
        pocket: candidate.pocket,
        score: candidate.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Rng, SequenceRng};
    use glam::Vec2;

    fn candidate(power: f32) -> Candidate {
        Candidate {
            target_ball: 3,
            pocket: 2,
            angle: 0.25,
            power,
            score: 50.0,
            cut_angle: 0.1,
            ghost: Vec2::ZERO,
            dist_to_ghost: 200.0,
            dist_to_pocket: 150.0,
        }
    }

    #[test]
    fn passing_draws_leave_the_shot_untouched() {
        // Accuracy passes, power factor exactly 1, no spin
        let mut rng = SequenceRng::new(vec![0.0, 0.5, 0.99]);
        let plan = apply_noise(&candidate(0.5), &DifficultyProfile::EASY, &mut rng);
        assert_eq!(plan.angle(), 0.25);
        assert_eq!(plan.power(), 0.5);
        assert_eq!(plan.spin(), Spin::NONE);
        assert_eq!(plan.score(), Some(50.0));
        assert_eq!(plan.pocket_index(), Some(2));
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn missed_accuracy_roll_bends_the_aim() {
        let profile = DifficultyProfile::EASY;
        // Miss, then the largest positive error
        let mut rng = SequenceRng::new(vec![0.9, 0.999_999, 0.5, 0.99]);
        let plan = apply_noise(&candidate(0.5), &profile, &mut rng);
        let err = plan.angle() - 0.25;
        assert!(err > 0.0 && err <= profile.angle_error + 1e-6, "err {}", err);
        match plan {
            ShotPlan::Offensive { ideal_angle, .. } => assert_eq!(ideal_angle, 0.25),
            other => panic!("expected offensive, got {:?}", other),
        }
    }

    #[test]
    fn power_is_clamped() {
        let profile = DifficultyProfile { power_error: 0.9, ..DifficultyProfile::EASY };
        let mut rng = SequenceRng::new(vec![0.0, 0.999_999, 0.99]);
        assert_eq!(apply_noise(&candidate(0.85), &profile, &mut rng).power(), MAX_POWER);

        let mut rng = SequenceRng::new(vec![0.0, 0.0, 0.99]);
        assert_eq!(apply_noise(&candidate(0.3), &profile, &mut rng).power(), MIN_POWER);
    }

    #[test]
    fn spin_roll_sets_both_axes() {
        let mut rng = SequenceRng::new(vec![0.0, 0.5, 0.1, 1.0, 0.0]);
        let spin = apply_noise(&candidate(0.5), &DifficultyProfile::HARD, &mut rng).spin();
        assert!(spin.x > 0.59 && spin.x <= SPIN_RANGE);
        assert!((spin.y + SPIN_RANGE).abs() < 1e-6);
    }

    #[test]
    fn random_noise_stays_in_bounds() {
        let mut rng = Rng::new(1234);
        for profile in [DifficultyProfile::EASY, DifficultyProfile::HARD] {
            for _ in 0..2_000 {
                let plan = apply_noise(&candidate(0.85), &profile, &mut rng);
                assert!((MIN_POWER..=MAX_POWER).contains(&plan.power()));
                assert!((plan.angle() - 0.25).abs() <= profile.angle_error + 1e-6);
                let spin = plan.spin();
                assert!(spin.x.abs() <= SPIN_RANGE && spin.y.abs() <= SPIN_RANGE);
            }
        }
    }
}
