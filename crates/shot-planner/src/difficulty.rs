//! Difficulty tiers and the profile each one resolves to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Degrees to radians. Tier constants below are written in degrees for
/// readability; everything past this file is radians.
const DEG: f32 = std::f32::consts::PI / 180.0;

/// How closely the executed shot tracks the ideal one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Chance in (0, 1] that the aim is executed without angular error.
    pub accuracy: f32,
    /// Maximum aim error in radians, applied when the accuracy roll fails.
    pub angle_error: f32,
    /// Maximum relative power error, e.g. 0.1 for ±10%.
    pub power_error: f32,
    /// Advisory "thinking" delay range in milliseconds, `(min, max)`.
    pub thinking_time_ms: (u32, u32),
    /// Always take the best-scoring shot instead of sometimes a near-best one.
    pub prefer_easy_shots: bool,
}

impl DifficultyProfile {
    pub const EASY: Self = Self {
        accuracy: 0.55,
        angle_error: 10.0 * DEG,
        power_error: 0.25,
        thinking_time_ms: (1500, 3000),
        prefer_easy_shots: true,
    };

    pub const MEDIUM: Self = Self {
        accuracy: 0.75,
        angle_error: 5.0 * DEG,
        power_error: 0.15,
        thinking_time_ms: (1000, 2200),
        prefer_easy_shots: true,
    };

    pub const MEDIUM_HARD: Self = Self {
        accuracy: 0.85,
        angle_error: 3.0 * DEG,
        power_error: 0.10,
        thinking_time_ms: (800, 1800),
        prefer_easy_shots: false,
    };

    pub const HARD: Self = Self {
        accuracy: 0.95,
        angle_error: 1.5 * DEG,
        power_error: 0.05,
        thinking_time_ms: (600, 1400),
        prefer_easy_shots: false,
    };

    /// Reject profiles the noise model cannot use.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if !(self.accuracy > 0.0 && self.accuracy <= 1.0) {
            return Err(PlannerError::InvalidProfile {
                field: "accuracy",
                value: self.accuracy,
            });
        }
        if !self.angle_error.is_finite() || self.angle_error < 0.0 {
            return Err(PlannerError::InvalidProfile {
                field: "angle_error",
                value: self.angle_error,
            });
        }
        if !(self.power_error >= 0.0 && self.power_error < 1.0) {
            return Err(PlannerError::InvalidProfile {
                field: "power_error",
                value: self.power_error,
            });
        }
        let (min, max) = self.thinking_time_ms;
        if min > max {
            return Err(PlannerError::InvalidProfile {
                field: "thinking_time_ms",
                value: min as f32,
            });
        }
        Ok(())
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::MEDIUM
    }
}

/// Named difficulty tier, picked once per AI opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    MediumHard,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::MediumHard,
        Difficulty::Hard,
    ];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile::EASY,
            Difficulty::Medium => DifficultyProfile::MEDIUM,
            Difficulty::MediumHard => DifficultyProfile::MEDIUM_HARD,
            Difficulty::Hard => DifficultyProfile::HARD,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::MediumHard => "medium-hard",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "medium-hard" | "mediumhard" | "medium_hard" => Ok(Difficulty::MediumHard),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(PlannerError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tiers_are_valid() {
        for d in Difficulty::ALL {
            d.profile().validate().unwrap();
        }
    }

    #[test]
    fn tiers_get_sharper_with_difficulty() {
        let profiles: Vec<_> = Difficulty::ALL.iter().map(|d| d.profile()).collect();
        for pair in profiles.windows(2) {
            assert!(pair[1].accuracy > pair[0].accuracy);
            assert!(pair[1].angle_error < pair[0].angle_error);
            assert!(pair[1].power_error < pair[0].power_error);
        }
    }

    #[test]
    fn angle_error_is_radians() {
        assert!((DifficultyProfile::EASY.angle_error - 10f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn parse_names() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("medium_hard".parse::<Difficulty>().unwrap(), Difficulty::MediumHard);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "expert".parse::<Difficulty>(),
            Err(PlannerError::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
        }
    }

    #[test]
    fn rejects_bad_profiles() {
        let zero_accuracy = DifficultyProfile { accuracy: 0.0, ..DifficultyProfile::HARD };
        assert!(zero_accuracy.validate().is_err());

        let nan_angle = DifficultyProfile { angle_error: f32::NAN, ..DifficultyProfile::HARD };
        assert!(nan_angle.validate().is_err());

        let full_power_error = DifficultyProfile { power_error: 1.0, ..DifficultyProfile::HARD };
        assert!(full_power_error.validate().is_err());

        let inverted = DifficultyProfile { thinking_time_ms: (900, 100), ..DifficultyProfile::HARD };
        assert!(matches!(
            inverted.validate(),
            Err(PlannerError::InvalidProfile { field: "thinking_time_ms", .. })
        ));
    }
}
