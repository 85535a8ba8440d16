/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-speed.
 *
 * gear-speed is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-speed is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-speed. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HIGH_SPEED_THRESHOLD: f64 = 500.0;
pub const DEFAULT_MEDIUM_SPEED_THRESHOLD: f64 = 100.0;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum SpeedTier {
    High,
    Medium,
    Low
}

impl SpeedTier {
    pub fn label(&self) -> &'static str {
        match self {
            SpeedTier::High => "High Speed",
            SpeedTier::Medium => "Medium Speed",
            SpeedTier::Low => "Low Speed"
        }
    }

    /// Lower-case, hyphenated form of the label for styling hooks, e.g. `medium-speed`
    pub fn slug(&self) -> &'static str {
        match self {
            SpeedTier::High => "high-speed",
            SpeedTier::Medium => "medium-speed",
            SpeedTier::Low => "low-speed"
        }
    }
}

impl Display for SpeedTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Output speed boundaries between the tiers.
///
/// Both bounds are exclusive from below: an output speed equal to `high`
/// is Medium and one equal to `medium` is Low.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub high: f64,
    pub medium: f64
}

impl TierThresholds {
    pub fn new(high: f64, medium: f64) -> TierThresholds {
        TierThresholds { high, medium }
    }

    pub fn classify(&self, output_speed: f64) -> SpeedTier {
        if output_speed > self.high {
            return SpeedTier::High;
        }
        if output_speed > self.medium {
            return SpeedTier::Medium;
        }
        SpeedTier::Low
    }

    pub fn is_ordered(&self) -> bool {
        self.high.is_finite() && self.medium.is_finite() && self.high >= self.medium
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        TierThresholds::new(DEFAULT_HIGH_SPEED_THRESHOLD, DEFAULT_MEDIUM_SPEED_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::tier::{SpeedTier, TierThresholds};

    #[test]
    fn default_boundaries() {
        let thresholds = TierThresholds::default();
        assert_eq!(thresholds.classify(1800.0), SpeedTier::High);
        assert_eq!(thresholds.classify(500.01), SpeedTier::High);
        assert_eq!(thresholds.classify(500.0), SpeedTier::Medium);
        assert_eq!(thresholds.classify(100.01), SpeedTier::Medium);
        assert_eq!(thresholds.classify(100.0), SpeedTier::Low);
        assert_eq!(thresholds.classify(15.0), SpeedTier::Low);
    }

    #[test]
    fn custom_boundaries() {
        let thresholds = TierThresholds::new(1000.0, 250.0);
        assert_eq!(thresholds.classify(600.0), SpeedTier::Medium);
        assert_eq!(thresholds.classify(250.0), SpeedTier::Low);
        assert_eq!(thresholds.classify(1000.5), SpeedTier::High);
        assert!(thresholds.is_ordered());
        assert!(!TierThresholds::new(50.0, 100.0).is_ordered());
    }

    #[test]
    fn labels() {
        assert_eq!(SpeedTier::High.to_string(), "High Speed");
        assert_eq!(SpeedTier::Medium.slug(), "medium-speed");
        assert_eq!(SpeedTier::Low.label(), "Low Speed");
    }
}
