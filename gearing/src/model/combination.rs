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

use itertools::iproduct;
use serde::Serialize;
use tracing::debug;
use utils::numeric::is_positive_finite;
use crate::error::{Error, Result};
use crate::model::tier::{SpeedTier, TierThresholds};

pub const DEFAULT_INPUT_SPEEDS: [f64; 3] = [100.0, 200.0, 600.0];
pub const DEFAULT_GEAR_SIZES: [f64; 7] = [12.0, 24.0, 36.0, 48.0, 60.0, 72.0, 80.0];

/// Driven teeth divided by driving teeth
pub fn gear_ratio(driving_teeth: f64, driven_teeth: f64) -> f64 {
    driven_teeth / driving_teeth
}

pub fn output_speed(input_speed: f64, driving_teeth: f64, driven_teeth: f64) -> f64 {
    input_speed / gear_ratio(driving_teeth, driven_teeth)
}

pub(crate) fn check_tooth_counts(driving_teeth: f64, driven_teeth: f64) -> Result<()> {
    if !is_positive_finite(driving_teeth) {
        return Err(Error::invalid_input(
            format!("driving gear tooth count must be positive, got {}", driving_teeth)));
    }
    if !is_positive_finite(driven_teeth) {
        return Err(Error::invalid_input(
            format!("driven gear tooth count must be positive, got {}", driven_teeth)));
    }
    Ok(())
}

/// A single driving/driven gear pair turned at a fixed input speed.
///
/// Everything past the three inputs is derived at construction and the
/// value never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GearCombination {
    input_speed: f64,
    driving_teeth: f64,
    driven_teeth: f64,
    ratio: f64,
    output_speed: f64,
    tier: SpeedTier
}

impl GearCombination {
    pub fn new(input_speed: f64,
               driving_teeth: f64,
               driven_teeth: f64,
               thresholds: &TierThresholds) -> Result<GearCombination> {
        check_tooth_counts(driving_teeth, driven_teeth)?;
        let ratio = gear_ratio(driving_teeth, driven_teeth);
        let output_speed = input_speed / ratio;
        Ok(GearCombination {
            input_speed,
            driving_teeth,
            driven_teeth,
            ratio,
            output_speed,
            tier: thresholds.classify(output_speed)
        })
    }

    pub fn input_speed(&self) -> f64 {
        self.input_speed
    }

    pub fn driving_teeth(&self) -> f64 {
        self.driving_teeth
    }

    pub fn driven_teeth(&self) -> f64 {
        self.driven_teeth
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn output_speed(&self) -> f64 {
        self.output_speed
    }

    pub fn tier(&self) -> SpeedTier {
        self.tier
    }
}

/// Build every (input speed, driving, driven) combination, outermost loop first.
///
/// All tooth counts are checked before anything is built so a bad value in
/// either set fails the whole call. An empty set yields an empty result.
pub fn generate_combinations(input_speeds: &[f64],
                             driving_set: &[f64],
                             driven_set: &[f64],
                             thresholds: &TierThresholds) -> Result<Vec<GearCombination>> {
    for teeth in driving_set {
        check_tooth_counts(*teeth, 1.0)?;
    }
    for teeth in driven_set {
        check_tooth_counts(1.0, *teeth)?;
    }

    let combinations = iproduct!(input_speeds, driving_set, driven_set)
        .map(|(input, driving, driven)| {
            GearCombination::new(*input, *driving, *driven, thresholds)
        })
        .collect::<Result<Vec<GearCombination>>>()?;
    debug!("Generated {} gear combinations from {} input speeds, {} driving and {} driven gears",
           combinations.len(), input_speeds.len(), driving_set.len(), driven_set.len());
    Ok(combinations)
}

pub fn generate_default_combinations() -> Result<Vec<GearCombination>> {
    generate_combinations(&DEFAULT_INPUT_SPEEDS,
                          &DEFAULT_GEAR_SIZES,
                          &DEFAULT_GEAR_SIZES,
                          &TierThresholds::default())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use crate::error::ErrorKind;
    use crate::model::combination::{generate_combinations, generate_default_combinations, output_speed, GearCombination, DEFAULT_GEAR_SIZES};
    use crate::model::tier::{SpeedTier, TierThresholds};

    #[test]
    fn default_set_has_147_unique_combinations() {
        let data = generate_default_combinations().unwrap();
        assert_eq!(data.len(), 147);
        let keys: HashSet<(u64, u64, u64)> = data.iter()
            .map(|c| (c.input_speed().to_bits(), c.driving_teeth().to_bits(), c.driven_teeth().to_bits()))
            .collect();
        assert_eq!(keys.len(), 147);
    }

    #[test]
    fn generation_order_is_input_then_driving_then_driven() {
        let data = generate_default_combinations().unwrap();
        let first = data.first().unwrap();
        assert_eq!((first.input_speed(), first.driving_teeth(), first.driven_teeth()), (100.0, 12.0, 12.0));
        let second = data[1];
        assert_eq!((second.input_speed(), second.driving_teeth(), second.driven_teeth()), (100.0, 12.0, 24.0));
        let eighth = data[7];
        assert_eq!((eighth.input_speed(), eighth.driving_teeth(), eighth.driven_teeth()), (100.0, 24.0, 12.0));
        let fiftieth = data[49];
        assert_eq!((fiftieth.input_speed(), fiftieth.driving_teeth(), fiftieth.driven_teeth()), (200.0, 12.0, 12.0));
        let last = data.last().unwrap();
        assert_eq!((last.input_speed(), last.driving_teeth(), last.driven_teeth()), (600.0, 80.0, 80.0));
    }

    #[test]
    fn derived_values_cross_multiply() {
        for combo in generate_default_combinations().unwrap() {
            assert!((combo.ratio() - combo.driven_teeth() / combo.driving_teeth()).abs() < 1e-12);
            let lhs = combo.output_speed() * combo.driven_teeth();
            let rhs = combo.input_speed() * combo.driving_teeth();
            assert!((lhs - rhs).abs() < 1e-9, "{:?}", combo);
        }
    }

    #[test]
    fn every_combination_has_the_tier_of_its_output() {
        let thresholds = TierThresholds::default();
        for combo in generate_default_combinations().unwrap() {
            assert_eq!(combo.tier(), thresholds.classify(combo.output_speed()));
        }
    }

    #[test]
    fn boundary_outputs() {
        let thresholds = TierThresholds::default();
        // 600 * 60 / 72 = 500 exactly
        let at_high = GearCombination::new(600.0, 60.0, 72.0, &thresholds).unwrap();
        assert_eq!(at_high.output_speed(), 500.0);
        assert_eq!(at_high.tier(), SpeedTier::Medium);
        let at_medium = GearCombination::new(200.0, 24.0, 48.0, &thresholds).unwrap();
        assert_eq!(at_medium.output_speed(), 100.0);
        assert_eq!(at_medium.tier(), SpeedTier::Low);
        let fastest = GearCombination::new(600.0, 80.0, 12.0, &thresholds).unwrap();
        assert_eq!(fastest.output_speed(), 4000.0);
        assert_eq!(fastest.tier(), SpeedTier::High);
    }

    #[test]
    fn non_positive_teeth_rejected() {
        let thresholds = TierThresholds::default();
        let err = generate_combinations(&[100.0], &[12.0, 0.0], &DEFAULT_GEAR_SIZES, &thresholds).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let err = generate_combinations(&[100.0], &DEFAULT_GEAR_SIZES, &[-24.0], &thresholds).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(GearCombination::new(100.0, 12.0, 0.0, &thresholds).is_err());
    }

    #[test]
    fn empty_sets_give_empty_output() {
        let thresholds = TierThresholds::default();
        assert!(generate_combinations(&[], &DEFAULT_GEAR_SIZES, &DEFAULT_GEAR_SIZES, &thresholds).unwrap().is_empty());
        assert!(generate_combinations(&[100.0], &[], &DEFAULT_GEAR_SIZES, &thresholds).unwrap().is_empty());
        assert!(generate_combinations(&[100.0], &DEFAULT_GEAR_SIZES, &[], &thresholds).unwrap().is_empty());
    }

    #[test]
    fn custom_sets() {
        let thresholds = TierThresholds::new(50.0, 10.0);
        let data = generate_combinations(&[30.0, 90.0], &[10.0, 20.0], &[5.0], &thresholds).unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(data[0].output_speed(), 60.0);
        assert_eq!(data[0].tier(), SpeedTier::High);
        assert_eq!(data[1].output_speed(), 120.0);
        assert_eq!(output_speed(30.0, 10.0, 5.0), 60.0);
    }
}
