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

use serde::Serialize;
use tracing::debug;
use utils::numeric::is_positive_finite;
use utils::parse::{parse_leading_float, parse_leading_int};
use crate::error::{Error, Result};
use crate::model::combination::{check_tooth_counts, gear_ratio};

pub const DEFAULT_CALC_INPUT_SPEED: f64 = 200.0;
pub const DEFAULT_CALC_DRIVING_TEETH: f64 = 24.0;
pub const DEFAULT_CALC_DRIVEN_TEETH: f64 = 48.0;

/// Result of a free-form single gear pair calculation.
///
/// No speed tier is attached here; tiers only apply to the generated table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointCalculation {
    pub ratio: f64,
    pub output_speed: f64,
    /// Output speed relative to input speed
    pub speed_factor: f64,
    /// Output torque relative to input torque
    pub torque_factor: f64
}

/// Input speed and both tooth counts must be positive and finite.
pub fn calculate_point(input_speed: f64, driving_teeth: f64, driven_teeth: f64) -> Result<PointCalculation> {
    if !is_positive_finite(input_speed) {
        return Err(Error::invalid_input(
            format!("input speed must be positive, got {}", input_speed)));
    }
    check_tooth_counts(driving_teeth, driven_teeth)?;
    let ratio = gear_ratio(driving_teeth, driven_teeth);
    Ok(PointCalculation {
        ratio,
        output_speed: input_speed / ratio,
        speed_factor: 1.0 / ratio,
        torque_factor: ratio
    })
}

/// Calculator inputs as they arrive from a form.
///
/// Fields that don't start with a number, or that read as zero, fall back to
/// the defaults (200 input speed, 24 driving teeth, 48 driven teeth) instead of
/// failing. Tooth counts are truncated to whole teeth; numbers too long for an
/// integer are kept as read. Negative values are kept and rejected by
/// [`CalculatorInput::calculate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorInput {
    pub input_speed: f64,
    pub driving_teeth: f64,
    pub driven_teeth: f64
}

impl CalculatorInput {
    pub fn new(input_speed: f64, driving_teeth: f64, driven_teeth: f64) -> CalculatorInput {
        CalculatorInput { input_speed, driving_teeth, driven_teeth }
    }

    pub fn from_form(input_speed: &str, driving_teeth: &str, driven_teeth: &str) -> CalculatorInput {
        let input = match parse_leading_float(input_speed) {
            Some(v) if v != 0.0 => v,
            _ => {
                debug!("Calculator input speed '{}' replaced with default {}", input_speed, DEFAULT_CALC_INPUT_SPEED);
                DEFAULT_CALC_INPUT_SPEED
            }
        };
        CalculatorInput {
            input_speed: input,
            driving_teeth: teeth_or_default(driving_teeth, DEFAULT_CALC_DRIVING_TEETH),
            driven_teeth: teeth_or_default(driven_teeth, DEFAULT_CALC_DRIVEN_TEETH)
        }
    }

    pub fn calculate(&self) -> Result<PointCalculation> {
        calculate_point(self.input_speed, self.driving_teeth, self.driven_teeth)
    }
}

impl Default for CalculatorInput {
    fn default() -> Self {
        CalculatorInput::new(DEFAULT_CALC_INPUT_SPEED,
                             DEFAULT_CALC_DRIVING_TEETH,
                             DEFAULT_CALC_DRIVEN_TEETH)
    }
}

fn teeth_or_default(text: &str, default: f64) -> f64 {
    match parse_leading_int(text) {
        Some(v) if v != 0.0 => v,
        _ => {
            debug!("Calculator tooth count '{}' replaced with default {}", text, default);
            default
        }
    }
}
