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

use std::io::Write;
use gearing::CalculatorInput;
use tracing::warn;
use crate::error::CliError;
use crate::ui::format::{factor_label, ratio_label, rpm_label};

pub const INVALID_INPUT_MESSAGE: &str = "Please enter a positive input speed and gear tooth counts";

/// Fill the calculator from raw field text and print its four results.
///
/// Unreadable fields take their defaults; a negative speed or tooth count is reported
/// to the user rather than returned as an error.
pub fn render_calculation<W: Write>(out: &mut W,
                                    input_speed: &str,
                                    driving_teeth: &str,
                                    driven_teeth: &str) -> Result<(), CliError> {
    let input = CalculatorInput::from_form(input_speed, driving_teeth, driven_teeth);
    let calc = match input.calculate() {
        Ok(calc) => calc,
        Err(e) if e.is_invalid_input() => {
            warn!("Calculator rejected {:?}. {}", input, e);
            writeln!(out, "{}", INVALID_INPUT_MESSAGE)?;
            return Ok(());
        }
        Err(e) => return Err(e.into())
    };
    writeln!(out, "Input: {} RPM, {}T driving {}T", input.input_speed, input.driving_teeth, input.driven_teeth)?;
    writeln!(out, "Gear ratio:    {}", ratio_label(calc.ratio))?;
    writeln!(out, "Output speed:  {}", rpm_label(calc.output_speed))?;
    writeln!(out, "Speed factor:  {}", factor_label(calc.speed_factor))?;
    writeln!(out, "Torque factor: {}", factor_label(calc.torque_factor))?;
    Ok(())
}
