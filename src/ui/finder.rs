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
use gearing::{find_by_target_output, parse_target, GearCombination};
use tracing::{info, warn};
use crate::error::CliError;
use crate::ui::format::{input_rpm_label, ratio_label, rpm_label, teeth_label};

pub const INVALID_TARGET_MESSAGE: &str = "Please enter a valid target RPM";

pub fn render_matches<W: Write>(out: &mut W,
                                data: &[GearCombination],
                                target_text: Option<&str>,
                                tolerance: f64) -> Result<(), CliError> {
    let target = match parse_target(target_text.unwrap_or("")) {
        Ok(target) => target,
        Err(e) => {
            warn!("Rejected target speed. {}", e);
            writeln!(out, "{}", INVALID_TARGET_MESSAGE)?;
            return Ok(());
        }
    };
    let matches = find_by_target_output(data, target, tolerance)?;
    info!("{} combinations found for {} RPM", matches.len(), target);
    if matches.is_empty() {
        writeln!(out, "No exact matches found for {} RPM", target)?;
        return Ok(());
    }
    writeln!(out, "Gear combinations for {} RPM output:", target)?;
    for (idx, combo) in matches.iter().enumerate() {
        writeln!(out, "{}. {}  {} → {}  {}  {}",
                 idx + 1,
                 input_rpm_label(combo.input_speed()),
                 teeth_label(combo.driving_teeth()),
                 teeth_label(combo.driven_teeth()),
                 ratio_label(combo.ratio()),
                 rpm_label(combo.output_speed()))?;
    }
    Ok(())
}
