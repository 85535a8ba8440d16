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

pub mod tier;
pub mod combination;
pub mod calculator;

pub use tier::{SpeedTier, TierThresholds};
pub use combination::{gear_ratio, generate_combinations, generate_default_combinations, output_speed, GearCombination};
pub use calculator::{calculate_point, CalculatorInput, PointCalculation};
