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

//! Gear pair combination engine.
//!
//! Generates the table of input speed / driving gear / driven gear
//! combinations, classifies each by output speed and answers listing,
//! single-point and reverse-lookup queries over it. Every query is a pure
//! function of the data it is handed; callers own any session state.

pub mod error;
pub mod model;
pub mod query;
pub mod settings;

pub use error::{Error, ErrorKind, Result};
pub use model::{calculate_point, generate_combinations, CalculatorInput, GearCombination, PointCalculation, SpeedTier, TierThresholds};
pub use query::{find_by_target_output, list, parse_target, InputSpeedFilter, Listing, SortKey};
pub use settings::EngineSettings;
