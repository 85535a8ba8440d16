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

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::str::FromStr;
use tracing::debug;
use utils::numeric::{ceil_div, is_positive_finite, within_tolerance};
use utils::parse::parse_leading_float;
use crate::error::{Error, Result};
use crate::model::GearCombination;

pub const DEFAULT_MATCH_TOLERANCE: f64 = 0.1;
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!()
};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SortKey {
    #[default]
    OutputSpeedDesc,
    RatioDesc,
    InputSpeedAsc
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::OutputSpeedDesc, SortKey::RatioDesc, SortKey::InputSpeedAsc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::OutputSpeedDesc => "output",
            SortKey::RatioDesc => "ratio",
            SortKey::InputSpeedAsc => "input"
        }
    }

    fn compare(&self, a: &GearCombination, b: &GearCombination) -> Ordering {
        match self {
            SortKey::OutputSpeedDesc => b.output_speed().total_cmp(&a.output_speed()),
            SortKey::RatioDesc => b.ratio().total_cmp(&a.ratio()),
            SortKey::InputSpeedAsc => a.input_speed().total_cmp(&b.input_speed())
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "output" => Ok(SortKey::OutputSpeedDesc),
            "ratio" => Ok(SortKey::RatioDesc),
            "input" => Ok(SortKey::InputSpeedAsc),
            other => Err(Error::invalid_input(
                format!("unknown sort key '{}', expected one of output, ratio, input", other)))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputSpeedFilter {
    #[default]
    All,
    Only(f64)
}

impl InputSpeedFilter {
    pub fn matches(&self, combination: &GearCombination) -> bool {
        match self {
            InputSpeedFilter::All => true,
            InputSpeedFilter::Only(speed) => combination.input_speed() == *speed
        }
    }
}

impl Display for InputSpeedFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSpeedFilter::All => write!(f, "all"),
            InputSpeedFilter::Only(speed) => write!(f, "{}", speed)
        }
    }
}

impl FromStr for InputSpeedFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(InputSpeedFilter::All);
        }
        trimmed.parse::<f64>()
            .map(InputSpeedFilter::Only)
            .map_err(|_| Error::invalid_input(format!("'{}' is not an input speed or 'all'", s)))
    }
}

/// One page of a filtered, sorted listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub items: Vec<GearCombination>,
    pub total_pages: usize
}

/// Page count for `count` items, never less than one.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    ceil_div(count, page_size.get()).max(1)
}

/// Filter then stably sort the data, preserving generation order for ties.
pub fn filter_and_sort(data: &[GearCombination],
                       filter: InputSpeedFilter,
                       sort_key: SortKey) -> Vec<GearCombination> {
    let mut filtered: Vec<GearCombination> = data.iter()
        .filter(|c| filter.matches(c))
        .copied()
        .collect();
    filtered.sort_by(|a, b| sort_key.compare(a, b));
    filtered
}

/// Return page `page` (1-based) of the filtered, sorted data.
///
/// Pages past the end, and page 0, come back empty rather than failing.
pub fn list(data: &[GearCombination],
            filter: InputSpeedFilter,
            sort_key: SortKey,
            page: usize,
            page_size: NonZeroUsize) -> Listing {
    let ordered = filter_and_sort(data, filter, sort_key);
    let total_pages = total_pages(ordered.len(), page_size);
    let items = match page.checked_sub(1) {
        None => Vec::new(),
        Some(page_idx) => ordered.into_iter()
            .skip(page_idx.saturating_mul(page_size.get()))
            .take(page_size.get())
            .collect()
    };
    debug!("Listing page {} of {} ({} items, filter {}, sort {})",
           page, total_pages, items.len(), filter, sort_key);
    Listing { items, total_pages }
}

/// Every combination whose output speed is strictly within `tolerance` of
/// the target, in data order. An empty result is a valid answer.
pub fn find_by_target_output(data: &[GearCombination],
                             target_output_speed: f64,
                             tolerance: f64) -> Result<Vec<GearCombination>> {
    if !is_positive_finite(target_output_speed) {
        return Err(Error::invalid_input(
            format!("target output speed must be a positive number, got {}", target_output_speed)));
    }
    let matches: Vec<GearCombination> = data.iter()
        .filter(|c| within_tolerance(c.output_speed(), target_output_speed, tolerance))
        .copied()
        .collect();
    debug!("{} combinations within {} of target {}", matches.len(), tolerance, target_output_speed);
    Ok(matches)
}

/// Read a target output speed from free text.
pub fn parse_target(text: &str) -> Result<f64> {
    match parse_leading_float(text) {
        Some(target) if is_positive_finite(target) => Ok(target),
        _ => Err(Error::invalid_input(format!("'{}' is not a valid target speed", text.trim())))
    }
}
