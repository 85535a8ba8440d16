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

/// Number of `chunk`-sized pieces needed to hold `count` items.
/// A zero `chunk` is treated as a single chunk holding everything.
pub fn ceil_div(count: usize, chunk: usize) -> usize {
    if chunk == 0 {
        return if count == 0 { 0 } else { 1 };
    }
    count / chunk + usize::from(count % chunk != 0)
}

/// Strict absolute-tolerance comparison; values exactly `tolerance` apart don't match.
pub fn within_tolerance(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() < tolerance
}

pub fn is_positive_finite(val: f64) -> bool {
    val.is_finite() && val > 0.0
}

pub fn all_positive_finite(values: &[f64]) -> bool {
    values.iter().all(|v| is_positive_finite(*v))
}

#[cfg(test)]
mod tests {
    use crate::numeric::{all_positive_finite, ceil_div, is_positive_finite, within_tolerance};

    #[test]
    fn ceil_div_tests() {
        assert_eq!(ceil_div(0, 10), 0);
        assert_eq!(ceil_div(1, 10), 1);
        assert_eq!(ceil_div(10, 10), 1);
        assert_eq!(ceil_div(11, 10), 2);
        assert_eq!(ceil_div(49, 10), 5);
        assert_eq!(ceil_div(147, 10), 15);
        assert_eq!(ceil_div(5, 0), 1);
        assert_eq!(ceil_div(0, 0), 0);
        assert_eq!(ceil_div(147, usize::MAX), 1);
        assert_eq!(ceil_div(usize::MAX, usize::MAX), 1);
        assert_eq!(ceil_div(usize::MAX, 2), usize::MAX / 2 + 1);
    }

    #[test]
    fn tolerance_tests() {
        assert!(within_tolerance(100.0, 100.0, 0.1));
        assert!(within_tolerance(100.05, 100.0, 0.1));
        assert!(within_tolerance(99.95, 100.0, 0.1));
        assert!(!within_tolerance(100.5, 100.0, 0.1));
        assert!(!within_tolerance(100.0, 100.0, 0.0));
    }

    #[test]
    fn positivity_tests() {
        assert_eq!(is_positive_finite(1.0), true);
        assert_eq!(is_positive_finite(0.0), false);
        assert_eq!(is_positive_finite(-3.0), false);
        assert_eq!(is_positive_finite(f64::NAN), false);
        assert_eq!(is_positive_finite(f64::INFINITY), false);
        assert_eq!(all_positive_finite(&[12.0, 24.0, 80.0]), true);
        assert_eq!(all_positive_finite(&[12.0, 0.0]), false);
        assert_eq!(all_positive_finite(&[]), true);
    }
}
