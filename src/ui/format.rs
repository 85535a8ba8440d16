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

pub fn ratio_label(ratio: f64) -> String {
    format!("{:.2}:1", ratio)
}

pub fn rpm_label(speed: f64) -> String {
    format!("{:.1} RPM", speed)
}

/// Table input speeds are shown as given, e.g. `600 RPM`
pub fn input_rpm_label(speed: f64) -> String {
    format!("{} RPM", speed)
}

pub fn teeth_label(teeth: f64) -> String {
    format!("{}T", teeth)
}

pub fn factor_label(factor: f64) -> String {
    format!("{:.2}x", factor)
}

pub fn page_indicator(page: usize, total_pages: usize) -> String {
    format!("Page {} of {}", page, total_pages)
}

#[cfg(test)]
mod tests {
    use crate::ui::format::{factor_label, input_rpm_label, page_indicator, ratio_label, rpm_label, teeth_label};

    #[test]
    fn labels() {
        assert_eq!(ratio_label(2.0), "2.00:1");
        assert_eq!(ratio_label(80.0 / 12.0), "6.67:1");
        assert_eq!(rpm_label(100.0), "100.0 RPM");
        assert_eq!(rpm_label(1000.0 / 3.0), "333.3 RPM");
        assert_eq!(input_rpm_label(600.0), "600 RPM");
        assert_eq!(input_rpm_label(150.5), "150.5 RPM");
        assert_eq!(teeth_label(24.0), "24T");
        assert_eq!(factor_label(0.5), "0.50x");
        assert_eq!(page_indicator(3, 15), "Page 3 of 15");
    }
}
