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

//! Lenient number parsing for free-form text fields.
//!
//! Both functions skip leading whitespace and read the longest numeric prefix,
//! ignoring anything after it, so `"24T"` reads as 24 and `"1.5 RPM"` as 1.5.
//! They return `None` only when no digits lead the string.

fn skip_sign(bytes: &[u8], pos: usize) -> usize {
    match bytes.get(pos) {
        Some(b'+') | Some(b'-') => pos + 1,
        _ => pos
    }
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

pub fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = skip_sign(bytes, 0);
    let int_end = skip_digits(bytes, end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digit_count += frac_end - (end + 1);
        if digit_count > 0 {
            end = frac_end;
        }
    }
    if digit_count == 0 {
        return None;
    }

    if let Some(b'e') | Some(b'E') = bytes.get(end) {
        let exp_start = skip_sign(bytes, end + 1);
        let exp_end = skip_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    trimmed[..end].parse::<f64>().ok()
}

/// Whole-number prefix as an `f64`, so digit runs too long for any integer
/// type still read as their (rounded) value instead of failing.
pub fn parse_leading_int(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let digits_start = skip_sign(bytes, 0);
    let end = skip_digits(bytes, digits_start);
    if end == digits_start {
        return None;
    }
    trimmed[..end].parse::<f64>().ok()
}
