// ABOUTME: Rest-prescription parsing shared by program assembly and live sessions
// ABOUTME: Accepts second and minute notations like "90s", "60-75s", "2-3min"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Rest-prescription parsing.
//!
//! Prescriptions are stored as display strings ("90s", "2-3min"). The duration
//! estimator and the session timer need seconds; the lower bound of a range is
//! used because it drives the minimum session length.

/// Fallback when a prescription carries no parseable number.
pub const DEFAULT_REST_SECONDS: u32 = 60;

/// Parse a rest prescription into seconds.
///
/// Takes the first number in the string; a "min" suffix anywhere in the
/// prescription switches the unit to minutes. Unparseable input falls back to
/// [`DEFAULT_REST_SECONDS`].
#[must_use]
pub fn parse_rest_seconds(rest: &str) -> u32 {
    let Some(value) = first_number(rest) else {
        return DEFAULT_REST_SECONDS;
    };
    if rest.contains("min") {
        value * 60
    } else {
        value
    }
}

fn first_number(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_notation() {
        assert_eq!(parse_rest_seconds("90s"), 90);
        assert_eq!(parse_rest_seconds("60-75s"), 60);
        assert_eq!(parse_rest_seconds("30-45s"), 30);
    }

    #[test]
    fn minute_notation_uses_lower_bound() {
        assert_eq!(parse_rest_seconds("2-3min"), 120);
        assert_eq!(parse_rest_seconds("3-5min"), 180);
    }

    #[test]
    fn unparseable_falls_back_to_default() {
        assert_eq!(parse_rest_seconds("as needed"), DEFAULT_REST_SECONDS);
        assert_eq!(parse_rest_seconds(""), DEFAULT_REST_SECONDS);
    }
}
