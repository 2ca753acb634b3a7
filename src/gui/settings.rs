use std::{num::IntErrorKind, ops::RangeInclusive, time::Duration};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field} must be a whole number, got {input:?}")]
pub struct SettingsError {
    pub field: &'static str,
    pub input: String,
}

/// Grid size and simulation speed chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub step_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 50,
            height: 40,
            step_interval: Duration::from_millis(100),
        }
    }
}

impl Settings {
    pub const WIDTH_RANGE: RangeInclusive<u64> = 10..=200;
    pub const HEIGHT_RANGE: RangeInclusive<u64> = 10..=150;
    pub const STEP_INTERVAL_MS_RANGE: RangeInclusive<u64> = 1..=2000;

    /// Builds settings from raw values, clamping each one into its range.
    pub fn clamped(width: u64, height: u64, step_interval_ms: u64) -> Self {
        let clamp = |x: u64, r: RangeInclusive<u64>| x.clamp(*r.start(), *r.end());
        Self {
            width: clamp(width, Self::WIDTH_RANGE) as usize,
            height: clamp(height, Self::HEIGHT_RANGE) as usize,
            step_interval: Duration::from_millis(clamp(
                step_interval_ms,
                Self::STEP_INTERVAL_MS_RANGE,
            )),
        }
    }

    /// Parses the text of the settings fields.
    ///
    /// Negative numbers and numbers that do not fit into `i64` are clamped
    /// like any other out-of-range value.
    pub fn parse(width: &str, height: &str, step_interval_ms: &str) -> Result<Self, SettingsError> {
        let parse = |field: &'static str, input: &str| match input.trim().parse::<i64>() {
            Ok(x) => Ok(u64::try_from(x).unwrap_or(0)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(0),
            Err(_) => Err(SettingsError {
                field,
                input: input.to_string(),
            }),
        };
        Ok(Self::clamped(
            parse("width", width)?,
            parse("height", height)?,
            parse("speed", step_interval_ms)?,
        ))
    }

    pub fn step_interval_ms(&self) -> u128 {
        self.step_interval.as_millis()
    }
}
