//! Randomized service time windows.
//!
//! Windows are kept as minute offsets from midnight and rendered as
//! `HH:MM:SS` only when they leave the crate.

use std::fmt;

use rand::Rng;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::FixtureError;

/// Earliest window bound (07:00).
pub const DAY_START_MINUTES: u32 = 7 * 60;

/// Latest window bound (22:00).
pub const DAY_END_MINUTES: u32 = 22 * 60;

/// How many independent delivery windows are drawn before falling back to a
/// window sampled directly after the pickup start.
pub const MAX_DELIVERY_WINDOW_ATTEMPTS: usize = 64;

/// A `[start, end]` window within the working day, minute-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    start: u32,
    end: u32,
}

impl TimeWindow {
    pub fn new(start: u32, end: u32) -> Result<Self, FixtureError> {
        if start > end || start < DAY_START_MINUTES || end > DAY_END_MINUTES {
            return Err(FixtureError::InvalidTimeWindow { start, end });
        }

        Ok(Self { start, end })
    }

    /// Draws a window anywhere in the working day.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_from(rng, DAY_START_MINUTES)
    }

    /// Draws a window whose start is not earlier than `earliest`.
    ///
    /// `earliest` is clamped into the working day.
    pub fn random_from<R: Rng + ?Sized>(rng: &mut R, earliest: u32) -> Self {
        let earliest = earliest.clamp(DAY_START_MINUTES, DAY_END_MINUTES);
        let start = rng.gen_range(earliest..=DAY_END_MINUTES);
        let end = rng.gen_range(start..=DAY_END_MINUTES);

        Self { start, end }
    }

    /// Draws a delivery window that does not start before the pickup window.
    ///
    /// Independent windows are redrawn until one starts at or after the pickup
    /// start. When the pickup starts close to the end of the day that can take
    /// a long time, so after `MAX_DELIVERY_WINDOW_ATTEMPTS` the start is drawn
    /// from `[pickup.start, 22:00]` instead.
    pub fn random_delivery<R: Rng + ?Sized>(rng: &mut R, pickup: &TimeWindow) -> Self {
        for _ in 0..MAX_DELIVERY_WINDOW_ATTEMPTS {
            let candidate = Self::random(rng);
            if candidate.start >= pickup.start {
                return candidate;
            }
        }

        tracing::debug!(pickup_start = %format_minutes(pickup.start), "delivery window retries exhausted");
        Self::random_from(rng, pickup.start)
    }

    /// Start in minutes from midnight.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// End in minutes from midnight.
    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn start_label(&self) -> String {
        format_minutes(self.start)
    }

    pub fn end_label(&self) -> String {
        format_minutes(self.end)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_label(), self.end_label())
    }
}

/// Serializes as `["HH:MM:SS", "HH:MM:SS"]`.
impl Serialize for TimeWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.start_label())?;
        seq.serialize_element(&self.end_label())?;
        seq.end()
    }
}

fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}:00", minutes / 60, minutes % 60)
}
