// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

/// Tuning of a [`MotionDebounce`](crate::MotionDebounce).
///
/// The detector uses these values as given. Validation is the caller's job:
/// use [`MotionSettings::clamped`] for values coming from a user control and
/// [`MotionSettings::from_stored`] for values read back from storage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSettings {
    /// Acceleration, per in-plane axis, above which the device counts as
    /// moving. Lower is more sensitive.
    pub sensitivity: f64,
    /// How long acceleration must stay below `sensitivity` before a motion
    /// episode commits, in milliseconds.
    pub settling_time_ms: u64,
}

impl MotionSettings {
    /// Sensitivity values a user may select.
    pub const SENSITIVITY_RANGE: RangeInclusive<f64> = 0.3..=0.7;
    /// Settling times a user may select, in milliseconds.
    pub const SETTLING_TIME_RANGE_MS: RangeInclusive<u64> = 500..=5000;
    /// Sensitivity used when nothing valid is configured.
    pub const DEFAULT_SENSITIVITY: f64 = 0.5;
    /// Settling time used when nothing valid is configured.
    pub const DEFAULT_SETTLING_TIME_MS: u64 = 1000;

    /// Creates settings without any validation.
    #[must_use]
    pub const fn new(sensitivity: f64, settling_time_ms: u64) -> Self {
        Self {
            sensitivity,
            settling_time_ms,
        }
    }

    /// Sets the sensitivity.
    #[must_use]
    pub const fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Sets the settling time in milliseconds.
    #[must_use]
    pub const fn with_settling_time_ms(mut self, settling_time_ms: u64) -> Self {
        self.settling_time_ms = settling_time_ms;
        self
    }

    /// Clamps both values into their user ranges.
    ///
    /// A non-finite sensitivity falls back to the default.
    #[must_use]
    pub fn clamped(self) -> Self {
        let sensitivity = if self.sensitivity.is_finite() {
            self.sensitivity.clamp(
                *Self::SENSITIVITY_RANGE.start(),
                *Self::SENSITIVITY_RANGE.end(),
            )
        } else {
            Self::DEFAULT_SENSITIVITY
        };
        let settling_time_ms = self.settling_time_ms.clamp(
            *Self::SETTLING_TIME_RANGE_MS.start(),
            *Self::SETTLING_TIME_RANGE_MS.end(),
        );
        Self::new(sensitivity, settling_time_ms)
    }

    /// Builds settings from persisted values.
    ///
    /// A stored sensitivity that is not positive, or a settling time below the
    /// minimum, means "never configured" and falls back to the default.
    #[must_use]
    pub fn from_stored(sensitivity: f64, settling_time_ms: u64) -> Self {
        let sensitivity = if sensitivity > 0.0 {
            sensitivity
        } else {
            Self::DEFAULT_SENSITIVITY
        };
        let settling_time_ms = if settling_time_ms >= *Self::SETTLING_TIME_RANGE_MS.start() {
            settling_time_ms
        } else {
            Self::DEFAULT_SETTLING_TIME_MS
        };
        Self::new(sensitivity, settling_time_ms)
    }
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SENSITIVITY, Self::DEFAULT_SETTLING_TIME_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = MotionSettings::default();
        assert_eq!(settings.sensitivity, 0.5);
        assert_eq!(settings.settling_time_ms, 1000);
    }

    #[test]
    fn clamped_keeps_values_in_user_ranges() {
        let low = MotionSettings::new(0.1, 20).clamped();
        assert_eq!(low, MotionSettings::new(0.3, 500));

        let high = MotionSettings::new(2.0, 60_000).clamped();
        assert_eq!(high, MotionSettings::new(0.7, 5000));

        let inside = MotionSettings::new(0.45, 1500).clamped();
        assert_eq!(inside, MotionSettings::new(0.45, 1500));

        let nan = MotionSettings::new(f64::NAN, 1500).clamped();
        assert_eq!(nan.sensitivity, MotionSettings::DEFAULT_SENSITIVITY);
    }

    #[test]
    fn stored_values_fall_back_when_unset() {
        assert_eq!(MotionSettings::from_stored(0.0, 0), MotionSettings::default());
        assert_eq!(
            MotionSettings::from_stored(0.6, 499),
            MotionSettings::new(0.6, 1000)
        );
        // Stored values are otherwise taken as they are.
        assert_eq!(
            MotionSettings::from_stored(0.9, 9000),
            MotionSettings::new(0.9, 9000)
        );
    }

    #[test]
    fn builders() {
        let settings = MotionSettings::default()
            .with_sensitivity(0.35)
            .with_settling_time_ms(750);
        assert_eq!(settings, MotionSettings::new(0.35, 750));
    }
}
