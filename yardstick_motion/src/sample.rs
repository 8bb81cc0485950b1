// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// One linear-acceleration reading in the screen plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    /// Monotonic timestamp in milliseconds.
    pub timestamp_ms: u64,
    /// Acceleration along the two axes orthogonal to gravity.
    pub acceleration: Vec2,
}

impl MotionSample {
    /// Creates a sample from its in-plane acceleration.
    #[must_use]
    pub const fn new(timestamp_ms: u64, acceleration: Vec2) -> Self {
        Self {
            timestamp_ms,
            acceleration,
        }
    }

    /// Creates a sample from a three-axis sensor reading.
    ///
    /// The device lies flat while measuring, so `z` is aligned with gravity
    /// and is dropped.
    #[must_use]
    pub const fn from_xyz(timestamp_ms: u64, x: f64, y: f64, _z: f64) -> Self {
        Self::new(timestamp_ms, Vec2::new(x, y))
    }

    /// Returns `true` if either in-plane axis exceeds `sensitivity`.
    #[must_use]
    pub fn exceeds(&self, sensitivity: f64) -> bool {
        self.acceleration.x.abs() > sensitivity || self.acceleration.y.abs() > sensitivity
    }
}
