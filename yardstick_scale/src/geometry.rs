// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, Sub};

/// A point expressed relative to the scale rather than the screen.
///
/// `along` runs in the direction the scale grows (device height in portrait),
/// `across` runs perpendicular to it, from the edge the ticks are drawn on.
/// [`ScaleOrientation::to_screen`](crate::ScaleOrientation::to_screen) maps it
/// onto concrete screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AxisPoint {
    /// Coordinate along the scale, in device pixels.
    pub along: f64,
    /// Coordinate across the scale, in device pixels.
    pub across: f64,
}

impl AxisPoint {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point from its along and across coordinates.
    #[must_use]
    pub const fn new(along: f64, across: f64) -> Self {
        Self { along, across }
    }
}

impl Add for AxisPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.along + rhs.along, self.across + rhs.across)
    }
}

impl Sub for AxisPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.along - rhs.along, self.across - rhs.across)
    }
}
