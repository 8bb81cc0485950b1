// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The highlighted measured region of a scale, and the overflow advisory.

/// Receives the advisory raised when a measured span no longer fits on the
/// visible scale.
///
/// Overflow is not an error: the band is still computed, and the sink lets the
/// caller decide how to react (for example by warning the user). Any
/// `FnMut(f64, f64)` closure is a sink.
pub trait OverflowSink {
    /// Called with the measured span and the visible scale length, both in
    /// device pixels.
    fn overflow(&mut self, measured_px: f64, scale_length_px: f64);
}

impl<F: FnMut(f64, f64)> OverflowSink for F {
    fn overflow(&mut self, measured_px: f64, scale_length_px: f64) {
        self(measured_px, scale_length_px);
    }
}

/// The along-axis pixel range covered by the current measurement.
///
/// Produced by [`ScaleLayout::measured_band`](crate::ScaleLayout::measured_band).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasuredBand {
    /// Start of the band along the scale, in device pixels.
    pub start: f64,
    /// End of the band along the scale, in device pixels.
    pub end: f64,
    /// Set when the band is anchored at the far screen edge, in which case
    /// every position past `start` belongs to it.
    pub open_end: bool,
}

impl MeasuredBand {
    /// Length of the band in device pixels.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if a tick at `along` lies inside the measurement.
    #[must_use]
    pub fn contains(&self, along: f64) -> bool {
        along >= self.start && (self.open_end || along < self.end)
    }
}
