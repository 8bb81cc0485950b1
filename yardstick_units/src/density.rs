// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::system::{UnitSystem, convert};

/// Millimetres in one inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Width of an ISO/IEC 7810 ID-1 card, in millimetres.
pub const CARD_WIDTH_MM: f64 = 53.98;

/// Nominal pixel density of a display.
///
/// Stored as device pixels per inch, matching what display metrics usually
/// report. Physical dimensions are derived from it the same way for every
/// unit system: a millimetre dimension is `value * ppi / 25.4`, an inch
/// dimension is `value * ppi`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceDensity {
    pixels_per_inch: f64,
}

impl DeviceDensity {
    /// Creates a density from device pixels per inch.
    #[must_use]
    pub const fn from_pixels_per_inch(pixels_per_inch: f64) -> Self {
        Self { pixels_per_inch }
    }

    /// Creates a density from device pixels per millimetre.
    #[must_use]
    pub fn from_pixels_per_mm(pixels_per_mm: f64) -> Self {
        Self::from_pixels_per_inch(pixels_per_mm * MM_PER_INCH)
    }

    /// Returns device pixels per inch.
    #[must_use]
    pub const fn pixels_per_inch(self) -> f64 {
        self.pixels_per_inch
    }

    /// Returns device pixels per millimetre, without any calibration.
    #[must_use]
    pub fn pixels_per_mm(self) -> f64 {
        self.mm_dimension(1.0)
    }

    /// Pixels covered by `value` millimetres.
    #[must_use]
    pub fn mm_dimension(self, value: f64) -> f64 {
        value * self.pixels_per_inch / MM_PER_INCH
    }

    /// Pixels covered by `value` inches.
    #[must_use]
    pub fn inch_dimension(self, value: f64) -> f64 {
        value * self.pixels_per_inch
    }
}

/// User correction applied to the nominal display density.
///
/// Displays rarely report their density exactly; the factor scales the
/// nominal unit-to-pixel ratio so that on-screen ticks line up with a real
/// ruler. The factor is always strictly positive: [`CalibrationFactor::new`]
/// coerces non-positive or non-finite input to `1.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct CalibrationFactor(f64);

impl CalibrationFactor {
    /// Smallest factor a user may select.
    pub const MIN: f64 = 0.5;
    /// Largest factor a user may select.
    pub const MAX: f64 = 3.0;
    /// The neutral factor.
    pub const IDENTITY: Self = Self(1.0);

    /// Creates a factor, coercing non-positive or non-finite values to `1.0`.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            Self::IDENTITY
        }
    }

    /// Creates a factor clamped into the user range `[MIN, MAX]`.
    ///
    /// Non-positive or non-finite values still coerce to `1.0` first.
    #[must_use]
    pub fn clamped(factor: f64) -> Self {
        Self(Self::new(factor).0.clamp(Self::MIN, Self::MAX))
    }

    /// Returns `true` if `factor` lies inside the user range.
    #[must_use]
    pub fn is_selectable(factor: f64) -> bool {
        (Self::MIN..=Self::MAX).contains(&factor)
    }

    /// Drag distance, in device pixels, that changes the factor by `1.0`.
    pub const DRAG_PIXELS_PER_STEP: f64 = 2000.0;

    /// Returns the raw factor.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// The factor after a calibration drag of `delta_px`.
    ///
    /// Positive deltas stretch the scale. The result is clamped into the user
    /// range, so repeated drags saturate at [`MIN`](Self::MIN) and
    /// [`MAX`](Self::MAX).
    #[must_use]
    pub fn adjusted_by_drag(self, delta_px: f64) -> Self {
        Self::clamped(self.0 + delta_px / Self::DRAG_PIXELS_PER_STEP)
    }
}

impl Default for CalibrationFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<f64> for CalibrationFactor {
    fn from(factor: f64) -> Self {
        Self::new(factor)
    }
}

/// A known length the user lines the scale up against while calibrating.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum CalibrationReference {
    /// Free calibration against an external ruler; nothing is highlighted.
    #[default]
    Ruler,
    /// The long edge of a payment or ID card.
    Card,
    /// A length the user entered, in native units of the active unit system.
    UserDefined(f64),
}

impl CalibrationReference {
    /// Length of the reference in native units of `unit_system`.
    ///
    /// User-defined lengths are already native and pass through unchanged;
    /// negative input is taken by magnitude.
    #[must_use]
    pub fn distance(self, unit_system: UnitSystem) -> f64 {
        match self {
            Self::Ruler => 0.0,
            Self::Card => convert(CARD_WIDTH_MM, UnitSystem::Metric, unit_system),
            Self::UserDefined(value) => value.abs(),
        }
    }

    /// Length of the reference in sub-units of `unit_system`.
    ///
    /// A card is 53.98 in metric and 21.25 in imperial sub-units.
    #[must_use]
    pub fn subunits(self, unit_system: UnitSystem) -> f64 {
        self.distance(unit_system) * f64::from(unit_system.subdivision())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn non_positive_factor_coerces_to_identity() {
        assert_eq!(CalibrationFactor::new(0.0), CalibrationFactor::IDENTITY);
        assert_eq!(CalibrationFactor::new(-2.0), CalibrationFactor::IDENTITY);
        assert_eq!(CalibrationFactor::new(f64::NAN), CalibrationFactor::IDENTITY);
        assert_eq!(CalibrationFactor::new(1.7).get(), 1.7);
    }

    #[test]
    fn clamped_factor_stays_in_user_range() {
        assert_eq!(CalibrationFactor::clamped(0.1).get(), CalibrationFactor::MIN);
        assert_eq!(CalibrationFactor::clamped(9.0).get(), CalibrationFactor::MAX);
        assert_eq!(CalibrationFactor::clamped(1.25).get(), 1.25);
        // Coercion happens before clamping.
        assert_eq!(CalibrationFactor::clamped(-1.0).get(), 1.0);
    }

    #[test]
    fn selectable_range_is_inclusive() {
        assert!(CalibrationFactor::is_selectable(0.5));
        assert!(CalibrationFactor::is_selectable(3.0));
        assert!(!CalibrationFactor::is_selectable(0.49));
        assert!(!CalibrationFactor::is_selectable(3.01));
    }

    #[test]
    fn drag_adjusts_factor_within_range() {
        let factor = CalibrationFactor::new(1.0);
        assert!((factor.adjusted_by_drag(200.0).get() - 1.1).abs() < 1e-12);
        assert!((factor.adjusted_by_drag(-400.0).get() - 0.8).abs() < 1e-12);

        // A long drag saturates instead of leaving the user range.
        assert_eq!(factor.adjusted_by_drag(10_000.0).get(), CalibrationFactor::MAX);
        assert_eq!(factor.adjusted_by_drag(-10_000.0).get(), CalibrationFactor::MIN);
        assert_eq!(
            CalibrationFactor::new(2.9).adjusted_by_drag(1000.0).get(),
            CalibrationFactor::MAX
        );
    }

    #[test]
    fn card_reference_is_the_same_length_in_every_system() {
        let card = CalibrationReference::Card;
        assert!((card.distance(UnitSystem::Metric) - 53.98).abs() < 1e-9);
        assert!((card.distance(UnitSystem::Imperial) - 53.98 / 25.4).abs() < 1e-9);
        assert!((card.subunits(UnitSystem::Metric) - 53.98).abs() < 1e-9);
        assert!((card.subunits(UnitSystem::Imperial) - 53.98 / 2.54).abs() < 1e-9);
        assert!(
            (UnitSystem::Ant.to_base(card.distance(UnitSystem::Ant)) - 53.98).abs() < 1e-9
        );
    }

    #[test]
    fn user_reference_scales_by_subdivision() {
        let reference = CalibrationReference::UserDefined(2.5);
        assert_eq!(reference.distance(UnitSystem::Imperial), 2.5);
        assert_eq!(reference.subunits(UnitSystem::Imperial), 25.0);
        assert_eq!(reference.subunits(UnitSystem::Metric), 2.5);
        assert_eq!(CalibrationReference::UserDefined(-4.0).distance(UnitSystem::Metric), 4.0);
        assert_eq!(CalibrationReference::Ruler.subunits(UnitSystem::Ant), 0.0);
    }

    #[test]
    fn density_dimensions() {
        let density = DeviceDensity::from_pixels_per_inch(254.0);
        assert!((density.pixels_per_mm() - 10.0).abs() < 1e-9);
        assert!((density.mm_dimension(2.5) - 25.0).abs() < 1e-9);
        assert_eq!(density.inch_dimension(2.0), 508.0);

        let density = DeviceDensity::from_pixels_per_mm(100.0);
        assert!((density.pixels_per_inch() - 2540.0).abs() < 1e-9);
    }
}
