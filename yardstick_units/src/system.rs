// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::density::{CalibrationFactor, DeviceDensity, MM_PER_INCH};

/// Base-unit ratio of the "ant" unit: one ant is 12 mm.
const ANT_RATIO: f64 = 12.0;

/// The unit system a ruler is displayed in.
///
/// Every system converts to and from a common base unit (millimetres), which
/// is how values are re-expressed when the user switches systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    /// Millimetres; ticks every millimetre.
    #[default]
    Metric,
    /// Inches; ticks every tenth of an inch.
    Imperial,
    /// The calibrated "ant" unit (12 mm); ticks every tenth of an ant.
    Ant,
}

impl UnitSystem {
    /// All unit systems, in display order.
    pub const ALL: [Self; 3] = [Self::Metric, Self::Imperial, Self::Ant];

    /// Base units (millimetres) per native unit.
    #[must_use]
    pub const fn base_ratio(self) -> f64 {
        match self {
            Self::Metric => 1.0,
            Self::Imperial => MM_PER_INCH,
            Self::Ant => ANT_RATIO,
        }
    }

    /// Converts a native value into base units.
    #[must_use]
    pub fn to_base(self, native: f64) -> f64 {
        native * self.base_ratio()
    }

    /// Converts a base-unit value into this system's native unit.
    #[must_use]
    pub fn from_base(self, base: f64) -> f64 {
        base / self.base_ratio()
    }

    /// Number of sub-units (ticks) that make up one native unit.
    #[must_use]
    pub const fn subdivision(self) -> u32 {
        match self {
            Self::Metric => 1,
            Self::Imperial | Self::Ant => 10,
        }
    }

    /// How values in this system are printed.
    #[must_use]
    pub const fn print_format(self) -> PrintFormat {
        match self {
            Self::Metric => PrintFormat { decimals: 0 },
            Self::Imperial | Self::Ant => PrintFormat { decimals: 1 },
        }
    }

    /// The unit symbol, also used as the persisted identifier.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "in",
            Self::Ant => "ant",
        }
    }

    /// Parses a unit symbol, falling back to [`UnitSystem::Metric`] for
    /// anything unknown.
    #[must_use]
    pub fn from_symbol_or_default(symbol: &str) -> Self {
        symbol.parse().unwrap_or_default()
    }

    /// Device pixels covered by one native unit.
    ///
    /// The ant unit is derived from the inch dimension scaled by `12 / 25.4`.
    #[must_use]
    pub fn pixels_per_unit(self, calibration: CalibrationFactor, density: DeviceDensity) -> f64 {
        let factor = calibration.get();
        match self {
            Self::Metric => density.mm_dimension(factor),
            Self::Imperial => density.inch_dimension(factor),
            Self::Ant => density.inch_dimension(factor) * (1.0 / (MM_PER_INCH / ANT_RATIO)),
        }
    }

    /// Device pixels covered by one sub-unit, i.e. the spacing between ticks.
    #[must_use]
    pub fn pixels_per_subunit(self, calibration: CalibrationFactor, density: DeviceDensity) -> f64 {
        self.pixels_per_unit(calibration, density) / f64::from(self.subdivision())
    }

    /// Native units covered by one device pixel.
    #[must_use]
    pub fn native_units_per_display_pixel(
        self,
        calibration: CalibrationFactor,
        density: DeviceDensity,
    ) -> f64 {
        1.0 / self.pixels_per_unit(calibration, density)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitSystem {
    type Err = UnknownUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|system| system.symbol() == s)
            .ok_or(UnknownUnitError)
    }
}

/// Converts `value` from one unit system to another through the base unit.
#[must_use]
pub fn convert(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return value;
    }
    to.from_base(from.to_base(value))
}

/// Error returned when parsing an unknown unit symbol.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct UnknownUnitError;

impl fmt::Debug for UnknownUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnknownUnitError")
    }
}

impl fmt::Display for UnknownUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown unit symbol, expected one of `mm`, `in` or `ant`")
    }
}

impl core::error::Error for UnknownUnitError {}

/// Number formatting used when printing distances of a unit system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrintFormat {
    /// Digits after the decimal point.
    pub decimals: u8,
}

impl PrintFormat {
    /// Wraps `value` for display with this format.
    #[must_use]
    pub fn display(self, value: f64) -> FormattedDistance {
        FormattedDistance {
            value,
            decimals: self.decimals,
        }
    }
}

/// A distance ready to be printed; see [`PrintFormat::display`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormattedDistance {
    value: f64,
    decimals: u8,
}

impl fmt::Display for FormattedDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", usize::from(self.decimals), self.value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn base_round_trip_for_every_system() {
        for system in UnitSystem::ALL {
            for value in [0.0, 0.1, 1.0, 12.5, 1234.567] {
                let back = system.from_base(system.to_base(value));
                assert!((back - value).abs() < 1e-9, "{system}: {value} -> {back}");
            }
        }
    }

    #[test]
    fn subdivision_and_format() {
        assert_eq!(UnitSystem::Metric.subdivision(), 1);
        assert_eq!(UnitSystem::Imperial.subdivision(), 10);
        assert_eq!(UnitSystem::Ant.subdivision(), 10);
        assert_eq!(UnitSystem::Metric.print_format().decimals, 0);
        assert_eq!(UnitSystem::Imperial.print_format().decimals, 1);
        assert_eq!(UnitSystem::Ant.print_format().decimals, 1);
    }

    #[test]
    fn symbols_parse_back() {
        for system in UnitSystem::ALL {
            assert_eq!(system.symbol().parse::<UnitSystem>(), Ok(system));
            assert_eq!(system.to_string(), system.symbol());
        }
        assert_eq!("cm".parse::<UnitSystem>(), Err(UnknownUnitError));
        assert_eq!(UnitSystem::from_symbol_or_default("cm"), UnitSystem::Metric);
        assert_eq!(UnitSystem::from_symbol_or_default("in"), UnitSystem::Imperial);
    }

    #[test]
    fn pixels_per_unit_follow_physical_dimensions() {
        let density = DeviceDensity::from_pixels_per_inch(254.0);
        let identity = CalibrationFactor::IDENTITY;

        let mm = UnitSystem::Metric.pixels_per_unit(identity, density);
        let inch = UnitSystem::Imperial.pixels_per_unit(identity, density);
        let ant = UnitSystem::Ant.pixels_per_unit(identity, density);

        assert!((mm - 10.0).abs() < 1e-9);
        assert!((inch - 254.0).abs() < 1e-9);
        // One ant spans 12 mm.
        assert!((ant - 120.0).abs() < 1e-9);

        let sub = UnitSystem::Imperial.pixels_per_subunit(identity, density);
        assert!((sub - 25.4).abs() < 1e-9);

        let doubled = UnitSystem::Metric.pixels_per_unit(CalibrationFactor::new(2.0), density);
        assert!((doubled - 20.0).abs() < 1e-9);

        let per_px = UnitSystem::Metric.native_units_per_display_pixel(identity, density);
        assert!((per_px - 0.1).abs() < 1e-12);
    }

    #[test]
    fn formatted_distance_uses_system_decimals() {
        let metric = UnitSystem::Metric.print_format().display(42.4);
        let imperial = UnitSystem::Imperial.print_format().display(1.968_503_9);
        assert_eq!(metric.to_string(), "42");
        assert_eq!(imperial.to_string(), "2.0");
    }

    #[test]
    fn convert_same_system_is_identity() {
        assert_eq!(convert(3.3, UnitSystem::Ant, UnitSystem::Ant), 3.3);
    }
}
