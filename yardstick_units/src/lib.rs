// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=yardstick_units --heading-base-level=0

//! Yardstick Units: unit systems and device density for on-screen rulers.
//!
//! This crate holds the leaf pieces every other Yardstick crate builds on:
//! - [`UnitSystem`]: the closed set of unit systems a ruler can display
//!   (millimetres, inches and the calibrated "ant" unit), their conversion to a
//!   common base unit (millimetres), and their rendering metadata.
//! - [`DeviceDensity`]: the nominal pixel density reported by the display.
//! - [`CalibrationFactor`]: the user correction applied on top of the nominal
//!   density.
//! - [`CalibrationReference`]: a known length, such as a card, to calibrate
//!   against.
//!
//! Distances are plain `f64` values expressed in a unit system's *native*
//! unit (for example inches for [`UnitSystem::Imperial`]). Each unit system
//! also defines a *sub-unit*: the spacing between two adjacent ticks, which
//! is one native unit divided by [`UnitSystem::subdivision`].
//!
//! ## Minimal example
//!
//! ```rust
//! use yardstick_units::{CalibrationFactor, DeviceDensity, UnitSystem, convert};
//!
//! // 50 mm expressed in inches and back.
//! let inches = convert(50.0, UnitSystem::Metric, UnitSystem::Imperial);
//! assert!((inches - 50.0 / 25.4).abs() < 1e-9);
//! assert!((convert(inches, UnitSystem::Imperial, UnitSystem::Metric) - 50.0).abs() < 1e-9);
//!
//! // Pixels covered by one millimetre on a 100 px/mm display.
//! let density = DeviceDensity::from_pixels_per_mm(100.0);
//! let px = UnitSystem::Metric.pixels_per_unit(CalibrationFactor::default(), density);
//! assert!((px - 100.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod density;
mod system;

pub use density::{
    CARD_WIDTH_MM, CalibrationFactor, CalibrationReference, DeviceDensity, MM_PER_INCH,
};
pub use system::{FormattedDistance, PrintFormat, UnitSystem, UnknownUnitError, convert};
