// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=yardstick_scale --heading-base-level=0

//! Yardstick Scale: a headless coordinate engine for on-screen rulers.
//!
//! The engine turns a handful of display settings into tick geometry, and
//! converts between on-screen pixels and physical distances. It draws
//! nothing: callers stroke [`Tick::line`] and print [`Tick::label`] with
//! whatever renderer they use.
//!
//! The layout is a composition of independent strategies:
//! - [`ScaleDirection`]: where physical zero sits (leading edge, trailing
//!   edge, or the middle of the screen) and how tick counters map to physical
//!   indices.
//! - [`ScalePosition`]: which screen edge the ticks hang from.
//! - [`ScaleOrientation`]: whether the scale runs along the screen height or
//!   width.
//! - [`UnitSystem`](yardstick_units::UnitSystem) and
//!   [`CalibrationFactor`](yardstick_units::CalibrationFactor): the spacing
//!   between ticks.
//!
//! A [`ScaleEngine`] is built from a [`ScaleConfig`] and is immutable; rebuild
//! it whenever a setting changes. Bind it to a viewport with
//! [`ScaleEngine::layout`] to iterate ticks or compute the highlighted
//! [`MeasuredBand`]. [`MeasurementState`] keeps the measured span, display
//! borders and the endless-measurement total across rebuilds.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use yardstick_scale::{ScaleConfig, ScaleDirection, ScaleEngine, TickCategory};
//! use yardstick_units::DeviceDensity;
//!
//! let density = DeviceDensity::from_pixels_per_mm(10.0);
//! let config = ScaleConfig::default().with_direction(ScaleDirection::Top);
//! let engine = ScaleEngine::new(&config, density);
//!
//! let size = Size::new(700.0, 1400.0);
//! let layout = engine.layout(size);
//! assert_eq!(layout.visible_tick_count(), 140);
//!
//! let tick = layout.tick(10);
//! assert_eq!(tick.category, TickCategory::Major);
//! assert_eq!(tick.label, Some(1));
//!
//! // 25 mm are 250 device pixels on this display.
//! assert!((engine.distance_to_pixel(25.0) - 250.0).abs() < 1e-9);
//! assert!((engine.pixel_to_distance(250.0, 0.0) - 25.0).abs() < 1e-9);
//! ```
//!
//! ## Overflow
//!
//! When a measured span runs past the visible scale by more than one tick,
//! [`ScaleLayout::measured_band`] reports it to an [`OverflowSink`]. Overflow
//! is advisory; the band is still returned.
//!
//! This crate is `no_std`.

#![no_std]

mod band;
mod direction;
mod engine;
mod geometry;
mod measurement;
mod orientation;
mod position;
mod tick;

pub use band::{MeasuredBand, OverflowSink};
pub use direction::{DisplayRotation, ScaleDirection};
pub use engine::{ScaleConfig, ScaleEngine, ScaleLayout, Ticks};
pub use geometry::AxisPoint;
pub use measurement::{BorderEdge, DisplayBorder, EndlessAccumulator, MeasurementState};
pub use orientation::ScaleOrientation;
pub use position::ScalePosition;
pub use tick::{MAJOR_TICK_INTERVAL, MIDDLE_TICK_INTERVAL, Tick, TickCategory, TickStyle};
