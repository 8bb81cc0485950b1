// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement state: the measured span, display borders and the endless
//! accumulator.
//!
//! ## Usage
//!
//! 1) Build a [`ScaleEngine`] for the current settings.
//! 2) Feed user input through [`MeasurementState::drag_by`] or
//!    [`MeasurementState::tap_at`]; read back
//!    [`MeasurementState::measured_distance`].
//! 3) In endless mode, call [`MeasurementState::update_viewport_span`] when the
//!    viewport changes and [`MeasurementState::commit_endless_step`] when the
//!    device has been moved to its next placement. Feed
//!    [`MeasurementState::scale_start_distance`] back into
//!    [`ScaleConfig::start_distance`](crate::ScaleConfig::start_distance).
//!
//! Every operation that takes an engine first adopts the engine's unit
//! system, re-expressing stored distances through
//! [`MeasurementState::switch_unit_system`], so a state is never read through
//! an engine of another unit.
//!
//! ```
//! use kurbo::Size;
//! use yardstick_scale::{MeasurementState, ScaleConfig, ScaleEngine};
//! use yardstick_units::{DeviceDensity, UnitSystem};
//!
//! let density = DeviceDensity::from_pixels_per_mm(10.0);
//! let size = Size::new(700.0, 1400.0);
//! let engine = ScaleEngine::new(&ScaleConfig::default(), density);
//!
//! let mut state = MeasurementState::new(UnitSystem::Metric);
//! state.set_endless_active(true);
//! state.update_viewport_span(&engine, size);
//! state.drag_by(&engine, 250.0, 0.0, size);
//!
//! // The device was moved once: 140 mm of screen plus the 25 mm on it.
//! state.commit_endless_step();
//! assert!((state.total_distance() - 165.0).abs() < 1e-6);
//! ```

use kurbo::Size;
use yardstick_units::{UnitSystem, convert};

use crate::direction::ScaleDirection;
use crate::engine::ScaleEngine;

/// Distance between the screen edges and the physical device edges.
///
/// Both values are in the native unit of the owning state's unit system.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DisplayBorder {
    /// Border at the leading edge.
    pub top: f64,
    /// Border at the trailing edge.
    pub bottom: f64,
}

impl DisplayBorder {
    /// Creates a border.
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Border on the edge a scale with `direction` starts from.
    #[must_use]
    pub fn for_direction(&self, direction: ScaleDirection) -> f64 {
        match direction {
            ScaleDirection::Top => self.top,
            ScaleDirection::Bottom => self.bottom,
            ScaleDirection::Center => 0.0,
        }
    }

    fn convert(self, from: UnitSystem, to: UnitSystem) -> Self {
        Self::new(convert(self.top, from, to), convert(self.bottom, from, to))
    }
}

/// A screen edge whose display border can be calibrated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderEdge {
    /// The leading edge, where a [`ScaleDirection::Top`] scale starts.
    Top,
    /// The trailing edge, where a [`ScaleDirection::Bottom`] scale starts.
    Bottom,
}

impl BorderEdge {
    /// Direction of a scale whose zero sits on this edge.
    #[must_use]
    pub const fn direction(self) -> ScaleDirection {
        match self {
            Self::Top => ScaleDirection::Top,
            Self::Bottom => ScaleDirection::Bottom,
        }
    }
}

/// Running total of an endless measurement.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct EndlessAccumulator {
    total: f64,
}

impl EndlessAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { total: 0.0 }
    }

    /// The accumulated distance.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Adds one placement worth of distance.
    pub fn commit(&mut self, span: f64) {
        self.total += span;
    }

    /// Overwrites the total; negative values become zero.
    pub fn set(&mut self, total: f64) {
        self.total = total.max(0.0);
    }

    /// Clears the total.
    pub fn reset(&mut self) {
        self.total = 0.0;
    }
}

/// The state a measuring screen keeps between engine rebuilds.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementState {
    unit_system: UnitSystem,
    border: DisplayBorder,
    border_active: bool,
    endless_active: bool,
    measured_px: f64,
    measured_distance: f64,
    viewport_span: f64,
    endless: EndlessAccumulator,
}

impl MeasurementState {
    /// Creates an empty state for `unit_system`.
    #[must_use]
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            border: DisplayBorder::default(),
            border_active: false,
            endless_active: false,
            measured_px: 0.0,
            measured_distance: 0.0,
            viewport_span: 0.0,
            endless: EndlessAccumulator::new(),
        }
    }

    /// The unit system all distances are expressed in.
    #[must_use]
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// The display border.
    #[must_use]
    pub fn border(&self) -> DisplayBorder {
        self.border
    }

    /// Sets the display border, in native units.
    pub fn set_border(&mut self, border: DisplayBorder) {
        self.border = border;
    }

    /// Returns `true` if measurements include the display border.
    #[must_use]
    pub fn is_border_active(&self) -> bool {
        self.border_active
    }

    /// Includes or excludes the display border from measurements.
    pub fn set_border_active(&mut self, active: bool) {
        self.border_active = active;
    }

    /// Returns `true` while endless measurement is on.
    #[must_use]
    pub fn is_endless_active(&self) -> bool {
        self.endless_active
    }

    /// Turns endless measurement on or off; turning it off clears the total.
    pub fn set_endless_active(&mut self, active: bool) {
        self.endless_active = active;
        if !active {
            self.endless.reset();
        }
    }

    /// Measured span on screen, in device pixels.
    #[must_use]
    pub fn measured_px(&self) -> f64 {
        self.measured_px
    }

    /// Measured distance on screen, border included, in native units.
    #[must_use]
    pub fn measured_distance(&self) -> f64 {
        self.measured_distance
    }

    /// Physical length of one device placement, in native units.
    #[must_use]
    pub fn viewport_span(&self) -> f64 {
        self.viewport_span
    }

    /// The endless accumulator.
    #[must_use]
    pub fn endless(&self) -> &EndlessAccumulator {
        &self.endless
    }

    /// Measured distance plus everything accumulated by endless steps.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.endless.total() + self.measured_distance
    }

    /// Start distance for the next [`ScaleConfig`](crate::ScaleConfig).
    #[must_use]
    pub fn scale_start_distance(&self) -> f64 {
        self.endless.total()
    }

    /// Border added to distances measured on a scale with `direction`.
    #[must_use]
    pub fn current_offset(&self, direction: ScaleDirection) -> f64 {
        if self.border_active {
            self.border.for_direction(direction)
        } else {
            0.0
        }
    }

    fn adopt_unit_system(&mut self, engine: &ScaleEngine) {
        self.switch_unit_system(engine.unit_system());
    }

    /// Extends or shrinks the measurement by a drag of `delta_px`.
    ///
    /// `start_along` is where the drag began along the scale axis; on a
    /// center-anchored scale it decides which half is being dragged, and the
    /// delta counts twice because both ends move. The result is clamped to the
    /// visible scale.
    pub fn drag_by(&mut self, engine: &ScaleEngine, delta_px: f64, start_along: f64, size: Size) {
        self.adopt_unit_system(engine);
        let length = engine.scale_length(size);
        let px = match engine.direction() {
            ScaleDirection::Top => self.measured_px + delta_px,
            ScaleDirection::Bottom => self.measured_px - delta_px,
            ScaleDirection::Center => {
                if start_along < length / 2.0 {
                    self.measured_px - delta_px * 2.0
                } else {
                    self.measured_px + delta_px * 2.0
                }
            }
        };
        self.measured_px = px.clamp(0.0, length);
        self.measured_distance = engine.pixel_to_distance(
            self.measured_px,
            self.current_offset(engine.direction()),
        );
    }

    /// Sets the measurement from a tap at `along_px` on the scale axis.
    pub fn tap_at(&mut self, engine: &ScaleEngine, along_px: f64, size: Size) {
        self.adopt_unit_system(engine);
        let length = engine.scale_length(size);
        let px = match engine.direction() {
            ScaleDirection::Top => along_px,
            ScaleDirection::Bottom => length - along_px,
            ScaleDirection::Center => (length / 2.0 - along_px) * 2.0,
        };
        self.measured_px = px.abs();
        self.measured_distance = engine.pixel_to_distance(
            self.measured_px,
            self.current_offset(engine.direction()),
        );
    }

    /// Sets the measured distance directly and clears the endless total.
    ///
    /// `distance` is in native units of the engine's unit system; negative
    /// values are taken by magnitude, like every other distance.
    pub fn set_measured_distance(&mut self, engine: &ScaleEngine, distance: f64) {
        self.adopt_unit_system(engine);
        let distance = distance.abs();
        let on_screen = distance - self.current_offset(engine.direction());
        self.measured_px = engine.distance_to_pixel(on_screen).abs();
        self.measured_distance = distance;
        self.endless.reset();
    }

    /// Clears the measurement, e.g. after a calibration change.
    pub fn reset(&mut self, engine: &ScaleEngine) {
        self.set_measured_distance(engine, 0.0);
    }

    /// Recomputes the physical length of one placement for a viewport.
    ///
    /// Both display borders are included when the border is active.
    pub fn update_viewport_span(&mut self, engine: &ScaleEngine, size: Size) {
        self.adopt_unit_system(engine);
        let borders = if self.border_active {
            self.border.top + self.border.bottom
        } else {
            0.0
        };
        self.viewport_span = engine.pixel_to_distance(engine.scale_length(size), borders);
    }

    /// Moves the display border of `edge` by a drag of `drag_px`.
    ///
    /// The edge is shown as an offset scale whose zero starts `border` before
    /// the screen edge, i.e. at a non-positive pixel offset. The drag moves that
    /// offset, which is clamped at the screen edge. Negate drags on an
    /// [inverted](crate::DisplayRotation::is_inverted) display. Returns the new
    /// border in native units.
    pub fn calibrate_border_by_drag(
        &mut self,
        engine: &ScaleEngine,
        edge: BorderEdge,
        drag_px: f64,
    ) -> f64 {
        self.adopt_unit_system(engine);
        let (border, drag) = match edge {
            BorderEdge::Top => (self.border.top, drag_px),
            BorderEdge::Bottom => (self.border.bottom, -drag_px),
        };
        let edge_offset_px = (drag - engine.distance_to_pixel(border.abs())).min(0.0);
        let border = engine.pixel_to_distance(edge_offset_px, 0.0);
        match edge {
            BorderEdge::Top => self.border.top = border,
            BorderEdge::Bottom => self.border.bottom = border,
        }
        border
    }

    /// Adds one viewport span to the endless total.
    ///
    /// Returns the new total, or `None` when endless measurement is off.
    pub fn commit_endless_step(&mut self) -> Option<f64> {
        if !self.endless_active {
            return None;
        }
        self.endless.commit(self.viewport_span);
        Some(self.endless.total())
    }

    /// Overwrites the endless total; negative values become zero.
    pub fn set_endless_step(&mut self, distance: f64) {
        self.endless.set(distance);
    }

    /// Re-expresses every stored distance in another unit system.
    ///
    /// The measured pixels are untouched: the physical span stays the same and
    /// only its numeric representation changes.
    pub fn switch_unit_system(&mut self, to: UnitSystem) {
        let from = self.unit_system;
        if from == to {
            return;
        }
        self.border = self.border.convert(from, to);
        self.measured_distance = convert(self.measured_distance, from, to);
        self.viewport_span = convert(self.viewport_span, from, to);
        self.endless.set(convert(self.endless.total(), from, to));
        self.unit_system = to;
    }
}
