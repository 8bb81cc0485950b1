// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;
use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Size};
use yardstick_units::{CalibrationFactor, DeviceDensity, UnitSystem};

use crate::band::{MeasuredBand, OverflowSink};
use crate::direction::ScaleDirection;
use crate::geometry::AxisPoint;
use crate::orientation::ScaleOrientation;
use crate::position::ScalePosition;
use crate::tick::{MAJOR_TICK_INTERVAL, Tick, TickCategory, TickStyle};

/// Width of the highlighted measurement strip, in physical millimetres.
const BAND_WIDTH_MM: f64 = 8.0;

/// Construction parameters of a [`ScaleEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScaleConfig {
    /// Where physical zero sits.
    pub direction: ScaleDirection,
    /// Which edge the ticks are drawn on.
    pub position: ScalePosition,
    /// User calibration of the nominal density.
    pub calibration: CalibrationFactor,
    /// Distance, in native units, shown at the first tick.
    pub start_distance: f64,
    /// Unit system of all distances.
    pub unit_system: UnitSystem,
    /// Lay the scale out along the screen width.
    pub landscape: bool,
}

impl ScaleConfig {
    /// Sets the direction.
    #[must_use]
    pub fn with_direction(mut self, direction: ScaleDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the position.
    #[must_use]
    pub fn with_position(mut self, position: ScalePosition) -> Self {
        self.position = position;
        self
    }

    /// Sets the calibration factor; non-positive values coerce to `1.0`.
    #[must_use]
    pub fn with_calibration(mut self, calibration: impl Into<CalibrationFactor>) -> Self {
        self.calibration = calibration.into();
        self
    }

    /// Sets the start distance in native units.
    #[must_use]
    pub fn with_start_distance(mut self, start_distance: f64) -> Self {
        self.start_distance = start_distance;
        self
    }

    /// Sets the unit system.
    #[must_use]
    pub fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = unit_system;
        self
    }

    /// Sets the landscape flag.
    #[must_use]
    pub fn with_landscape(mut self, landscape: bool) -> Self {
        self.landscape = landscape;
        self
    }

    /// Replaces the calibration factor if `factor` is user-selectable.
    ///
    /// Returns `false` and leaves the factor untouched otherwise.
    pub fn set_calibration(&mut self, factor: f64) -> bool {
        if !CalibrationFactor::is_selectable(factor) {
            return false;
        }
        self.calibration = CalibrationFactor::new(factor);
        true
    }

    /// Adjusts the calibration factor by a drag along the scale.
    ///
    /// `start_along` is where the drag began and `axis_length` the scale
    /// length, both in device pixels; together with the direction they decide
    /// whether the drag stretches or shrinks the scale. Returns the new factor,
    /// which always stays inside the user range.
    pub fn calibrate_by_drag(
        &mut self,
        drag_px: f64,
        start_along: f64,
        axis_length: f64,
    ) -> CalibrationFactor {
        let stretch = self
            .direction
            .calibration_drag(drag_px, start_along, axis_length);
        self.calibration = self.calibration.adjusted_by_drag(stretch);
        self.calibration
    }
}

/// The scale coordinate engine.
///
/// Maps tick counters to physical indices and screen geometry, and converts
/// between distances and pixels. An engine is immutable: build a new one
/// whenever direction, position, calibration, unit system or orientation
/// changes.
#[derive(Clone, Copy, Debug)]
pub struct ScaleEngine {
    config: ScaleConfig,
    orientation: ScaleOrientation,
    density: DeviceDensity,
    start_subunits: f64,
    start_fraction: f64,
    dp_unit: f64,
    pixels_per_unit: f64,
}

impl ScaleEngine {
    /// Creates an engine for `config` on a display of the given density.
    #[must_use]
    pub fn new(config: &ScaleConfig, density: DeviceDensity) -> Self {
        let config = ScaleConfig {
            calibration: CalibrationFactor::new(config.calibration.get()),
            ..*config
        };
        let unit = config.unit_system;
        let start_subunits = config.start_distance * f64::from(unit.subdivision());
        Self {
            orientation: ScaleOrientation::from_landscape(config.landscape),
            density,
            start_subunits,
            start_fraction: start_subunits % 1.0,
            dp_unit: unit.pixels_per_subunit(config.calibration, density),
            pixels_per_unit: unit.pixels_per_unit(config.calibration, density),
            config,
        }
    }

    /// The configuration this engine was built from.
    #[must_use]
    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// The scale direction.
    #[must_use]
    pub fn direction(&self) -> ScaleDirection {
        self.config.direction
    }

    /// The scale position.
    #[must_use]
    pub fn position(&self) -> ScalePosition {
        self.config.position
    }

    /// The orientation derived from the landscape flag.
    #[must_use]
    pub fn orientation(&self) -> ScaleOrientation {
        self.orientation
    }

    /// The unit system.
    #[must_use]
    pub fn unit_system(&self) -> UnitSystem {
        self.config.unit_system
    }

    /// The display density.
    #[must_use]
    pub fn density(&self) -> DeviceDensity {
        self.density
    }

    /// Device pixels between two adjacent ticks.
    #[must_use]
    pub fn dp_unit(&self) -> f64 {
        self.dp_unit
    }

    /// Device pixels per native unit.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Length of the scale axis in device pixels.
    #[must_use]
    pub fn scale_length(&self, size: Size) -> f64 {
        self.orientation.along_length(size).max(0.0)
    }

    /// Number of ticks that fit along the scale axis.
    ///
    /// A zero-sized viewport yields zero ticks.
    #[must_use]
    pub fn visible_tick_count(&self, size: Size) -> usize {
        let count = (self.scale_length(size) / self.dp_unit).round();
        if !count.is_finite() || count <= 0.0 {
            return 0;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "count is rounded, finite and non-negative"
        )]
        let count = count as usize;
        count
    }

    /// Converts a distance in native units to device pixels.
    ///
    /// Uses the calibrated pixels per native unit
    /// ([`pixels_per_unit`](Self::pixels_per_unit)), not the per-sub-unit tick
    /// spacing [`dp_unit`](Self::dp_unit); the two differ by the unit
    /// system's subdivision.
    #[must_use]
    pub fn distance_to_pixel(&self, distance: f64) -> f64 {
        distance * self.pixels_per_unit
    }

    /// Converts device pixels to a distance in native units and adds
    /// `offset_distance`.
    ///
    /// Like [`distance_to_pixel`](Self::distance_to_pixel), the conversion
    /// goes through [`pixels_per_unit`](Self::pixels_per_unit) rather than
    /// the sub-unit spacing [`dp_unit`](Self::dp_unit). Negative results, for
    /// example from a drag overshoot, are reported as their absolute value.
    #[must_use]
    pub fn pixel_to_distance(&self, pixel: f64, offset_distance: f64) -> f64 {
        (pixel / self.pixels_per_unit + offset_distance).abs()
    }

    /// Resolves per-viewport values once so that ticks can be queried cheaply.
    #[must_use]
    pub fn layout(&self, size: Size) -> ScaleLayout<'_> {
        let scale_length = self.scale_length(size);
        ScaleLayout {
            engine: self,
            size,
            scale_length,
            visible_ticks: self.visible_tick_count(size),
            origin: self
                .config
                .direction
                .origin_offset(scale_length, self.dp_unit),
        }
    }

    /// Physical index of the tick drawn at `tick_counter`.
    #[must_use]
    pub fn tick_physical_index(&self, tick_counter: usize, size: Size) -> i64 {
        self.layout(size).tick_physical_index(tick_counter)
    }

    /// Length and stroke class of the tick drawn at `tick_counter`.
    #[must_use]
    pub fn tick_category(&self, tick_counter: usize, size: Size) -> TickCategory {
        self.layout(size).tick_category(tick_counter)
    }

    /// Geometry of the tick drawn at `tick_counter`.
    #[must_use]
    pub fn tick(&self, tick_counter: usize, size: Size) -> Tick {
        self.layout(size).tick(tick_counter)
    }

    /// Iterates over every tick visible in a viewport of `size`.
    #[must_use]
    pub fn ticks(&self, size: Size) -> Ticks<'_> {
        self.layout(size).ticks()
    }

    /// Whole-unit label of the tick drawn at `tick_counter`, if it has one.
    #[must_use]
    pub fn label_for(&self, tick_counter: usize, size: Size) -> Option<i64> {
        self.layout(size).label_for(tick_counter)
    }

    fn tick_style(&self, category: TickCategory) -> TickStyle {
        match category {
            TickCategory::Zero => self.config.direction.zero_tick_style(),
            other => other.style(),
        }
    }
}

/// A [`ScaleEngine`] bound to one viewport size.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLayout<'a> {
    engine: &'a ScaleEngine,
    size: Size,
    scale_length: f64,
    visible_ticks: usize,
    origin: AxisPoint,
}

impl<'a> ScaleLayout<'a> {
    /// Length of the scale axis in device pixels.
    #[must_use]
    pub fn scale_length(&self) -> f64 {
        self.scale_length
    }

    /// Number of ticks in this layout.
    #[must_use]
    pub fn visible_tick_count(&self) -> usize {
        self.visible_ticks
    }

    /// Translation applied to every tick, in scale-relative coordinates.
    #[must_use]
    pub fn origin_offset(&self) -> AxisPoint {
        self.origin
    }

    /// Physical index of the tick drawn at `tick_counter`.
    #[must_use]
    pub fn tick_physical_index(&self, tick_counter: usize) -> i64 {
        self.engine.config.direction.tick_physical_index(
            counter_to_i64(tick_counter),
            self.engine.start_subunits,
            self.visible_ticks,
        )
    }

    /// Length and stroke class of the tick drawn at `tick_counter`.
    #[must_use]
    pub fn tick_category(&self, tick_counter: usize) -> TickCategory {
        TickCategory::classify(self.tick_physical_index(tick_counter))
    }

    /// Along-axis pixel position of a tick, origin offset included.
    #[must_use]
    pub fn tick_along(&self, tick_counter: usize) -> f64 {
        self.raw_along(tick_counter) + self.origin.along
    }

    /// Geometry of the tick drawn at `tick_counter`.
    ///
    /// Composition order: along-axis position, across-axis start and end,
    /// mirroring for [`ScalePosition::Right`], orientation swap, and finally
    /// the direction's origin offset.
    #[must_use]
    pub fn tick(&self, tick_counter: usize) -> Tick {
        let engine = self.engine;
        let physical_index = self.tick_physical_index(tick_counter);
        let category = TickCategory::classify(physical_index);
        let style = engine.tick_style(category);
        let length = engine.density.mm_dimension(style.length_mm);

        let along = self.raw_along(tick_counter);
        let orientation = engine.orientation;
        let position = engine.config.position;
        let start = AxisPoint::new(along, position.start_across(orientation, self.size));
        let end = position.mirror_endpoint(orientation, self.size, AxisPoint::new(along, length));
        let origin = orientation.to_screen_vec(self.origin);

        Tick {
            counter: tick_counter,
            physical_index,
            category,
            length,
            stroke_width: style.stroke_width,
            start: orientation.to_screen(start) + origin,
            end: orientation.to_screen(end) + origin,
            label: self.label_for_index(physical_index),
        }
    }

    /// Whole-unit label of the tick drawn at `tick_counter`, if it has one.
    ///
    /// Labels sit on every whole display unit after zero; a center-anchored
    /// scale also labels its zero tick.
    #[must_use]
    pub fn label_for(&self, tick_counter: usize) -> Option<i64> {
        self.label_for_index(self.tick_physical_index(tick_counter))
    }

    /// Iterates over every visible tick in drawing order.
    #[must_use]
    pub fn ticks(&self) -> Ticks<'a> {
        Ticks {
            layout: *self,
            counters: 0..self.visible_ticks,
        }
    }

    /// Computes the highlighted band for a measurement of `measured_px`
    /// pixels, notifying `sink` if it exceeds the scale by more than one tick.
    pub fn measured_band(&self, measured_px: f64, sink: &mut impl OverflowSink) -> MeasuredBand {
        let length = self.scale_length;
        if length + self.engine.dp_unit < measured_px {
            sink.overflow(measured_px, length);
        }
        match self.engine.config.direction {
            ScaleDirection::Top => MeasuredBand {
                start: 0.0,
                end: measured_px,
                open_end: false,
            },
            ScaleDirection::Bottom => MeasuredBand {
                start: length - measured_px,
                end: length,
                open_end: true,
            },
            ScaleDirection::Center => {
                let start = length / 2.0 - measured_px / 2.0;
                MeasuredBand {
                    start,
                    end: start + measured_px,
                    open_end: false,
                }
            }
        }
    }

    /// Screen rectangle of the highlighted strip for `band`.
    #[must_use]
    pub fn band_rect(&self, band: &MeasuredBand) -> Rect {
        let engine = self.engine;
        let orientation = engine.orientation;
        let position = engine.config.position;
        let width = engine.density.mm_dimension(BAND_WIDTH_MM);
        let near = AxisPoint::new(band.start, position.start_across(orientation, self.size));
        let far = position.mirror_endpoint(orientation, self.size, AxisPoint::new(band.end, width));
        Rect::from_points(orientation.to_screen(near), orientation.to_screen(far))
    }

    fn raw_along(&self, tick_counter: usize) -> f64 {
        self.engine.config.direction.pixel_along(
            counter_to_i64(tick_counter),
            self.engine.dp_unit,
            self.engine.start_fraction,
            self.scale_length,
        )
    }

    fn label_for_index(&self, physical_index: i64) -> Option<i64> {
        let labelled = physical_index % MAJOR_TICK_INTERVAL == 0
            && (physical_index > 0 || self.engine.config.direction == ScaleDirection::Center);
        labelled.then_some(physical_index / MAJOR_TICK_INTERVAL)
    }
}

fn counter_to_i64(tick_counter: usize) -> i64 {
    i64::try_from(tick_counter).unwrap_or(i64::MAX)
}

/// Iterator over the ticks of a [`ScaleLayout`].
#[derive(Clone, Debug)]
pub struct Ticks<'a> {
    layout: ScaleLayout<'a>,
    counters: Range<usize>,
}

impl Iterator for Ticks<'_> {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        self.counters.next().map(|counter| self.layout.tick(counter))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.counters.size_hint()
    }
}

impl DoubleEndedIterator for Ticks<'_> {
    fn next_back(&mut self) -> Option<Tick> {
        self.counters
            .next_back()
            .map(|counter| self.layout.tick(counter))
    }
}

impl ExactSizeIterator for Ticks<'_> {}

impl FusedIterator for Ticks<'_> {}
