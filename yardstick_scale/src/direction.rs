// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::geometry::AxisPoint;
use crate::tick::TickStyle;

/// Where physical position 0 sits on the scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScaleDirection {
    /// Zero at the leading screen edge, growing away from it.
    #[default]
    Top,
    /// Zero at the trailing screen edge, growing towards the leading edge.
    Bottom,
    /// Zero at the visual midpoint, growing symmetrically outwards.
    Center,
}

/// Rotation of the display relative to its natural orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DisplayRotation {
    /// Natural orientation.
    #[default]
    Deg0,
    /// Rotated a quarter turn.
    Deg90,
    /// Upside down.
    Deg180,
    /// Rotated three quarter turns.
    Deg270,
}

impl DisplayRotation {
    /// Returns `true` when the leading and trailing screen edges are swapped
    /// relative to the natural orientation.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        matches!(self, Self::Deg180 | Self::Deg270)
    }
}

impl ScaleDirection {
    /// The next direction in the Top → Bottom → Center cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Center,
            Self::Center => Self::Top,
        }
    }

    /// The direction to lay out for a rotated display.
    ///
    /// Inverted rotations swap [`Top`](Self::Top) and [`Bottom`](Self::Bottom)
    /// so that zero stays on the same physical device edge.
    #[must_use]
    pub const fn for_rotation(self, rotation: DisplayRotation) -> Self {
        if !rotation.is_inverted() {
            return self;
        }
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Center => Self::Center,
        }
    }

    /// Physical index of the tick drawn at `tick_counter`.
    ///
    /// `start_distance` is in sub-units and `visible_ticks` is the number of
    /// ticks the viewport holds. Top and Bottom shift by the start distance;
    /// Center counts outwards from the middle tick and ignores it.
    #[must_use]
    pub fn tick_physical_index(
        self,
        tick_counter: i64,
        start_distance: f64,
        visible_ticks: usize,
    ) -> i64 {
        match self {
            Self::Top | Self::Bottom => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "tick indices are bounded by the visible tick count plus the start distance"
                )]
                let index = (tick_counter as f64 + start_distance) as i64;
                index
            }
            Self::Center => {
                let mut display = i64::try_from(visible_ticks).unwrap_or(i64::MAX);
                if display % 2 != 0 {
                    display -= 1;
                }
                let center = display / 2;
                (center - tick_counter).abs()
            }
        }
    }

    /// Along-axis pixel position of the tick drawn at `tick_counter`, before
    /// the origin offset is applied.
    ///
    /// `start_fraction` is the fractional sub-unit part of the start distance.
    #[must_use]
    pub fn pixel_along(
        self,
        tick_counter: i64,
        dp_unit: f64,
        start_fraction: f64,
        axis_length: f64,
    ) -> f64 {
        let position = dp_unit * tick_counter as f64;
        let shift = start_fraction * dp_unit;
        match self {
            Self::Top | Self::Center => position - shift,
            Self::Bottom => axis_length - position + shift,
        }
    }

    /// Translation applied to every tick so that zero lines up with the
    /// intended screen location.
    ///
    /// Only [`Center`](Self::Center) translates: it splits the fractional
    /// remainder of the axis evenly on both ends and adds half a sub-unit when
    /// the visible tick count is odd, which puts the zero tick exactly in the
    /// middle.
    #[must_use]
    pub fn origin_offset(self, axis_length: f64, dp_unit: f64) -> AxisPoint {
        match self {
            Self::Top | Self::Bottom => AxisPoint::ZERO,
            Self::Center => {
                if dp_unit <= 0.0 {
                    return AxisPoint::ZERO;
                }
                let length_in_units = axis_length / dp_unit;
                let display_length = length_in_units.round();
                let odd = if display_length % 2.0 != 0.0 {
                    0.5 * dp_unit
                } else {
                    0.0
                };
                let remainder = length_in_units - display_length;
                AxisPoint::new((remainder / 2.0) * dp_unit + odd, 0.0)
            }
        }
    }

    /// Signed stretch of a calibration drag along the scale axis.
    ///
    /// Positive values mean the user pulled the scale away from its zero, so
    /// the calibration factor should grow. On a center-anchored scale the half
    /// that `start_along` lies in decides the sign. Pass the direction as laid
    /// out, i.e. after [`for_rotation`](Self::for_rotation).
    #[must_use]
    pub fn calibration_drag(self, drag_px: f64, start_along: f64, axis_length: f64) -> f64 {
        match self {
            Self::Top => drag_px,
            Self::Bottom => -drag_px,
            Self::Center => {
                if start_along < axis_length / 2.0 {
                    -drag_px
                } else {
                    drag_px
                }
            }
        }
    }

    /// Style of the tick at physical index 0.
    ///
    /// Top and Bottom keep their zero at the screen edge and draw it like any
    /// major tick; Center marks it with a longer, thicker tick.
    #[must_use]
    pub const fn zero_tick_style(self) -> TickStyle {
        match self {
            Self::Top | Self::Bottom => TickStyle::MAJOR,
            Self::Center => TickStyle::CENTER_ZERO,
        }
    }
}
