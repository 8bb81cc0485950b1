// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::geometry::AxisPoint;

/// Screen orientation the scale is laid out in.
///
/// Orientation only decides which screen axis is "along" the scale; all
/// direction and position math is written once in [`AxisPoint`] terms and
/// reused for both orientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScaleOrientation {
    /// The scale runs along the screen height.
    #[default]
    Portrait,
    /// The scale runs along the screen width.
    Landscape,
}

impl ScaleOrientation {
    /// Returns [`Landscape`](Self::Landscape) when `landscape` is set.
    #[must_use]
    pub const fn from_landscape(landscape: bool) -> Self {
        if landscape {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Length of the screen axis the scale runs along.
    #[must_use]
    pub fn along_length(self, size: Size) -> f64 {
        match self {
            Self::Portrait => size.height,
            Self::Landscape => size.width,
        }
    }

    /// Length of the screen axis perpendicular to the scale.
    #[must_use]
    pub fn across_length(self, size: Size) -> f64 {
        match self {
            Self::Portrait => size.width,
            Self::Landscape => size.height,
        }
    }

    /// Maps a scale-relative point onto screen coordinates.
    #[must_use]
    pub fn to_screen(self, point: AxisPoint) -> Point {
        match self {
            Self::Portrait => Point::new(point.across, point.along),
            Self::Landscape => Point::new(point.along, point.across),
        }
    }

    /// Maps a scale-relative offset onto a screen-space vector.
    #[must_use]
    pub fn to_screen_vec(self, offset: AxisPoint) -> Vec2 {
        self.to_screen(offset).to_vec2()
    }

    /// Maps a screen point back into scale-relative coordinates.
    #[must_use]
    pub fn to_axis(self, point: Point) -> AxisPoint {
        match self {
            Self::Portrait => AxisPoint::new(point.y, point.x),
            Self::Landscape => AxisPoint::new(point.x, point.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_keeps_axes() {
        let size = Size::new(400.0, 800.0);
        let o = ScaleOrientation::Portrait;
        assert_eq!(o.along_length(size), 800.0);
        assert_eq!(o.across_length(size), 400.0);
        assert_eq!(o.to_screen(AxisPoint::new(10.0, 3.0)), Point::new(3.0, 10.0));
    }

    #[test]
    fn landscape_swaps_axes() {
        let size = Size::new(800.0, 400.0);
        let o = ScaleOrientation::from_landscape(true);
        assert_eq!(o, ScaleOrientation::Landscape);
        assert_eq!(o.along_length(size), 800.0);
        assert_eq!(o.across_length(size), 400.0);
        assert_eq!(o.to_screen(AxisPoint::new(10.0, 3.0)), Point::new(10.0, 3.0));
        assert_eq!(o.to_screen_vec(AxisPoint::new(1.0, 2.0)), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn to_axis_inverts_to_screen() {
        let p = AxisPoint::new(12.5, -4.0);
        for o in [ScaleOrientation::Portrait, ScaleOrientation::Landscape] {
            assert_eq!(o.to_axis(o.to_screen(p)), p);
        }
    }
}
