// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point};

/// Physical tick spacing, in sub-units, between two major ticks.
pub const MAJOR_TICK_INTERVAL: i64 = 10;

/// Physical tick spacing, in sub-units, between two middle ticks.
pub const MIDDLE_TICK_INTERVAL: i64 = 5;

/// Length and stroke class of a tick.
///
/// The category is a pure function of the tick's physical index, so visual
/// tick rhythm does not depend on calibration or pixel position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickCategory {
    /// The tick at physical index 0.
    Zero,
    /// Every [`MAJOR_TICK_INTERVAL`] sub-units (one whole display unit).
    Major,
    /// Every [`MIDDLE_TICK_INTERVAL`] sub-units, between two major ticks.
    Middle,
    /// Every other sub-unit.
    Minor,
}

impl TickCategory {
    /// Classifies a physical index.
    #[must_use]
    pub const fn classify(physical_index: i64) -> Self {
        if physical_index == 0 {
            Self::Zero
        } else if physical_index % MAJOR_TICK_INTERVAL == 0 {
            Self::Major
        } else if physical_index % MIDDLE_TICK_INTERVAL == 0 {
            Self::Middle
        } else {
            Self::Minor
        }
    }

    /// Style of a non-zero category.
    ///
    /// [`Zero`](Self::Zero) depends on the scale direction; see
    /// [`ScaleDirection::zero_tick_style`](crate::ScaleDirection::zero_tick_style).
    /// It reports the major style here.
    #[must_use]
    pub const fn style(self) -> TickStyle {
        match self {
            Self::Zero | Self::Major => TickStyle::MAJOR,
            Self::Middle => TickStyle::MIDDLE,
            Self::Minor => TickStyle::MINOR,
        }
    }
}

/// Physical length and stroke width of a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStyle {
    /// Tick length in physical millimetres (uncalibrated device density).
    pub length_mm: f64,
    /// Stroke width in device pixels.
    pub stroke_width: f64,
}

impl TickStyle {
    /// Zero tick of a center-anchored scale.
    pub const CENTER_ZERO: Self = Self {
        length_mm: 10.0,
        stroke_width: 7.0,
    };
    /// Whole display units.
    pub const MAJOR: Self = Self {
        length_mm: 8.0,
        stroke_width: 5.0,
    };
    /// Half display units.
    pub const MIDDLE: Self = Self {
        length_mm: 5.0,
        stroke_width: 5.0,
    };
    /// Every other sub-unit.
    pub const MINOR: Self = Self {
        length_mm: 3.0,
        stroke_width: 3.0,
    };
}

/// A fully resolved tick, ready to be stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Position of the tick in drawing order, `0..visible_tick_count`.
    pub counter: usize,
    /// Physical index in sub-units, used for classification and labels.
    pub physical_index: i64,
    /// Length and stroke class.
    pub category: TickCategory,
    /// Tick length in device pixels.
    pub length: f64,
    /// Stroke width in device pixels.
    pub stroke_width: f64,
    /// Screen point on the scale edge.
    pub start: Point,
    /// Screen point at the inner end of the tick.
    pub end: Point,
    /// Whole-unit label to print next to the tick, if any.
    pub label: Option<i64>,
}

impl Tick {
    /// The tick as a line segment.
    #[must_use]
    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_physical_index() {
        assert_eq!(TickCategory::classify(0), TickCategory::Zero);
        assert_eq!(TickCategory::classify(10), TickCategory::Major);
        assert_eq!(TickCategory::classify(-20), TickCategory::Major);
        assert_eq!(TickCategory::classify(5), TickCategory::Middle);
        assert_eq!(TickCategory::classify(15), TickCategory::Middle);
        assert_eq!(TickCategory::classify(7), TickCategory::Minor);
        assert_eq!(TickCategory::classify(-3), TickCategory::Minor);
    }

    #[test]
    fn only_multiples_of_the_major_interval_are_major() {
        for index in 1..=100 {
            let major = TickCategory::classify(index) == TickCategory::Major;
            assert_eq!(major, index % MAJOR_TICK_INTERVAL == 0, "index {index}");
        }
    }

    #[test]
    fn major_is_the_longest_regular_style() {
        let major = TickCategory::Major.style();
        assert!(major.length_mm > TickCategory::Middle.style().length_mm);
        assert!(major.length_mm > TickCategory::Minor.style().length_mm);
        assert!(TickStyle::CENTER_ZERO.length_mm > major.length_mm);
    }
}
