//! Pointer geometry in viewport coordinates

use serde::{Deserialize, Serialize};

/// Pointer position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of a laid-out element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges count as inside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Direction a slider measures along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Left edge is 0, right edge is 1
    Horizontal,
    /// Bottom edge is 0, top edge is 1
    Vertical,
}

/// Position of `point` along `axis` of `track`, clamped to 0.0-1.0
///
/// A track with no extent (or non-finite geometry) yields 0.
pub fn axis_fraction(axis: Axis, track: Rect, point: Point) -> f64 {
    let (coord, origin, extent) = match axis {
        Axis::Horizontal => (point.x, track.x, track.width),
        Axis::Vertical => (point.y, track.y, track.height),
    };
    if !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    let ratio = (coord - origin) / extent;
    if !ratio.is_finite() {
        return 0.0;
    }
    let ratio = ratio.clamp(0.0, 1.0);
    match axis {
        Axis::Horizontal => ratio,
        Axis::Vertical => 1.0 - ratio,
    }
}
