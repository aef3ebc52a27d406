//! Drag-axis slider
//!
//! Tracks one press-drag-release gesture over a track element. A press on
//! the track starts a session and hooks the document-level move/up
//! listeners; moves anywhere in the document continue it, and the release
//! ends it and unhooks them again.

use crate::geometry::{axis_fraction, Axis, Point, Rect};
use serde::Serialize;
use tracing::debug;

/// Slider gesture phases, each carrying the pointer's fraction along the track
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SliderEvent {
    Start(f64),
    Continue(f64),
    End(f64),
}

impl SliderEvent {
    pub fn fraction(self) -> f64 {
        match self {
            SliderEvent::Start(f) | SliderEvent::Continue(f) | SliderEvent::End(f) => f,
        }
    }
}

/// Renderable slider state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderView {
    pub axis: Axis,
    /// Filled share of the track (0.0-1.0)
    pub fill: f64,
    pub dragging: bool,
}

/// Pointer-drag tracker for one slider
#[derive(Debug, Clone)]
pub struct DragSlider {
    axis: Axis,
    bounds: Option<Rect>,
    is_dragging: bool,
    fraction: f64,
    listeners_attached: bool,
}

impl DragSlider {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            bounds: None,
            is_dragging: false,
            fraction: 0.0,
            listeners_attached: false,
        }
    }

    /// Seek bar style, left to right
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Volume style, bottom to top
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Record the track's laid-out bounds
    ///
    /// Called after every layout; an in-flight drag uses the new bounds from
    /// its next pointer event.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Whether the document-level move/up listeners are hooked
    pub fn listeners_attached(&self) -> bool {
        self.listeners_attached
    }

    /// Press on the track; presses elsewhere (or before layout) are ignored
    pub fn pointer_down(&mut self, point: Point) -> Option<SliderEvent> {
        let bounds = self.bounds?;
        if !bounds.contains(point) {
            return None;
        }
        self.is_dragging = true;
        self.listeners_attached = true;
        self.fraction = axis_fraction(self.axis, bounds, point);
        debug!("{:?} slider drag started at {:.3}", self.axis, self.fraction);
        Some(SliderEvent::Start(self.fraction))
    }

    /// Document pointer move; only reported mid-drag
    pub fn pointer_move(&mut self, point: Point) -> Option<SliderEvent> {
        if !self.is_dragging {
            return None;
        }
        let bounds = self.bounds?;
        self.fraction = axis_fraction(self.axis, bounds, point);
        Some(SliderEvent::Continue(self.fraction))
    }

    /// Document pointer release; ends the drag
    pub fn pointer_up(&mut self, point: Point) -> Option<SliderEvent> {
        if !self.is_dragging {
            return None;
        }
        if let Some(bounds) = self.bounds {
            self.fraction = axis_fraction(self.axis, bounds, point);
        }
        self.end_session();
        debug!("{:?} slider drag ended at {:.3}", self.axis, self.fraction);
        Some(SliderEvent::End(self.fraction))
    }

    /// Filled share for an externally supplied value
    ///
    /// Follows the pointer while dragging so the fill does not lag behind
    /// the owner's state.
    pub fn fill(&self, value: f64) -> f64 {
        if self.is_dragging {
            self.fraction
        } else if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }

    pub fn view(&self, value: f64) -> SliderView {
        SliderView {
            axis: self.axis,
            fill: self.fill(value),
            dragging: self.is_dragging,
        }
    }

    /// Drop any session and unhook the document listeners
    pub fn unmount(&mut self) {
        self.end_session();
    }

    fn end_session(&mut self) {
        self.is_dragging = false;
        self.listeners_attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seek_bar() -> DragSlider {
        let mut slider = DragSlider::horizontal();
        slider.set_bounds(Rect::new(0.0, 0.0, 400.0, 10.0));
        slider
    }

    #[test]
    fn full_gesture_reports_start_continue_end() {
        let mut slider = seek_bar();

        assert_eq!(
            slider.pointer_down(Point::new(100.0, 5.0)),
            Some(SliderEvent::Start(0.25))
        );
        assert!(slider.is_dragging());
        assert!(slider.listeners_attached());

        assert_eq!(
            slider.pointer_move(Point::new(200.0, 300.0)),
            Some(SliderEvent::Continue(0.5)),
            "moves off the track keep dragging"
        );
        assert_eq!(
            slider.pointer_up(Point::new(500.0, 5.0)),
            Some(SliderEvent::End(1.0))
        );
        assert!(!slider.is_dragging());
        assert!(!slider.listeners_attached());
    }

    #[test]
    fn ignores_presses_outside_or_before_layout() {
        let mut unlaid = DragSlider::horizontal();
        assert_eq!(unlaid.pointer_down(Point::new(1.0, 1.0)), None);

        let mut slider = seek_bar();
        assert_eq!(slider.pointer_down(Point::new(100.0, 50.0)), None);
        assert!(!slider.is_dragging());
        assert!(!slider.listeners_attached());
    }

    #[test]
    fn moves_and_releases_without_a_drag_do_nothing() {
        let mut slider = seek_bar();
        assert_eq!(slider.pointer_move(Point::new(10.0, 5.0)), None);
        assert_eq!(slider.pointer_up(Point::new(10.0, 5.0)), None);
    }

    #[test]
    fn vertical_slider_fills_from_the_bottom() {
        let mut slider = DragSlider::vertical();
        slider.set_bounds(Rect::new(0.0, 0.0, 10.0, 100.0));
        assert_eq!(
            slider.pointer_down(Point::new(5.0, 25.0)),
            Some(SliderEvent::Start(0.75))
        );
    }

    #[test]
    fn fill_tracks_pointer_while_dragging() {
        let mut slider = seek_bar();
        assert_eq!(slider.fill(0.6), 0.6);
        assert_eq!(slider.fill(1.7), 1.0);
        assert_eq!(slider.fill(f64::NAN), 0.0);

        slider.pointer_down(Point::new(40.0, 5.0));
        assert_eq!(slider.fill(0.6), 0.1);
        assert!(slider.view(0.6).dragging);
    }

    #[test]
    fn unmount_mid_drag_detaches() {
        let mut slider = seek_bar();
        slider.pointer_down(Point::new(40.0, 5.0));
        slider.unmount();
        assert!(!slider.listeners_attached());
        assert_eq!(slider.pointer_up(Point::new(40.0, 5.0)), None);
    }
}
