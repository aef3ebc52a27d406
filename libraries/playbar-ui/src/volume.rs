//! Volume glyph with a pop-up vertical slider
//!
//! Clicking the glyph toggles the panel. Any other click in the document
//! closes it, except clicks landing on the panel itself, clicks made while
//! a volume drag is in progress, and the click the browser synthesizes
//! right after a drag is released.

use crate::geometry::{Point, Rect};
use crate::icon::{Icon, IconView};
use crate::slider::{DragSlider, SliderEvent};
use serde::Serialize;
use tracing::debug;

/// Glyph size of the volume button
pub const VOLUME_ICON_SIZE: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Where a document click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Glyph,
    Panel,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeView {
    pub icon: IconView,
    pub panel: PanelState,
    /// Filled share of the slider, meaningful while open
    pub fill: f64,
}

#[derive(Debug, Clone)]
pub struct VolumeControl {
    panel: PanelState,
    slider: DragSlider,
    release_pending: bool,
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeControl {
    pub fn new() -> Self {
        Self {
            panel: PanelState::Closed,
            slider: DragSlider::vertical(),
            release_pending: false,
        }
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    pub fn is_dragging(&self) -> bool {
        self.slider.is_dragging()
    }

    /// Whether the next outside click will be swallowed as a drag release
    pub fn release_pending(&self) -> bool {
        self.release_pending
    }

    pub fn listeners_attached(&self) -> bool {
        self.slider.listeners_attached()
    }

    /// Bounds of the slider track inside the panel
    pub fn set_slider_bounds(&mut self, bounds: Rect) {
        self.slider.set_bounds(bounds);
    }

    /// Toggle the panel
    pub fn click_glyph(&mut self) {
        match self.panel {
            PanelState::Closed => self.open(),
            PanelState::Open => self.close(),
        }
    }

    /// Any click in the document, glyph clicks included
    ///
    /// Glyph clicks are left to [`click_glyph`](Self::click_glyph).
    pub fn document_click(&mut self, target: ClickTarget) {
        let swallowed = std::mem::take(&mut self.release_pending);
        if target != ClickTarget::Outside || !self.is_open() {
            return;
        }
        if swallowed || self.slider.is_dragging() {
            debug!("Volume panel kept open: click belongs to a drag");
            return;
        }
        self.close();
    }

    /// Press on the slider track; returns the new volume
    pub fn pointer_down(&mut self, point: Point) -> Option<f32> {
        self.release_pending = false;
        if !self.is_open() {
            return None;
        }
        self.slider.pointer_down(point).map(level)
    }

    /// Document pointer move; returns the new volume mid-drag
    pub fn pointer_move(&mut self, point: Point) -> Option<f32> {
        if !self.slider.is_dragging() {
            self.release_pending = false;
            return None;
        }
        self.slider.pointer_move(point).map(level)
    }

    /// Document pointer release
    ///
    /// The volume is left where the last move put it.
    pub fn pointer_up(&mut self, point: Point) {
        if self.slider.pointer_up(point).is_some() {
            self.release_pending = true;
        }
    }

    pub fn view(&self, volume: f32) -> VolumeView {
        let icon = if volume == 0.0 {
            Icon::VolumeMute
        } else {
            Icon::Volume
        };
        VolumeView {
            icon: icon.at(VOLUME_ICON_SIZE),
            panel: self.panel,
            fill: self.slider.fill(f64::from(volume)),
        }
    }

    pub fn unmount(&mut self) {
        self.slider.unmount();
        self.release_pending = false;
        self.panel = PanelState::Closed;
    }

    fn open(&mut self) {
        self.panel = PanelState::Open;
        debug!("Volume panel opened");
    }

    fn close(&mut self) {
        // The slider leaves the document with the panel
        self.slider.unmount();
        self.panel = PanelState::Closed;
        debug!("Volume panel closed");
    }
}

fn level(event: SliderEvent) -> f32 {
    event.fraction() as f32
}
