//! Playbar - Presentation
//!
//! Framework-free presentation state for a persistent play bar. Every
//! component here turns a [`playbar_playback::PlaybackSnapshot`] plus a
//! little local gesture state into a plain view struct, and turns pointer
//! input into manager actions. Drawing those views is left to the host.
//!
//! - [`format_time`]: `MM:SS` labels
//! - [`Icon`]: the glyph set, renderable as SVG
//! - [`DragSlider`]: press-drag-release tracking along one axis
//! - [`PlaybackControls`]: previous / play-pause / next
//! - [`VolumeControl`]: volume glyph with a pop-up vertical slider
//! - [`PlayBar`]: all of the above wired to a mounted manager
//!
//! # Example
//!
//! ```rust
//! use playbar_playback::PlaybackError;
//! use playbar_ui::{PlayBar, Point, Rect};
//! use playbar_playback::WeakPlaybackHandle;
//!
//! // Outside a provider every read fails
//! let mut bar = PlayBar::new(WeakPlaybackHandle::detached());
//! bar.set_seek_bounds(Rect::new(0.0, 0.0, 400.0, 8.0));
//! assert!(matches!(bar.view(), Err(PlaybackError::ContextMissing)));
//! assert!(bar.seek_pointer_down(Point::new(100.0, 4.0)).is_err());
//! ```

mod controls;
mod geometry;
mod icon;
mod play_bar;
mod slider;
mod time;
mod volume;

pub use controls::{
    ButtonView, ControlAction, ControlButton, ControlsView, PlaybackControls, PLAY_ICON_SIZE,
    SKIP_ICON_SIZE,
};
pub use geometry::{axis_fraction, Axis, Point, Rect};
pub use icon::{Icon, IconView};
pub use play_bar::{PlayBar, PlayBarView, SeekState};
pub use slider::{DragSlider, SliderEvent, SliderView};
pub use time::{format_time, time_label};
pub use volume::{ClickTarget, PanelState, VolumeControl, VolumeView, VOLUME_ICON_SIZE};
