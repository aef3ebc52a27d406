//! Play bar composition
//!
//! Reads the mounted manager through a [`WeakPlaybackHandle`], turns its
//! snapshot into a [`PlayBarView`], and routes pointer input from the seek
//! slider, the transport buttons and the volume panel back into manager
//! actions. The only state kept here is the in-flight seek drag.

use crate::controls::{ControlAction, ControlButton, ControlsView, PlaybackControls};
use crate::geometry::{Point, Rect};
use crate::slider::{DragSlider, SliderEvent, SliderView};
use crate::time::time_label;
use crate::volume::{ClickTarget, VolumeControl, VolumeView};
use playbar_playback::{PlaybackError, PlaybackManager, Result, WeakPlaybackHandle};
use serde::Serialize;
use tracing::debug;

/// Seek drag in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeekState {
    pub is_seeking: bool,
    /// Whether playback was running when the drag began
    pub was_playing: bool,
}

/// Everything needed to draw the play bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayBarView {
    pub thumbnail_url: String,
    pub title: String,
    /// `"MM:SS / MM:SS"`
    pub time_label: String,
    pub controls: ControlsView,
    pub volume: VolumeView,
    pub seek: SliderView,
    pub load_error: Option<String>,
}

pub struct PlayBar {
    playback: WeakPlaybackHandle,
    seek: DragSlider,
    volume: VolumeControl,
    seek_state: SeekState,
}

impl PlayBar {
    pub fn new(playback: WeakPlaybackHandle) -> Self {
        Self {
            playback,
            seek: DragSlider::horizontal(),
            volume: VolumeControl::new(),
            seek_state: SeekState::default(),
        }
    }

    pub fn seek_state(&self) -> SeekState {
        self.seek_state
    }

    pub fn volume_control(&self) -> &VolumeControl {
        &self.volume
    }

    pub fn set_seek_bounds(&mut self, bounds: Rect) {
        self.seek.set_bounds(bounds);
    }

    pub fn set_volume_bounds(&mut self, bounds: Rect) {
        self.volume.set_slider_bounds(bounds);
    }

    /// Transport buttons for the current state
    ///
    /// The play glyph keeps showing Pause through a seek drag that paused
    /// playback.
    pub fn controls(&self) -> Result<PlaybackControls> {
        let was_playing = self.seek_state.was_playing;
        self.playback.read(|m| {
            PlaybackControls::new(
                m.is_playing() || was_playing,
                m.previous_track(),
                m.next_track(),
            )
        })
    }

    pub fn view(&self) -> Result<PlayBarView> {
        let snapshot = self.playback.snapshot()?;
        let controls = self.controls()?;
        Ok(PlayBarView {
            time_label: time_label(snapshot.current_time, snapshot.duration),
            controls: controls.view(),
            volume: self.volume.view(snapshot.volume),
            seek: self.seek.view(snapshot.progress()),
            load_error: snapshot.load_error,
            thumbnail_url: snapshot.thumbnail_url,
            title: snapshot.title,
        })
    }

    /// Click on a transport button; disabled buttons do nothing
    pub fn click_control(&mut self, button: ControlButton) -> Result<()> {
        let Some(action) = self.controls()?.click(button) else {
            return Ok(());
        };
        self.playback.update(|m| match action {
            ControlAction::TogglePlay => {
                m.toggle_play();
                Ok(())
            }
            ControlAction::Navigate(navigation) => m.navigate(navigation),
        })?
    }

    // ===== Pointer Input =====

    /// Press on the seek bar
    pub fn seek_pointer_down(&mut self, point: Point) -> Result<()> {
        self.ensure_mounted()?;
        match self.seek.pointer_down(point) {
            Some(event) => self.apply_seek(event),
            None => Ok(()),
        }
    }

    /// Press on the volume slider
    pub fn volume_pointer_down(&mut self, point: Point) -> Result<()> {
        self.ensure_mounted()?;
        match self.volume.pointer_down(point) {
            Some(level) => self.playback.update(|m| m.set_volume(level)),
            None => Ok(()),
        }
    }

    pub fn click_volume_glyph(&mut self) {
        self.volume.click_glyph();
    }

    /// Document-level click
    pub fn document_click(&mut self, target: ClickTarget) {
        self.volume.document_click(target);
    }

    /// Document-level pointer move
    pub fn pointer_move(&mut self, point: Point) -> Result<()> {
        if let Some(event) = self.seek.pointer_move(point) {
            self.apply_seek(event)?;
        }
        if let Some(level) = self.volume.pointer_move(point) {
            self.playback.update(|m| m.set_volume(level))?;
        }
        Ok(())
    }

    /// Document-level pointer release
    pub fn pointer_up(&mut self, point: Point) -> Result<()> {
        self.volume.pointer_up(point);
        match self.seek.pointer_up(point) {
            Some(event) => self.apply_seek(event),
            None => Ok(()),
        }
    }

    /// Unhook document listeners and forget any drag
    pub fn unmount(&mut self) {
        self.seek.unmount();
        self.volume.unmount();
        self.seek_state = SeekState::default();
    }

    /// Whether any document listener is still hooked
    pub fn listeners_attached(&self) -> bool {
        self.seek.listeners_attached() || self.volume.listeners_attached()
    }

    fn ensure_mounted(&self) -> Result<()> {
        if self.playback.is_mounted() {
            Ok(())
        } else {
            Err(PlaybackError::ContextMissing)
        }
    }

    fn apply_seek(&mut self, event: SliderEvent) -> Result<()> {
        let seek_state = &mut self.seek_state;
        let result = self.playback.update(|m: &mut PlaybackManager| {
            match event {
                SliderEvent::Start(_) => {
                    *seek_state = SeekState {
                        is_seeking: true,
                        was_playing: m.is_playing(),
                    };
                    debug!("Seek started (was playing: {})", seek_state.was_playing);
                    m.pause();
                }
                SliderEvent::Continue(_) => {}
                SliderEvent::End(_) => {
                    let resume = seek_state.was_playing;
                    *seek_state = SeekState::default();
                    if resume {
                        m.play();
                    }
                    debug!("Seek ended (resumed: {})", resume);
                }
            }
            m.set_current_time(event.fraction() * m.duration());
        });
        if result.is_err() {
            // Provider is gone; the drag cannot finish
            self.seek.unmount();
            self.seek_state = SeekState::default();
        }
        result
    }
}
