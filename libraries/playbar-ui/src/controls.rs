//! Previous / play-pause / next row

use crate::icon::{Icon, IconView};
use playbar_playback::Navigation;
use serde::Serialize;

/// Glyph size of the play/pause button
pub const PLAY_ICON_SIZE: u32 = 32;

/// Glyph size of the skip buttons
pub const SKIP_ICON_SIZE: u32 = 24;

/// Buttons in the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ControlButton {
    Previous,
    PlayPause,
    Next,
}

/// What a click asks the manager to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    TogglePlay,
    Navigate(Navigation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub button: ControlButton,
    pub icon: IconView,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlsView {
    pub previous: ButtonView,
    pub play: ButtonView,
    pub next: ButtonView,
}

/// Stateless transport buttons
///
/// A skip button is enabled exactly when it was given a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackControls {
    is_playing: bool,
    previous: Option<Navigation>,
    next: Option<Navigation>,
}

impl PlaybackControls {
    pub fn new(is_playing: bool, previous: Option<Navigation>, next: Option<Navigation>) -> Self {
        Self {
            is_playing,
            previous,
            next,
        }
    }

    pub fn is_enabled(&self, button: ControlButton) -> bool {
        match button {
            ControlButton::Previous => self.previous.is_some(),
            ControlButton::PlayPause => true,
            ControlButton::Next => self.next.is_some(),
        }
    }

    /// Action bound to `button`, `None` when it is disabled
    pub fn click(&self, button: ControlButton) -> Option<ControlAction> {
        match button {
            ControlButton::Previous => self.previous.map(ControlAction::Navigate),
            ControlButton::PlayPause => Some(ControlAction::TogglePlay),
            ControlButton::Next => self.next.map(ControlAction::Navigate),
        }
    }

    pub fn view(&self) -> ControlsView {
        let play_icon = if self.is_playing { Icon::Pause } else { Icon::Play };
        ControlsView {
            previous: self.button(ControlButton::Previous, Icon::SkipPrevious.at(SKIP_ICON_SIZE)),
            play: self.button(ControlButton::PlayPause, play_icon.at(PLAY_ICON_SIZE)),
            next: self.button(ControlButton::Next, Icon::SkipNext.at(SKIP_ICON_SIZE)),
        }
    }

    fn button(&self, button: ControlButton, icon: IconView) -> ButtonView {
        ButtonView {
            button,
            icon,
            enabled: self.is_enabled(button),
        }
    }
}
