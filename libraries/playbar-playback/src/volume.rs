//! Volume level handed to the host media primitive
//!
//! The host applies the level linearly, so the controller only has to keep
//! it inside 0.0-1.0.

/// Volume controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f32,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume, clamped to 0.0-1.0
    pub fn new(level: f32) -> Self {
        Self {
            level: Self::clamp_level(level),
        }
    }

    /// Set volume level, returning whether it changed
    pub fn set_level(&mut self, level: f32) -> bool {
        let level = Self::clamp_level(level);
        let changed = level != self.level;
        self.level = level;
        changed
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// True at level 0 (shown with the muted glyph)
    pub fn is_silent(&self) -> bool {
        self.level == 0.0
    }

    /// NaN counts as silence
    fn clamp_level(level: f32) -> f32 {
        if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 1.0)
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}
