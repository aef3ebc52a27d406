//! JavaScript-facing player

use super::{AnimationFrameScheduler, HtmlAudioBackend};
use crate::{
    PlaybackConfig, PlaybackError, PlaybackHandle, PlaybackManager, Playlist, PlaylistEntry,
    SubscriptionId,
};
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// Mounted play bar state for a web page
///
/// Owns the provider: dropping it (or calling `free()` from JavaScript)
/// cancels the frame loop and stops the audio.
#[wasm_bindgen]
pub struct WasmPlaybar {
    handle: PlaybackHandle,
    on_change: Option<SubscriptionId>,
}

#[wasm_bindgen]
impl WasmPlaybar {
    /// Mount a player for `playlist` (an array of `{ title, thumbnail_url, audio_url }`)
    #[wasm_bindgen(constructor)]
    pub fn new(playlist: JsValue, config: JsValue) -> Result<WasmPlaybar, JsValue> {
        console_error_panic_hook::set_once();

        let entries: Vec<PlaylistEntry> = serde_wasm_bindgen::from_value(playlist)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse playlist: {}", e)))?;
        let config: PlaybackConfig = if config.is_undefined() || config.is_null() {
            PlaybackConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };

        let playlist = Playlist::new(entries).map_err(to_js)?;
        let handle = PlaybackHandle::mount(
            playlist,
            config,
            Box::new(HtmlAudioBackend::new()),
            &mut AnimationFrameScheduler::new(),
        )
        .map_err(to_js)?;

        Ok(Self {
            handle,
            on_change: None,
        })
    }

    // ===== Playback Control =====

    pub fn play(&mut self) {
        self.handle.update(PlaybackManager::play);
    }

    pub fn pause(&mut self) {
        self.handle.update(PlaybackManager::pause);
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.handle.update(PlaybackManager::toggle_play);
    }

    /// Seek to position in seconds
    #[wasm_bindgen(js_name = setCurrentTime)]
    pub fn set_current_time(&mut self, seconds: f64) {
        self.handle.update(|m| m.set_current_time(seconds));
    }

    /// Set volume (0.0-1.0)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: f32) {
        self.handle.update(|m| m.set_volume(level));
    }

    // ===== Navigation =====

    /// Go to the previous song; returns false on the first song
    #[wasm_bindgen(js_name = navigatePrevious)]
    pub fn navigate_previous(&mut self) -> Result<bool, JsValue> {
        self.handle.update(|m| match m.previous_track() {
            Some(nav) => m.navigate(nav).map(|()| true).map_err(to_js),
            None => Ok(false),
        })
    }

    /// Go to the next song; returns false on the last song
    #[wasm_bindgen(js_name = navigateNext)]
    pub fn navigate_next(&mut self) -> Result<bool, JsValue> {
        self.handle.update(|m| match m.next_track() {
            Some(nav) => m.navigate(nav).map(|()| true).map_err(to_js),
            None => Ok(false),
        })
    }

    #[wasm_bindgen(js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.handle.read(PlaybackManager::has_previous)
    }

    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.handle.read(PlaybackManager::has_next)
    }

    // ===== State =====

    /// Current snapshot as a plain object
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.handle.snapshot()).unwrap_or(JsValue::NULL)
    }

    /// Events emitted since the last call, as an array
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> JsValue {
        let events = self.handle.update(PlaybackManager::drain_events);
        serde_wasm_bindgen::to_value(&events).unwrap_or(JsValue::NULL)
    }

    /// Call `callback(snapshot)` after every state change, replacing any previous one
    ///
    /// The callback may call back into the player, e.g. `snapshot()` or `hasNext()`.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        let id = self.handle.update(|m| {
            if let Some(old) = self.on_change.take() {
                m.unsubscribe(old);
            }
            m.subscribe(Box::new(move |snapshot| {
                if let Ok(value) = serde_wasm_bindgen::to_value(snapshot) {
                    callback.call1(&JsValue::NULL, &value).ok();
                }
            }))
        });
        self.on_change = Some(id);
    }
}

fn to_js(err: PlaybackError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
