//! WASM bindings for playbar-playback
//!
//! Browser implementations of the host traits plus a JavaScript-facing
//! wrapper around the mounted manager.

pub mod audio;
pub mod frame;
pub mod player;

pub use audio::HtmlAudioBackend;
pub use frame::AnimationFrameScheduler;
pub use player::WasmPlaybar;

use wasm_bindgen::JsValue;

/// Best-effort text for a JavaScript exception
pub(crate) fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
