//! `HTMLAudioElement` backend

use super::js_error;
use crate::error::{PlaybackError, Result};
use crate::resource::{MediaBackend, MediaEvent, MediaEventSink, MediaResource};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlAudioElement;

/// Creates one `<audio>` element per song
#[derive(Debug, Default)]
pub struct HtmlAudioBackend;

impl HtmlAudioBackend {
    pub fn new() -> Self {
        Self
    }
}

impl MediaBackend for HtmlAudioBackend {
    fn create(&mut self, url: &str, events: MediaEventSink) -> Result<Box<dyn MediaResource>> {
        let element = HtmlAudioElement::new_with_src(url)
            .map_err(|e| PlaybackError::MediaResource(js_error(&e)))?;
        Ok(Box::new(HtmlAudioResource::bind(element, events)))
    }
}

/// Audio element plus the handlers wired to it
struct HtmlAudioResource {
    element: HtmlAudioElement,
    on_ready: Option<Closure<dyn FnMut()>>,
    on_ended: Option<Closure<dyn FnMut()>>,
    on_error: Option<Closure<dyn FnMut()>>,
}

impl HtmlAudioResource {
    fn bind(element: HtmlAudioElement, events: MediaEventSink) -> Self {
        let ready_events = events.clone();
        let ready_element = element.clone();
        let on_ready = Closure::<dyn FnMut()>::new(move || {
            ready_events.emit(MediaEvent::MetadataReady {
                duration: ready_element.duration(),
            });
        });

        let ended_events = events.clone();
        let on_ended = Closure::<dyn FnMut()>::new(move || {
            ended_events.emit(MediaEvent::Ended);
        });

        let error_element = element.clone();
        let on_error = Closure::<dyn FnMut()>::new(move || {
            let message = error_element
                .error()
                .map(|err| format!("media error {}: {}", err.code(), err.message()))
                .unwrap_or_else(|| "media error".to_string());
            events.emit(MediaEvent::LoadFailed { message });
        });

        element.set_oncanplaythrough(Some(on_ready.as_ref().unchecked_ref()));
        element.set_onended(Some(on_ended.as_ref().unchecked_ref()));
        element.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Self {
            element,
            on_ready: Some(on_ready),
            on_ended: Some(on_ended),
            on_error: Some(on_error),
        }
    }
}

impl MediaResource for HtmlAudioResource {
    fn load(&mut self) {
        self.element.set_preload("auto");
        self.element.load();
    }

    fn play(&mut self) {
        // Rejections (autoplay policy, aborted load) arrive through onerror
        if let Err(err) = self.element.play() {
            warn!("play() threw: {}", js_error(&err));
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.element.pause() {
            warn!("pause() threw: {}", js_error(&err));
        }
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn set_volume(&mut self, volume: f32) {
        self.element.set_volume(f64::from(volume));
    }

    fn duration(&self) -> Option<f64> {
        let duration = self.element.duration();
        duration.is_finite().then_some(duration)
    }

    fn detach(&mut self) {
        self.element.set_oncanplaythrough(None);
        self.element.set_onended(None);
        self.element.set_onerror(None);
        self.on_ready = None;
        self.on_ended = None;
        self.on_error = None;
        debug!("Detached audio element");
    }
}
