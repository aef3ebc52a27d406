//! Mounted manager with a scripted audio element

#![allow(dead_code)]

use playbar_playback::{
    ManualFrameScheduler, MediaBackend, MediaEvent, MediaEventSink, MediaResource,
    PlaybackConfig, PlaybackHandle, Playlist, PlaylistEntry, Result,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct AudioState {
    pub playing: bool,
    pub position: f64,
    pub volume: f32,
}

struct ScriptedAudio {
    state: Rc<RefCell<AudioState>>,
}

impl MediaResource for ScriptedAudio {
    fn load(&mut self) {}

    fn play(&mut self) {
        self.state.borrow_mut().playing = true;
    }

    fn pause(&mut self) {
        self.state.borrow_mut().playing = false;
    }

    fn current_time(&self) -> f64 {
        self.state.borrow().position
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.state.borrow_mut().position = seconds;
    }

    fn set_volume(&mut self, volume: f32) {
        self.state.borrow_mut().volume = volume;
    }

    fn duration(&self) -> Option<f64> {
        None
    }
}

#[derive(Clone, Default)]
pub struct ScriptedBackend {
    audio: Rc<RefCell<Vec<(Rc<RefCell<AudioState>>, MediaEventSink)>>>,
}

impl ScriptedBackend {
    pub fn current(&self) -> Rc<RefCell<AudioState>> {
        let audio = self.audio.borrow();
        Rc::clone(&audio[audio.len() - 1].0)
    }

    /// Report the current song's length
    pub fn metadata(&self, duration: f64) {
        self.sink().emit(MediaEvent::MetadataReady { duration });
    }

    pub fn end_song(&self) {
        self.sink().emit(MediaEvent::Ended);
    }

    fn sink(&self) -> MediaEventSink {
        let audio = self.audio.borrow();
        audio[audio.len() - 1].1.clone()
    }
}

impl MediaBackend for ScriptedBackend {
    fn create(&mut self, _url: &str, events: MediaEventSink) -> Result<Box<dyn MediaResource>> {
        let state = Rc::new(RefCell::new(AudioState::default()));
        self.audio.borrow_mut().push((Rc::clone(&state), events));
        Ok(Box::new(ScriptedAudio { state }))
    }
}

pub struct Fixture {
    pub handle: PlaybackHandle,
    pub backend: ScriptedBackend,
    pub frames: ManualFrameScheduler,
}

pub fn mount(titles: &[&str]) -> Fixture {
    let playlist = Playlist::new(
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                PlaylistEntry::new(*title, format!("/art/{i}.jpg"), format!("/audio/{i}.mp3"))
            })
            .collect(),
    )
    .expect("non-empty playlist");

    let backend = ScriptedBackend::default();
    let mut frames = ManualFrameScheduler::new();
    let handle = PlaybackHandle::mount(
        playlist,
        PlaybackConfig::default(),
        Box::new(backend.clone()),
        &mut frames,
    )
    .expect("mount");

    Fixture {
        handle,
        backend,
        frames,
    }
}
