//! Shared test doubles for the host media primitive

#![allow(dead_code)]

use playbar_playback::{
    ManualFrameScheduler, MediaBackend, MediaEventSink, MediaResource, PlaybackConfig,
    PlaybackError, PlaybackHandle, Playlist, PlaylistEntry, Result,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Observable state of one mock audio element
#[derive(Debug, Default)]
pub struct MockMedia {
    pub url: String,
    pub loaded: bool,
    pub playing: bool,
    pub position: f64,
    pub volume: f32,
    pub detached: bool,
}

struct MockResource {
    state: Rc<RefCell<MockMedia>>,
}

impl MediaResource for MockResource {
    fn load(&mut self) {
        self.state.borrow_mut().loaded = true;
    }

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

    fn detach(&mut self) {
        self.state.borrow_mut().detached = true;
    }
}

/// Records every resource it creates
#[derive(Clone, Default)]
pub struct MockBackend {
    media: Rc<RefCell<Vec<Rc<RefCell<MockMedia>>>>>,
    sinks: Rc<RefCell<Vec<MediaEventSink>>>,
    failing_urls: Rc<RefCell<Vec<String>>>,
}

impl MockBackend {
    /// Refuse to create resources for `url`
    pub fn fail_on(&self, url: impl Into<String>) {
        self.failing_urls.borrow_mut().push(url.into());
    }

    pub fn created(&self) -> usize {
        self.media.borrow().len()
    }

    pub fn media(&self, index: usize) -> Rc<RefCell<MockMedia>> {
        Rc::clone(&self.media.borrow()[index])
    }

    pub fn last_media(&self) -> Rc<RefCell<MockMedia>> {
        let media = self.media.borrow();
        Rc::clone(&media[media.len() - 1])
    }

    pub fn sink(&self, index: usize) -> MediaEventSink {
        self.sinks.borrow()[index].clone()
    }

    pub fn last_sink(&self) -> MediaEventSink {
        let sinks = self.sinks.borrow();
        sinks[sinks.len() - 1].clone()
    }

    /// Number of resources that are still attached
    pub fn live(&self) -> usize {
        self.media
            .borrow()
            .iter()
            .filter(|m| !m.borrow().detached)
            .count()
    }
}

impl MediaBackend for MockBackend {
    fn create(&mut self, url: &str, events: MediaEventSink) -> Result<Box<dyn MediaResource>> {
        if self.failing_urls.borrow().iter().any(|u| u == url) {
            return Err(PlaybackError::MediaResource(format!("cannot open {url}")));
        }
        let state = Rc::new(RefCell::new(MockMedia {
            url: url.to_string(),
            ..MockMedia::default()
        }));
        self.media.borrow_mut().push(Rc::clone(&state));
        self.sinks.borrow_mut().push(events);
        Ok(Box::new(MockResource { state }))
    }
}

pub fn playlist(len: usize) -> Playlist {
    Playlist::new(
        (0..len)
            .map(|i| {
                PlaylistEntry::new(
                    format!("Song {}", i + 1),
                    format!("https://cdn.example/{}.jpg", i + 1),
                    format!("https://cdn.example/{}.mp3", i + 1),
                )
            })
            .collect(),
    )
    .expect("non-empty playlist")
}

pub struct Mounted {
    pub handle: PlaybackHandle,
    pub backend: MockBackend,
    pub frames: ManualFrameScheduler,
}

pub fn mount(len: usize) -> Mounted {
    mount_with(len, PlaybackConfig::default(), MockBackend::default())
}

pub fn mount_with(len: usize, config: PlaybackConfig, backend: MockBackend) -> Mounted {
    let mut frames = ManualFrameScheduler::new();
    let handle = PlaybackHandle::mount(playlist(len), config, Box::new(backend.clone()), &mut frames)
        .expect("mount");
    Mounted {
        handle,
        backend,
        frames,
    }
}
