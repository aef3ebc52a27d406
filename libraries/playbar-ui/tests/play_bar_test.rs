//! Play bar against a mounted manager
//!
//! Each test drives the bar the way a browser host would: layout bounds,
//! pointer events and clicks in, view structs out.

mod common;

use common::mount;
use playbar_playback::{PlaybackError, PlaybackManager};
use playbar_ui::{
    ClickTarget, ControlButton, Icon, PanelState, PlayBar, Point, Rect, SeekState,
};

const SEEK_TRACK: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 400.0,
    height: 8.0,
};

const VOLUME_TRACK: Rect = Rect {
    x: 500.0,
    y: 0.0,
    width: 10.0,
    height: 100.0,
};

fn bar_for(fixture: &common::Fixture) -> PlayBar {
    let mut bar = PlayBar::new(fixture.handle.downgrade());
    bar.set_seek_bounds(SEEK_TRACK);
    bar.set_volume_bounds(VOLUME_TRACK);
    bar
}

#[test]
fn initial_view_shows_first_song() {
    let fixture = mount(&["Intro", "Verse", "Outro"]);
    let bar = bar_for(&fixture);

    let view = bar.view().unwrap();
    assert_eq!(view.title, "Intro");
    assert_eq!(view.thumbnail_url, "/art/0.jpg");
    assert_eq!(view.time_label, "00:00 / 00:00");
    assert_eq!(view.seek.fill, 0.0);
    assert_eq!(view.controls.play.icon, Icon::Play.at(32));
    assert!(!view.controls.previous.enabled);
    assert!(view.controls.next.enabled);
    assert_eq!(view.volume.icon.icon, Icon::Volume);
    assert_eq!(view.volume.panel, PanelState::Closed);
}

#[test]
fn time_label_and_fill_follow_the_audio() {
    let fixture = mount(&["Intro"]);
    let bar = bar_for(&fixture);

    fixture.backend.metadata(240.0);
    fixture.backend.current().borrow_mut().position = 65.4;
    fixture.frames.advance(1);

    let view = bar.view().unwrap();
    assert_eq!(view.time_label, "01:05 / 04:00");
    assert!((view.seek.fill - 65.4 / 240.0).abs() < 1e-9);
}

#[test]
fn seek_drag_pauses_and_resumes_playback() {
    let fixture = mount(&["Intro", "Verse"]);
    let mut bar = bar_for(&fixture);
    fixture.backend.metadata(240.0);
    bar.click_control(ControlButton::PlayPause).unwrap();
    assert!(fixture.backend.current().borrow().playing);

    bar.seek_pointer_down(Point::new(100.0, 4.0)).unwrap();
    assert_eq!(
        bar.seek_state(),
        SeekState {
            is_seeking: true,
            was_playing: true
        }
    );
    assert!(!fixture.handle.snapshot().is_playing);
    assert!(!fixture.backend.current().borrow().playing);
    assert_eq!(fixture.backend.current().borrow().position, 60.0);
    assert_eq!(
        bar.view().unwrap().controls.play.icon.icon,
        Icon::Pause,
        "glyph does not flicker during the drag"
    );

    bar.pointer_move(Point::new(200.0, 90.0)).unwrap();
    assert_eq!(fixture.handle.snapshot().current_time, 120.0);
    assert_eq!(bar.view().unwrap().seek.fill, 0.5);

    bar.pointer_up(Point::new(300.0, 4.0)).unwrap();
    assert_eq!(bar.seek_state(), SeekState::default());
    let snapshot = fixture.handle.snapshot();
    assert!(snapshot.is_playing);
    assert_eq!(snapshot.current_time, 180.0);
    assert!(fixture.backend.current().borrow().playing);
    assert!(!bar.listeners_attached());
}

#[test]
fn seek_drag_while_paused_stays_paused() {
    let fixture = mount(&["Intro"]);
    let mut bar = bar_for(&fixture);
    fixture.backend.metadata(100.0);

    bar.seek_pointer_down(Point::new(40.0, 4.0)).unwrap();
    assert!(!bar.seek_state().was_playing);
    assert_eq!(bar.view().unwrap().controls.play.icon.icon, Icon::Play);
    bar.pointer_up(Point::new(400.0, 4.0)).unwrap();

    let snapshot = fixture.handle.snapshot();
    assert!(!snapshot.is_playing);
    assert_eq!(snapshot.current_time, 100.0);
}

#[test]
fn seeking_before_metadata_goes_to_zero() {
    let fixture = mount(&["Intro"]);
    let mut bar = bar_for(&fixture);

    bar.seek_pointer_down(Point::new(300.0, 4.0)).unwrap();
    bar.pointer_up(Point::new(300.0, 4.0)).unwrap();
    assert_eq!(fixture.handle.snapshot().current_time, 0.0);
}

#[test]
fn presses_off_the_seek_bar_are_ignored() {
    let fixture = mount(&["Intro"]);
    let mut bar = bar_for(&fixture);

    bar.seek_pointer_down(Point::new(100.0, 50.0)).unwrap();
    assert!(!bar.seek_state().is_seeking);
    assert!(!bar.listeners_attached());
}

#[test]
fn skip_buttons_walk_the_playlist_and_disable_at_the_edges() {
    let fixture = mount(&["Intro", "Verse"]);
    let mut bar = bar_for(&fixture);

    bar.click_control(ControlButton::Next).unwrap();
    let view = bar.view().unwrap();
    assert_eq!(view.title, "Verse");
    assert!(view.controls.previous.enabled);
    assert!(!view.controls.next.enabled);

    // Disabled: nothing happens
    bar.click_control(ControlButton::Next).unwrap();
    assert_eq!(fixture.handle.snapshot().index, 1);

    bar.click_control(ControlButton::Previous).unwrap();
    assert_eq!(bar.view().unwrap().title, "Intro");
}

#[test]
fn play_button_toggles() {
    let fixture = mount(&["Intro"]);
    let mut bar = bar_for(&fixture);

    bar.click_control(ControlButton::PlayPause).unwrap();
    assert_eq!(bar.view().unwrap().controls.play.icon.icon, Icon::Pause);
    bar.click_control(ControlButton::PlayPause).unwrap();
    assert_eq!(bar.view().unwrap().controls.play.icon.icon, Icon::Play);
}

#[test]
fn end_of_last_song_pauses_in_place() {
    let fixture = mount(&["Intro", "Outro"]);
    let mut bar = bar_for(&fixture);
    bar.click_control(ControlButton::PlayPause).unwrap();

    fixture.backend.end_song();
    assert_eq!(bar.view().unwrap().title, "Outro");
    assert_eq!(bar.view().unwrap().time_label, "00:00 / 00:00");

    fixture.backend.end_song();
    let view = bar.view().unwrap();
    assert_eq!(view.title, "Outro");
    assert_eq!(view.controls.play.icon.icon, Icon::Play);
}

#[test]
fn volume_drag_sets_level_and_mute_glyph() {
    let fixture = mount(&["Intro"]);
    let mut bar = bar_for(&fixture);

    bar.click_volume_glyph();
    bar.volume_pointer_down(Point::new(505.0, 75.0)).unwrap();
    assert_eq!(fixture.handle.read(PlaybackManager::volume), 0.25);
    assert_eq!(fixture.backend.current().borrow().volume, 0.25);

    bar.pointer_move(Point::new(505.0, 180.0)).unwrap();
    assert_eq!(fixture.handle.snapshot().volume, 0.0);
    bar.pointer_up(Point::new(505.0, 180.0)).unwrap();

    // The click ending the drag lands outside but keeps the panel open
    bar.document_click(ClickTarget::Outside);
    let view = bar.view().unwrap();
    assert_eq!(view.volume.panel, PanelState::Open);
    assert_eq!(view.volume.icon.icon, Icon::VolumeMute);

    bar.document_click(ClickTarget::Outside);
    assert_eq!(bar.view().unwrap().volume.panel, PanelState::Closed);
}

#[test]
fn seek_and_volume_drags_do_not_interfere() {
    let fixture = mount(&["Intro"]);
    let mut bar = bar_for(&fixture);
    fixture.backend.metadata(200.0);

    bar.seek_pointer_down(Point::new(200.0, 4.0)).unwrap();
    bar.pointer_move(Point::new(400.0, 4.0)).unwrap();
    bar.pointer_up(Point::new(400.0, 4.0)).unwrap();

    assert_eq!(fixture.handle.snapshot().volume, 1.0);
    assert_eq!(fixture.handle.snapshot().current_time, 200.0);
}

#[test]
fn unmounted_provider_is_reported() {
    let fixture = mount(&["Intro"]);
    let mut bar = bar_for(&fixture);
    fixture.backend.metadata(100.0);
    bar.seek_pointer_down(Point::new(100.0, 4.0)).unwrap();

    drop(fixture.handle);

    assert!(matches!(bar.view(), Err(PlaybackError::ContextMissing)));
    assert!(matches!(
        bar.pointer_up(Point::new(100.0, 4.0)),
        Err(PlaybackError::ContextMissing)
    ));
    assert!(!bar.listeners_attached());
    assert_eq!(bar.seek_state(), SeekState::default());
}

#[test]
fn unmounting_the_bar_detaches_listeners() {
    let fixture = mount(&["Intro"]);
    let mut bar = bar_for(&fixture);
    bar.click_volume_glyph();
    bar.volume_pointer_down(Point::new(505.0, 50.0)).unwrap();
    bar.seek_pointer_down(Point::new(10.0, 4.0)).unwrap();
    assert!(bar.listeners_attached());

    bar.unmount();
    assert!(!bar.listeners_attached());
    assert_eq!(bar.seek_state(), SeekState::default());
}
