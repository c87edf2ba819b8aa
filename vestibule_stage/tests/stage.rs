// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entrance animations driven end to end through a [`Stage`].

use vestibule_entrance::{ChannelSpec, Entrance, EntranceSpec, Phase};
use vestibule_stage::Stage;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn started(spec: EntranceSpec) -> Entrance {
    let mut entrance = Entrance::new(spec);
    entrance.start().unwrap();
    entrance
}

fn uniform(duration_ms: f64) -> EntranceSpec {
    EntranceSpec {
        opacity: ChannelSpec::new(0.0, 1.0, duration_ms),
        offset: ChannelSpec::new(30.0, 0.0, duration_ms),
    }
}

#[test]
fn header_entrance_plays_out_over_ticks() {
    let mut stage = Stage::new();
    let header = stage.mount(started(EntranceSpec::default()));

    stage.tick(300.0);
    let entrance = stage.get(header).unwrap();
    assert_eq!(entrance.opacity(), 0.375);
    assert_eq!(entrance.offset(), 15.0);
    assert_eq!(entrance.phase(), Phase::Running);

    stage.tick(500.0);
    let entrance = stage.get(header).unwrap();
    assert_eq!(entrance.opacity(), 1.0);
    assert_eq!(entrance.offset(), 0.0);
    assert_eq!(entrance.phase(), Phase::Completed);
}

#[test]
fn mismatched_durations_complete_at_their_own_times() {
    let mut stage = Stage::new();
    let slow = stage.mount(started(uniform(800.0)));
    let fast = stage.mount(started(uniform(600.0)));

    stage.tick(600.0);
    assert_eq!(stage.get(fast).unwrap().phase(), Phase::Completed);
    assert_eq!(stage.get(slow).unwrap().phase(), Phase::Running);
    // The fast view completing leaves the slow one's trajectory alone.
    assert_eq!(stage.get(slow).unwrap().opacity(), 0.75);

    stage.tick(200.0);
    assert_eq!(stage.get(slow).unwrap().phase(), Phase::Completed);
}

#[test]
fn unmounting_mid_entrance_discards_further_updates() {
    let mut stage = Stage::new();
    let doomed = stage.mount(started(uniform(800.0)));
    let survivor = stage.mount(started(uniform(800.0)));

    stage.tick(400.0);
    let removed = stage.unmount(doomed).unwrap();
    let frozen_opacity = removed.opacity();
    assert_eq!(frozen_opacity, 0.5);

    // Later ticks must not fail and must not reach the removed view.
    stage.tick(400.0);
    assert!(stage.get(doomed).is_none());
    assert_eq!(removed.opacity(), frozen_opacity);
    assert_eq!(stage.get(survivor).unwrap().phase(), Phase::Completed);
}

#[test]
fn remount_replays_from_the_hidden_state() {
    let mut stage = Stage::new();
    let first = stage.mount(started(EntranceSpec::default()));
    stage.tick(800.0);
    assert_eq!(stage.get(first).unwrap().phase(), Phase::Completed);
    stage.unmount(first);

    // A fresh mount gets a fresh animation; nothing carries over.
    let second = stage.mount(started(EntranceSpec::default()));
    let entrance = stage.get(second).unwrap();
    assert_eq!(entrance.opacity(), 0.0);
    assert_eq!(entrance.offset(), 30.0);
    assert_eq!(entrance.phase(), Phase::Running);
}

#[test]
fn sixty_fps_frame_cadence_settles_exactly() {
    let mut stage = Stage::new();
    let header = stage.mount(started(EntranceSpec::default()));

    // 49 frames at ~16.67 ms cross the 800 ms mark.
    for _ in 0..49 {
        stage.tick(FRAME_MS);
    }
    let entrance = stage.get(header).unwrap();
    assert_eq!(entrance.opacity(), 1.0);
    assert_eq!(entrance.offset(), 0.0);
    assert_eq!(entrance.phase(), Phase::Completed);
}
