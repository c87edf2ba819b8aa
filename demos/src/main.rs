// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the tasks dashboard header through its entrance on a simulated
//! 60 fps frame loop, and unmounts a second view mid-flight to show that
//! later ticks are harmless.

use vestibule_entrance::{ChannelSpec, Entrance, EntranceSpec, Phase};
use vestibule_screens::header::{TasksHeader, TasksHeaderProps};
use vestibule_stage::Stage;
use vestibule_value::Animate;

const FRAME_MS: f64 = 1000.0 / 60.0;

/// A mounted view for the demo: either a full screen or a bare entrance.
enum DemoView {
    Header(TasksHeader),
    Block(Entrance),
}

impl Animate for DemoView {
    fn advance(&mut self, delta_ms: f64) {
        match self {
            Self::Header(header) => header.advance(delta_ms),
            Self::Block(entrance) => entrance.advance(delta_ms),
        }
    }
}

fn main() {
    let mut stage = Stage::new();

    let mut header = TasksHeader::new(TasksHeaderProps::default());
    header.mounted().expect("default spec has valid durations");
    let header_id = stage.mount(DemoView::Header(header));

    // A second, faster block that gets torn down halfway through.
    let mut doomed = Entrance::new(EntranceSpec {
        opacity: ChannelSpec::new(0.0, 1.0, 600.0),
        offset: ChannelSpec::new(30.0, 0.0, 600.0),
    });
    doomed.start().expect("spec has valid durations");
    let doomed_id = stage.mount(DemoView::Block(doomed));

    let mut elapsed = 0.0;
    let mut unmounted = false;
    for frame in 0_u32.. {
        stage.tick(FRAME_MS);
        elapsed += FRAME_MS;

        if !unmounted && elapsed >= 300.0 {
            stage.unmount(doomed_id);
            unmounted = true;
            println!("[{elapsed:7.1} ms] unmounted the fast block mid-entrance");
        }

        if frame % 6 == 0 {
            if let Some(DemoView::Header(header)) = stage.get(header_id) {
                let style = header.frame_style();
                println!(
                    "[{elapsed:7.1} ms] header opacity {:.3} offset {:+.2} ({:?})",
                    style.opacity,
                    style.transform.translation().y,
                    header.phase(),
                );
            }
        }

        let done = matches!(
            stage.get(header_id),
            Some(DemoView::Header(header)) if header.phase() == Phase::Completed
        );
        if done {
            println!("[{elapsed:7.1} ms] header entrance completed");
            break;
        }
    }

    println!("{} view(s) still mounted", stage.len());
}
