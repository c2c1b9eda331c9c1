//! Replays a few scripted gestures through the whole stack and logs what
//! each stage makes of them. Set `RUST_LOG=trace` to see the timer loop and
//! classifier internals.

use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use gestura_animation::InertiaSpec;
use gestura_core::{debounce, throttle, Clock};
use gestura_foundation::prelude::*;
use gestura_runtime_std::{StdClock, StdTimerLoop};

const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let release_velocity = fling_drag()?;
    coast(release_velocity);
    timid_drag()?;
    two_finger_gestures()?;
    rate_limited_input()?;
    Ok(())
}

/// Drags right and slightly down at frame rate, then lets go.
fn fling_drag() -> Result<Point> {
    let mut tracker = PanTracker::new(StdClock, GestureConfig::default())
        .context("default pan config")?;

    for frame in 0..=12 {
        let t = frame as f32;
        tracker.record_position(Point::new(t * 25.0, t * 2.5));
        thread::sleep(Duration::from_millis(FRAME_MS));
    }

    match tracker.finish() {
        GestureAnalysis::Valid(pan) => {
            log::info!(
                "fling: {} pan of {:.1}px over {}ms, velocity ({:.2}, {:.2}) px/ms, inertia: {}",
                pan.direction,
                pan.distance,
                pan.duration_ms,
                pan.velocity.x,
                pan.velocity.y,
                pan.should_inertia
            );
            Ok(pan.velocity)
        }
        GestureAnalysis::Rejected(reason) => {
            log::warn!("fling rejected: {reason}");
            Ok(Point::ZERO)
        }
    }
}

fn coast(release_velocity: Point) {
    // Per-frame displacement at 60fps.
    let velocity = release_velocity * FRAME_MS as f32;
    let spec = InertiaSpec::default();
    let steps = spec.decay(velocity).count();
    let rest = spec.rest_offset(velocity);
    log::info!(
        "inertia: {steps} steps, comes to rest at ({:.1}, {:.1}) past release",
        rest.x,
        rest.y
    );
}

fn timid_drag() -> Result<()> {
    let config = GestureConfig::default().with_velocity_anchor(VelocityAnchor::LatestSample);
    config.validate()?;

    let start = StdClock.now_millis();
    let samples = [
        TimestampedSample::new(10.0, 10.0, start),
        TimestampedSample::new(11.0, 12.0, start + 30),
        TimestampedSample::new(12.0, 13.0, start + 60),
    ];
    let analysis = analyze_pan_gesture(&samples, &config, start + 60);
    ensure!(!analysis.is_valid(), "a 3px nudge should not count as a pan");
    log::info!(
        "nudge: {}",
        analysis.reason().unwrap_or_else(|| "accepted".to_owned())
    );
    Ok(())
}

fn two_finger_gestures() -> Result<()> {
    let mut tracker =
        MultiTouchTracker::new(MultiTouchConfig::default()).context("default multi-touch config")?;

    let scripts: [(&str, [(Point, Point); 2]); 3] = [
        (
            "spread",
            [
                (Point::new(100.0, 200.0), Point::new(200.0, 200.0)),
                (Point::new(60.0, 200.0), Point::new(240.0, 200.0)),
            ],
        ),
        (
            "twist",
            [
                (Point::new(100.0, 200.0), Point::new(200.0, 200.0)),
                (Point::new(150.0, 150.0), Point::new(150.0, 250.0)),
            ],
        ),
        (
            "slide",
            [
                (Point::new(100.0, 200.0), Point::new(200.0, 200.0)),
                (Point::new(100.0, 260.0), Point::new(200.0, 260.0)),
            ],
        ),
    ];

    let start = StdClock.now_millis();
    for (name, frames) in scripts {
        tracker.reset();
        for (i, (a, b)) in frames.into_iter().enumerate() {
            let t = start + (i as i64) * 50;
            tracker.record(MultiTouchFrame::pair(
                TimestampedSample::at(a, t),
                TimestampedSample::at(b, t),
                t,
            ));
        }
        log::info!("two fingers, {name}: {}", tracker.classify());
    }
    Ok(())
}

/// Bursts of keystroke-like input through a debounce and a throttle.
fn rate_limited_input() -> Result<()> {
    let timers = StdTimerLoop::shared();

    let search = debounce(timers.clone(), 120, |query: String| {
        log::info!("debounced search for {query:?}");
    });
    for query in ["g", "ge", "ges", "gest"] {
        search.call(query.to_owned());
        thread::sleep(Duration::from_millis(30));
    }
    let fired = timers.run_until_idle();
    ensure!(fired == 1, "debounce fired {fired} times");

    let scroll = throttle(Rc::new(StdClock), 50, |offset: f32| {
        log::info!("throttled scroll to {offset:.0}");
    });
    let mut ran = 0;
    for frame in 0..12 {
        if scroll.call(frame as f32 * 40.0) {
            ran += 1;
        }
        thread::sleep(Duration::from_millis(FRAME_MS));
    }
    log::info!("throttle let {ran} of 12 scroll events through");
    Ok(())
}
