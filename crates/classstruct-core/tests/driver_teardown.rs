//! Frame driver lifecycle tests
//!
//! Runs the driver under paused tokio time so simulated seconds pass
//! instantly, then checks sequencing of delivered frames and that nothing is
//! written once the screen's token is cancelled.

use std::sync::Arc;
use std::time::Duration;

use classstruct_core::{AnimationTimings, CancellationToken, FrameDriver, OnboardingFrame, TimelinePhase};
use parking_lot::Mutex;
use tokio::time::Instant;

/// Frames captured with the simulated time they were delivered at
type Capture = Arc<Mutex<Vec<(Duration, OnboardingFrame)>>>;

fn spawn_driver(
    timings: &AnimationTimings,
) -> (CancellationToken, Capture, tokio::task::JoinHandle<classstruct_core::DriverReport>) {
    let token = CancellationToken::new();
    let capture: Capture = Arc::default();
    let driver = FrameDriver::from_timings(timings);

    let sink_capture = capture.clone();
    let started = Instant::now();
    let handle = tokio::spawn(driver.run(token.clone(), move |frame| {
        sink_capture.lock().push((started.elapsed(), frame));
    }));

    (token, capture, handle)
}

#[tokio::test(start_paused = true)]
async fn cancel_during_glow_loop_stops_all_writes() {
    let timings = AnimationTimings::default();
    let (token, capture, handle) = spawn_driver(&timings);

    // Well into the glow loop: reveal and call-to-action are long done
    tokio::time::sleep(Duration::from_millis(5_000)).await;
    token.cancel();
    let report = handle.await.expect("driver task panicked");

    let written = capture.lock().len();
    assert!(written > 0);
    assert_eq!(report.frames as usize, written);
    assert_eq!(report.last_phase, TimelinePhase::Idle);

    // Simulated time keeps moving; nothing else may arrive
    tokio::time::sleep(Duration::from_millis(10_000)).await;
    assert_eq!(capture.lock().len(), written);
}

#[tokio::test(start_paused = true)]
async fn cancel_mid_reveal_leaves_values_where_they_were() {
    let timings = AnimationTimings::default();
    let (token, capture, handle) = spawn_driver(&timings);

    tokio::time::sleep(Duration::from_millis(400)).await;
    token.cancel();
    let report = handle.await.expect("driver task panicked");
    assert_eq!(report.last_phase, TimelinePhase::Revealing);

    let frames = capture.lock();
    let (_, last) = frames.last().copied().expect("at least one frame");
    assert!(last.reveal_opacity > 0.0 && last.reveal_opacity < 1.0);
    assert_eq!(last.cta_opacity, 0.0);
}

#[tokio::test(start_paused = true)]
async fn delivered_frames_respect_sequencing() {
    let timings = AnimationTimings::default();
    let reveal_end = timings.reveal_duration();
    let (token, capture, handle) = spawn_driver(&timings);

    // Two full glow cycles
    tokio::time::sleep(timings.glow_leg() * 4).await;
    token.cancel();
    handle.await.expect("driver task panicked");

    let frames = capture.lock();
    assert!(frames.len() > 100);

    let mut saw_low = 0;
    let mut saw_high = 0;
    for (at, frame) in frames.iter() {
        if *at <= reveal_end {
            assert_eq!(frame.cta_opacity, 0.0, "button visible at {:?}", at);
        }
        if *at >= reveal_end {
            assert_eq!(frame.reveal_opacity, 1.0);
            assert_eq!(frame.reveal_offset, 0.0);
        }
        assert!((0.4..=1.0).contains(&frame.glow_intensity));
        if frame.glow_intensity < 0.41 {
            saw_low += 1;
        }
        if frame.glow_intensity > 0.99 {
            saw_high += 1;
        }
    }
    assert!(saw_low >= 2, "glow reached its floor {saw_low} times");
    assert!(saw_high >= 2, "glow reached its peak {saw_high} times");
}

#[tokio::test(start_paused = true)]
async fn each_mount_gets_an_independent_driver() {
    let timings = AnimationTimings::default();
    let (first_token, first_capture, first) = spawn_driver(&timings);
    let (second_token, second_capture, second) = spawn_driver(&timings);

    tokio::time::sleep(Duration::from_millis(200)).await;
    first_token.cancel();
    first.await.expect("driver task panicked");
    let first_len = first_capture.lock().len();

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(first_capture.lock().len(), first_len);
    assert!(second_capture.lock().len() > first_len);

    second_token.cancel();
    second.await.expect("driver task panicked");
}
