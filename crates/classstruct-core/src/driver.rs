//! Frame driver for the onboarding timeline.
//!
//! One async loop per mounted screen. Each tick samples the timeline and
//! hands the frame to a sink. The glow never finishes, so the loop only ends
//! when its [`CancellationToken`] is cancelled.
//!
//! The token is checked after every wakeup and before every write. Once
//! `cancel()` returns, the sink is never called again.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::animation::{OnboardingFrame, OnboardingTimeline, TimelinePhase};
use crate::config::AnimationTimings;

/// Summary of a finished driver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverReport {
    /// Frames delivered to the sink.
    pub frames: u64,
    /// Time between start and cancellation.
    pub elapsed: Duration,
    /// Phase the timeline was in when the driver stopped.
    pub last_phase: TimelinePhase,
}

pub struct FrameDriver {
    timeline: OnboardingTimeline,
    interval: Duration,
}

impl FrameDriver {
    pub fn new(timeline: OnboardingTimeline, interval: Duration) -> Self {
        Self { timeline, interval }
    }

    pub fn from_timings(timings: &AnimationTimings) -> Self {
        Self::new(OnboardingTimeline::new(timings), timings.frame_interval())
    }

    pub fn timeline(&self) -> &OnboardingTimeline {
        &self.timeline
    }

    /// Run until `token` is cancelled. Consumes the driver: a timeline plays
    /// once per mount.
    pub async fn run<F>(self, token: CancellationToken, mut sink: F) -> DriverReport
    where
        F: FnMut(OnboardingFrame),
    {
        let started = Instant::now();
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut frames = 0u64;
        let mut phase = TimelinePhase::Revealing;
        tracing::debug!(interval_ms = self.interval.as_millis() as u64, "frame driver started");

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = ticker.tick() => {}
            }
            if token.is_cancelled() {
                break;
            }

            let elapsed = started.elapsed();
            let next = self.timeline.phase(elapsed);
            if next != phase {
                match next {
                    TimelinePhase::CallToAction => {
                        tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "reveal complete")
                    }
                    TimelinePhase::Idle => {
                        tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "call-to-action visible")
                    }
                    TimelinePhase::Revealing => {}
                }
                phase = next;
            }

            sink(self.timeline.sample(elapsed));
            frames += 1;
        }

        let report = DriverReport {
            frames,
            elapsed: started.elapsed(),
            last_phase: phase,
        };
        tracing::debug!(frames = report.frames, last_phase = ?report.last_phase, "frame driver cancelled");
        report
    }
}
