// Overture Animation Core - Tween Driver
//
// The `Animator` trait is the seam between the sequencer and whatever is
// actually rendering: the sequencer only ever asks for "drive this object's
// scale/position from A to B over D with curve E". `FrameAnimator` is the
// built-in implementation, stepping eased interpolation on a tokio interval.
//
// Cancellation is checked on every frame via tokio::select!. A cancelled
// tween stops where it is, leaves the last written partial value on the
// object, and reports `Cancelled` as a value rather than an error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use glam::Vec3;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::easing::Easing;
use crate::scene::SceneObject;

/// How a tween ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenOutcome {
    /// Ran to the end; the object holds exactly the target value
    Completed,
    /// Stopped mid-flight by cancellation; the object holds a partial value
    Cancelled,
}

impl TweenOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TweenOutcome::Cancelled)
    }
}

/// Animation capability the sequencer depends on.
///
/// The `from` value is written to the object synchronously before the first
/// frame, so the object never shows its final value ahead of the tween
/// (scale-from-zero pop-ins start at zero, not at full size).
#[async_trait]
pub trait Animator: Send + Sync {
    /// Drive the object's scale from `from` to `to` over `duration`.
    async fn animate_scale(
        &self,
        object: Arc<dyn SceneObject>,
        from: Vec3,
        to: Vec3,
        duration: Duration,
        easing: Easing,
        cancel: CancellationToken,
    ) -> TweenOutcome;

    /// Drive the object's position from `from` to `to` over `duration`.
    async fn animate_move(
        &self,
        object: Arc<dyn SceneObject>,
        from: Vec3,
        to: Vec3,
        duration: Duration,
        easing: Easing,
        cancel: CancellationToken,
    ) -> TweenOutcome;
}

/// Configuration for the frame-stepped animator
#[derive(Debug, Clone)]
pub struct AnimatorConfig {
    /// Frames per second the interpolation is stepped at
    pub frame_rate: u32,
}

impl AnimatorConfig {
    /// Interval between interpolation steps
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate as f64)
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self { frame_rate: 60 }
    }
}

/// Frame-stepped tween driver on tokio's clock.
///
/// Progress is derived from elapsed `tokio::time::Instant`s, not from frame
/// counting, so a missed tick never stretches the animation. The final frame
/// clamps the object to exactly the target value; completion can overrun the
/// nominal duration by at most one frame interval.
pub struct FrameAnimator {
    config: AnimatorConfig,
}

impl FrameAnimator {
    pub fn new(config: AnimatorConfig) -> Self {
        Self { config }
    }

    async fn drive(
        &self,
        object: Arc<dyn SceneObject>,
        from: Vec3,
        to: Vec3,
        duration: Duration,
        easing: Easing,
        cancel: CancellationToken,
        apply: fn(&dyn SceneObject, Vec3),
    ) -> TweenOutcome {
        // A fired token means no new tween starts at all
        if cancel.is_cancelled() {
            return TweenOutcome::Cancelled;
        }

        apply(object.as_ref(), from);

        let start = Instant::now();
        let mut frames = interval(self.config.frame_duration());
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    log::debug!("tween on '{}' cancelled mid-flight", object.name());
                    return TweenOutcome::Cancelled;
                }
                _ = frames.tick() => {
                    let elapsed = start.elapsed();
                    if elapsed >= duration {
                        apply(object.as_ref(), to);
                        return TweenOutcome::Completed;
                    }
                    let t = elapsed.as_secs_f32() / duration.as_secs_f32();
                    apply(object.as_ref(), from.lerp(to, easing.apply(t)));
                }
            }
        }
    }
}

#[async_trait]
impl Animator for FrameAnimator {
    async fn animate_scale(
        &self,
        object: Arc<dyn SceneObject>,
        from: Vec3,
        to: Vec3,
        duration: Duration,
        easing: Easing,
        cancel: CancellationToken,
    ) -> TweenOutcome {
        self.drive(object, from, to, duration, easing, cancel, |o, v| {
            o.set_scale(v)
        })
        .await
    }

    async fn animate_move(
        &self,
        object: Arc<dyn SceneObject>,
        from: Vec3,
        to: Vec3,
        duration: Duration,
        easing: Easing,
        cancel: CancellationToken,
    ) -> TweenOutcome {
        self.drive(object, from, to, duration, easing, cancel, |o, v| {
            o.set_position(v)
        })
        .await
    }
}
