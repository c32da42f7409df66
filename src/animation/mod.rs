// Overture Animation Core
//
// Easing curves and the tween driver. The sequencer never interpolates
// anything itself; it asks an `Animator` to drive a scene object's scale or
// position and awaits the outcome.

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::{Animator, AnimatorConfig, FrameAnimator, TweenOutcome};
