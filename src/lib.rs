// Overture - Intro Animation Sequencer
//
// Drives externally owned scene objects (trees, a gas station, a car) through
// a scripted, strictly ordered intro sequence: staggered tree pop-ins, a gas
// station scale-in, then a car that scales in and drives to its parked spot.
// A status label is published after each phase.
//
// The crate never talks to a rendering engine directly. The host supplies its
// objects behind the `SceneObject` trait and the tween capability behind the
// `Animator` trait; everything here is sequencing, timing, and cancellation.
//
// All timing runs on tokio's clock, so the whole sequence can be exercised on
// the paused virtual clock in tests. Cancellation is cooperative: a
// `CancellationToken` is checked at every suspension point and produces a
// `Cancelled` outcome, never an error.

pub mod animation;
pub mod scene;
pub mod sequencer;
pub mod status;

pub use animation::{Animator, AnimatorConfig, Easing, FrameAnimator, TweenOutcome};
pub use scene::SceneObject;
pub use sequencer::{
    ConfigError, ConfigResult, IntroSequencer, SceneRefs, SequenceOutcome, SequenceState,
    SequencerConfig, StateCell,
};
pub use status::{FnSink, StatusSink};
