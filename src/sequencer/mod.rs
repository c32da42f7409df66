// Overture Sequencer
//
// The phase driver and its configuration and progress state. One
// `IntroSequencer` drives one run of the scripted intro:
//
// ```text
//   hold(delay_start)
//        │
//        ▼
//   trees phase        n staggered sub-tasks, joined as one phase
//        │             publish "init trees"
//        ▼
//   gas station phase  single awaited scale-in
//        │             publish "init gas station"
//        ▼
//   car phase          teleport, scale-in, drive to parked spot
//        │             publish "init car"
//        ▼
//      done
// ```
//
// A fired `CancellationToken` abandons the current and all pending phases at
// the next suspension point; no further labels are published and the outcome
// is `Cancelled`.

mod config;
mod runner;
mod state;

pub use config::{ConfigError, ConfigResult, SequencerConfig};
pub use runner::{IntroSequencer, SceneRefs, SequenceOutcome};
pub use state::{SequenceState, StateCell};
