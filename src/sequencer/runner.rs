// Overture Sequencer - Phase Driver
//
// Runs the intro: hold, staggered tree pop-ins, gas station scale-in, car
// scale-in and drive. Phases are strictly ordered; within the trees phase the
// per-object sub-tasks interleave, but the phase joins all of them before the
// sequence moves on.
//
// Cancellation is cooperative. Every suspension point races the token; once
// it fires no new timer or tween starts, in-flight awaits unwind, and the run
// reports `Cancelled`. Partially applied visual state is left as-is: teardown
// is not a transactional abort.

use std::sync::Arc;
use std::time::Duration;

use glam::Vec3;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use super::config::SequencerConfig;
use super::state::{SequenceState, StateCell};
use crate::animation::{Animator, Easing, TweenOutcome};
use crate::scene::SceneObject;
use crate::status::StatusSink;

/// Scene wiring for one intro run.
///
/// Objects are owned by the host scene; the sequencer only holds handles.
pub struct SceneRefs {
    /// Trees, in pop-in order
    pub trees: Vec<Arc<dyn SceneObject>>,
    pub gas_station: Arc<dyn SceneObject>,
    pub car: Arc<dyn SceneObject>,
    /// Where the car appears before driving to its designed position
    pub car_start_position: Vec3,
}

/// How the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceOutcome {
    /// All phases ran; all three status labels were published
    Completed,
    /// Torn down mid-sequence; a prefix of the labels was published
    Cancelled,
}

impl SequenceOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SequenceOutcome::Cancelled)
    }
}

/// One-shot driver for the intro sequence.
///
/// `run` consumes the sequencer: one instance, one run. Observers keep a
/// `StateCell` from `state_handle()` to follow progress from outside.
pub struct IntroSequencer {
    config: SequencerConfig,
    scene: SceneRefs,
    animator: Arc<dyn Animator>,
    sink: Arc<dyn StatusSink>,
    state: StateCell,
}

impl IntroSequencer {
    /// Wire up a sequencer. `config` is expected to have passed
    /// `SequencerConfig::validate` already.
    pub fn new(
        config: SequencerConfig,
        scene: SceneRefs,
        animator: Arc<dyn Animator>,
        sink: Arc<dyn StatusSink>,
    ) -> Self {
        Self {
            config,
            scene,
            animator,
            sink,
            state: StateCell::new(),
        }
    }

    /// Cloneable progress observer, valid before, during, and after the run
    pub fn state_handle(&self) -> StateCell {
        self.state.clone()
    }

    /// Run the whole sequence once.
    ///
    /// Cancellation during the initial hold means nothing was touched and
    /// nothing was published.
    pub async fn run(self, cancel: CancellationToken) -> SequenceOutcome {
        log::info!("intro sequence starting ({} trees)", self.scene.trees.len());

        if wait_or_cancel(self.config.delay_start(), &cancel).await {
            return self.cancelled("initial delay");
        }

        self.state.advance(SequenceState::AnimatingTrees);
        if self.animate_trees(&cancel).await.is_cancelled() {
            return self.cancelled("trees phase");
        }
        self.sink.publish("init trees");
        log::info!("trees phase complete");

        self.state.advance(SequenceState::AnimatingGasStation);
        if self.animate_gas_station(&cancel).await.is_cancelled() {
            return self.cancelled("gas station phase");
        }
        self.sink.publish("init gas station");
        log::info!("gas station phase complete");

        self.state.advance(SequenceState::AnimatingCar);
        if self.animate_car(&cancel).await.is_cancelled() {
            return self.cancelled("car phase");
        }
        self.sink.publish("init car");
        log::info!("car phase complete, intro sequence done");

        self.state.advance(SequenceState::Done);
        SequenceOutcome::Completed
    }

    fn cancelled(&self, during: &str) -> SequenceOutcome {
        self.state.cancel();
        log::info!("intro sequence cancelled during {}", during);
        SequenceOutcome::Cancelled
    }

    /// Trees phase: one sub-task per tree, each gated by its own stagger
    /// timer. Only the last tree's tween is awaited inside its sub-task
    /// (unless `await_all_tree_tweens`); the phase joins every sub-task.
    async fn animate_trees(&self, cancel: &CancellationToken) -> TweenOutcome {
        let count = self.scene.trees.len();
        let mut handles = Vec::with_capacity(count);

        for (index, tree) in self.scene.trees.iter().enumerate() {
            let tree = tree.clone();
            let animator = self.animator.clone();
            let cancel = cancel.clone();
            let stagger = self.config.tree_stagger() * index as u32;
            let duration = self.config.tree_scale_duration();
            let await_tween = self.config.await_all_tree_tweens || index + 1 == count;

            handles.push(tokio::spawn(async move {
                tree_pop_in(tree, animator, stagger, duration, await_tween, cancel).await
            }));
        }

        let mut outcome = TweenOutcome::Completed;
        for handle in handles {
            match handle.await {
                Ok(TweenOutcome::Completed) => {}
                Ok(TweenOutcome::Cancelled) => outcome = TweenOutcome::Cancelled,
                Err(e) => {
                    log::warn!("tree sub-task failed to join: {}", e);
                    outcome = TweenOutcome::Cancelled;
                }
            }
        }
        outcome
    }

    async fn animate_gas_station(&self, cancel: &CancellationToken) -> TweenOutcome {
        if cancel.is_cancelled() {
            return TweenOutcome::Cancelled;
        }

        let gas_station = self.scene.gas_station.clone();
        gas_station.set_active(true);
        let designed_scale = gas_station.scale();

        self.animator
            .animate_scale(
                gas_station,
                Vec3::ZERO,
                designed_scale,
                self.config.gas_station_scale_duration(),
                Easing::InOutBack,
                cancel.clone(),
            )
            .await
    }

    /// Car phase: remember the parked position, teleport to the start marker,
    /// scale in, then drive back to the parked position.
    async fn animate_car(&self, cancel: &CancellationToken) -> TweenOutcome {
        if cancel.is_cancelled() {
            return TweenOutcome::Cancelled;
        }

        let car = self.scene.car.clone();
        let parked_position = car.position();
        car.set_position(self.scene.car_start_position);
        car.set_active(true);
        let designed_scale = car.scale();

        let scale_in = self
            .animator
            .animate_scale(
                car.clone(),
                Vec3::ZERO,
                designed_scale,
                self.config.car_scale_duration(),
                Easing::InOutBack,
                cancel.clone(),
            )
            .await;
        if scale_in.is_cancelled() {
            return scale_in;
        }

        self.animator
            .animate_move(
                car,
                self.scene.car_start_position,
                parked_position,
                self.config.car_move_duration(),
                Easing::InOutBack,
                cancel.clone(),
            )
            .await
    }
}

/// Sleep that unwinds early when the token fires. Returns true if cancelled.
async fn wait_or_cancel(duration: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        _ = cancel.cancelled() => true,
        _ = sleep(duration) => false,
    }
}

/// One tree's sub-task: stagger timer, show, scale in from zero.
///
/// When `await_tween` is false the tween is spawned and left to finish on its
/// own (it still shares the run's token), and the sub-task completes as soon
/// as the tween has started.
async fn tree_pop_in(
    tree: Arc<dyn SceneObject>,
    animator: Arc<dyn Animator>,
    stagger: Duration,
    duration: Duration,
    await_tween: bool,
    cancel: CancellationToken,
) -> TweenOutcome {
    if wait_or_cancel(stagger, &cancel).await {
        return TweenOutcome::Cancelled;
    }

    tree.set_active(true);
    log::debug!("'{}' visible, scale-in starting", tree.name());
    let designed_scale = tree.scale();

    if await_tween {
        animator
            .animate_scale(tree, Vec3::ZERO, designed_scale, duration, Easing::OutBack, cancel)
            .await
    } else {
        tokio::spawn(async move {
            animator
                .animate_scale(tree, Vec3::ZERO, designed_scale, duration, Easing::OutBack, cancel)
                .await
        });
        TweenOutcome::Completed
    }
}
