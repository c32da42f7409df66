// Overture Scene Layer - Mock Object
//
// Test double for `SceneObject`. Records every mutation in a timestamped
// journal so tests can assert on the order and timing of visibility, scale,
// and position writes rather than just the final transform.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use glam::Vec3;
use tokio::time::Instant;

use super::object::SceneObject;

/// A single recorded mutation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    Activated(bool),
    ScaleSet(Vec3),
    PositionSet(Vec3),
}

/// Mock scene object for sequencer and animator tests.
///
/// Constructed inactive at its designed transform, the way scene objects sit
/// before the intro runs. Timestamps come from `tokio::time::Instant`, so on
/// a paused test clock the journal carries exact virtual times.
pub struct MockSceneObject {
    name: String,

    active: AtomicBool,

    /// Current transform (position, scale)
    transform: Mutex<(Vec3, Vec3)>,

    /// Every mutation, in order, with the virtual time it happened
    journal: Mutex<Vec<(Instant, SceneEvent)>>,

    /// Count of `set_active` invocations
    activate_count: AtomicUsize,
}

impl MockSceneObject {
    pub fn new(name: &str, designed_scale: Vec3, designed_position: Vec3) -> Self {
        Self {
            name: name.to_string(),
            active: AtomicBool::new(false),
            transform: Mutex::new((designed_position, designed_scale)),
            journal: Mutex::new(Vec::new()),
            activate_count: AtomicUsize::new(0),
        }
    }

    fn record(&self, event: SceneEvent) {
        self.journal.lock().unwrap().push((Instant::now(), event));
    }

    /// Full mutation journal
    pub fn events(&self) -> Vec<(Instant, SceneEvent)> {
        self.journal.lock().unwrap().clone()
    }

    /// When the object was first made visible, if ever
    pub fn activated_at(&self) -> Option<Instant> {
        self.journal
            .lock()
            .unwrap()
            .iter()
            .find(|(_, e)| matches!(e, SceneEvent::Activated(true)))
            .map(|(at, _)| *at)
    }

    /// Every scale value written, in order
    pub fn scale_writes(&self) -> Vec<Vec3> {
        self.journal
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(_, e)| match e {
                SceneEvent::ScaleSet(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// Every position value written, in order
    pub fn position_writes(&self) -> Vec<Vec3> {
        self.journal
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(_, e)| match e {
                SceneEvent::PositionSet(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// Get the number of times `set_active` was invoked
    pub fn activate_count(&self) -> usize {
        self.activate_count.load(Ordering::Relaxed)
    }

    /// True if no mutation of any kind has been recorded
    pub fn is_untouched(&self) -> bool {
        self.journal.lock().unwrap().is_empty()
    }
}

impl SceneObject for MockSceneObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn set_active(&self, active: bool) {
        self.activate_count.fetch_add(1, Ordering::Relaxed);
        self.active.store(active, Ordering::Relaxed);
        self.record(SceneEvent::Activated(active));
    }

    fn position(&self) -> Vec3 {
        self.transform.lock().unwrap().0
    }

    fn set_position(&self, position: Vec3) {
        self.transform.lock().unwrap().0 = position;
        self.record(SceneEvent::PositionSet(position));
    }

    fn scale(&self) -> Vec3 {
        self.transform.lock().unwrap().1
    }

    fn set_scale(&self, scale: Vec3) {
        self.transform.lock().unwrap().1 = scale;
        self.record(SceneEvent::ScaleSet(scale));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_inactive_at_designed_transform() {
        let object =
            MockSceneObject::new("tree", Vec3::splat(2.0), Vec3::new(1.0, 0.0, 3.0));

        assert!(!object.is_active());
        assert_eq!(object.scale(), Vec3::splat(2.0));
        assert_eq!(object.position(), Vec3::new(1.0, 0.0, 3.0));
        assert!(object.is_untouched());
    }

    #[test]
    fn test_journal_preserves_mutation_order() {
        let object = MockSceneObject::new("car", Vec3::ONE, Vec3::ZERO);

        object.set_position(Vec3::new(5.0, 0.0, 0.0));
        object.set_active(true);
        object.set_scale(Vec3::ZERO);

        let events: Vec<SceneEvent> = object.events().into_iter().map(|(_, e)| e).collect();
        assert_eq!(
            events,
            vec![
                SceneEvent::PositionSet(Vec3::new(5.0, 0.0, 0.0)),
                SceneEvent::Activated(true),
                SceneEvent::ScaleSet(Vec3::ZERO),
            ]
        );
    }

    #[test]
    fn test_activated_at_reports_first_show() {
        let object = MockSceneObject::new("tree", Vec3::ONE, Vec3::ZERO);
        assert!(object.activated_at().is_none());

        object.set_active(true);
        object.set_active(true);

        assert!(object.activated_at().is_some());
        assert_eq!(object.activate_count(), 2);
    }

    #[test]
    fn test_write_accessors_filter_by_kind() {
        let object = MockSceneObject::new("gas-station", Vec3::ONE, Vec3::ZERO);

        object.set_scale(Vec3::ZERO);
        object.set_position(Vec3::X);
        object.set_scale(Vec3::ONE);

        assert_eq!(object.scale_writes(), vec![Vec3::ZERO, Vec3::ONE]);
        assert_eq!(object.position_writes(), vec![Vec3::X]);
    }
}
