// Overture Scene Layer - Object Trait
//
// The seam between the sequencer and the host engine's scene graph. The host
// owns its objects; the sequencer only holds `Arc<dyn SceneObject>` handles
// and mutates visibility, position, and scale through this trait.

use glam::Vec3;

/// An externally owned, animatable scene entity.
///
/// Implementations use interior mutability: the sequencer and the animator
/// both write through shared handles, though never to the same object at the
/// same time (one phase, or one per-object sub-task, owns an object's
/// transform while it runs).
pub trait SceneObject: Send + Sync {
    /// Name for logging and error messages
    fn name(&self) -> &str;

    /// Whether the object is currently visible in the scene
    fn is_active(&self) -> bool;

    /// Show or hide the object
    fn set_active(&self, active: bool);

    /// Current world position
    fn position(&self) -> Vec3;

    /// Teleport to a position (no interpolation)
    fn set_position(&self, position: Vec3);

    /// Current scale
    fn scale(&self) -> Vec3;

    /// Set the scale directly
    fn set_scale(&self, scale: Vec3);
}
