// Overture Scene Layer
//
// Abstraction over the host engine's scene graph. The host wires its objects
// in behind `SceneObject` once at startup; tests use `MockSceneObject`.

mod mock;
mod object;

pub use mock::{MockSceneObject, SceneEvent};
pub use object::SceneObject;
