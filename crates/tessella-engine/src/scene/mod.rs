//! Scene graph and per-frame orchestration.
//!
//! Responsibilities:
//! - own the model tree (leaf meshes + composites) and the camera
//! - record each frame into a [`Painter`] as world-space triangles
//! - drive the event/draw loop against a [`Platform`] collaborator

mod camera;
mod mesh;
mod model;
mod painter;
mod scene;

pub use camera::Camera;
pub use mesh::{MeshError, TriangleMesh};
pub use model::{Model, ModelKind};
pub use painter::{Painter, PoseGuard, Triangle};
pub use scene::{Platform, Scene};
