//! Pose composition and the ambient transform stack.
//!
//! Responsibilities:
//! - represent a model's local pose (translate, rotate about z, uniform scale)
//! - compose poses against the ambient transform in exactly that order
//! - keep save/restore structurally balanced via [`TransformStack`]

mod ambient;
mod pose;
mod stack;

pub use ambient::Transform;
pub use pose::Pose;
pub use stack::TransformStack;
