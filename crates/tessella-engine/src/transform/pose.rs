use crate::coords::Vec3;

/// A model's local pose relative to its parent's ambient transform.
///
/// Applied as translate, then rotate about z, then uniform scale — the order
/// matters, since rotation and scale do not commute with translation.
///
/// `scale` is not validated: zero collapses geometry and a negative value
/// mirrors it (and everything below it in the model tree).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Rotation about the +z axis, in degrees.
    pub orientation: f32,
    /// Uniform scale applied to local geometry and to descendant offsets.
    pub scale: f32,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        orientation: 0.0,
        scale: 1.0,
    };

    #[inline]
    pub const fn new(position: Vec3, orientation: f32, scale: f32) -> Self {
        Self { position, orientation, scale }
    }

    /// A pure translation: no rotation, unit scale.
    #[inline]
    pub const fn translation(position: Vec3) -> Self {
        Self { position, orientation: 0.0, scale: 1.0 }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
