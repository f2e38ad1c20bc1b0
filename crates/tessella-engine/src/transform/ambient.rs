use crate::coords::Vec3;

use super::Pose;

/// The ambient transform: the composed context against which new poses apply.
///
/// The only admitted operations are translation, rotation about z, and
/// uniform scale, so every composition stays in the closed form
/// `apply(p) = translation + scale * Rz(rotation) * p` and no general matrix
/// is needed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Accumulated rotation about +z, in radians.
    pub rotation: f32,
    /// Accumulated uniform scale.
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: 0.0,
        scale: 1.0,
    };

    /// Maps a point from local space into the space this transform lives in.
    #[inline]
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.translation + point.rotated_z(self.rotation) * self.scale
    }

    /// Composes `pose` under this transform: the result maps the pose's
    /// local space out through `self`. Parent strictly dominates — the
    /// pose's position is interpreted in (and scaled/rotated by) the parent
    /// space, which is what makes a composite's scale shrink both its
    /// children and the spacing between them.
    #[inline]
    pub fn then(&self, pose: &Pose) -> Transform {
        Transform {
            translation: self.apply(pose.position),
            rotation: self.rotation + pose.orientation.to_radians(),
            scale: self.scale * pose.scale,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
