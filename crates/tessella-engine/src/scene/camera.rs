use crate::coords::Vec3;
use crate::input::Key;
use crate::transform::Pose;

/// Discrete camera step per key press, in scene units.
const STEP: f32 = 0.01;

/// Flat 3-axis camera offset. No rotation, no zoom, no projection.
///
/// The camera contributes a pure translation to the ambient transform before
/// any model is drawn; the scene brackets that contribution with the
/// frame-wide stack guard, so the camera itself never saves or restores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Camera {
    position: Vec3,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The camera's contribution to the frame: a pure translation.
    #[inline]
    pub fn pose(&self) -> Pose {
        Pose::translation(self.position)
    }

    /// Moves the camera one step along one axis per recognized key.
    ///
    /// The scene translates by the camera offset, so moving the view up means
    /// shifting the scene down; the signs below keep the on-screen motion
    /// matching the arrow directions. No bounds are applied — the camera may
    /// wander arbitrarily far from the models.
    ///
    /// Unrecognized keys leave the position untouched.
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::ArrowUp => self.position.y -= STEP,
            Key::ArrowDown => self.position.y += STEP,
            Key::ArrowLeft => self.position.x += STEP,
            Key::ArrowRight => self.position.x -= STEP,
            Key::PageUp => self.position.z -= STEP,
            Key::PageDown => self.position.z += STEP,
            _ => {}
        }
    }
}
