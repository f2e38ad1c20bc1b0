use super::{Pose, Transform};

/// Explicit transform stack.
///
/// The stack starts at identity. [`push`](Self::push) saves the current
/// ambient transform and composes a pose onto it; [`pop`](Self::pop)
/// restores the save. Callers should not pair these by hand — the painter
/// wraps them in a scoped guard so balance holds on every exit path.
#[derive(Debug, Default)]
pub struct TransformStack {
    saved: Vec<Transform>,
    current: Transform,
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            saved: Vec::new(),
            current: Transform::IDENTITY,
        }
    }

    /// The transform at the top of the stack.
    #[inline]
    pub fn current(&self) -> Transform {
        self.current
    }

    /// Number of outstanding saves. Zero between frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Saves the current transform and composes `pose` onto it.
    pub fn push(&mut self, pose: &Pose) {
        self.saved.push(self.current);
        self.current = self.current.then(pose);
    }

    /// Restores the most recent save.
    ///
    /// An unmatched pop indicates a guard-discipline bug; it is a
    /// debug-assertion failure and a no-op in release builds.
    pub fn pop(&mut self) {
        debug_assert!(!self.saved.is_empty(), "pop without matching push");
        if let Some(saved) = self.saved.pop() {
            self.current = saved;
        }
    }
}
