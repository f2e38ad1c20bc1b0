use core::ops::{Deref, DerefMut};

use crate::coords::Vec3;
use crate::paint::Color;
use crate::transform::{Pose, TransformStack};

use super::TriangleMesh;

/// One recorded world-space triangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub color: Color,
}

/// Immediate-mode recording surface for one frame.
///
/// Owns the transform stack, the active fill color, and the frame's recorded
/// triangle stream in paint order (later entries paint over earlier ones).
/// The renderer consumes the stream after the scene finishes recording;
/// nothing here touches the GPU.
#[derive(Debug)]
pub struct Painter {
    stack: TransformStack,
    color: Color,
    triangles: Vec<Triangle>,
    clear_color: Color,
}

impl Painter {
    pub fn new() -> Self {
        Self {
            stack: TransformStack::new(),
            color: Color::WHITE,
            triangles: Vec::new(),
            clear_color: Color::default(),
        }
    }

    /// Starts a new frame: drops the previous recording and resets the fill
    /// color. Keeps allocated capacity for reuse.
    ///
    /// The ambient transform must be back at identity here; an outstanding
    /// save means some draw call leaked its guard.
    pub fn begin(&mut self, clear_color: Color) {
        debug_assert_eq!(self.stack.depth(), 0, "unbalanced transform stack between frames");
        self.triangles.clear();
        self.color = Color::WHITE;
        self.clear_color = clear_color;
    }

    /// Saves the ambient transform, composes `pose`, and returns a guard that
    /// restores the save when dropped. The guard derefs to the painter, so
    /// nested draw calls go through it and stack balance holds on every exit
    /// path, panics included.
    pub fn pushed(&mut self, pose: &Pose) -> PoseGuard<'_> {
        self.stack.push(pose);
        PoseGuard { painter: self }
    }

    /// Sets the active fill color for subsequently recorded triangles.
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Records the mesh's triangles under the current ambient transform and
    /// active color.
    pub fn fill_mesh(&mut self, mesh: &TriangleMesh) {
        let transform = self.stack.current();
        for [a, b, c] in mesh.triangles() {
            self.triangles.push(Triangle {
                vertices: [transform.apply(a), transform.apply(b), transform.apply(c)],
                color: self.color,
            });
        }
    }

    /// The recorded triangle stream, in paint order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Outstanding transform saves. Zero whenever no guard is alive.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }
}

/// Scope guard for one pushed pose.
///
/// Derefs to [`Painter`]; dropping it restores the previously saved ambient
/// transform.
pub struct PoseGuard<'a> {
    painter: &'a mut Painter,
}

impl Deref for PoseGuard<'_> {
    type Target = Painter;

    #[inline]
    fn deref(&self) -> &Painter {
        self.painter
    }
}

impl DerefMut for PoseGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Painter {
        self.painter
    }
}

impl Drop for PoseGuard<'_> {
    fn drop(&mut self) {
        self.painter.stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_mesh() -> TriangleMesh {
        TriangleMesh::new(vec![
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    // ── guard balance ─────────────────────────────────────────────────────

    #[test]
    fn guard_restores_on_drop() {
        let mut painter = Painter::new();
        {
            let mut scoped = painter.pushed(&Pose::translation(Vec3::new(1.0, 0.0, 0.0)));
            assert_eq!(scoped.depth(), 1);
            let inner = scoped.pushed(&Pose::new(Vec3::ZERO, 90.0, 2.0));
            assert_eq!(inner.depth(), 2);
        }
        assert_eq!(painter.depth(), 0);
    }

    #[test]
    fn guard_restores_on_early_exit() {
        fn draw_and_bail(painter: &mut Painter) -> Option<()> {
            let mut scoped = painter.pushed(&Pose::IDENTITY);
            scoped.set_color(Color::new(1.0, 0.0, 0.0));
            None?;
            unreachable!()
        }

        let mut painter = Painter::new();
        assert!(draw_and_bail(&mut painter).is_none());
        assert_eq!(painter.depth(), 0);
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn fill_mesh_applies_ambient_transform_and_color() {
        let mut painter = Painter::new();
        painter.begin(Color::default());

        let red = Color::new(1.0, 0.0, 0.0);
        {
            let mut scoped = painter.pushed(&Pose::new(Vec3::new(1.0, 0.0, 0.0), 0.0, 2.0));
            scoped.set_color(red);
            scoped.fill_mesh(&unit_mesh());
        }

        let tris = painter.triangles();
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].color, red);
        // (1,1,0) scaled by 2 then translated by (1,0,0).
        assert_eq!(tris[0].vertices[2], Vec3::new(3.0, 2.0, 0.0));
    }

    #[test]
    fn begin_resets_recording_and_color() {
        let mut painter = Painter::new();
        painter.begin(Color::default());
        painter.set_color(Color::new(0.0, 1.0, 0.0));
        painter.fill_mesh(&unit_mesh());
        assert_eq!(painter.triangles().len(), 1);

        painter.begin(Color::new(0.0, 0.5, 0.5));
        assert!(painter.triangles().is_empty());
        painter.fill_mesh(&unit_mesh());
        assert_eq!(painter.triangles()[0].color, Color::WHITE);
        assert_eq!(painter.clear_color(), Color::new(0.0, 0.5, 0.5));
    }
}
