use crate::paint::Color;
use crate::transform::Pose;

use super::{Painter, TriangleMesh};

/// Closed variant set for the model tree.
#[derive(Debug, Clone)]
pub enum ModelKind {
    /// Owns raw triangle geometry directly.
    Leaf(TriangleMesh),
    /// Owns child models; their poses are relative to this model's local
    /// origin, and their list order is the paint order.
    Composite(Vec<Model>),
}

/// A drawable entity: a pose, a fill color, and either geometry or children.
///
/// A composite's color is inert in practice (every leaf sets its own color
/// before emitting geometry) but is stored for uniformity with leaves.
#[derive(Debug, Clone)]
pub struct Model {
    pub pose: Pose,
    pub color: Color,
    kind: ModelKind,
}

impl Model {
    pub fn leaf(pose: Pose, color: Color, mesh: TriangleMesh) -> Self {
        Self {
            pose,
            color,
            kind: ModelKind::Leaf(mesh),
        }
    }

    pub fn composite(pose: Pose, children: Vec<Model>) -> Self {
        Self {
            pose,
            color: Color::WHITE,
            kind: ModelKind::Composite(children),
        }
    }

    #[inline]
    pub fn kind(&self) -> &ModelKind {
        &self.kind
    }

    /// Records this model into the painter.
    ///
    /// Pattern per node: save + compose the pose (scoped by the guard), set
    /// the fill color, then emit geometry or recurse into children in list
    /// order. Dropping the guard restores the ambient transform, so sibling
    /// models are never affected by this one's pose.
    pub fn draw(&self, painter: &mut Painter) {
        let mut painter = painter.pushed(&self.pose);
        painter.set_color(self.color);

        match &self.kind {
            ModelKind::Leaf(mesh) => painter.fill_mesh(mesh),
            ModelKind::Composite(children) => {
                for child in children {
                    child.draw(&mut painter);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;

    fn tri() -> TriangleMesh {
        TriangleMesh::new(vec![
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(
            (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5 && (a.z - b.z).abs() < 1e-5,
            "expected {b:?}, got {a:?}"
        );
    }

    // ── stack balance ─────────────────────────────────────────────────────

    #[test]
    fn draw_leaves_stack_balanced_at_any_depth() {
        // depth 0: bare leaf; depth 3: composite of composites of leaves.
        let leaf = Model::leaf(Pose::IDENTITY, Color::WHITE, tri());
        let inner = Model::composite(Pose::IDENTITY, vec![leaf.clone(), leaf.clone()]);
        let outer = Model::composite(Pose::IDENTITY, vec![inner.clone(), inner]);

        for model in [leaf, outer] {
            let mut painter = Painter::new();
            painter.begin(Color::default());
            model.draw(&mut painter);
            assert_eq!(painter.depth(), 0);
        }
    }

    // ── transform composition through the tree ────────────────────────────

    #[test]
    fn composite_pose_dominates_leaf_pose() {
        let leaf = Model::leaf(
            Pose::new(Vec3::new(1.0, 0.0, 0.0), 0.0, 1.0),
            Color::WHITE,
            tri(),
        );
        let composite = Model::composite(
            Pose::new(Vec3::new(1.0, 0.0, 0.0), 90.0, 2.0),
            vec![leaf],
        );

        let mut painter = Painter::new();
        painter.begin(Color::default());
        composite.draw(&mut painter);

        // Leaf vertex (1,1,0): child transform is translation (1,2,0),
        // rotation 90°, scale 2 → (1,2,0) + 2 * Rz(90°) * (1,1,0) = (-1,4,0).
        let tris = painter.triangles();
        assert_eq!(tris.len(), 1);
        assert_close(tris[0].vertices[2], Vec3::new(-1.0, 4.0, 0.0));
    }

    #[test]
    fn composite_scale_shrinks_child_spacing() {
        let children = vec![
            Model::leaf(Pose::translation(Vec3::new(0.0, 0.0, 0.0)), Color::WHITE, tri()),
            Model::leaf(Pose::translation(Vec3::new(1.0, 0.0, 0.0)), Color::WHITE, tri()),
        ];
        let composite = Model::composite(Pose::new(Vec3::ZERO, 0.0, 0.5), children);

        let mut painter = Painter::new();
        painter.begin(Color::default());
        composite.draw(&mut painter);

        // Second leaf's local origin (its (0,0,0) vertex) lands at (0.5, 0, 0):
        // the offset scales along with the geometry.
        let tris = painter.triangles();
        assert_close(tris[1].vertices[1], Vec3::new(0.5, 0.0, 0.0));
        // And the leaf geometry itself is half-sized.
        assert_close(tris[0].vertices[2], Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn sibling_poses_do_not_leak() {
        let children = vec![
            Model::leaf(Pose::new(Vec3::new(5.0, 5.0, 0.0), 45.0, 3.0), Color::WHITE, tri()),
            Model::leaf(Pose::IDENTITY, Color::WHITE, tri()),
        ];
        let composite = Model::composite(Pose::IDENTITY, children);

        let mut painter = Painter::new();
        painter.begin(Color::default());
        composite.draw(&mut painter);

        // Second leaf is untouched by the first leaf's pose.
        assert_close(painter.triangles()[1].vertices[2], Vec3::new(1.0, 1.0, 0.0));
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn children_record_in_list_order() {
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        let composite = Model::composite(
            Pose::IDENTITY,
            vec![
                Model::leaf(Pose::IDENTITY, red, tri()),
                Model::leaf(Pose::IDENTITY, blue, tri()),
            ],
        );

        let mut painter = Painter::new();
        painter.begin(Color::default());
        composite.draw(&mut painter);

        // Overlapping geometry: the later-listed child's color paints over
        // the earlier one, so it must come later in the stream.
        let tris = painter.triangles();
        assert_eq!(tris[0].color, red);
        assert_eq!(tris[1].color, blue);
    }
}
