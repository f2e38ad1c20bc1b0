//! Stock composite models, all assembled from one right-triangle mesh.

use tessella_engine::coords::Vec3;
use tessella_engine::paint::Color;
use tessella_engine::scene::{MeshError, Model, TriangleMesh};
use tessella_engine::transform::Pose;

const FOLIAGE: Color = Color::new(0.0, 1.0, 0.0);
const TRUNK: Color = Color::new(0.6, 0.2, 0.2);
const WALL: Color = Color::new(0.45, 0.5, 0.5);
const ROOF: Color = Color::new(1.0, 0.0, 0.0);
const WINDOW: Color = Color::new(1.0, 0.9, 1.0);
const DOOR: Color = TRUNK;

/// The single primitive everything is built from: a right triangle with
/// vertices at (0,1), (0,0) and (1,1), drawn in the z = 0 plane.
fn unit_triangle() -> Result<TriangleMesh, MeshError> {
    TriangleMesh::new(vec![
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ])
}

fn tri(x: f32, y: f32, orientation: f32, scale: f32, color: Color) -> Result<Model, MeshError> {
    Ok(Model::leaf(
        Pose::new(Vec3::new(x, y, 0.0), orientation, scale),
        color,
        unit_triangle()?,
    ))
}

/// A fir tree: three stacked foliage triangles over a two-triangle trunk.
pub fn fir_tree(pose: Pose) -> Result<Model, MeshError> {
    Ok(Model::composite(
        pose,
        vec![
            tri(0.0, 0.0, -45.0, 0.5, FOLIAGE)?,
            tri(0.0, 0.25, -45.0, 0.5, FOLIAGE)?,
            tri(0.0, 0.5, -45.0, 0.5, FOLIAGE)?,
            tri(0.25, -0.25, 0.0, 0.25, TRUNK)?,
            tri(0.5, 0.0, -180.0, 0.25, TRUNK)?,
        ],
    ))
}

/// A house: two wall triangles, a roof, two two-triangle windows and a door.
pub fn house(pose: Pose) -> Result<Model, MeshError> {
    Ok(Model::composite(
        pose,
        vec![
            // walls
            tri(0.3, -0.75, 90.0, 1.0, WALL)?,
            tri(-0.7, 0.25, -90.0, 1.0, WALL)?,
            // roof
            tri(-0.9, 0.25, -45.0, 1.0, ROOF)?,
            // left window
            tri(-0.63, -0.25, 0.0, 0.4, WINDOW)?,
            tri(-0.23, 0.15, -180.0, 0.4, WINDOW)?,
            // right window
            tri(-0.15, -0.25, 0.0, 0.4, WINDOW)?,
            tri(0.25, 0.15, -180.0, 0.4, WINDOW)?,
            // door
            tri(-0.3, -0.75, 0.0, 0.3, DOOR)?,
            tri(0.0, -0.45, -180.0, 0.3, DOOR)?,
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessella_engine::scene::Painter;

    #[test]
    fn fir_tree_records_five_triangles() {
        let tree = fir_tree(Pose::IDENTITY).unwrap();
        let mut painter = Painter::new();
        painter.begin(Color::default());
        tree.draw(&mut painter);
        assert_eq!(painter.triangles().len(), 5);
        assert_eq!(painter.depth(), 0);
    }

    #[test]
    fn house_records_nine_triangles() {
        let house = house(Pose::IDENTITY).unwrap();
        let mut painter = Painter::new();
        painter.begin(Color::default());
        house.draw(&mut painter);
        assert_eq!(painter.triangles().len(), 9);
    }
}
