/// Polygon fill mode: solid triangles or outline-only rendering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FillMode {
    #[default]
    Filled,
    Outline,
}
