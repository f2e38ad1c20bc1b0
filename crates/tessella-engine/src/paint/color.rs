/// RGB fill color.
///
/// Components are nominally in `[0, 1]` but are stored uninterpreted:
/// out-of-range values pass through the scene layer unchanged and are only
/// clamped at GPU upload, matching fixed-function GL color handling.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Returns the color with every component clamped to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Color {
        Color::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_components_pass_through() {
        let c = Color::new(1.0, 0.9, 5.0);
        assert_eq!(c.b, 5.0);
    }

    #[test]
    fn clamped_brings_components_into_range() {
        let c = Color::new(-0.5, 0.5, 5.0).clamped();
        assert_eq!(c, Color::new(0.0, 0.5, 1.0));
    }
}
