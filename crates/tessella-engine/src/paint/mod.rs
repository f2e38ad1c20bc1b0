//! Fill color and polygon fill mode.

mod color;
mod fill;

pub use color::Color;
pub use fill::FillMode;
