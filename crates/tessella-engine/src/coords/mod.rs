//! Coordinate types.
//!
//! Scene geometry lives in GL-style clip coordinates: x and y in [-1, 1],
//! z carried along but unused by the 2D camera except as a depth offset.

mod vec3;

pub use vec3::Vec3;
