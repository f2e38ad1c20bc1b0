//! Tessella engine crate.
//!
//! Renders 2D scenes of hierarchical triangle-mesh models under a movable
//! camera. The core is CPU-side: models record world-space triangles into a
//! [`scene::Painter`] through an explicit transform stack; the platform layer
//! (winit window + wgpu renderer) consumes the recorded frame.

pub mod coords;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod transform;
pub mod window;
