//! GPU rendering subsystem.
//!
//! Consumes the scene's recorded triangle stream and issues wgpu commands.
//! Geometry arrives already in clip space (the scene authors in GL-style
//! normalized coordinates), so the shader is a pass-through with a z remap.

mod ctx;
mod triangles;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangles::TriangleRenderer;
