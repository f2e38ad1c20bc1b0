//! GPU device + surface management.
//!
//! Responsible for creating the wgpu Device/Queue, configuring the window
//! surface, and acquiring per-frame encoders and views.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
