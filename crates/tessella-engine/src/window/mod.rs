//! Windowed platform implementation.
//!
//! Owns the `winit` event loop and window, wires them to the GPU layer, and
//! exposes the whole thing to the scene as a [`crate::scene::Platform`].

mod platform;

pub use platform::{WindowConfig, WindowPlatform};
