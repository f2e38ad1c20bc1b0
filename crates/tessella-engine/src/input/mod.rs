//! Platform-agnostic input events.
//!
//! The platform layer translates window-system events into these; the scene
//! only ever sees this closed vocabulary.

pub mod platform;
mod types;

pub use types::{InputEvent, Key};
