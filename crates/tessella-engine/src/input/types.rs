/// Keyboard key identifier.
///
/// Intentionally small: only the keys the scene's closed mapping recognizes,
/// plus `Unknown` for everything else with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Q,

    Digit0,
    Digit1,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

/// Input events delivered to the scene.
///
/// The event source is infinite across the process lifetime but finite per
/// poll; events it cannot classify arrive as `Other` and are ignored.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputEvent {
    /// Window close request or platform quit signal.
    Quit,
    /// A key went down (key repeats are filtered out by the platform layer).
    KeyPressed(Key),
    /// Anything else; carries no payload and has no effect.
    Other,
}
