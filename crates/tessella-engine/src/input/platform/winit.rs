use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputEvent, Key};

/// Translates a winit `WindowEvent` into a scene input event.
///
/// Returns `None` for window-management events the platform layer handles
/// itself (resize, redraw, focus, ...). Key repeats and key releases are
/// filtered here: the scene's mapping is per-press.
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Quit),

        WindowEvent::KeyboardInput { event, .. } => {
            if event.state != ElementState::Pressed || event.repeat {
                return None;
            }
            Some(InputEvent::KeyPressed(map_key(event.physical_key)))
        }

        _ => None,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Space => Key::Space,

            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            KeyCode::KeyQ => Key::Q,

            KeyCode::Digit0 => Key::Digit0,
            KeyCode::Digit1 => Key::Digit1,

            other => Key::Unknown(other as u32),
        },

        // winit 0.30 gives NativeKeyCode here; no stable numeric is guaranteed.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
