use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Pixels per scroll "line" when the platform reports pixel deltas
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Last known cursor position (window pixels)
    cursor_position: Option<(f32, f32)>,
    /// Cursor positions seen since the last drain
    cursor_moves: Vec<(f32, f32)>,
    /// Vertical scroll in lines since the last drain
    scroll: f32,
    /// Cursor driven by raw mouse motion while the pointer is grabbed
    virtual_cursor: bool,
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed => self.press(button),
                            ElementState::Released => self.release(button),
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } if !self.virtual_cursor => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
                };
                self.scrolled(lines);
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Raw mouse motion; only used while the virtual cursor is active
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.virtual_cursor {
                self.mouse_moved(*dx as f32, *dy as f32);
            }
        }
    }

    /// Switch to an unbounded cursor fed by mouse motion, starting at `seed`.
    ///
    /// A grabbed pointer stops producing useful window positions, so motion
    /// deltas are accumulated into absolute coordinates instead.
    pub fn use_virtual_cursor(&mut self, seed: (f32, f32)) {
        self.virtual_cursor = true;
        self.cursor_position = Some(seed);
    }

    pub fn press(&mut self, button: Button) {
        self.pressed_keys.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.pressed_keys.remove(&button);
    }

    /// Drop every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor_position = Some((x, y));
        self.cursor_moves.push((x, y));
    }

    /// Move the cursor by a relative offset
    pub fn mouse_moved(&mut self, dx: f32, dy: f32) {
        let (x, y) = self.cursor_position.unwrap_or((0.0, 0.0));
        self.cursor_moved(x + dx, y + dy);
    }

    pub fn scrolled(&mut self, lines: f32) {
        self.scroll += lines;
    }

    /// Drain cursor positions in the order they arrived
    pub fn take_cursor_moves(&mut self) -> Vec<(f32, f32)> {
        std::mem::take(&mut self.cursor_moves)
    }

    /// Drain accumulated scroll
    pub fn take_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll)
    }

    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor_position
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::Forward),
            KeyCode::KeyS => Some(Button::Backward),
            KeyCode::KeyA => Some(Button::Left),
            KeyCode::KeyD => Some(Button::Right),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Direction;

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::Forward));
        assert!(controller.movement().is_empty());
        assert_eq!(controller.cursor_position(), None);
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyW), Some(Button::Forward));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyS), Some(Button::Backward));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyA), Some(Button::Left));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyD), Some(Button::Right));
        assert_eq!(WinitController::keycode_to_button(KeyCode::Escape), Some(Button::Escape));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_press_is_idempotent() {
        let mut controller = WinitController::new();
        controller.press(Button::Forward);
        controller.press(Button::Forward);
        assert_eq!(controller.movement(), vec![Direction::Forward]);

        controller.release(Button::Forward);
        assert!(!controller.is_down(Button::Forward));
        assert!(controller.movement().is_empty());
    }

    #[test]
    fn test_escape_is_tracked_but_not_movement() {
        let mut controller = WinitController::new();
        controller.press(Button::Escape);

        assert!(controller.is_down(Button::Escape));
        assert!(controller.movement().is_empty());
    }

    #[test]
    fn test_movement_from_pressed_keys() {
        let mut controller = WinitController::new();
        controller.press(Button::Left);
        controller.press(Button::Backward);
        assert_eq!(controller.movement(), vec![Direction::Backward, Direction::Left]);

        controller.release_all();
        assert!(controller.movement().is_empty());
    }

    #[test]
    fn test_cursor_moves_drain_in_order() {
        let mut controller = WinitController::new();
        controller.cursor_moved(10.0, 20.0);
        controller.cursor_moved(15.0, 25.0);

        assert_eq!(controller.take_cursor_moves(), vec![(10.0, 20.0), (15.0, 25.0)]);
        assert!(controller.take_cursor_moves().is_empty());
        assert_eq!(controller.cursor_position(), Some((15.0, 25.0)));
    }

    #[test]
    fn test_virtual_cursor_accumulates_motion() {
        let mut controller = WinitController::new();
        controller.use_virtual_cursor((300.0, 300.0));
        controller.mouse_moved(10.0, -5.0);
        controller.mouse_moved(2.0, 1.0);

        assert_eq!(controller.take_cursor_moves(), vec![(310.0, 295.0), (312.0, 296.0)]);
        assert_eq!(controller.cursor_position(), Some((312.0, 296.0)));
    }

    #[test]
    fn test_scroll_accumulates_and_resets() {
        let mut controller = WinitController::new();
        controller.scrolled(1.0);
        controller.scrolled(2.5);

        assert_eq!(controller.take_scroll(), 3.5);
        assert_eq!(controller.take_scroll(), 0.0);
    }
}
