use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, ModifiersState};

use crate::controllers::follow::{Modifiers, PointerButton};
use crate::core::data::Vec2;

/// Pixel-precise scroll deltas (touchpads) are converted to wheel lines at
/// this rate.
pub const PIXELS_PER_SCROLL_LINE: f64 = 20.0;

/// Pointer and modifier state tracked between winit events.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInputState {
    cursor: Vec2,
    pressed: bool,
    modifiers: Modifiers,
}

impl PointerInputState {
    pub fn set_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers {
            shift: state.shift_key(),
            control: state.control_key(),
        };
    }

    /// Tracks the pressed flag. Returns the button on a press so the caller
    /// can forward it.
    pub fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<PointerButton> {
        match state {
            ElementState::Pressed => {
                self.pressed = true;
                Some(pointer_button(button))
            }
            ElementState::Released => {
                self.pressed = false;
                None
            }
        }
    }

    pub fn move_cursor(&mut self, logical_position: Vec2) {
        self.cursor = logical_position;
    }

    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[must_use]
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        _ => PointerButton::Other,
    }
}

/// Wheel movement in lines, positive when scrolling up or away from the user.
#[must_use]
pub fn scroll_amount(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_SCROLL_LINE,
    }
}

/// Maps the physical keys the controller listens for to its key characters.
#[must_use]
pub fn key_char(code: KeyCode) -> Option<char> {
    match code {
        KeyCode::KeyQ => Some('q'),
        KeyCode::KeyC => Some('c'),
        KeyCode::Space => Some(' '),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn press_and_release_track_pressed_flag() {
        let mut input = PointerInputState::default();

        let pressed = input.handle_mouse_input(ElementState::Pressed, MouseButton::Right);
        assert_eq!(pressed, Some(PointerButton::Right));
        assert!(input.pressed());

        let released = input.handle_mouse_input(ElementState::Released, MouseButton::Right);
        assert_eq!(released, None);
        assert!(!input.pressed());
    }

    #[test]
    fn middle_button_maps_to_other() {
        assert_eq!(pointer_button(MouseButton::Middle), PointerButton::Other);
        assert_eq!(pointer_button(MouseButton::Left), PointerButton::Left);
    }

    #[test]
    fn modifiers_follow_winit_state() {
        let mut input = PointerInputState::default();

        input.set_modifiers(ModifiersState::SHIFT);
        assert_eq!(input.modifiers(), Modifiers::SHIFT);

        input.set_modifiers(ModifiersState::CONTROL | ModifiersState::ALT);
        assert_eq!(input.modifiers(), Modifiers::CONTROL);

        input.set_modifiers(ModifiersState::empty());
        assert_eq!(input.modifiers(), Modifiers::NONE);
    }

    #[test]
    fn cursor_position_is_stored() {
        let mut input = PointerInputState::default();

        input.move_cursor(Vec2::new(120.5, 33.0));

        assert_eq!(input.cursor(), Vec2::new(120.5, 33.0));
    }

    #[test]
    fn line_and_pixel_scroll_amounts() {
        assert_eq!(scroll_amount(MouseScrollDelta::LineDelta(0.0, -2.0)), -2.0);
        assert_eq!(
            scroll_amount(MouseScrollDelta::PixelDelta(PhysicalPosition::new(5.0, 40.0))),
            2.0
        );
    }

    #[test]
    fn only_control_keys_map_to_chars() {
        assert_eq!(key_char(KeyCode::KeyQ), Some('q'));
        assert_eq!(key_char(KeyCode::KeyC), Some('c'));
        assert_eq!(key_char(KeyCode::Space), Some(' '));
        assert_eq!(key_char(KeyCode::KeyW), None);
    }

    #[test]
    fn reset_clears_all_state() {
        let mut input = PointerInputState::default();
        input.handle_mouse_input(ElementState::Pressed, MouseButton::Left);
        input.set_modifiers(ModifiersState::SHIFT);
        input.move_cursor(Vec2::new(1.0, 2.0));

        input.reset();

        assert_eq!(input, PointerInputState::default());
    }
}
