use crate::camera::Direction;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Forward,
    Backward,
    Left,
    Right,
    Escape,
}

impl Button {
    /// Camera direction bound to this button, if any
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Button::Forward => Some(Direction::Forward),
            Button::Backward => Some(Direction::Backward),
            Button::Left => Some(Direction::Left),
            Button::Right => Some(Direction::Right),
            Button::Escape => None,
        }
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Camera directions to apply this frame, in a fixed order
    fn movement(&self) -> Vec<Direction> {
        [Button::Forward, Button::Backward, Button::Left, Button::Right]
            .into_iter()
            .filter(|button| self.is_down(*button))
            .filter_map(Button::direction)
            .collect()
    }
}
