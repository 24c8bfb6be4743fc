
use coffee::input::{ButtonState, Event, Input, mouse};

use std::collections::HashSet;

use tictactoe::Layout;

///
/// An encapsulation of input mechanisms used by this game.
///
/// Besides the buttons currently held, the state records the buttons that went 
/// down since the last frame, so that a held button counts as a single click.
///
#[derive(Clone, Debug)]
pub struct InputState
{
    pub cursor_position: coffee::graphics::Point,
    pub mouse_buttons_pressed: HashSet<mouse::Button>,
    pub mouse_buttons_clicked: HashSet<mouse::Button>
}

impl Input for InputState 
{
    fn clear (& mut self)
    {
        self.mouse_buttons_clicked.clear();
    }

    fn new () -> InputState 
    {
        InputState 
        {
            cursor_position: coffee::graphics::Point::new(0.0, 0.0),
            mouse_buttons_pressed: HashSet::new(),
            mouse_buttons_clicked: HashSet::new()
        }
    }

    fn update (& mut self, event: Event)
    {
        match event 
        {
            Event::Mouse(mouse_event) => match mouse_event 
            {
                mouse::Event::CursorMoved { x, y } => 
                {
                    self.cursor_position = coffee::graphics::Point::new(x, y);
                },
                mouse::Event::Input { state, button } => match state 
                {
                    ButtonState::Pressed => 
                    {
                        // A button that is already held does not click again.
                        if self.mouse_buttons_pressed.insert(button)
                        {
                            self.mouse_buttons_clicked.insert(button);
                        }
                    },
                    ButtonState::Released => 
                    {
                        self.mouse_buttons_pressed.remove(& button);
                    }
                },
                _ => {}
            },
            _ => {}
        }
    }
}

impl InputState 
{
    ///
    /// Translates this frame's input into board terms: the cell under the cursor,
    /// a left click to place and a right click to reset.
    ///
    pub fn frame_input (& self, layout: & Layout) -> tictactoe::Input 
    {
        tictactoe::Input 
        {
            cursor: layout.position_at(self.cursor_position.x, self.cursor_position.y),
            primary: self.mouse_buttons_clicked.contains(& mouse::Button::Left),
            secondary: self.mouse_buttons_clicked.contains(& mouse::Button::Right)
        }
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;
    use tictactoe::Position;

    fn button (state: ButtonState, button: mouse::Button) -> Event 
    {
        Event::Mouse(mouse::Event::Input { state, button })
    }

    #[test]
    fn test_held_button_clicks_once () 
    {
        let layout = Layout::default();
        let mut input = InputState::new();
        input.update(Event::Mouse(mouse::Event::CursorMoved { x: 150.0, y: 250.0 }));
        input.update(button(ButtonState::Pressed, mouse::Button::Left));

        let frame = input.frame_input(& layout);
        assert_eq!(frame, tictactoe::Input::place(Position::new(2, 1)));

        input.clear();
        input.update(button(ButtonState::Pressed, mouse::Button::Left));
        assert!(! input.frame_input(& layout).primary);
        assert!(input.mouse_buttons_pressed.contains(& mouse::Button::Left));

        input.clear();
        input.update(button(ButtonState::Released, mouse::Button::Left));
        input.update(button(ButtonState::Pressed, mouse::Button::Left));
        assert!(input.frame_input(& layout).primary);
    }

    #[test]
    fn test_right_click_resets () 
    {
        let layout = Layout::default();
        let mut input = InputState::new();
        input.update(button(ButtonState::Pressed, mouse::Button::Right));

        let frame = input.frame_input(& layout);
        assert!(frame.secondary);
        assert!(! frame.primary);
        assert_eq!(frame.cursor, Position::new(0, 0));
    }
}
