use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

mod keymap;
mod router;

pub use keymap::{
    Action, GROW_FACTOR, KeyBinding, Keymap, MOVE_STEP, ROTATE_STEP, SHRINK_FACTOR,
};
pub use router::route_event;

/// Input the canvas reacts to, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed inside the canvas
    PointerDown { position: Pos2, button: PointerButton },
    /// Key was pressed (including auto-repeat)
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    canvas_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the screen rectangle the canvas occupies
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// Convert a screen position to canvas coordinates, or `None` if it is outside the canvas
    fn to_canvas(&self, pos: Pos2) -> Option<Pos2> {
        match self.canvas_rect {
            Some(rect) if rect.contains(pos) => Some(Pos2::ZERO + (pos - rect.min)),
            Some(_) => None,
            None => Some(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.translate_events(&input.events))
    }

    pub fn translate_events(&self, raw: &[egui::Event]) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => {
                    if let Some(position) = self.to_canvas(*pos) {
                        events.push(InputEvent::PointerDown {
                            position,
                            button: *button,
                        });
                    }
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => events.push(InputEvent::KeyDown {
                    key: *key,
                    modifiers: *modifiers,
                }),
                _ => {}
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(pos: Pos2) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn pointer_positions_become_canvas_local() {
        let mut handler = InputHandler::new();
        handler.set_canvas_rect(Rect::from_min_size(Pos2::new(8.0, 8.0), egui::vec2(100.0, 100.0)));

        let events = handler.translate_events(&[press(Pos2::new(18.0, 28.0)), press(Pos2::new(500.0, 5.0))]);
        assert_eq!(
            events,
            vec![InputEvent::PointerDown {
                position: Pos2::new(10.0, 20.0),
                button: PointerButton::Primary,
            }]
        );
    }

    #[test]
    fn releases_are_ignored() {
        let handler = InputHandler::new();
        let release = egui::Event::PointerButton {
            pos: Pos2::new(1.0, 1.0),
            button: PointerButton::Primary,
            pressed: false,
            modifiers: Modifiers::NONE,
        };
        assert!(handler.translate_events(&[release]).is_empty());
    }
}
