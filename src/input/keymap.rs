//! Keyboard shortcuts for each layout.
//!
//! Bindings are checked in order and the first match wins, so a plain `S`
//! (move down) never shadows `Ctrl+S` (export) and vice versa.

use egui::{Color32, Key, Modifiers, Vec2};

use crate::palette;
use crate::tools::Tool;

pub const MOVE_STEP: f32 = 5.0;
pub const ROTATE_STEP: f32 = 5.0;
pub const GROW_FACTOR: f32 = 1.1;
pub const SHRINK_FACTOR: f32 = 0.9;

/// Everything a key press can ask for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    SelectTool(Tool),
    SelectColor(Color32),
    Resize(f32),
    Move(Vec2),
    Rotate(f32),
    Delete,
    BringToFront,
    SendToBack,
    Duplicate,
    Invert,
    Export,
}

impl Action {
    /// Tool and color picks work at any time; everything else acts on the selected shape.
    pub fn requires_selection(&self) -> bool {
        !matches!(self, Action::SelectTool(_) | Action::SelectColor(_))
    }
}

/// A key plus whether the platform command modifier (Ctrl, or Cmd on macOS) is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: Key,
    pub command: bool,
}

impl KeyBinding {
    pub const fn plain(key: Key) -> Self {
        Self { key, command: false }
    }

    pub const fn command(key: Key) -> Self {
        Self { key, command: true }
    }

    /// Ctrl counts as the command modifier everywhere, so Ctrl+S on macOS
    /// never falls through to a plain `S` binding. Shift and Alt are ignored.
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        self.key == key && self.command == (modifiers.command || modifiers.ctrl)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, Action)>,
}

impl Keymap {
    pub fn new(bindings: Vec<(KeyBinding, Action)>) -> Self {
        Self { bindings }
    }

    /// Shortcuts of the full layout. Every one of them needs a selected shape.
    pub fn full() -> Self {
        use KeyBinding as K;

        let mut bindings = resize_bindings();
        bindings.push((K::plain(Key::Delete), Action::Delete));
        for (arrow, letter, delta) in [
            (Key::ArrowLeft, Key::A, Vec2::new(-MOVE_STEP, 0.0)),
            (Key::ArrowRight, Key::D, Vec2::new(MOVE_STEP, 0.0)),
            (Key::ArrowUp, Key::W, Vec2::new(0.0, -MOVE_STEP)),
            (Key::ArrowDown, Key::S, Vec2::new(0.0, MOVE_STEP)),
        ] {
            bindings.push((K::plain(arrow), Action::Move(delta)));
            bindings.push((K::plain(letter), Action::Move(delta)));
        }
        bindings.extend([
            (K::plain(Key::Q), Action::Rotate(-ROTATE_STEP)),
            (K::plain(Key::E), Action::Rotate(ROTATE_STEP)),
            (K::plain(Key::F), Action::BringToFront),
            (K::plain(Key::B), Action::SendToBack),
            (K::plain(Key::C), Action::Duplicate),
            (K::plain(Key::I), Action::Invert),
            (K::command(Key::S), Action::Export),
        ]);
        Self::new(bindings)
    }

    /// Shortcuts of the compact layout: digit keys pick tools and R/G/B pick colors.
    pub fn compact() -> Self {
        use KeyBinding as K;

        let mut bindings = vec![
            (K::plain(Key::Num1), Action::SelectTool(Tool::Circle)),
            (K::plain(Key::Num2), Action::SelectTool(Tool::Rectangle)),
            (K::plain(Key::Num3), Action::SelectTool(Tool::Triangle)),
            (K::plain(Key::R), Action::SelectColor(palette::RED)),
            (K::plain(Key::G), Action::SelectColor(palette::GREEN)),
            (K::plain(Key::B), Action::SelectColor(palette::BLUE)),
        ];
        bindings.extend(resize_bindings());
        bindings.extend([
            (K::plain(Key::D), Action::Delete),
            (K::plain(Key::ArrowLeft), Action::Move(Vec2::new(-MOVE_STEP, 0.0))),
            (K::plain(Key::ArrowRight), Action::Move(Vec2::new(MOVE_STEP, 0.0))),
            (K::plain(Key::ArrowUp), Action::Move(Vec2::new(0.0, -MOVE_STEP))),
            (K::plain(Key::ArrowDown), Action::Move(Vec2::new(0.0, MOVE_STEP))),
        ]);
        Self::new(bindings)
    }

    pub fn lookup(&self, key: Key, modifiers: Modifiers) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(key, modifiers))
            .map(|(_, action)| *action)
    }
}

// `+` arrives as Plus from the keypad and as Equals from the main row.
fn resize_bindings() -> Vec<(KeyBinding, Action)> {
    vec![
        (KeyBinding::plain(Key::Plus), Action::Resize(GROW_FACTOR)),
        (KeyBinding::plain(Key::Equals), Action::Resize(GROW_FACTOR)),
        (KeyBinding::plain(Key::Minus), Action::Resize(SHRINK_FACTOR)),
    ]
}
