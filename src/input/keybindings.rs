//! Default keybindings for the application.
//!
//! Maps key combinations to commands. The grid and the count prompt each have
//! their own table; the prompt additionally turns unbound characters into
//! [`Command::CountInputChar`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Which bindings table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    #[default]
    Grid,
    CountPrompt,
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active
    pub global: HashMap<KeyCombo, Command>,
    /// Active while the table has focus
    pub grid: HashMap<KeyCombo, Command>,
    /// Active while the count prompt is open
    pub count_prompt: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            grid: HashMap::new(),
            count_prompt: HashMap::new(),
        };

        config
            .global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        config.setup_grid_bindings();
        config.setup_count_prompt_bindings();
        config
    }

    fn setup_grid_bindings(&mut self) {
        let grid = &mut self.grid;
        grid.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);

        grid.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        grid.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        grid.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        grid.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);

        grid.insert(KeyCombo::plain(KeyCode::Right), Command::NextPage);
        grid.insert(KeyCombo::plain(KeyCode::PageDown), Command::NextPage);
        grid.insert(KeyCombo::plain(KeyCode::Char('n')), Command::NextPage);
        grid.insert(KeyCombo::plain(KeyCode::Left), Command::PrevPage);
        grid.insert(KeyCombo::plain(KeyCode::PageUp), Command::PrevPage);
        grid.insert(KeyCombo::plain(KeyCode::Char('p')), Command::PrevPage);
        grid.insert(KeyCombo::plain(KeyCode::Home), Command::FirstPage);
        grid.insert(KeyCombo::plain(KeyCode::End), Command::LastPage);
        grid.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Reload);

        grid.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ToggleRow);
        grid.insert(KeyCombo::plain(KeyCode::Char('a')), Command::TogglePage);
        grid.insert(KeyCombo::plain(KeyCode::Char('c')), Command::ClearSelection);
        grid.insert(KeyCombo::plain(KeyCode::Char('s')), Command::OpenCountInput);
        grid.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelBulkSelect);
    }

    fn setup_count_prompt_bindings(&mut self) {
        let prompt = &mut self.count_prompt;
        prompt.insert(KeyCombo::plain(KeyCode::Enter), Command::CountInputSubmit);
        prompt.insert(KeyCombo::plain(KeyCode::Esc), Command::CountInputCancel);
        prompt.insert(
            KeyCombo::plain(KeyCode::Backspace),
            Command::CountInputBackspace,
        );
    }

    /// Resolve a key event to a command for the given mode.
    pub fn dispatch(&self, key: KeyEvent, mode: InputMode) -> Option<Command> {
        // Terminals differ on whether Shift is reported with uppercase chars
        let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
        let combo = KeyCombo::new(key.code, modifiers);

        if let Some(cmd) = self.global.get(&combo) {
            return Some(cmd.clone());
        }

        match mode {
            InputMode::Grid => self.grid.get(&combo).cloned(),
            InputMode::CountPrompt => {
                if let Some(cmd) = self.count_prompt.get(&combo) {
                    return Some(cmd.clone());
                }
                match key.code {
                    KeyCode::Char(c)
                        if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                    {
                        Some(Command::CountInputChar(c))
                    }
                    _ => Some(Command::Noop),
                }
            }
        }
    }
}
