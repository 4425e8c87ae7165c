//! Input handling module for keyboard and command processing.
//!
//! All key input is:
//!
//! 1. Translated to a [`Command`] by [`KeybindingConfig::dispatch`]
//! 2. Executed against the [`App`] by [`App::execute_command`]
//!
//! ```text
//! KeyEvent -> KeybindingConfig::dispatch() -> Command -> App mutation
//! ```
//!
//! # Example
//!
//! ```ignore
//! use artgrid::input::KeybindingConfig;
//!
//! let bindings = KeybindingConfig::new();
//! if let Some(cmd) = bindings.dispatch(key_event, app.input_mode()) {
//!     app.execute_command(cmd);
//! }
//! ```

pub mod command;
pub mod count_input;
pub mod keybindings;

pub use command::Command;
pub use count_input::{parse_count, BulkCountInput, CountInputError};
pub use keybindings::{InputMode, KeyCombo, KeybindingConfig};

use crate::app::App;

impl App {
    /// Which bindings table applies right now.
    pub fn input_mode(&self) -> InputMode {
        if self.count_input.is_some() {
            InputMode::CountPrompt
        } else {
            InputMode::Grid
        }
    }

    /// Execute a command. Returns `true` if it was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::trace!(?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        match cmd {
            Command::Quit => self.should_quit = true,

            Command::MoveUp => self.move_focus_up(),
            Command::MoveDown => self.move_focus_down(),
            Command::NextPage => {
                self.pagination.next_page();
            }
            Command::PrevPage => {
                self.pagination.prev_page();
            }
            Command::FirstPage => {
                self.pagination.first_page();
            }
            Command::LastPage => {
                self.pagination.last_page();
            }
            Command::Reload => {
                self.pagination.reload();
            }

            Command::ToggleRow => self.toggle_focused_row(),
            Command::TogglePage => self.on_toggle_page(),
            Command::ClearSelection => self.on_clear_selection(),
            Command::OpenCountInput => self.open_count_input(),
            Command::CancelBulkSelect => self.on_cancel_bulk_select(),

            Command::CountInputChar(c) => {
                if let Some(input) = self.count_input.as_mut() {
                    input.push(c);
                }
            }
            Command::CountInputBackspace => {
                if let Some(input) = self.count_input.as_mut() {
                    input.backspace();
                }
            }
            Command::CountInputSubmit => self.submit_count_input(),
            Command::CountInputCancel => self.close_count_input(),

            Command::Noop => return false,
        }
        true
    }
}
