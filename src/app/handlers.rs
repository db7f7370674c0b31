//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

/// What the run loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Handled,
    /// A new cycle was started; pick up its subscription
    Reloaded,
    Quit,
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Ignored;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                KeyOutcome::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
                KeyOutcome::Quit
            }
            KeyCode::Char('r') => {
                self.activate();
                KeyOutcome::Reloaded
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_down();
                KeyOutcome::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_up();
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }
}
