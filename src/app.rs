//! Application state and key handling

use crate::config::TuiConfig;
use crate::engine::{FormValidationEngine, InputEvent};
use crate::state::{FormScreen, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// The validation state machine
    pub engine: FormValidationEngine,
    /// Renderable screen state; receives the engine's commands
    pub screen: FormScreen,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        Ok(Self {
            engine: FormValidationEngine::new()?,
            screen: FormScreen::new(),
            config,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.screen.view {
            View::Form => self.handle_form_key(key),
            View::Confirmation => self.handle_confirmation_key(key),
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.blur_focused_field();
                self.screen.next_focus();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.blur_focused_field();
                self.screen.prev_focus();
            }
            KeyCode::Enter => {
                if self.screen.is_register_focused() {
                    self.engine
                        .handle_event(InputEvent::SubmitRequested, &mut self.screen);
                } else {
                    // Enter on a field behaves like Tab
                    self.blur_focused_field();
                    self.screen.next_focus();
                }
            }
            KeyCode::Backspace => {
                self.screen.pop_char();
            }
            KeyCode::Char(c) => {
                self.screen.push_char(c);
            }
            _ => {}
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            self.quit = true;
        }
    }

    /// Fire the focus-lost event for the focused field, if any.
    /// This is the only place validation is triggered: on blur, never per keystroke.
    fn blur_focused_field(&mut self) {
        if let Some(id) = self.screen.focused_field() {
            let text = self.screen.buffer(id).to_string();
            self.engine
                .handle_event(InputEvent::FieldFocusLost { id, text }, &mut self.screen);
        }
    }
}
