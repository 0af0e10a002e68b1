//! Application state and core logic

use crate::config::TuiConfig;
use crate::registrar::{LoggingRegistrar, Registrar};
use crate::schema;
use crate::state::{AppState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Receiver for validated submissions
    registrar: Box<dyn Registrar>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance with the default registrar
    pub fn new(config: TuiConfig) -> Self {
        Self::with_registrar(config, Box::new(LoggingRegistrar::new()))
    }

    /// Create a new App instance with a specific registrar
    pub fn with_registrar(config: TuiConfig, registrar: Box<dyn Registrar>) -> Self {
        let state = AppState::new(config.subscribe_by_default());
        Self {
            state,
            config,
            registrar,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Register => self.handle_register_key(key).await,
            View::Confirmation => {
                self.handle_confirmation_key(key);
                Ok(())
            }
        }
    }

    /// Handle keys in the Register view
    async fn handle_register_key(&mut self, key: KeyEvent) -> Result<()> {
        // Check if we're on the Clear/Submit row
        let on_buttons = self.state.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if on_buttons => self.state.form.prev_button(),
            KeyCode::Right if on_buttons => self.state.form.next_button(),
            // Enter on the buttons row triggers the selected button
            // Button order: 0=Clear, 1=Submit
            KeyCode::Enter if on_buttons => match self.state.form.selected_button {
                0 => self.reset(),
                1 => self.submit().await,
                _ => {}
            },
            // Submit shortcut (works from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Esc => self.reset(),
            // Form field input (only when not on the buttons row)
            KeyCode::Char(c) if !on_buttons => {
                self.input_char(c, key.modifiers.contains(KeyModifiers::SHIFT));
            }
            KeyCode::Backspace if !on_buttons => self.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Confirmation view
    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n') => {
                self.reset();
                self.state.current_view = View::Register;
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Type one character into the active field.
    ///
    /// Touches only that field; previously reported errors stay on
    /// screen until the next submit.
    fn input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        if let Some(field) = self.state.form.active_field_mut() {
            if field.push_char(ch) {
                self.state.mark_edited();
            }
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.state.form.active_field_mut() {
            if field.pop_char() {
                self.state.mark_edited();
            }
        }
    }

    /// Blank the form and start over
    fn reset(&mut self) {
        self.state.reset_form(self.config.subscribe_by_default());
        self.status_message = None;
    }

    /// Validate the current values; hand them to the registrar when
    /// they pass, otherwise rebuild the error map.
    async fn submit(&mut self) {
        match schema::validate(&self.state.form.values()) {
            Err(failures) => {
                debug!(count = failures.len(), "validation failed");
                self.state.apply_failures(&failures);
                self.status_message = None;
            }
            Ok(registration) => {
                self.state.apply_success();
                match self.registrar.register(&registration).await {
                    Ok(receipt) => {
                        self.state.last_receipt = Some(receipt);
                        self.state.current_view = View::Confirmation;
                        self.status_message = Some("Registration submitted!".to_string());
                    }
                    Err(err) => {
                        warn!(error = %err, "submission rejected downstream");
                        self.status_message =
                            Some("Submission failed, please try again".to_string());
                    }
                }
            }
        }
    }
}
