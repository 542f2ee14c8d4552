//! Application state and core logic

use crate::config::AppConfig;
use crate::state::{PendingFallback, Severity, SubmitStatus, UiState};
use crate::submit::SubmitTransport;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: UiState,
    /// Persisted user preferences
    pub config: AppConfig,
    /// Transport used for form submission
    transport: Box<dyn SubmitTransport>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: AppConfig, transport: Box<dyn SubmitTransport>) -> Self {
        let state = UiState {
            theme: config.theme(),
            ..Default::default()
        };
        Self {
            state,
            config,
            transport,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Esc closes the notification first, then the app
            KeyCode::Esc => {
                if self.state.notification.is_some() {
                    self.state.dismiss_notification();
                } else {
                    self.quit = true;
                }
            }
            KeyCode::Tab => self.state.form.focus_next(),
            KeyCode::BackTab => self.state.form.focus_prev(),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_theme();
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.dismiss_notification();
            }
            KeyCode::Enter => {
                if self.state.form.is_submit_row_active() {
                    self.submit_form().await;
                } else if let Some(field) = self.state.form.active_field_mut() {
                    if field.is_multiline {
                        field.push_char('\n');
                    } else {
                        self.state.form.focus_next();
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Toggle the theme and persist the preference
    pub fn toggle_theme(&mut self) {
        let theme = self.state.toggle_theme();
        self.config.theme = Some(theme);
        if let Err(err) = self.config.save() {
            tracing::warn!("failed to persist theme preference: {err}");
        }
    }

    /// Run one submit cycle: validate, send, and resolve the outcome.
    ///
    /// The submit control is restored to Idle before this returns on both
    /// paths; the offline fallback resolves later via [`App::tick`].
    pub async fn submit_form(&mut self) {
        if self.state.submit_status == SubmitStatus::Sending {
            return;
        }
        if !self.state.form.validate_all() {
            // Inline annotations were set; nothing leaves the validator
            return;
        }

        self.state.submit_status = SubmitStatus::Sending;
        let attempt = self.state.form.attempt();

        match self.transport.send(&attempt).await {
            Ok(()) => {
                self.state
                    .notify("Message sent successfully!", Severity::Success);
                self.state.show_review(&attempt);
                self.state.form.reset();
            }
            Err(err) => {
                // The raw error is diagnostics-only; the user gets a generic
                // warning and a guaranteed demo outcome
                tracing::error!("submission failed, entering offline fallback: {err}");
                self.state.notify(
                    "Could not send online. Showing demo submission...",
                    Severity::Warning,
                );
                self.state
                    .pending_fallbacks
                    .push(PendingFallback::new(attempt));
            }
        }

        self.state.submit_status = SubmitStatus::Idle;
    }

    /// Advance timer-driven state: notification expiry and due fallbacks
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        self.state.expire_notification_at(now);

        for fallback in self.state.take_due_fallbacks_at(now) {
            self.state
                .notify("Message sent successfully! (Demo)", Severity::Success);
            self.state.show_review(&fallback.attempt);
            self.state.form.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FALLBACK_DELAY;
    use crate::submit::{MockSubmitTransport, SubmitError};
    use reqwest::StatusCode;
    use std::time::Duration;

    fn app_with(transport: MockSubmitTransport) -> App {
        App::new(AppConfig::default(), Box::new(transport))
    }

    fn fill_form(app: &mut App) {
        app.state.form.name.set_value("Ada Lovelace");
        app.state.form.email.set_value("ada@example.com");
        app.state.form.subject.set_value("Greetings");
        app.state.form.message.set_value("A message long enough to pass");
    }

    fn form_is_empty(app: &App) -> bool {
        (0..crate::state::FIELD_COUNT)
            .all(|i| app.state.form.get_field(i).unwrap().value().is_empty())
    }

    mod submit_success {
        use super::*;

        #[tokio::test]
        async fn test_success_notifies_renders_review_and_resets() {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_send()
                .withf(|attempt| attempt.name == "Ada Lovelace")
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(transport);
            fill_form(&mut app);

            app.submit_form().await;

            let notification = app.state.notification.as_ref().unwrap();
            assert_eq!(notification.severity, Severity::Success);
            assert_eq!(notification.message, "Message sent successfully!");
            assert_eq!(app.state.review.as_ref().unwrap().name, "Ada Lovelace");
            assert!(form_is_empty(&app));
            assert!(app.state.pending_fallbacks.is_empty());
            assert_eq!(app.state.submit_status, SubmitStatus::Idle);
        }

        #[tokio::test]
        async fn test_review_panel_escapes_markup() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_send().returning(|_| Ok(()));
            let mut app = app_with(transport);
            fill_form(&mut app);
            app.state.form.message.set_value("<script>x</script>");

            app.submit_form().await;

            assert_eq!(
                app.state.review.as_ref().unwrap().message,
                "&lt;script&gt;x&lt;/script&gt;"
            );
        }
    }

    mod submit_invalid {
        use super::*;

        #[tokio::test]
        async fn test_invalid_form_never_reaches_transport() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_send().times(0);
            let mut app = app_with(transport);
            fill_form(&mut app);
            app.state.form.email.set_value("a@b");

            app.submit_form().await;

            assert_eq!(app.state.submit_status, SubmitStatus::Idle);
            assert!(app.state.notification.is_none());
            assert!(app.state.review.is_none());
            assert!(app.state.form.email.annotation().is_some());
            // Valid fields keep their values for correction
            assert_eq!(app.state.form.name.value(), "Ada Lovelace");
        }
    }

    mod offline_fallback {
        use super::*;

        fn failing_transport(calls: usize) -> MockSubmitTransport {
            let mut transport = MockSubmitTransport::new();
            transport
                .expect_send()
                .times(calls)
                .returning(|_| Err(SubmitError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
            transport
        }

        #[tokio::test]
        async fn test_failure_warns_immediately_and_schedules_fallback() {
            let mut app = app_with(failing_transport(1));
            fill_form(&mut app);

            app.submit_form().await;

            let notification = app.state.notification.as_ref().unwrap();
            assert_eq!(notification.severity, Severity::Warning);
            assert!(app.state.review.is_none());
            assert_eq!(app.state.pending_fallbacks.len(), 1);
            // Control re-enabled before the fallback fires
            assert_eq!(app.state.submit_status, SubmitStatus::Idle);
            // Form not yet reset
            assert_eq!(app.state.form.name.value(), "Ada Lovelace");
        }

        #[tokio::test]
        async fn test_due_fallback_yields_demo_success() {
            let mut app = app_with(failing_transport(1));
            fill_form(&mut app);
            app.submit_form().await;

            // Before the delay elapses nothing resolves
            app.tick_at(Instant::now());
            assert_eq!(app.state.pending_fallbacks.len(), 1);

            app.tick_at(Instant::now() + FALLBACK_DELAY + Duration::from_millis(10));

            let notification = app.state.notification.as_ref().unwrap();
            assert_eq!(notification.severity, Severity::Success);
            assert_eq!(notification.message, "Message sent successfully! (Demo)");
            assert_eq!(app.state.review.as_ref().unwrap().name, "Ada Lovelace");
            assert!(form_is_empty(&app));
            assert!(app.state.pending_fallbacks.is_empty());
        }

        #[tokio::test]
        async fn test_resubmission_does_not_cancel_pending_fallback() {
            let mut app = app_with(failing_transport(2));

            fill_form(&mut app);
            app.submit_form().await;
            fill_form(&mut app);
            app.state.form.name.set_value("Second Sender");
            app.submit_form().await;

            assert_eq!(app.state.pending_fallbacks.len(), 2);

            // Both fire; the later submission wins the single review slot
            app.tick_at(Instant::now() + FALLBACK_DELAY + Duration::from_millis(10));
            assert!(app.state.pending_fallbacks.is_empty());
            assert_eq!(app.state.review.as_ref().unwrap().name, "Second Sender");
        }

        #[tokio::test]
        async fn test_fallback_review_escapes_original_values() {
            let mut app = app_with(failing_transport(1));
            fill_form(&mut app);
            app.state.form.message.set_value("<b>bold</b> & more text");
            app.submit_form().await;

            app.tick_at(Instant::now() + FALLBACK_DELAY + Duration::from_millis(10));

            assert_eq!(
                app.state.review.as_ref().unwrap().message,
                "&lt;b&gt;bold&lt;/b&gt; &amp; more text"
            );
        }
    }

    mod keys {
        use super::*;
        use crossterm::event::KeyEvent;

        fn key(code: KeyCode) -> KeyEvent {
            KeyEvent::new(code, KeyModifiers::NONE)
        }

        fn ctrl(c: char) -> KeyEvent {
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
        }

        #[tokio::test]
        async fn test_typing_fills_active_field() {
            let mut app = app_with(MockSubmitTransport::new());
            app.handle_key(key(KeyCode::Char('A'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('l'))).await.unwrap();
            assert_eq!(app.state.form.name.value(), "Al");
        }

        #[tokio::test]
        async fn test_tab_blur_validates_left_field() {
            let mut app = app_with(MockSubmitTransport::new());
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert!(app.state.form.name.annotation().is_some());
            assert_eq!(app.state.form.active_index(), 1);
        }

        #[tokio::test]
        async fn test_enter_on_submit_row_submits() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_send().times(1).returning(|_| Ok(()));
            let mut app = app_with(transport);
            fill_form(&mut app);
            for _ in 0..crate::state::FIELD_COUNT {
                app.handle_key(key(KeyCode::Tab)).await.unwrap();
            }
            assert!(app.state.form.is_submit_row_active());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.review.is_some());
        }

        #[tokio::test]
        async fn test_enter_in_multiline_field_adds_newline() {
            let mut app = app_with(MockSubmitTransport::new());
            fill_form(&mut app);
            while app.state.form.active_index() != 3 {
                app.state.form.focus_next();
            }
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(key(KeyCode::Char('b'))).await.unwrap();
            assert!(app.state.form.message.value().ends_with("a\nb"));
        }

        #[tokio::test]
        async fn test_ctrl_t_toggles_theme_in_state() {
            let mut app = app_with(MockSubmitTransport::new());
            assert_eq!(app.state.theme, crate::state::Theme::Light);
            app.handle_key(ctrl('t')).await.unwrap();
            assert_eq!(app.state.theme, crate::state::Theme::Dark);
        }

        #[tokio::test]
        async fn test_esc_dismisses_notification_before_quitting() {
            let mut app = app_with(MockSubmitTransport::new());
            app.state.notify("hello", Severity::Info);
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.state.notification.is_none());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.should_quit());
        }
    }

    #[test]
    fn test_new_app_uses_configured_theme() {
        let config = AppConfig {
            theme: Some(crate::state::Theme::Dark),
            ..Default::default()
        };
        let app = App::new(config, Box::new(MockSubmitTransport::new()));
        assert_eq!(app.state.theme, crate::state::Theme::Dark);
    }
}
