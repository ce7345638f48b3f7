//! Application state and core logic

use crate::config::AppConfig;
use crate::picker::{DocumentSource, FsDocumentSource};
use crate::state::wizard::{InputKind, PickerOutcome, Transition, Wizard};
use crate::state::{
    AppState, DatePickerDialog, DocumentPickerDialog, EntranceState, FieldValue, Form,
    LoginAction, Notification, Notifier, OnboardingScreen, SignupAction, View, ViewParams,
    WizardAction,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub const DOCUMENTS_UNAVAILABLE_MESSAGE: &str = "Could not load documents.";
pub const TRACKING_ID_COPIED_MESSAGE: &str = "Tracking ID copied to clipboard.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: AppConfig,
    /// Where the document picker finds candidate files
    documents: Box<dyn DocumentSource>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App reading documents from the configured directory
    pub fn new(config: AppConfig) -> Self {
        let root = config
            .documents_dir
            .clone()
            .unwrap_or_else(FsDocumentSource::default_root);
        Self::with_source(config, Box::new(FsDocumentSource::new(root)))
    }

    pub fn with_source(config: AppConfig, documents: Box<dyn DocumentSource>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            config,
            documents,
            quit: false,
        };
        app.restart_entrance();
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Advance time-based state: toast expiry and the entrance animation
    pub fn tick(&mut self, now: Instant) {
        self.state.toasts.tick(now);
        self.state.entrance.update(now);
    }

    /// Whether something on screen is animating and wants fast redraws
    pub fn is_animating(&self) -> bool {
        !self.state.entrance.is_complete()
    }

    fn restart_entrance(&mut self) {
        self.state.entrance = if self.config.entrance_animation() {
            EntranceState::new()
        } else {
            EntranceState::settled()
        };
    }

    fn notify_error(&mut self, message: &str) {
        let duration = self.config.toast_duration();
        self.state
            .toasts
            .notify(Notification::error(message, duration));
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        self.state.view_history.push((
            self.state.current_view,
            std::mem::take(&mut self.state.view_params),
        ));
        self.show(view, params);
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some((view, params)) = self.state.view_history.pop() {
            self.show(view, params);
        }
    }

    fn show(&mut self, view: View, params: ViewParams) {
        tracing::info!(
            from = self.state.current_view.route(),
            to = view.route(),
            "navigate"
        );
        if self.state.current_view == View::Onboarding && view != View::Onboarding {
            self.unmount_onboarding();
        }
        if view == View::Onboarding && self.state.onboarding.is_none() {
            self.mount_onboarding(&params);
        }
        self.state.current_view = view;
        self.state.view_params = params;
        self.restart_entrance();
    }

    /// Fresh wizard for the onboarding view, prefilled with the login email
    fn mount_onboarding(&mut self, params: &ViewParams) {
        let mut wizard = Wizard::new()
            .with_scope(self.config.validation_scope())
            .with_toast_duration(self.config.toast_duration());
        if let Some(email) = &params.email {
            wizard.set_value("email", FieldValue::text(email.as_str()));
        }
        let screen = OnboardingScreen::new(wizard);
        tracing::info!(tracking_id = %screen.tracking_id, "onboarding started");
        self.state.onboarding = Some(screen);
    }

    fn unmount_onboarding(&mut self) {
        self.state.onboarding = None;
        self.state.date_picker = None;
        self.state.document_picker = None;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Modal dialogs capture all input
        if self.state.date_picker.is_some() {
            self.handle_date_picker_key(key);
            return Ok(());
        }
        if self.state.document_picker.is_some() {
            self.handle_document_picker_key(key);
            return Ok(());
        }

        match self.state.current_view {
            View::Login => self.handle_login_key(key),
            View::Signup => self.handle_signup_key(key),
            View::Onboarding => self.handle_onboarding_key(key).await?,
        }
        Ok(())
    }

    /// Handle keys in Login view
    fn handle_login_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.login;
        let on_buttons = form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left | KeyCode::Up if on_buttons => form.prev_button(),
            KeyCode::Right | KeyCode::Down if on_buttons => form.next_button(),
            KeyCode::Enter if on_buttons => match form.selected_action() {
                LoginAction::Login => {
                    let email = form.email.as_text().trim().to_string();
                    self.state.clear_login();
                    self.navigate(
                        View::Onboarding,
                        ViewParams {
                            email: (!email.is_empty()).then_some(email),
                        },
                    );
                }
                LoginAction::ForgotPassword => {
                    tracing::info!("forgot password requested");
                }
                LoginAction::Signup => {
                    self.state.clear_login();
                    self.navigate(View::Signup, ViewParams::default());
                }
            },
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Signup view
    fn handle_signup_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.signup;
        let on_buttons = form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left | KeyCode::Up if on_buttons => form.prev_button(),
            KeyCode::Right | KeyCode::Down if on_buttons => form.next_button(),
            KeyCode::Enter if on_buttons => {
                let action = form.selected_action();
                if action == SignupAction::Signup {
                    tracing::info!("sign up requested");
                }
                self.state.clear_signup();
                self.navigate(View::Login, ViewParams::default());
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Esc => {
                self.state.clear_signup();
                self.go_back();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Onboarding view
    async fn handle_onboarding_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Keyboard shortcuts (work from anywhere)
        let shortcut = match key.code {
            KeyCode::Char('n') if ctrl => Some(WizardAction::Next),
            KeyCode::Char('p') if ctrl => Some(WizardAction::Previous),
            KeyCode::Char('s') if ctrl => Some(WizardAction::Submit),
            KeyCode::Char('o') if ctrl => {
                self.open_document_picker().await;
                return Ok(());
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_tracking_id();
                return Ok(());
            }
            KeyCode::Esc => {
                self.go_back();
                return Ok(());
            }
            _ => None,
        };
        if let Some(action) = shortcut {
            self.run_wizard_action(action);
            return Ok(());
        }

        let Some(screen) = self.state.onboarding.as_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Tab => screen.focus_next(),
            KeyCode::BackTab => screen.focus_prev(),
            _ if screen.is_actions_row_active() => match key.code {
                KeyCode::Left | KeyCode::Up => screen.prev_button(),
                KeyCode::Right | KeyCode::Down => screen.next_button(),
                KeyCode::Enter => {
                    let action = screen.selected_action();
                    self.run_wizard_action(action);
                }
                _ => {}
            },
            _ => {
                let Some(spec) = screen.focused_field() else {
                    return Ok(());
                };
                match (spec.input, key.code) {
                    (InputKind::Text, KeyCode::Char(c)) if !ctrl => screen.input_char(c),
                    (InputKind::Text, KeyCode::Backspace) => screen.backspace(),
                    (InputKind::Text, KeyCode::Enter) => screen.focus_next(),
                    (InputKind::DatePicker, KeyCode::Enter | KeyCode::Char(' ')) => {
                        let current = screen
                            .wizard
                            .fields()
                            .value(spec.name)
                            .map(|v| v.as_text().to_string())
                            .unwrap_or_default();
                        let today = screen.wizard.today();
                        self.state.date_picker =
                            Some(DatePickerDialog::open(spec.name, &current, today));
                    }
                    (InputKind::MultiSelect(_), KeyCode::Down) => screen.option_down(),
                    (InputKind::MultiSelect(_), KeyCode::Up) => screen.option_up(),
                    (InputKind::MultiSelect(_), KeyCode::Enter | KeyCode::Char(' ')) => {
                        screen.toggle_option()
                    }
                    (InputKind::Documents, KeyCode::Enter | KeyCode::Char(' ')) => {
                        self.open_document_picker().await;
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Run a wizard button: previous, next or submit
    fn run_wizard_action(&mut self, action: WizardAction) {
        let Some(screen) = self.state.onboarding.as_mut() else {
            return;
        };
        let toasts = &mut self.state.toasts;
        let result = match action {
            WizardAction::Previous => screen.wizard.previous(toasts),
            WizardAction::Next => screen.wizard.next(toasts),
            WizardAction::Submit => screen.wizard.submit(toasts),
        };
        match result {
            Ok(Transition::Moved { from, to }) if from != to => screen.reset_focus(),
            Ok(Transition::Moved { .. }) | Ok(Transition::Denied(_)) => {}
            Ok(Transition::Submitted) => {
                tracing::info!(tracking_id = %screen.tracking_id, "application submitted");
            }
            Err(err) => tracing::debug!("{} refused: {err}", action.label()),
        }
    }

    /// Start a document pick and show the candidates
    async fn open_document_picker(&mut self) {
        let Some(screen) = self.state.onboarding.as_mut() else {
            return;
        };
        let request = match screen.wizard.begin_document_pick() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("document pick refused: {err}");
                return;
            }
        };

        match self.documents.list_candidates(&request).await {
            Ok(candidates) => {
                self.state.document_picker =
                    Some(DocumentPickerDialog::new(candidates, request.allow_multiple));
            }
            Err(err) => {
                tracing::warn!("Failed to list documents: {err:#}");
                if let Some(screen) = self.state.onboarding.as_mut() {
                    screen.wizard.abort_document_pick();
                }
                self.notify_error(DOCUMENTS_UNAVAILABLE_MESSAGE);
            }
        }
    }

    fn handle_document_picker_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.state.document_picker.as_mut() else {
            return;
        };
        let outcome = match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                dialog.move_down();
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                dialog.move_up();
                return;
            }
            KeyCode::Char(' ') => {
                dialog.toggle();
                return;
            }
            KeyCode::Enter => match self.state.document_picker.take() {
                Some(dialog) => dialog.confirm(),
                None => return,
            },
            KeyCode::Esc => {
                self.state.document_picker = None;
                PickerOutcome::Cancelled
            }
            _ => return,
        };

        let Some(screen) = self.state.onboarding.as_mut() else {
            return;
        };
        match screen.wizard.complete_document_pick(outcome) {
            Ok(0) => {}
            Ok(added) => {
                tracing::info!(added, "documents attached");
                screen.wizard.blur("documents");
            }
            Err(err) => tracing::debug!("document pick not completed: {err}"),
        }
    }

    fn handle_date_picker_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.state.date_picker.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Left | KeyCode::BackTab => dialog.part = dialog.part.prev(),
            KeyCode::Right | KeyCode::Tab => dialog.part = dialog.part.next(),
            KeyCode::Up | KeyCode::Char('+') => dialog.increment(),
            KeyCode::Down | KeyCode::Char('-') => dialog.decrement(),
            KeyCode::Esc => self.state.date_picker = None,
            KeyCode::Enter => {
                let (date, field) = (dialog.date, dialog.field.clone());
                let Some(screen) = self.state.onboarding.as_mut() else {
                    self.state.date_picker = None;
                    return;
                };
                if screen
                    .wizard
                    .confirm_date(date, &field, &mut self.state.toasts)
                {
                    screen.wizard.blur(&field);
                    self.state.date_picker = None;
                }
            }
            _ => {}
        }
    }

    /// Copy the onboarding tracking id to the system clipboard
    pub fn copy_tracking_id(&mut self) {
        let Some(id) = self
            .state
            .onboarding
            .as_ref()
            .map(|screen| screen.tracking_id.clone())
        else {
            return;
        };
        match copy_to_clipboard(&id) {
            Ok(()) => {
                let duration = self.config.toast_duration();
                self.state
                    .toasts
                    .notify(Notification::success(TRACKING_ID_COPIED_MESSAGE, duration));
            }
            Err(err) => {
                tracing::warn!("Failed to copy tracking id: {err:#}");
                self.notify_error("Could not copy to clipboard.");
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::MockDocumentSource;
    use crate::state::wizard::{
        DocumentDescriptor, ValidationScope, DATE_IN_FUTURE_MESSAGE, FILL_REQUIRED_MESSAGE,
    };
    use crate::state::NotificationKind;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn doc(name: &str) -> DocumentDescriptor {
        DocumentDescriptor {
            uri: format!("file:///docs/{name}"),
            name: name.to_string(),
            mime_type: "application/pdf".to_string(),
            size: 42,
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            entrance_animation: Some(false),
            ..Default::default()
        }
    }

    fn app_with(source: MockDocumentSource, config: AppConfig) -> App {
        App::with_source(config, Box::new(source))
    }

    fn test_app() -> App {
        app_with(MockDocumentSource::new(), config())
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    fn onboarding(app: &App) -> &OnboardingScreen {
        app.state.onboarding.as_ref().unwrap()
    }

    fn toast(app: &App) -> Option<(NotificationKind, String)> {
        app.state
            .toasts
            .current()
            .map(|t| (t.notification.kind, t.notification.message.clone()))
    }

    /// Login with `email`, landing on the onboarding view
    async fn login(app: &mut App, email: &str) {
        type_text(app, email).await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_login() {
            let app = test_app();
            assert_eq!(app.state.current_view, View::Login);
            assert!(!app.should_quit());
            assert!(!app.is_animating());
        }

        #[test]
        fn test_navigate_and_go_back() {
            let mut app = test_app();
            app.navigate(View::Signup, ViewParams::default());
            assert_eq!(app.state.current_view, View::Signup);
            assert_eq!(app.state.view_history.len(), 1);

            app.go_back();
            assert_eq!(app.state.current_view, View::Login);
            assert!(app.state.view_history.is_empty());
        }

        #[test]
        fn test_go_back_with_empty_history_stays() {
            let mut app = test_app();
            app.go_back();
            assert_eq!(app.state.current_view, View::Login);
        }

        #[test]
        fn test_leaving_onboarding_unmounts_wizard() {
            let mut app = test_app();
            app.navigate(View::Onboarding, ViewParams::default());
            assert!(app.state.onboarding.is_some());

            app.go_back();
            assert!(app.state.onboarding.is_none());
        }

        #[test]
        fn test_navigation_restarts_entrance_when_enabled() {
            let mut app = app_with(MockDocumentSource::new(), AppConfig::default());
            app.state.entrance = EntranceState::settled();
            app.navigate(View::Signup, ViewParams::default());
            assert!(app.is_animating());
        }

        #[test]
        fn test_wizard_follows_config() {
            let config = AppConfig {
                validation_scope: Some(ValidationScope::Step),
                ..config()
            };
            let mut app = app_with(MockDocumentSource::new(), config);
            app.navigate(View::Onboarding, ViewParams::default());
            assert_eq!(onboarding(&app).wizard.scope(), ValidationScope::Step);
        }
    }

    mod login {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_login_prefills_onboarding_email() {
            let mut app = test_app();
            login(&mut app, "ada@example.com").await;

            assert_eq!(app.state.current_view, View::Onboarding);
            assert_eq!(
                app.state.view_params.email.as_deref(),
                Some("ada@example.com")
            );
            assert_eq!(
                onboarding(&app).wizard.fields().value("email"),
                Some(&FieldValue::text("ada@example.com"))
            );
            assert_eq!(app.state.login.email.as_text(), "");
        }

        #[tokio::test]
        async fn test_signup_button_opens_signup() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.login.selected_action(), LoginAction::Signup);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Signup);
        }

        #[tokio::test]
        async fn test_forgot_password_stays_on_login() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Login);
        }

        #[tokio::test]
        async fn test_signup_returns_to_login() {
            let mut app = test_app();
            app.navigate(View::Signup, ViewParams::default());
            type_text(&mut app, "Ada").await;
            for _ in 0..4 {
                app.handle_key(key(KeyCode::Tab)).await.unwrap();
            }
            assert!(app.state.signup.is_buttons_row_active());

            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::Login);
            assert_eq!(app.state.signup.first_name.as_text(), "");
        }

        #[tokio::test]
        async fn test_control_chars_are_not_typed() {
            let mut app = test_app();
            app.handle_key(ctrl('a')).await.unwrap();
            assert_eq!(app.state.login.email.as_text(), "");
        }
    }

    mod onboarding {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_next_on_empty_form_is_denied() {
            let mut app = test_app();
            app.navigate(View::Onboarding, ViewParams::default());

            app.handle_key(ctrl('n')).await.unwrap();

            assert_eq!(onboarding(&app).wizard.active_step(), 0);
            assert_eq!(
                toast(&app),
                Some((NotificationKind::Error, FILL_REQUIRED_MESSAGE.to_string()))
            );
            assert!(onboarding(&app)
                .wizard
                .fields()
                .visible_error("fullName")
                .is_some());
        }

        #[tokio::test]
        async fn test_typing_into_first_field() {
            let mut app = test_app();
            app.navigate(View::Onboarding, ViewParams::default());
            type_text(&mut app, "Ada").await;
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(
                onboarding(&app).wizard.fields().value("fullName"),
                Some(&FieldValue::text("Ad"))
            );
        }

        #[tokio::test]
        async fn test_step_scope_moves_forward() {
            let config = AppConfig {
                validation_scope: Some(ValidationScope::Step),
                ..config()
            };
            let mut app = app_with(MockDocumentSource::new(), config);
            app.navigate(View::Onboarding, ViewParams::default());
            let screen = app.state.onboarding.as_mut().unwrap();
            for (name, value) in [
                ("fullName", "Ada"),
                ("dateOfBirth", "2000-01-01"),
                ("gender", "f"),
                ("nationality", "UK"),
                ("contactNumber", "1"),
                ("email", "a@b.co"),
                ("address", "x"),
            ] {
                screen.wizard.set_value(name, FieldValue::text(value));
            }
            screen.focus = 3;

            app.handle_key(ctrl('n')).await.unwrap();

            let screen = onboarding(&app);
            assert_eq!(screen.wizard.active_step(), 1);
            assert_eq!(screen.focus, 0);
            assert!(toast(&app).is_none());
        }

        #[tokio::test]
        async fn test_esc_returns_to_login() {
            let mut app = test_app();
            login(&mut app, "").await;
            assert_eq!(app.state.current_view, View::Onboarding);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Login);
            assert!(app.state.onboarding.is_none());
        }

        #[tokio::test]
        async fn test_date_picker_commits_past_date() {
            let mut app = test_app();
            app.navigate(View::Onboarding, ViewParams::default());
            app.state.onboarding.as_mut().unwrap().focus = 1;

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.date_picker.is_some());
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.state.date_picker.is_none());
            let screen = onboarding(&app);
            let expected = (screen.wizard.today() - chrono::Days::new(1))
                .format("%Y-%m-%d")
                .to_string();
            assert_eq!(
                screen.wizard.fields().value("dateOfBirth"),
                Some(&FieldValue::text(expected))
            );
            assert!(screen.wizard.fields().is_touched("dateOfBirth"));
        }

        #[tokio::test]
        async fn test_date_picker_rejects_future_date() {
            let mut app = test_app();
            app.navigate(View::Onboarding, ViewParams::default());
            app.state.onboarding.as_mut().unwrap().focus = 1;

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(key(KeyCode::Up)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.state.date_picker.is_some());
            assert_eq!(
                toast(&app),
                Some((NotificationKind::Error, DATE_IN_FUTURE_MESSAGE.to_string()))
            );
            assert_eq!(
                onboarding(&app).wizard.fields().value("dateOfBirth"),
                Some(&FieldValue::text(""))
            );

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.state.date_picker.is_none());
        }
    }

    mod documents {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_pick_appends_documents() {
            let mut source = MockDocumentSource::new();
            source
                .expect_list_candidates()
                .times(1)
                .returning(|_| Ok(vec![doc("diploma.pdf"), doc("passport.pdf")]));
            let mut app = app_with(source, config());
            app.navigate(View::Onboarding, ViewParams::default());

            app.handle_key(ctrl('o')).await.unwrap();
            assert!(app.state.document_picker.is_some());
            assert!(onboarding(&app).wizard.is_pending());

            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            let screen = onboarding(&app);
            assert!(app.state.document_picker.is_none());
            assert!(!screen.wizard.is_pending());
            let names: Vec<_> = screen
                .wizard
                .documents()
                .iter()
                .map(|d| d.name.as_str())
                .collect();
            assert_eq!(names, vec!["diploma.pdf", "passport.pdf"]);
        }

        #[tokio::test]
        async fn test_cancelled_pick_changes_nothing() {
            let mut source = MockDocumentSource::new();
            source
                .expect_list_candidates()
                .returning(|_| Ok(vec![doc("diploma.pdf")]));
            let mut app = app_with(source, config());
            app.navigate(View::Onboarding, ViewParams::default());

            app.handle_key(ctrl('o')).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();

            let screen = onboarding(&app);
            assert!(screen.wizard.documents().is_empty());
            assert!(!screen.wizard.is_pending());
            assert_eq!(app.state.current_view, View::Onboarding);
        }

        #[tokio::test]
        async fn test_transitions_are_blocked_while_picking() {
            let mut source = MockDocumentSource::new();
            source.expect_list_candidates().returning(|_| Ok(vec![]));
            let mut app = app_with(source, config());
            app.navigate(View::Onboarding, ViewParams::default());

            app.handle_key(ctrl('o')).await.unwrap();
            // Dialog is modal; close it without completing the pick
            app.state.document_picker = None;
            app.handle_key(ctrl('n')).await.unwrap();

            assert!(toast(&app).is_none());
            assert_eq!(onboarding(&app).wizard.active_step(), 0);
        }

        #[tokio::test]
        async fn test_source_failure_is_toasted() {
            let mut source = MockDocumentSource::new();
            source
                .expect_list_candidates()
                .returning(|_| Err(anyhow::anyhow!("permission denied")));
            let mut app = app_with(source, config());
            app.navigate(View::Onboarding, ViewParams::default());

            app.handle_key(ctrl('o')).await.unwrap();

            assert!(app.state.document_picker.is_none());
            assert!(!onboarding(&app).wizard.is_pending());
            assert_eq!(
                toast(&app),
                Some((
                    NotificationKind::Error,
                    DOCUMENTS_UNAVAILABLE_MESSAGE.to_string()
                ))
            );
        }
    }

    #[test]
    fn test_handle_key_on_blocking_executor() {
        let mut app = test_app();
        tokio_test::block_on(type_text(&mut app, "ada"));
        assert_eq!(app.state.login.email.as_text(), "ada");
    }

    #[test]
    fn test_tick_expires_toasts() {
        let mut app = test_app();
        app.notify_error("boom");
        assert!(app.state.toasts.current().is_some());

        app.tick(Instant::now() + std::time::Duration::from_secs(4));
        assert!(app.state.toasts.current().is_none());
    }
}
