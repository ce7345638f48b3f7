//! Application state definitions

use super::dialogs::{DatePickerDialog, DocumentPickerDialog};
use super::entrance_state::EntranceState;
use super::forms::{LoginForm, SignupForm};
use super::onboarding::OnboardingScreen;
use super::toast::ToastOverlay;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Signup,
    Onboarding,
}

impl View {
    /// Route name, as used in logs
    pub fn route(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Onboarding => "onboarding",
        }
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    /// Email typed on the login screen, used to prefill the onboarding form
    pub email: Option<String>,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Screens
    pub login: LoginForm,
    pub signup: SignupForm,
    /// Present while the onboarding view is mounted
    pub onboarding: Option<OnboardingScreen>,

    // Overlays
    pub toasts: ToastOverlay,
    pub date_picker: Option<DatePickerDialog>,
    pub document_picker: Option<DocumentPickerDialog>,
    pub entrance: EntranceState,
}

impl AppState {
    /// Whether a modal dialog is capturing input
    pub fn has_modal(&self) -> bool {
        self.date_picker.is_some() || self.document_picker.is_some()
    }

    pub fn clear_login(&mut self) {
        self.login = LoginForm::new();
    }

    pub fn clear_signup(&mut self) {
        self.signup = SignupForm::new();
    }
}
