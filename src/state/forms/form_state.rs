//! Login and signup form structs

use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// The text input under focus; `None` on the buttons row
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
    /// Number of buttons on the buttons row
    fn button_count(&self) -> usize;
    fn selected_button(&self) -> usize;
    fn set_selected_button(&mut self, index: usize);

    /// Returns true if the buttons row is currently active
    fn is_buttons_row_active(&self) -> bool {
        self.active_field() + 1 == self.field_count()
    }

    /// Move to the next button (wraps around)
    fn next_button(&mut self) {
        let count = self.button_count();
        self.set_selected_button((self.selected_button() + 1) % count);
    }

    /// Move to the previous button (wraps around)
    fn prev_button(&mut self) {
        let count = self.button_count();
        let current = self.selected_button();
        self.set_selected_button(if current == 0 { count - 1 } else { current - 1 });
    }
}

/// Buttons on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    Login,
    ForgotPassword,
    Signup,
}

impl LoginAction {
    pub const ALL: [LoginAction; 3] = [Self::Login, Self::ForgotPassword, Self::Signup];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::ForgotPassword => "Forgot Password?",
            Self::Signup => "Don't have an account ?",
        }
    }
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    pub fn selected_action(&self) -> LoginAction {
        LoginAction::ALL[self.selected_button.min(LoginAction::ALL.len() - 1)]
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        3 // email, password, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.email),
            1 => Some(&mut self.password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            // Index 2 is buttons row, no FormField for it
            _ => None,
        }
    }
    fn button_count(&self) -> usize {
        LoginAction::ALL.len()
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(LoginAction::ALL.len() - 1);
    }
}

/// Buttons on the signup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupAction {
    Signup,
    Login,
}

impl SignupAction {
    pub const ALL: [SignupAction; 2] = [Self::Signup, Self::Login];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Signup => "Sign Up",
            Self::Login => "Already have an account ?",
        }
    }
}

// Signup Form
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("first_name", "First Name"),
            last_name: FormField::text("last_name", "Last Name"),
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    pub fn selected_action(&self) -> SignupAction {
        SignupAction::ALL[self.selected_button.min(SignupAction::ALL.len() - 1)]
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        5 // first name, last name, email, password, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.email),
            3 => Some(&mut self.password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.email),
            3 => Some(&self.password),
            _ => None,
        }
    }
    fn button_count(&self) -> usize {
        SignupAction::ALL.len()
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(SignupAction::ALL.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod login_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = LoginForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_action(), LoginAction::Login);
            assert_eq!(form.email.name, "email");
            assert!(form.password.is_secret);
        }

        #[test]
        fn test_field_count() {
            assert_eq!(LoginForm::new().field_count(), 3);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = LoginForm::new();
            for _ in 0..3 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = LoginForm::new();
            form.prev_field();
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_buttons_row_has_no_field() {
            let mut form = LoginForm::new();
            form.set_active_field(2);
            assert!(form.get_active_field_mut().is_none());
            assert!(form.get_field(2).is_none());
        }

        #[test]
        fn test_button_navigation_wraps() {
            let mut form = LoginForm::new();
            form.prev_button();
            assert_eq!(form.selected_action(), LoginAction::Signup);
            form.next_button();
            assert_eq!(form.selected_action(), LoginAction::Login);
        }

        #[test]
        fn test_typing_into_active_field() {
            let mut form = LoginForm::new();
            form.get_active_field_mut().unwrap().push_char('a');
            assert_eq!(form.email.as_text(), "a");
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = LoginForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 2);
        }
    }

    mod signup_form {
        use super::*;

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = SignupForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "first_name");
            assert_eq!(form.get_field(1).unwrap().name, "last_name");
            assert_eq!(form.get_field(2).unwrap().name, "email");
            assert_eq!(form.get_field(3).unwrap().name, "password");
            assert!(form.get_field(4).is_none());
        }

        #[test]
        fn test_buttons() {
            let mut form = SignupForm::new();
            assert_eq!(form.selected_action(), SignupAction::Signup);
            form.next_button();
            assert_eq!(form.selected_action(), SignupAction::Login);
            form.next_button();
            assert_eq!(form.selected_action(), SignupAction::Signup);
        }

        #[test]
        fn test_labels() {
            assert_eq!(SignupAction::Signup.label(), "Sign Up");
            assert_eq!(LoginAction::ForgotPassword.label(), "Forgot Password?");
        }
    }
}
