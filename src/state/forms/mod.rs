//! Form domain layer
//!
//! Field values shared by the wizard, and the login/signup forms.

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, LoginAction, LoginForm, SignupAction, SignupForm};
