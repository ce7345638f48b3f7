//! Application state module

mod app_state;
mod dialogs;
mod entrance_state;
mod forms;
mod onboarding;
mod toast;
pub mod wizard;

pub use app_state::*;
pub use dialogs::*;
pub use entrance_state::*;
pub use forms::*;
pub use onboarding::*;
pub use toast::*;
