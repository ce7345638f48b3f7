//! Onboarding screen state: the wizard plus focus within the current step

use crate::state::wizard::{FieldSpec, InputKind, Wizard};
use uuid::Uuid;

/// Buttons on the wizard's actions row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Previous,
    Next,
    Submit,
}

impl WizardAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next => "Next",
            Self::Submit => "Submit",
        }
    }
}

/// Twelve-digit application tracking number
pub fn new_tracking_id() -> String {
    format!("{:012}", Uuid::new_v4().as_u128() % 1_000_000_000_000)
}

#[derive(Debug, Clone)]
pub struct OnboardingScreen {
    pub wizard: Wizard,
    pub tracking_id: String,
    /// Index into the current step's fields; one past the end is the actions row
    pub focus: usize,
    /// Highlighted option of a focused multi-select field
    pub option_cursor: usize,
    pub selected_button: usize,
}

impl OnboardingScreen {
    pub fn new(wizard: Wizard) -> Self {
        Self::with_tracking_id(wizard, new_tracking_id())
    }

    pub fn with_tracking_id(wizard: Wizard, tracking_id: String) -> Self {
        let mut screen = Self {
            wizard,
            tracking_id,
            focus: 0,
            option_cursor: 0,
            selected_button: 0,
        };
        screen.reset_focus();
        screen
    }

    fn step_fields(&self) -> &'static [FieldSpec] {
        self.wizard.current_step().fields
    }

    pub fn focused_field(&self) -> Option<&'static FieldSpec> {
        self.step_fields().get(self.focus)
    }

    pub fn is_actions_row_active(&self) -> bool {
        self.focus >= self.step_fields().len()
    }

    /// Focus the next input, blurring the one being left
    pub fn focus_next(&mut self) {
        self.blur_focused();
        let slots = self.step_fields().len() + 1;
        self.focus = (self.focus + 1) % slots;
        self.option_cursor = 0;
    }

    /// Focus the previous input, blurring the one being left
    pub fn focus_prev(&mut self) {
        self.blur_focused();
        let slots = self.step_fields().len() + 1;
        self.focus = (self.focus + slots - 1) % slots;
        self.option_cursor = 0;
    }

    fn blur_focused(&mut self) {
        if let Some(spec) = self.focused_field() {
            self.wizard.blur(spec.name);
        }
    }

    /// Back to the first field after the step changed
    pub fn reset_focus(&mut self) {
        self.focus = 0;
        self.option_cursor = 0;
        let actions = self.actions();
        self.selected_button = actions.len() - 1;
    }

    /// Buttons available on the current step
    pub fn actions(&self) -> Vec<WizardAction> {
        let mut actions = Vec::with_capacity(2);
        if self.wizard.active_step() > 0 {
            actions.push(WizardAction::Previous);
        }
        actions.push(if self.wizard.is_last_step() {
            WizardAction::Submit
        } else {
            WizardAction::Next
        });
        actions
    }

    pub fn selected_action(&self) -> WizardAction {
        let actions = self.actions();
        actions[self.selected_button.min(actions.len() - 1)]
    }

    pub fn next_button(&mut self) {
        let count = self.actions().len();
        self.selected_button = (self.selected_button.min(count - 1) + 1) % count;
    }

    pub fn prev_button(&mut self) {
        let count = self.actions().len();
        let current = self.selected_button.min(count - 1);
        self.selected_button = if current == 0 { count - 1 } else { current - 1 };
    }

    fn focused_options(&self) -> &'static [&'static str] {
        match self.focused_field().map(|spec| spec.input) {
            Some(InputKind::MultiSelect(options)) => options,
            _ => &[],
        }
    }

    pub fn option_down(&mut self) {
        if self.option_cursor + 1 < self.focused_options().len() {
            self.option_cursor += 1;
        }
    }

    pub fn option_up(&mut self) {
        self.option_cursor = self.option_cursor.saturating_sub(1);
    }

    /// Toggle the highlighted option of the focused multi-select field
    pub fn toggle_option(&mut self) {
        let Some(spec) = self.focused_field() else {
            return;
        };
        if let Some(option) = self.focused_options().get(self.option_cursor) {
            self.wizard.fields_mut().toggle_selection(spec.name, option);
        }
    }

    /// Type into the focused field if it takes typed text
    pub fn input_char(&mut self, c: char) {
        if let Some(spec) = self.focused_field() {
            if spec.input == InputKind::Text {
                self.wizard.fields_mut().push_char(spec.name, c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(spec) = self.focused_field() {
            if spec.input == InputKind::Text {
                self.wizard.fields_mut().pop_char(spec.name);
            }
        }
    }
}
