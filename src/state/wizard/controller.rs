//! Step transition controller
//!
//! Every move between steps, forward or backward, and the final submit runs
//! the same gate: validate, and either move or surface the errors.

use super::documents::{DocumentDescriptor, PickerOutcome, PickerRequest};
use super::rules::RULES;
use super::steps::{StepSpec, STEPS};
use super::store::FieldStore;
use super::validator::{validate, validate_rules, ValidationErrors};
use crate::state::forms::FieldValue;
use crate::state::toast::{Notification, Notifier, DEFAULT_TOAST_DURATION};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const FILL_REQUIRED_MESSAGE: &str = "Please fill out all required fields.";
pub const SUBMITTED_MESSAGE: &str = "Form Submitted Successfully!";
pub const DATE_IN_FUTURE_MESSAGE: &str = "Date cannot be in the future.";

const DOCUMENTS_FIELD: &str = "documents";

/// Source of "today" for date rules
pub type Clock = fn() -> NaiveDate;

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Which rules gate a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationScope {
    /// Every rule of the form, whatever the current step
    #[default]
    Form,
    /// Only fields on steps up to and including the current one
    Step,
}

/// Outcome of a transition request
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Moved { from: usize, to: usize },
    Denied(ValidationErrors),
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("a document pick is still pending")]
    Busy,
    #[error("the form has already been submitted")]
    Submitted,
    #[error("no document pick is pending")]
    NoPendingPick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    DocumentPick,
}

/// State of the onboarding wizard
#[derive(Debug, Clone)]
pub struct Wizard {
    store: FieldStore,
    steps: &'static [StepSpec],
    active_step: usize,
    scope: ValidationScope,
    submitted: bool,
    pending: Option<Pending>,
    toast_duration: Duration,
    clock: Clock,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            store: FieldStore::for_steps(STEPS),
            steps: STEPS,
            active_step: 0,
            scope: ValidationScope::default(),
            submitted: false,
            pending: None,
            toast_duration: DEFAULT_TOAST_DURATION,
            clock: local_today,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_scope(mut self, scope: ValidationScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &'static StepSpec {
        let steps: &'static [StepSpec] = self.steps;
        &steps[self.active_step]
    }

    pub fn is_last_step(&self) -> bool {
        self.active_step + 1 == self.steps.len()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scope(&self) -> ValidationScope {
        self.scope
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn fields(&self) -> &FieldStore {
        &self.store
    }

    pub fn fields_mut(&mut self) -> &mut FieldStore {
        &mut self.store
    }

    pub fn set_value(&mut self, name: &str, value: FieldValue) {
        self.store.set_value(name, value);
    }

    pub fn set_touched(&mut self, name: &str) {
        self.store.set_touched(name);
    }

    /// Validate the current values within the configured scope
    pub fn validate(&self) -> ValidationErrors {
        let snapshot = self.store.snapshot();
        match self.scope {
            ValidationScope::Form => validate(&snapshot, self.today()),
            ValidationScope::Step => {
                let visible: Vec<&str> = self.steps[..=self.active_step]
                    .iter()
                    .flat_map(|step| step.fields.iter().map(|f| f.name))
                    .collect();
                let rules = RULES.iter().filter(|rule| visible.contains(&rule.field));
                validate_rules(rules, &snapshot, self.today())
            }
        }
    }

    /// Field lost focus: mark it touched and refresh the errors
    pub fn blur(&mut self, name: &str) {
        self.store.set_touched(name);
        let errors = self.validate();
        self.store.apply_errors(&errors);
    }

    /// Move to `target` (clamped to the step range) if validation passes
    pub fn request_transition(
        &mut self,
        target: usize,
        notifier: &mut dyn Notifier,
    ) -> Result<Transition, WizardError> {
        self.ensure_idle()?;
        if let Some(errors) = self.gate(notifier) {
            return Ok(Transition::Denied(errors));
        }
        let from = self.active_step;
        let to = target.min(self.steps.len() - 1);
        self.active_step = to;
        tracing::debug!(from, to, "wizard step changed");
        Ok(Transition::Moved { from, to })
    }

    pub fn next(&mut self, notifier: &mut dyn Notifier) -> Result<Transition, WizardError> {
        self.request_transition(self.active_step + 1, notifier)
    }

    pub fn previous(&mut self, notifier: &mut dyn Notifier) -> Result<Transition, WizardError> {
        self.request_transition(self.active_step.saturating_sub(1), notifier)
    }

    /// Final submit. On approval the wizard is closed for further transitions.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> Result<Transition, WizardError> {
        self.ensure_idle()?;
        if let Some(errors) = self.gate(notifier) {
            return Ok(Transition::Denied(errors));
        }
        self.submitted = true;
        tracing::info!(
            documents = self.store.documents(DOCUMENTS_FIELD).len(),
            "onboarding form submitted"
        );
        notifier.notify(Notification::success(SUBMITTED_MESSAGE, self.toast_duration));
        Ok(Transition::Submitted)
    }

    /// Start a document pick. Transitions are refused until it completes.
    pub fn begin_document_pick(&mut self) -> Result<PickerRequest, WizardError> {
        self.ensure_idle()?;
        self.pending = Some(Pending::DocumentPick);
        Ok(PickerRequest::documents())
    }

    /// Finish the pending pick and append whatever was selected
    pub fn complete_document_pick(&mut self, outcome: PickerOutcome) -> Result<usize, WizardError> {
        if self.pending != Some(Pending::DocumentPick) {
            return Err(WizardError::NoPendingPick);
        }
        self.pending = None;
        Ok(self.add_documents(outcome))
    }

    /// Drop the pending pick without touching the documents
    pub fn abort_document_pick(&mut self) {
        if self.pending == Some(Pending::DocumentPick) {
            self.pending = None;
        }
    }

    /// Append selected documents; a cancelled pick changes nothing
    pub fn add_documents(&mut self, outcome: PickerOutcome) -> usize {
        match outcome {
            PickerOutcome::Cancelled => 0,
            PickerOutcome::Selected(docs) => {
                let added = docs.len();
                self.store.append_documents(DOCUMENTS_FIELD, docs);
                tracing::debug!(added, "documents added");
                added
            }
        }
    }

    pub fn documents(&self) -> &[DocumentDescriptor] {
        self.store.documents(DOCUMENTS_FIELD)
    }

    /// Commit a picked date unless it lies in the future. Returns whether it was committed.
    pub fn confirm_date(
        &mut self,
        selected: NaiveDate,
        field: &str,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if selected > self.today() {
            notifier.notify(Notification::error(
                DATE_IN_FUTURE_MESSAGE,
                self.toast_duration,
            ));
            return false;
        }
        self.store.set_value(
            field,
            FieldValue::Text(selected.format("%Y-%m-%d").to_string()),
        );
        true
    }

    fn ensure_idle(&self) -> Result<(), WizardError> {
        if self.submitted {
            return Err(WizardError::Submitted);
        }
        if self.pending.is_some() {
            return Err(WizardError::Busy);
        }
        Ok(())
    }

    /// Run validation; on failure touch the invalid fields and notify once
    fn gate(&mut self, notifier: &mut dyn Notifier) -> Option<ValidationErrors> {
        let errors = self.validate();
        self.store.apply_errors(&errors);
        if errors.is_empty() {
            return None;
        }
        for name in errors.keys() {
            self.store.set_touched(name);
        }
        tracing::debug!(invalid = errors.len(), "wizard transition denied");
        notifier.notify(Notification::error(FILL_REQUIRED_MESSAGE, self.toast_duration));
        Some(errors)
    }
}
