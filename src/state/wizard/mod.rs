//! Onboarding wizard domain layer
//!
//! The wizard holds the onboarding field values, validates them against a
//! static rule table and gates movement between its steps:
//! - `steps`: step layout and input kinds
//! - `rules`: the validation rule table
//! - `store`: field values with touched/error tracking
//! - `validator`: the pure validation pass
//! - `documents`: document descriptors and picker request/outcome types
//! - `controller`: step transitions, document collection and date confirmation

mod controller;
mod documents;
mod rules;
mod steps;
mod store;
mod validator;

pub use controller::{
    local_today, Clock, Transition, ValidationScope, Wizard, WizardError, DATE_IN_FUTURE_MESSAGE,
    FILL_REQUIRED_MESSAGE, SUBMITTED_MESSAGE,
};
pub use documents::{
    mime_from_path, mime_matches, DocumentDescriptor, PickerOutcome, PickerRequest,
    ACCEPTED_DOCUMENT_KINDS,
};
pub use rules::{rule_for, Constraints, Messages, RuleKind, ValidationRule, RULES};
pub use steps::{step_of, FieldSpec, InputKind, StepSpec, COUNTRY_OPTIONS, STEPS, UNIVERSITY_OPTIONS};
pub use store::{FieldEntry, FieldStore, Snapshot};
pub use validator::{validate, validate_rules, ValidationErrors};
