//! Field value store with touched/error tracking

use super::documents::DocumentDescriptor;
use super::steps::{InputKind, StepSpec};
use super::validator::ValidationErrors;
use crate::state::forms::FieldValue;
use std::collections::BTreeMap;

/// Immutable copy of every field value, used for validation and submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    values: BTreeMap<String, FieldValue>,
}

impl Snapshot {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// State of one field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldEntry {
    pub value: FieldValue,
    /// Set once the field lost focus or a transition was attempted
    pub touched: bool,
    /// Message from the last validation pass
    pub error: Option<String>,
}

/// Named field values of the wizard
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    fields: BTreeMap<String, FieldEntry>,
}

impl FieldStore {
    /// Create a store with an empty value for every field laid out on `steps`
    pub fn for_steps(steps: &[StepSpec]) -> Self {
        let fields = steps
            .iter()
            .flat_map(|step| step.fields.iter())
            .map(|spec| {
                let value = match spec.input {
                    InputKind::Text | InputKind::DatePicker => FieldValue::default(),
                    InputKind::MultiSelect(_) => FieldValue::Selections(Vec::new()),
                    InputKind::Documents => FieldValue::Documents(Vec::new()),
                };
                (
                    spec.name.to_string(),
                    FieldEntry {
                        value,
                        ..Default::default()
                    },
                )
            })
            .collect();
        Self { fields }
    }

    /// Overwrite a field's value. Does not validate.
    pub fn set_value(&mut self, name: &str, value: FieldValue) {
        self.fields.entry(name.to_string()).or_default().value = value;
    }

    /// Mark a field as touched
    pub fn set_touched(&mut self, name: &str) {
        self.fields.entry(name.to_string()).or_default().touched = true;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self
                .fields
                .iter()
                .map(|(name, entry)| (name.clone(), entry.value.clone()))
                .collect(),
        }
    }

    pub fn entry(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).map(|entry| &entry.value)
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|entry| entry.touched)
    }

    /// Record the outcome of a validation pass; fields without an error are cleared
    pub fn apply_errors(&mut self, errors: &ValidationErrors) {
        for (name, entry) in self.fields.iter_mut() {
            entry.error = errors.get(name).cloned();
        }
        for (name, message) in errors {
            if !self.fields.contains_key(name) {
                self.fields.insert(
                    name.clone(),
                    FieldEntry {
                        error: Some(message.clone()),
                        ..Default::default()
                    },
                );
            }
        }
    }

    /// Error shown next to a field: only once it has been touched
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .filter(|entry| entry.touched)
            .and_then(|entry| entry.error.as_deref())
    }

    pub fn push_char(&mut self, name: &str, c: char) {
        self.fields.entry(name.to_string()).or_default().value.push_char(c);
    }

    pub fn pop_char(&mut self, name: &str) {
        if let Some(entry) = self.fields.get_mut(name) {
            entry.value.pop_char();
        }
    }

    /// Add or remove an option of a multi-select field
    pub fn toggle_selection(&mut self, name: &str, option: &str) {
        let entry = self.fields.entry(name.to_string()).or_default();
        match &mut entry.value {
            FieldValue::Selections(items) => {
                if let Some(pos) = items.iter().position(|item| item == option) {
                    items.remove(pos);
                } else {
                    items.push(option.to_string());
                }
            }
            other => *other = FieldValue::selections([option]),
        }
    }

    /// Append documents to a document field, keeping earlier ones
    pub fn append_documents(&mut self, name: &str, docs: Vec<DocumentDescriptor>) {
        let entry = self.fields.entry(name.to_string()).or_default();
        match &mut entry.value {
            FieldValue::Documents(existing) => existing.extend(docs),
            other => *other = FieldValue::Documents(docs),
        }
    }

    pub fn documents(&self, name: &str) -> &[DocumentDescriptor] {
        match self.value(name) {
            Some(FieldValue::Documents(docs)) => docs,
            _ => &[],
        }
    }
}
