//! Form field value objects

use crate::state::wizard::DocumentDescriptor;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text, also used for dates (`YYYY-MM-DD`) and numbers as typed
    Text(String),
    /// Options picked from a multi-select list
    Selections(Vec<String>),
    /// Files picked through the document picker
    Documents(Vec<DocumentDescriptor>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn selections<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Selections(items.into_iter().map(Into::into).collect())
    }

    /// Get the text value (returns empty string for collection values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Selections(_) | FieldValue::Documents(_) => "",
        }
    }

    /// Options picked so far; empty for other values
    pub fn selected_items(&self) -> &[String] {
        match self {
            FieldValue::Selections(items) => items,
            FieldValue::Text(_) | FieldValue::Documents(_) => &[],
        }
    }

    /// Number of selected items; zero for text values
    pub fn selected_count(&self) -> usize {
        match self {
            FieldValue::Text(_) => 0,
            FieldValue::Selections(items) => items.len(),
            FieldValue::Documents(docs) => docs.len(),
        }
    }

    /// Push a character to a text value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = self {
            s.push(c);
        }
    }

    /// Remove the last character from a text value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = self {
            s.pop();
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Selections(items) => items.join(", "),
            FieldValue::Documents(docs) => match docs.len() {
                0 => String::new(),
                1 => docs[0].name.clone(),
                n => format!("{n} documents"),
            },
        }
    }
}

/// A single text input on the login and signup screens
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    /// Rendered masked (passwords)
    pub is_secret: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            is_secret: false,
        }
    }

    /// Create a new masked field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
