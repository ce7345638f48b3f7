//! Document descriptors and picker request/outcome types

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mime patterns accepted by the onboarding document picker
pub const ACCEPTED_DOCUMENT_KINDS: &[&str] = &["image/*", "application/pdf"];

/// A file chosen through the document picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
    pub uri: String,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

/// What the picker is asked to offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRequest {
    pub accepted_kinds: Vec<String>,
    pub allow_multiple: bool,
}

impl PickerRequest {
    /// Images and PDFs, several at a time
    pub fn documents() -> Self {
        Self {
            accepted_kinds: ACCEPTED_DOCUMENT_KINDS
                .iter()
                .map(|kind| kind.to_string())
                .collect(),
            allow_multiple: true,
        }
    }

    pub fn accepts(&self, mime_type: &str) -> bool {
        self.accepted_kinds
            .iter()
            .any(|pattern| mime_matches(pattern, mime_type))
    }
}

/// Result of one picker interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Cancelled,
    Selected(Vec<DocumentDescriptor>),
}

/// Match a mime type against a pattern such as `image/*`
pub fn mime_matches(pattern: &str, mime_type: &str) -> bool {
    match pattern.strip_suffix("/*") {
        Some(prefix) => mime_type
            .split_once('/')
            .is_some_and(|(kind, _)| kind.eq_ignore_ascii_case(prefix)),
        None => pattern.eq_ignore_ascii_case(mime_type),
    }
}

/// Infer a mime type from a file extension
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "bmp" => "image/bmp",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => return None,
    };
    Some(mime)
}
