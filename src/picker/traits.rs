//! Trait abstraction for document sources to enable mocking in tests

use crate::state::wizard::{DocumentDescriptor, PickerRequest};
use anyhow::Result;
use async_trait::async_trait;

/// Trait for listing pickable documents, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// List the documents matching the request, in display order
    async fn list_candidates(&self, request: &PickerRequest) -> Result<Vec<DocumentDescriptor>>;
}
