//! Filesystem document source
//!
//! Lists the files of one directory whose extension maps to an accepted
//! mime type.

use super::error::PickerError;
use super::traits::DocumentSource;
use crate::state::wizard::{mime_from_path, DocumentDescriptor, PickerRequest};
use anyhow::Result;
use async_trait::async_trait;
use directories::UserDirs;
use std::path::{Path, PathBuf};

/// Document source reading a single directory
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    root: PathBuf,
}

impl FsDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The user's documents directory, falling back to the working directory
    pub fn default_root() -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl DocumentSource for FsDocumentSource {
    async fn list_candidates(&self, request: &PickerRequest) -> Result<Vec<DocumentDescriptor>> {
        let read_dir_error = |source| PickerError::ReadDir {
            path: self.root.clone(),
            source,
        };
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(read_dir_error)?;

        let mut documents = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_dir_error)? {
            let path = entry.path();
            let Some(mime_type) = mime_from_path(&path) else {
                continue;
            };
            if !request.accepts(mime_type) {
                continue;
            }
            let metadata = entry
                .metadata()
                .await
                .map_err(|source| PickerError::Metadata {
                    path: path.clone(),
                    source,
                })?;
            if !metadata.is_file() {
                continue;
            }
            let absolute = tokio::fs::canonicalize(&path).await.unwrap_or(path);
            documents.push(DocumentDescriptor {
                uri: format!("file://{}", absolute.display()),
                name: entry.file_name().to_string_lossy().into_owned(),
                mime_type: mime_type.to_string(),
                size: metadata.len(),
            });
        }

        documents.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(
            root = %self.root.display(),
            count = documents.len(),
            "listed document candidates"
        );
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn names(docs: &[DocumentDescriptor]) -> Vec<&str> {
        docs.iter().map(|d| d.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_lists_images_and_pdfs_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("transcript.pdf"), b"%PDF-1.4").unwrap();
        fs::write(dir.path().join("passport.png"), b"png").unwrap();
        fs::write(dir.path().join("notes.txt"), b"text").unwrap();
        fs::write(dir.path().join("archive.zip"), b"zip").unwrap();

        let source = FsDocumentSource::new(dir.path());
        let docs = source
            .list_candidates(&PickerRequest::documents())
            .await
            .unwrap();

        assert_eq!(names(&docs), vec!["passport.png", "transcript.pdf"]);
        assert_eq!(docs[1].mime_type, "application/pdf");
        assert_eq!(docs[1].size, 8);
        assert!(docs[1].uri.starts_with("file://"));
    }

    #[tokio::test]
    async fn test_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("scans.pdf")).unwrap();
        fs::write(dir.path().join("a.jpg"), b"jpg").unwrap();

        let source = FsDocumentSource::new(dir.path());
        let docs = source
            .list_candidates(&PickerRequest::documents())
            .await
            .unwrap();

        assert_eq!(names(&docs), vec!["a.jpg"]);
    }

    #[tokio::test]
    async fn test_respects_request_kinds() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"jpg").unwrap();
        fs::write(dir.path().join("b.pdf"), b"pdf").unwrap();

        let request = PickerRequest {
            accepted_kinds: vec!["application/pdf".to_string()],
            allow_multiple: false,
        };
        let docs = FsDocumentSource::new(dir.path())
            .list_candidates(&request)
            .await
            .unwrap();

        assert_eq!(names(&docs), vec!["b.pdf"]);
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsDocumentSource::new(dir.path().join("missing"));
        let err = source
            .list_candidates(&PickerRequest::documents())
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
        assert!(err.downcast_ref::<PickerError>().is_some());
    }

    #[test]
    fn test_default_root_is_not_empty() {
        assert!(!FsDocumentSource::default_root().as_os_str().is_empty());
    }
}
