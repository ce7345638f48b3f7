//! Document source errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("failed to read {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to inspect {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
