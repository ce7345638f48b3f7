//! Document sources backing the document picker dialog

mod error;
mod fs_source;
mod traits;

pub use error::PickerError;
pub use fs_source::FsDocumentSource;
pub use traits::DocumentSource;
#[cfg(test)]
pub use traits::MockDocumentSource;
