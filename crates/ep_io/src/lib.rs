//! ep_io — file I/O for the engine.
//!
//! Strictly local files, no network. Two loaders (rules, answer sheets)
//! parse wire-facing serde structs, convert them into the typed core
//! domain, and run domain validation before anything reaches the scoring
//! stages. One writer emits result artifacts through the serializer (never
//! hand-built strings).

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for ep_io (loaders and writer).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (open, read, create_dir_all, write).
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON parse/serialize errors with a pointer-ish location hint.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Domain violations surfaced after parse (rules invariants, answer
    /// range, sheet length).
    #[error("domain error: {0}")]
    Domain(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports line/column, not a pointer; keep the location
        // in the message and default the pointer to root.
        IoError::Json { pointer: "/".to_string(), msg: e.to_string() }
    }
}

impl From<ep_core::CoreError> for IoError {
    fn from(e: ep_core::CoreError) -> Self {
        IoError::Domain(e.to_string())
    }
}

pub mod loader;
pub mod writer;

pub mod prelude {
    pub use crate::loader::{load_answers, load_rules};
    pub use crate::writer::write_json_file;
    pub use crate::{IoError, IoResult};
}
