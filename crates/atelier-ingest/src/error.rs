use std::path::PathBuf;

/// Errors from reading tabular files.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not well-formed delimited text.
    #[error("malformed tabular data in {path} at line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// The file has no header row.
    #[error("missing header row in {path}")]
    MissingHeader { path: PathBuf },

    /// A reader option cannot be honoured.
    #[error("invalid reader option: {0}")]
    InvalidOption(String),
}

/// Result alias for ingest operations.
pub type IngestResult<T> = Result<T, IngestError>;
