use atelier_ingest::IngestError;

/// Errors from catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A tabular file could not be opened or parsed.
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// A thread panicked while holding the catalog lock.
    #[error("catalog lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
