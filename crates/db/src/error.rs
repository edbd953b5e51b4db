/// Failures while loading a dataset. Queries themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}
