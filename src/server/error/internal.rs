use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A spawned task panicked or was cancelled before producing a result.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    /// A stored monitoring report carries a payload that is not a valid summary.
    #[error("Monitoring report {id} has malformed data: {source}")]
    MalformedReport {
        /// ID of the report row
        id: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A computed summary could not be encoded for storage.
    #[error("Failed to encode report data: {0}")]
    ReportEncoding(#[source] serde_json::Error),
}
