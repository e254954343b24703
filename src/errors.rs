use thiserror::Error;

/// Custom error type that includes exit codes
#[derive(Debug, Error)]
pub enum FieldprobeError {
    /// A dictionary pattern failed to compile (exit code 2)
    #[error("Malformed pattern '{pattern}' for field '{field}': {source}")]
    MalformedPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// Snapshot input could not be parsed (exit code 3)
    #[error("Invalid snapshot: {0}")]
    SnapshotParse(String),
    /// Requested element index does not exist (exit code 4)
    #[error("Element index {index} out of range ({count} elements in snapshot)")]
    ElementIndex { index: usize, count: usize },
    /// Generic error (exit code 1)
    #[error(transparent)]
    Other(anyhow::Error),
}

impl FieldprobeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FieldprobeError::MalformedPattern { .. } => 2,
            FieldprobeError::SnapshotParse(_) => 3,
            FieldprobeError::ElementIndex { .. } => 4,
            FieldprobeError::Other(_) => 1,
        }
    }
}

impl From<anyhow::Error> for FieldprobeError {
    fn from(err: anyhow::Error) -> Self {
        // Recover typed errors that were routed through anyhow by the CLI
        let err = match err.downcast::<FieldprobeError>() {
            Ok(native) => return native,
            Err(err) => err,
        };

        let msg = err.to_string();
        if msg.contains("Invalid snapshot") || msg.contains("parse snapshot") {
            FieldprobeError::SnapshotParse(msg)
        } else {
            FieldprobeError::Other(err)
        }
    }
}
