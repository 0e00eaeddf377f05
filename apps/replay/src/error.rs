use thiserror::Error;

/// Errors raised at the edges of the replay engine.
///
/// Navigation, reconstruction and snapshots never fail; only configuration,
/// record loading, and talking to a session that has shut down do.
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Malformed match record: {detail}")]
    MalformedRecord { detail: String },
    #[error("IO error: {detail}")]
    Io {
        detail: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Replay session is closed")]
    SessionClosed,
}

impl ReplayError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedRecord {
            detail: detail.into(),
        }
    }

    pub fn io(detail: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            detail: detail.into(),
            source,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ReplayError::Config { .. } => "CONFIG_ERROR",
            ReplayError::MalformedRecord { .. } => "MALFORMED_RECORD",
            ReplayError::Io { .. } => "IO_ERROR",
            ReplayError::SessionClosed => "SESSION_CLOSED",
        }
    }
}

impl From<serde_json::Error> for ReplayError {
    fn from(err: serde_json::Error) -> Self {
        ReplayError::malformed(err.to_string())
    }
}
