use thiserror::Error;

/// Why a request to the report backend could not be completed.
///
/// The cause is for diagnostics only; the user sees a generic message.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to report backend failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("report body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown struggle category '{0}'")]
pub struct UnknownStruggle(pub String);
