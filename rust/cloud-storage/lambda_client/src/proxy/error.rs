use std::fmt;

use thiserror::Error;

/// The request could not be turned into a payload
#[derive(Debug, Error)]
pub enum EncodeErr {
    #[error("function name must not be empty")]
    EmptyFunctionName,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Which of the two json documents failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// the `{statusCode, body}` envelope
    Envelope,
    /// the json text inside the envelope's `body`
    Body,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStage::Envelope => write!(f, "output payload"),
            DecodeStage::Body => write!(f, "response body"),
        }
    }
}

/// Every way an invocation can fail. None of these are retried.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("could not encode payload: {0}")]
    Encoding(#[from] EncodeErr),
    #[error("lambda client error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("error during unmarshal of {stage}: {source}")]
    Decoding {
        stage: DecodeStage,
        payload: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("non 200 status code: {status_code}")]
    NonSuccessStatus { status_code: u16, payload: String },
}
