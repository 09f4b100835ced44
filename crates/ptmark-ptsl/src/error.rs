//! Error types for ptmark-ptsl.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while talking to a PTSL session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("PTSL endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Pro Tools accepted the request but the command did not complete.
    #[error("{command} failed ({status}): {message}")]
    Command {
        command: String,
        status: String,
        message: String,
    },

    /// A request or response body was not the expected JSON.
    #[error("invalid PTSL payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Connection registration did not yield a session id.
    #[error("PTSL did not return a session id")]
    NotConnected,
}

impl Error {
    /// Create a command failure error.
    pub fn command(
        command: impl Into<String>,
        status: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Command {
            command: command.into(),
            status: status.into(),
            message: message.into(),
        }
    }
}
