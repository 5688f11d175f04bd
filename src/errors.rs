//! Error types for interpreting upload responses.

/// Errors that can occur when interpreting an upload response body.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The response body was not valid JSON for either outcome shape.
    #[error("Malformed upload response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The API reported the upload as failed, with a status and message.
    #[error("Upload failed with status {status}: {message}")]
    UploadFailed { status: i64, message: String },
}
