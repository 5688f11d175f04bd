//! Response envelopes returned by the image upload endpoint.

use serde::{Deserialize, Serialize};

use super::Image;
use crate::Error;

extern crate serde_json;

/// Body of a successful upload response. `success` is expected to be `true`.
#[derive(Serialize, Deserialize)]
pub struct UploadResponseBody {
    /// The uploaded image record.
    pub data: Image,

    /// Outcome flag reported by the API.
    pub success: bool,

    /// HTTP-style status code echoed in the body.
    pub status: i64,
}

/// Body of a failed upload response. `success` is expected to be `false`.
#[derive(Serialize, Deserialize)]
pub struct UploadErrorBody {
    pub data: ErrorDetail,

    /// Outcome flag reported by the API.
    pub success: bool,

    /// HTTP-style status code echoed in the body.
    pub status: i64,
}

/// Payload of the error shape's `data` field.
#[derive(Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable error message.
    pub error: String,
}

/// Either terminal shape of an upload response body.
///
/// The API returns one JSON object for both outcomes; which shape applies is
/// determined by the fields present (the success `data` record requires
/// fields the error shape lacks, and vice versa).
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum UploadOutcome {
    /// The upload succeeded.
    Success(UploadResponseBody),

    /// The upload failed.
    Failure(UploadErrorBody),
}

impl UploadOutcome {
    /// Parses a raw upload response body into whichever shape it matches.
    pub fn from_json(body: &str) -> Result<Self, Error> {
        serde_json::from_str::<UploadOutcome>(body).map_err(|e| {
            let snippet = truncate_body(body);
            tracing::error!("Failed to parse upload response: {} | body: {}", e, snippet);
            Error::Malformed(e)
        })
    }

    /// The `success` flag reported in the body, whichever shape parsed.
    pub fn is_success(&self) -> bool {
        match self {
            UploadOutcome::Success(body) => body.success,
            UploadOutcome::Failure(body) => body.success,
        }
    }

    /// The HTTP-style status code echoed in the body.
    pub fn status(&self) -> i64 {
        match self {
            UploadOutcome::Success(body) => body.status,
            UploadOutcome::Failure(body) => body.status,
        }
    }

    /// Converts the outcome into a `Result`, mapping the failure shape onto
    /// [`Error::UploadFailed`].
    pub fn into_result(self) -> Result<UploadResponseBody, Error> {
        match self {
            UploadOutcome::Success(body) => Ok(body),
            UploadOutcome::Failure(body) => {
                tracing::error!(
                    "Upload failed with status {}: {}",
                    body.status,
                    body.data.error
                );
                Err(Error::UploadFailed {
                    status: body.status,
                    message: body.data.error,
                })
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let head: String = body.chars().take(MAX).collect();
        format!("{}...[truncated]", head)
    }
}
