//! The uploaded image record returned inside a successful upload response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image record carried in the `data` field of a successful upload.
///
/// Field names mirror the wire format exactly; `type` is renamed because it
/// is a Rust keyword.
#[derive(Serialize, Deserialize)]
pub struct Image {
    /// Unique asset identifier, e.g. "orunSTu".
    pub id: String,

    /// User-supplied title. Absent when none was given at upload time.
    pub title: Option<String>,

    /// User-supplied description. Absent when none was given at upload time.
    pub description: Option<String>,

    /// Creation timestamp as epoch seconds.
    pub datetime: i64,

    /// MIME type of the asset, e.g. "image/png".
    #[serde(rename = "type")]
    pub mime_type: String,

    /// Whether the asset is an animated image.
    pub animated: bool,

    /// Width in pixels.
    pub width: i64,

    /// Height in pixels.
    pub height: i64,

    /// Byte size of the asset.
    pub size: i64,

    /// View counter at the time the response was produced.
    pub views: i64,

    /// Cumulative bandwidth consumed serving this asset, in bytes.
    pub bandwidth: i64,

    pub favorite: bool,

    /// Content-sensitivity flag. Absent when the platform has not
    /// classified the asset.
    pub nsfw: Option<bool>,

    /// Uploader account handle. Absent for anonymous uploads.
    pub account_url: Option<String>,

    pub account_id: i64,

    pub is_ad: bool,

    pub in_most_viral: bool,

    /// Associated tag labels, in platform order.
    pub tags: Vec<String>,

    pub ad_type: i64,

    pub ad_url: String,

    pub in_gallery: bool,

    /// Capability token permitting deletion of the asset without
    /// authentication. Treat as a secret.
    pub deletehash: String,

    /// Original filename.
    pub name: String,

    /// Publicly accessible URL of the asset.
    pub link: String,
}

impl Image {
    /// Interprets `datetime` as epoch seconds. Returns `None` if the value
    /// is out of chrono's representable range.
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.datetime, 0)
    }
}
