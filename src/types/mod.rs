mod image;
pub use self::image::Image;

mod upload;
pub use self::upload::{ErrorDetail, UploadErrorBody, UploadOutcome, UploadResponseBody};
