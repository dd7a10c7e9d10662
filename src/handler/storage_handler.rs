use std::backtrace::Backtrace;
use std::io::ErrorKind;

use crate::guard::{Auth, ValidateResult};
use crate::model::response::storage_responses::DownloadObjectResponse;
use crate::model::response::BasicMessage;
use crate::storage;

/// serves a stored blob by its object path. The path arrives percent-encoded
/// as a single segment; rocket decodes it before we see it
#[get("/o/<object>")]
pub fn download_object(object: &str, auth: Auth) -> DownloadObjectResponse {
    if let ValidateResult::Invalid = auth.validate() {
        return DownloadObjectResponse::Unauthorized("Bad Credentials".to_string());
    }
    match storage::open_blob(object) {
        Ok(file) => DownloadObjectResponse::Success(file),
        Err(e) if e.kind() == ErrorKind::NotFound => DownloadObjectResponse::ObjectNotFound(
            BasicMessage::new("The requested object could not be found."),
        ),
        Err(e) => {
            log::error!(
                "Failed to open object {object}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            DownloadObjectResponse::StorageError(BasicMessage::new(
                "Failed to read object. Check server logs for details",
            ))
        }
    }
}
