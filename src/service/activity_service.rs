use std::backtrace::Backtrace;

use chrono::Utc;
use uuid::Uuid;

use crate::model::error::activity_errors::LogActivityError;
use crate::model::repository;
use crate::model::request::activity_requests::{LogDownloadRequest, LogSessionRequest};
use crate::repository::{activity_repository, open_connection};

/// appends a session record. These are ungoverned: nothing validates the
/// course or file they name and nothing reads them back through the api
pub fn log_session(
    user: &repository::User,
    request: LogSessionRequest,
) -> Result<(), LogActivityError> {
    let session = repository::SessionLog {
        id: Uuid::new_v4().to_string(),
        user_id: user.id.clone(),
        course_id: request.course_id,
        activity_type: request.activity_type,
        file_name: request.file_name,
        duration_seconds: request.duration_seconds,
        timestamp: Utc::now(),
    };
    let con = open_connection();
    if let Err(e) = activity_repository::create_session(&session, &con) {
        log::error!(
            "Failed to log session for user {}! Error is {e:?}\n{}",
            user.id,
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(LogActivityError::DbFailure);
    }
    con.close().unwrap();
    Ok(())
}

pub fn log_download(
    user: &repository::User,
    request: LogDownloadRequest,
) -> Result<(), LogActivityError> {
    let download = repository::DownloadLog {
        id: Uuid::new_v4().to_string(),
        user_id: user.id.clone(),
        course_id: request.course_id,
        file_name: request.file_name,
        timestamp: Utc::now(),
    };
    let con = open_connection();
    if let Err(e) = activity_repository::create_download(&download, &con) {
        log::error!(
            "Failed to log download for user {}! Error is {e:?}\n{}",
            user.id,
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(LogActivityError::DbFailure);
    }
    con.close().unwrap();
    Ok(())
}
