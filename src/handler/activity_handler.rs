use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::model::request::activity_requests::{LogDownloadRequest, LogSessionRequest};
use crate::model::response::activity_responses::LogActivityResponse;
use crate::model::response::BasicMessage;
use crate::service::activity_service;

#[post("/sessions", data = "<request>")]
pub fn log_session(request: Json<LogSessionRequest>, auth: Auth) -> LogActivityResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return LogActivityResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match activity_service::log_session(&user, request.into_inner()) {
        Ok(()) => LogActivityResponse::Success(()),
        Err(_) => LogActivityResponse::ActivityDbError(BasicMessage::new(
            "Failed to log session. Check server logs for details",
        )),
    }
}

#[post("/downloads", data = "<request>")]
pub fn log_download(request: Json<LogDownloadRequest>, auth: Auth) -> LogActivityResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return LogActivityResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match activity_service::log_download(&user, request.into_inner()) {
        Ok(()) => LogActivityResponse::Success(()),
        Err(_) => LogActivityResponse::ActivityDbError(BasicMessage::new(
            "Failed to log download. Check server logs for details",
        )),
    }
}
