use rocket::serde::json::Json;

use crate::contributions::models::{RecalculateError, RecalculateRequest, RecalculateResponse};
use crate::contributions::service;
use crate::guard::{Auth, ValidateResult};
use crate::model::response::BasicMessage;

/// recounts contribution counters on demand. The body may name a target
/// user; with no body the caller's own counters are recounted
#[post("/recalculate", data = "<request>")]
pub fn recalculate(request: Option<Json<RecalculateRequest>>, auth: Auth) -> RecalculateResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return RecalculateResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    let target = request
        .and_then(|body| body.into_inner().user_id)
        .unwrap_or(user.id);
    match service::recalculate_user_contributions(target.as_str()) {
        Ok(outcome) => RecalculateResponse::Success(Json::from(outcome)),
        Err(RecalculateError::UserNotFound) => RecalculateResponse::UserNotFound(
            BasicMessage::new("The user with the passed id could not be found."),
        ),
        Err(_) => RecalculateResponse::DbError(BasicMessage::new(
            "Failed to recalculate contributions. Check server logs for details",
        )),
    }
}
