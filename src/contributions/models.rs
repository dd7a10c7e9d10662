use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::response::BasicMessage;

/// what a settled recalculation wrote back to the user row
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct RecalculationOutcome {
    pub success: bool,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub contributions: u32,
    pub xp: u32,
}

/// optional request body naming whose counters to recount
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RecalculateRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(PartialEq, Debug)]
pub enum RecalculateError {
    UserNotFound,
    DbFailure,
}

#[derive(Responder)]
pub enum RecalculateResponse {
    #[response(status = 200)]
    Success(Json<RecalculationOutcome>),
    #[response(status = 404, content_type = "json")]
    UserNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
}
