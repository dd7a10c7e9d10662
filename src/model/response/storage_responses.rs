use std::fs::File;

use rocket::serde::json::Json;

use crate::model::response::BasicMessage;

#[derive(Responder)]
pub enum DownloadObjectResponse {
    #[response(status = 404, content_type = "json")]
    ObjectNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    StorageError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(File),
    #[response(status = 401)]
    Unauthorized(String),
}
