use rocket::serde::json::Json;

use crate::model::response::folder_responses::FolderApi;
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(PartialEq, Debug)]
pub enum ListPendingError {
    /// the caller holds no moderation authority anywhere
    NotAllowed,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum ApproveFolderError {
    FolderNotFound,
    /// the folder was already decided
    NotPending,
    NotAllowed,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum RejectFolderError {
    FolderNotFound,
    NotPending,
    NotAllowed,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum ModerateFileError {
    FolderNotFound,
    /// no file entry at the passed index
    FileNotFound,
    NotAllowed,
    DbFailure,
}

#[derive(Responder)]
pub enum ListPendingResponse {
    #[response(status = 200)]
    Success(Json<Vec<FolderApi>>),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ApproveFolderResponse {
    #[response(status = 200)]
    Success(Json<FolderApi>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    NotPending(Json<BasicMessage>),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum RejectFolderResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    NotPending(Json<BasicMessage>),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ModerateFileResponse {
    #[response(status = 200)]
    Success(Json<FolderApi>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    FileNotFound(Json<BasicMessage>),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
}
