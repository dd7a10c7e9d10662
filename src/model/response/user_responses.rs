use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, UserApi};

#[derive(Responder)]
pub enum RegisterUserResponse {
    #[response(status = 400, content_type = "json")]
    UsernameTaken(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    UserDbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<UserApi>),
}

#[derive(Responder)]
pub enum GetUserResponse {
    #[response(status = 404, content_type = "json")]
    UserNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    UserDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<UserApi>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListUsersResponse {
    #[response(status = 500, content_type = "json")]
    UserDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<UserApi>>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum UpdateUserRoleResponse {
    #[response(status = 404, content_type = "json")]
    UserNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    UserDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<UserApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}
