use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::model::error::user_errors::{GetUserError, RegisterUserError, UpdateUserRoleError};
use crate::model::request::user_requests::{RegisterUserRequest, UpdateUserRoleRequest};
use crate::model::response::user_responses::{
    GetUserResponse, ListUsersResponse, RegisterUserResponse, UpdateUserRoleResponse,
};
use crate::model::response::BasicMessage;
use crate::model::role::Role;
use crate::service::user_service;

/// open registration; the very first account becomes the superadmin
#[post("/", data = "<request>")]
pub fn register(request: Json<RegisterUserRequest>) -> RegisterUserResponse {
    match user_service::register_user(request.into_inner()) {
        Ok(user) => RegisterUserResponse::Success(Json::from(user)),
        Err(RegisterUserError::UsernameTaken) => RegisterUserResponse::UsernameTaken(
            BasicMessage::new("That username is already registered."),
        ),
        Err(_) => RegisterUserResponse::UserDbError(BasicMessage::new(
            "Failed to register user. Check server logs for details",
        )),
    }
}

#[get("/")]
pub fn get_users(auth: Auth) -> ListUsersResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return ListUsersResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return ListUsersResponse::Forbidden(BasicMessage::new(
            "Only superadmins may list users.",
        ));
    }
    match user_service::get_all_users() {
        Ok(users) => ListUsersResponse::Success(Json::from(users)),
        Err(_) => ListUsersResponse::UserDbError(BasicMessage::new(
            "Failed to pull users from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_user(id: &str, auth: Auth) -> GetUserResponse {
    if let ValidateResult::Invalid = auth.validate() {
        return GetUserResponse::Unauthorized("Bad Credentials".to_string());
    }
    match user_service::get_user(id) {
        Ok(user) => GetUserResponse::Success(Json::from(user)),
        Err(GetUserError::UserNotFound) => GetUserResponse::UserNotFound(BasicMessage::new(
            "The user with the passed id could not be found.",
        )),
        Err(_) => GetUserResponse::UserDbError(BasicMessage::new(
            "Failed to pull user from database. Check server logs for details",
        )),
    }
}

#[patch("/<id>/role", data = "<request>")]
pub fn update_role(
    id: &str,
    request: Json<UpdateUserRoleRequest>,
    auth: Auth,
) -> UpdateUserRoleResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return UpdateUserRoleResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return UpdateUserRoleResponse::Forbidden(BasicMessage::new(
            "Only superadmins may change roles.",
        ));
    }
    match user_service::update_user_role(id, request.into_inner()) {
        Ok(updated) => UpdateUserRoleResponse::Success(Json::from(updated)),
        Err(UpdateUserRoleError::UserNotFound) => UpdateUserRoleResponse::UserNotFound(
            BasicMessage::new("The user with the passed id could not be found."),
        ),
        Err(_) => UpdateUserRoleResponse::UserDbError(BasicMessage::new(
            "Failed to update user role. Check server logs for details",
        )),
    }
}
