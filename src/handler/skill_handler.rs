use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::model::error::skill_errors::{CreateSkillError, GetSkillError, UpdateSkillError};
use crate::model::request::skill_requests::{CreateSkillRequest, UpdateSkillRequest};
use crate::model::response::skill_responses::{
    CreateSkillResponse, GetSkillResponse, ListSkillsResponse, UpdateSkillResponse,
};
use crate::model::response::BasicMessage;
use crate::model::role::Role;
use crate::service::skill_service;

#[post("/", data = "<request>")]
pub fn create_skill(request: Json<CreateSkillRequest>, auth: Auth) -> CreateSkillResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return CreateSkillResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return CreateSkillResponse::Forbidden(BasicMessage::new(
            "Only superadmins may create skills.",
        ));
    }
    match skill_service::create_skill(request.into_inner()) {
        Ok(skill) => CreateSkillResponse::Success(Json::from(skill)),
        Err(CreateSkillError::AlreadyExists) => CreateSkillResponse::SkillAlreadyExists(
            BasicMessage::new("A skill with that name already exists."),
        ),
        Err(_) => CreateSkillResponse::SkillDbError(BasicMessage::new(
            "Failed to create skill. Check server logs for details",
        )),
    }
}

#[get("/")]
pub fn get_skills(auth: Auth) -> ListSkillsResponse {
    if let ValidateResult::Invalid = auth.validate() {
        return ListSkillsResponse::Unauthorized("Bad Credentials".to_string());
    }
    match skill_service::get_all_skills() {
        Ok(skills) => ListSkillsResponse::Success(Json::from(skills)),
        Err(_) => ListSkillsResponse::SkillDbError(BasicMessage::new(
            "Failed to pull skills from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_skill(id: &str, auth: Auth) -> GetSkillResponse {
    if let ValidateResult::Invalid = auth.validate() {
        return GetSkillResponse::Unauthorized("Bad Credentials".to_string());
    }
    match skill_service::get_skill(id) {
        Ok(skill) => GetSkillResponse::Success(Json::from(skill)),
        Err(GetSkillError::SkillNotFound) => GetSkillResponse::SkillNotFound(BasicMessage::new(
            "The skill with the passed id could not be found.",
        )),
        Err(_) => GetSkillResponse::SkillDbError(BasicMessage::new(
            "Failed to pull skill from database. Check server logs for details",
        )),
    }
}

#[put("/<id>", data = "<request>")]
pub fn update_skill(
    id: &str,
    request: Json<UpdateSkillRequest>,
    auth: Auth,
) -> UpdateSkillResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return UpdateSkillResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return UpdateSkillResponse::Forbidden(BasicMessage::new(
            "Only superadmins may update skills.",
        ));
    }
    match skill_service::update_skill(id, request.into_inner()) {
        Ok(skill) => UpdateSkillResponse::Success(Json::from(skill)),
        Err(UpdateSkillError::SkillNotFound) => UpdateSkillResponse::SkillNotFound(
            BasicMessage::new("The skill with the passed id could not be found."),
        ),
        Err(UpdateSkillError::AlreadyExists) => UpdateSkillResponse::SkillAlreadyExists(
            BasicMessage::new("A different skill already uses that name."),
        ),
        Err(_) => UpdateSkillResponse::SkillDbError(BasicMessage::new(
            "Failed to update skill. Check server logs for details",
        )),
    }
}
