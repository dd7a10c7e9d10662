use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::model::error::college_errors::{DeleteCollegeError, GetCollegeError, UpdateCollegeError};
use crate::model::request::college_requests::{CreateCollegeRequest, UpdateCollegeRequest};
use crate::model::response::college_responses::{
    CreateCollegeResponse, DeleteCollegeResponse, GetCollegeResponse, ListCollegesResponse,
    UpdateCollegeResponse,
};
use crate::model::response::BasicMessage;
use crate::model::role::Role;
use crate::service::college_service;

#[post("/", data = "<request>")]
pub fn create_college(request: Json<CreateCollegeRequest>, auth: Auth) -> CreateCollegeResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return CreateCollegeResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return CreateCollegeResponse::Forbidden(BasicMessage::new(
            "Only superadmins may create colleges.",
        ));
    }
    match college_service::create_college(request.into_inner()) {
        Ok(college) => CreateCollegeResponse::Success(Json::from(college)),
        Err(_) => CreateCollegeResponse::CollegeDbError(BasicMessage::new(
            "Failed to create college. Check server logs for details",
        )),
    }
}

#[get("/")]
pub fn get_colleges(auth: Auth) -> ListCollegesResponse {
    if let ValidateResult::Invalid = auth.validate() {
        return ListCollegesResponse::Unauthorized("Bad Credentials".to_string());
    }
    match college_service::get_all_colleges() {
        Ok(colleges) => ListCollegesResponse::Success(Json::from(colleges)),
        Err(_) => ListCollegesResponse::CollegeDbError(BasicMessage::new(
            "Failed to pull colleges from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_college(id: &str, auth: Auth) -> GetCollegeResponse {
    if let ValidateResult::Invalid = auth.validate() {
        return GetCollegeResponse::Unauthorized("Bad Credentials".to_string());
    }
    match college_service::get_college(id) {
        Ok(college) => GetCollegeResponse::Success(Json::from(college)),
        Err(GetCollegeError::CollegeNotFound) => GetCollegeResponse::CollegeNotFound(
            BasicMessage::new("The college with the passed id could not be found."),
        ),
        Err(_) => GetCollegeResponse::CollegeDbError(BasicMessage::new(
            "Failed to pull college from database. Check server logs for details",
        )),
    }
}

#[put("/<id>", data = "<request>")]
pub fn update_college(
    id: &str,
    request: Json<UpdateCollegeRequest>,
    auth: Auth,
) -> UpdateCollegeResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return UpdateCollegeResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return UpdateCollegeResponse::Forbidden(BasicMessage::new(
            "Only superadmins may update colleges.",
        ));
    }
    match college_service::update_college(id, request.into_inner()) {
        Ok(college) => UpdateCollegeResponse::Success(Json::from(college)),
        Err(UpdateCollegeError::CollegeNotFound) => UpdateCollegeResponse::CollegeNotFound(
            BasicMessage::new("The college with the passed id could not be found."),
        ),
        Err(_) => UpdateCollegeResponse::CollegeDbError(BasicMessage::new(
            "Failed to update college. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_college(id: &str, auth: Auth) -> DeleteCollegeResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return DeleteCollegeResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return DeleteCollegeResponse::Forbidden(BasicMessage::new(
            "Only superadmins may delete colleges.",
        ));
    }
    match college_service::delete_college(id) {
        Ok(()) => DeleteCollegeResponse::Success(()),
        Err(DeleteCollegeError::CollegeNotFound) => DeleteCollegeResponse::CollegeNotFound(
            BasicMessage::new("The college with the passed id could not be found."),
        ),
        Err(_) => DeleteCollegeResponse::CollegeDbError(BasicMessage::new(
            "Failed to delete college. Check server logs for details",
        )),
    }
}
