use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::model::error::course_errors::{CreateCourseError, DeleteCourseError, GetCourseError};
use crate::model::request::course_requests::CreateCourseRequest;
use crate::model::response::course_responses::{
    CreateCourseResponse, DeleteCourseResponse, GetCourseResponse, ListCoursesResponse,
};
use crate::model::response::BasicMessage;
use crate::model::role::Role;
use crate::service::course_service;

#[post("/", data = "<request>")]
pub fn create_course(request: Json<CreateCourseRequest>, auth: Auth) -> CreateCourseResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return CreateCourseResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return CreateCourseResponse::Forbidden(BasicMessage::new(
            "Only superadmins may create courses.",
        ));
    }
    match course_service::create_course(request.into_inner()) {
        Ok(course) => CreateCourseResponse::Success(Json::from(course)),
        Err(CreateCourseError::CollegeNotFound) => CreateCourseResponse::CollegeNotFound(
            BasicMessage::new("The college with the passed id could not be found."),
        ),
        Err(_) => CreateCourseResponse::CourseDbError(BasicMessage::new(
            "Failed to create course. Check server logs for details",
        )),
    }
}

#[get("/")]
pub fn get_courses(auth: Auth) -> ListCoursesResponse {
    if let ValidateResult::Invalid = auth.validate() {
        return ListCoursesResponse::Unauthorized("Bad Credentials".to_string());
    }
    match course_service::get_all_courses() {
        Ok(courses) => ListCoursesResponse::Success(Json::from(courses)),
        Err(_) => ListCoursesResponse::CourseDbError(BasicMessage::new(
            "Failed to pull courses from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_course(id: &str, auth: Auth) -> GetCourseResponse {
    if let ValidateResult::Invalid = auth.validate() {
        return GetCourseResponse::Unauthorized("Bad Credentials".to_string());
    }
    match course_service::get_course(id) {
        Ok(course) => GetCourseResponse::Success(Json::from(course)),
        Err(GetCourseError::CourseNotFound) => GetCourseResponse::CourseNotFound(
            BasicMessage::new("The course with the passed id could not be found."),
        ),
        Err(_) => GetCourseResponse::CourseDbError(BasicMessage::new(
            "Failed to pull course from database. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_course(id: &str, auth: Auth) -> DeleteCourseResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return DeleteCourseResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return DeleteCourseResponse::Forbidden(BasicMessage::new(
            "Only superadmins may delete courses.",
        ));
    }
    match course_service::delete_course(id) {
        Ok(()) => DeleteCourseResponse::Success(()),
        Err(DeleteCourseError::CourseNotFound) => DeleteCourseResponse::CourseNotFound(
            BasicMessage::new("The course with the passed id could not be found."),
        ),
        Err(_) => DeleteCourseResponse::CourseDbError(BasicMessage::new(
            "Failed to delete course. Check server logs for details",
        )),
    }
}
