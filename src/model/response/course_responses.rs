use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::{Course, FolderRef};
use crate::model::response::folder_responses::FolderApi;
use crate::model::response::BasicMessage;

type NoContent = ();

/// a course as stored, summary array included. The `folders` field is the
/// denormalized view; use [CourseDetailApi] for the authoritative one.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct CourseApi {
    pub id: String,
    pub name: String,
    #[serde(rename = "collegeId")]
    pub college_id: Option<String>,
    pub folders: Vec<FolderRef>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Course> for CourseApi {
    fn from(value: Course) -> Self {
        CourseApi {
            id: value.id,
            name: value.name,
            college_id: value.college_id,
            folders: value.folders,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// a course with its folders resolved from the authoritative Folders table
/// instead of the summary array
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct CourseDetailApi {
    pub id: String,
    pub name: String,
    #[serde(rename = "collegeId")]
    pub college_id: Option<String>,
    pub folders: Vec<FolderApi>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Responder)]
pub enum CreateCourseResponse {
    #[response(status = 404, content_type = "json")]
    CollegeNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    CourseDbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<CourseApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetCourseResponse {
    #[response(status = 404, content_type = "json")]
    CourseNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    CourseDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<CourseDetailApi>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListCoursesResponse {
    #[response(status = 500, content_type = "json")]
    CourseDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<CourseApi>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteCourseResponse {
    #[response(status = 404, content_type = "json")]
    CourseNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    CourseDbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}
