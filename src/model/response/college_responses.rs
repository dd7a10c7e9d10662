use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::{College, CollegeLink};
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct CollegeApi {
    pub id: String,
    pub name: String,
    #[serde(rename = "extensionUrl")]
    pub extension_url: String,
    #[serde(rename = "emailExtensions")]
    pub email_extensions: Vec<String>,
    pub logo: String,
    pub links: Vec<CollegeLink>,
    pub courses: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<College> for CollegeApi {
    fn from(value: College) -> Self {
        CollegeApi {
            id: value.id,
            name: value.name,
            extension_url: value.extension_url,
            email_extensions: value.email_extensions,
            logo: value.logo,
            links: value.links,
            courses: value.courses,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

#[derive(Responder)]
pub enum CreateCollegeResponse {
    #[response(status = 500, content_type = "json")]
    CollegeDbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<CollegeApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetCollegeResponse {
    #[response(status = 404, content_type = "json")]
    CollegeNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    CollegeDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<CollegeApi>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListCollegesResponse {
    #[response(status = 500, content_type = "json")]
    CollegeDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<CollegeApi>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum UpdateCollegeResponse {
    #[response(status = 404, content_type = "json")]
    CollegeNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    CollegeDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<CollegeApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteCollegeResponse {
    #[response(status = 404, content_type = "json")]
    CollegeNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    CollegeDbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}
