use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::Skill;
use crate::model::response::BasicMessage;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct SkillApi {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub courses: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Skill> for SkillApi {
    fn from(value: Skill) -> Self {
        SkillApi {
            id: value.id,
            name: value.name,
            icon: value.icon,
            courses: value.courses,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

#[derive(Responder)]
pub enum CreateSkillResponse {
    #[response(status = 400, content_type = "json")]
    SkillAlreadyExists(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    SkillDbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<SkillApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetSkillResponse {
    #[response(status = 404, content_type = "json")]
    SkillNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    SkillDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<SkillApi>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListSkillsResponse {
    #[response(status = 500, content_type = "json")]
    SkillDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<SkillApi>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum UpdateSkillResponse {
    #[response(status = 404, content_type = "json")]
    SkillNotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    SkillAlreadyExists(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    SkillDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<SkillApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}
