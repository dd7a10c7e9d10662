use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository;
use crate::model::role::Role;

pub mod activity_responses;
pub mod college_responses;
pub mod course_responses;
pub mod folder_responses;
pub mod notification_responses;
pub mod skill_responses;
pub mod storage_responses;
pub mod user_responses;

/// represents a basic json message
#[derive(Responder, Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BasicMessage {
    pub message: String,
}

impl BasicMessage {
    pub fn new(message: &str) -> Json<BasicMessage> {
        Json::from(BasicMessage {
            message: message.to_string(),
        })
    }
}

impl From<&str> for BasicMessage {
    fn from(value: &str) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

impl From<String> for BasicMessage {
    fn from(value: String) -> Self {
        Self { message: value }
    }
}

/// a user as shown to clients; the password hash never leaves the repository
/// model
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct UserApi {
    pub id: String,
    pub username: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub email: String,
    #[serde(rename = "collegeId")]
    pub college_id: Option<String>,
    pub bio: String,
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
    pub role: Role,
    #[serde(rename = "adminCourses")]
    pub admin_courses: Vec<String>,
    pub contributions: u32,
    pub xp: u32,
    #[serde(rename = "contributionsUpdatedAt")]
    pub contributions_updated_at: Option<String>,
    #[serde(rename = "isPremium")]
    pub is_premium: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<repository::User> for UserApi {
    fn from(value: repository::User) -> Self {
        UserApi {
            id: value.id,
            username: value.username,
            display_name: value.display_name,
            email: value.email,
            college_id: value.college_id,
            bio: value.bio,
            photo_url: value.photo_url,
            role: value.role,
            admin_courses: value.admin_courses,
            contributions: value.contributions,
            xp: value.xp,
            contributions_updated_at: value.contributions_updated_at.map(|d| d.to_rfc3339()),
            is_premium: value.is_premium,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}
