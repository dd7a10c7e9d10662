use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::Notification;
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct NotificationApi {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "courseName")]
    pub course_name: String,
    #[serde(rename = "uploaderId")]
    pub uploader_id: String,
    #[serde(rename = "uploaderName")]
    pub uploader_name: String,
    #[serde(rename = "itemType")]
    pub item_type: String,
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "fileCount")]
    pub file_count: u32,
    pub read: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Notification> for NotificationApi {
    fn from(value: Notification) -> Self {
        NotificationApi {
            id: value.id,
            user_id: value.user_id,
            notification_type: value.notification_type,
            course_id: value.course_id,
            course_name: value.course_name,
            uploader_id: value.uploader_id,
            uploader_name: value.uploader_name,
            item_type: value.item_type,
            item_name: value.item_name,
            file_count: value.file_count,
            read: value.read,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

#[derive(Responder)]
pub enum ListNotificationsResponse {
    #[response(status = 500, content_type = "json")]
    NotificationDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<NotificationApi>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum MarkNotificationReadResponse {
    #[response(status = 404, content_type = "json")]
    NotificationNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    NotificationDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<NotificationApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum MarkAllNotificationsReadResponse {
    #[response(status = 500, content_type = "json")]
    NotificationDbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteNotificationResponse {
    #[response(status = 404, content_type = "json")]
    NotificationNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    NotificationDbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}
