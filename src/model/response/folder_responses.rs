use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::moderation::ModerationStatus;
use crate::model::repository::{FileEntry, Folder};
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct FolderApi {
    pub id: String,
    #[serde(rename = "courseId")]
    pub course_id: Option<String>,
    pub name: String,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: String,
    #[serde(rename = "uploadedById")]
    pub uploaded_by_id: String,
    pub files: Vec<FileEntry>,
    #[serde(rename = "moderationStatus")]
    pub moderation_status: ModerationStatus,
    #[serde(rename = "moderatedBy")]
    pub moderated_by: Option<String>,
    #[serde(rename = "moderatedById")]
    pub moderated_by_id: Option<String>,
    #[serde(rename = "moderatedAt")]
    pub moderated_at: Option<String>,
    #[serde(rename = "isImportant")]
    pub is_important: bool,
    pub deleted: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: String,
}

impl From<Folder> for FolderApi {
    fn from(value: Folder) -> Self {
        FolderApi {
            id: value.id,
            course_id: value.course_id,
            name: value.name,
            uploaded_by: value.uploaded_by,
            uploaded_by_id: value.uploaded_by_id,
            files: value.files,
            moderation_status: value.moderation_status,
            moderated_by: value.moderated_by,
            moderated_by_id: value.moderated_by_id,
            moderated_at: value.moderated_at.map(|d| d.to_rfc3339()),
            is_important: value.is_important,
            deleted: value.deleted,
            created_at: value.created_at.to_rfc3339(),
            uploaded_at: value.uploaded_at.to_rfc3339(),
        }
    }
}

#[derive(Responder)]
pub enum UploadResponse {
    #[response(status = 404, content_type = "json")]
    CourseNotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    InvalidFileType(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    NoFiles(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    StorageError(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<FolderApi>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum GetFolderResponse {
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<FolderApi>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListFoldersResponse {
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<FolderApi>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteFolderResponse {
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum RestoreFolderResponse {
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<FolderApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum SetImportanceResponse {
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<FolderApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteFileEntryResponse {
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    FileNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<FolderApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
}
