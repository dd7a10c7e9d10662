use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;

use crate::guard::{Auth, ValidateResult};
use crate::model::error::folder_errors::{
    DeleteFileEntryError, DeleteFolderError, GetFolderError, RestoreFolderError,
    SetImportanceError, UploadError,
};
use crate::model::request::folder_requests::{ResourceUpload, SetImportanceRequest};
use crate::model::response::folder_responses::{
    DeleteFileEntryResponse, DeleteFolderResponse, GetFolderResponse, ListFoldersResponse,
    RestoreFolderResponse, SetImportanceResponse, UploadResponse,
};
use crate::model::response::BasicMessage;
use crate::model::role::Role;
use crate::service::folder_service;
use crate::util::RequestLimiter;

/// multipart upload of one or more files into a course folder. Appends when a
/// live folder with the same name already exists in the course
#[post("/", data = "<request>")]
pub async fn upload(
    request: Form<ResourceUpload<'_>>,
    auth: Auth,
    limiter: &State<RequestLimiter>,
) -> UploadResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return UploadResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    let mut request = request.into_inner();
    match folder_service::upload_resource(&mut request, &user, limiter).await {
        Ok(folder) => UploadResponse::Success(Json::from(folder)),
        Err(UploadError::CourseNotFound) => UploadResponse::CourseNotFound(BasicMessage::new(
            "The course with the passed id could not be found.",
        )),
        Err(UploadError::InvalidFileType(name)) => UploadResponse::InvalidFileType(
            BasicMessage::new(&format!(
                "The file {name} does not match its declared content type."
            )),
        ),
        Err(UploadError::NoFiles) => {
            UploadResponse::NoFiles(BasicMessage::new("The upload contained no files."))
        }
        Err(UploadError::StorageFailure) => UploadResponse::StorageError(BasicMessage::new(
            "Failed to store uploaded files. Check server logs for details",
        )),
        Err(_) => UploadResponse::FolderDbError(BasicMessage::new(
            "Failed to save folder. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_folder(id: &str, auth: Auth) -> GetFolderResponse {
    if let ValidateResult::Invalid = auth.validate() {
        return GetFolderResponse::Unauthorized("Bad Credentials".to_string());
    }
    match folder_service::get_folder(id) {
        Ok(folder) => GetFolderResponse::Success(Json::from(folder)),
        Err(GetFolderError::FolderNotFound) => GetFolderResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(_) => GetFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to pull folder from database. Check server logs for details",
        )),
    }
}

/// the live folders of one course, straight from the authoritative table
#[get("/?<course_id>")]
pub fn get_folders(course_id: &str, auth: Auth) -> ListFoldersResponse {
    if let ValidateResult::Invalid = auth.validate() {
        return ListFoldersResponse::Unauthorized("Bad Credentials".to_string());
    }
    match folder_service::get_folders_for_course(course_id) {
        Ok(folders) => ListFoldersResponse::Success(Json::from(folders)),
        Err(_) => ListFoldersResponse::FolderDbError(BasicMessage::new(
            "Failed to pull folders from database. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_folder(id: &str, auth: Auth) -> DeleteFolderResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return DeleteFolderResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match folder_service::soft_delete_folder(id, &user) {
        Ok(()) => DeleteFolderResponse::Success(()),
        Err(DeleteFolderError::FolderNotFound) => DeleteFolderResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(DeleteFolderError::NotAllowed) => DeleteFolderResponse::Forbidden(BasicMessage::new(
            "Only the uploader or a moderator of the course may delete this folder.",
        )),
        Err(_) => DeleteFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to delete folder. Check server logs for details",
        )),
    }
}

/// clears the soft-delete flag. The course's summary entry comes back on the
/// next repair pass rather than here
#[post("/<id>/restore")]
pub fn restore_folder(id: &str, auth: Auth) -> RestoreFolderResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return RestoreFolderResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return RestoreFolderResponse::Forbidden(BasicMessage::new(
            "Only superadmins may restore folders.",
        ));
    }
    match folder_service::restore_folder(id) {
        Ok(folder) => RestoreFolderResponse::Success(Json::from(folder)),
        Err(RestoreFolderError::FolderNotFound) => RestoreFolderResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(_) => RestoreFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to restore folder. Check server logs for details",
        )),
    }
}

#[delete("/<id>/permanent")]
pub fn delete_folder_permanently(id: &str, auth: Auth) -> DeleteFolderResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return DeleteFolderResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return DeleteFolderResponse::Forbidden(BasicMessage::new(
            "Only superadmins may permanently delete folders.",
        ));
    }
    match folder_service::delete_folder_permanently(id) {
        Ok(()) => DeleteFolderResponse::Success(()),
        Err(DeleteFolderError::FolderNotFound) => DeleteFolderResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(_) => DeleteFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to delete folder. Check server logs for details",
        )),
    }
}

#[patch("/<id>/important", data = "<request>")]
pub fn set_importance(
    id: &str,
    request: Json<SetImportanceRequest>,
    auth: Auth,
) -> SetImportanceResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return SetImportanceResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match folder_service::set_importance(id, request.into_inner().is_important, &user) {
        Ok(folder) => SetImportanceResponse::Success(Json::from(folder)),
        Err(SetImportanceError::FolderNotFound) => SetImportanceResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(SetImportanceError::NotAllowed) => SetImportanceResponse::Forbidden(
            BasicMessage::new("Only a moderator of the course may flag this folder."),
        ),
        Err(_) => SetImportanceResponse::FolderDbError(BasicMessage::new(
            "Failed to update folder. Check server logs for details",
        )),
    }
}

#[delete("/<id>/files/<index>")]
pub fn delete_file_entry(id: &str, index: usize, auth: Auth) -> DeleteFileEntryResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return DeleteFileEntryResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match folder_service::delete_file_entry(id, index, &user) {
        Ok(folder) => DeleteFileEntryResponse::Success(Json::from(folder)),
        Err(DeleteFileEntryError::FolderNotFound) => DeleteFileEntryResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(DeleteFileEntryError::FileNotFound) => DeleteFileEntryResponse::FileNotFound(
            BasicMessage::new("The folder has no file at the passed index."),
        ),
        Err(DeleteFileEntryError::NotAllowed) => DeleteFileEntryResponse::Forbidden(
            BasicMessage::new("Only the uploader or a moderator of the course may remove files."),
        ),
        Err(_) => DeleteFileEntryResponse::FolderDbError(BasicMessage::new(
            "Failed to remove file from folder. Check server logs for details",
        )),
    }
}
