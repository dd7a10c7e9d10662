use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::model::response::BasicMessage;
use crate::moderation::models::{
    ApproveFolderError, ApproveFolderResponse, ListPendingError, ListPendingResponse,
    ModerateFileError, ModerateFileResponse, RejectFolderError, RejectFolderResponse,
};
use crate::moderation::service;

#[get("/pending")]
pub fn get_pending(auth: Auth) -> ListPendingResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return ListPendingResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match service::get_pending_folders(&user) {
        Ok(folders) => ListPendingResponse::Success(Json::from(folders)),
        Err(ListPendingError::NotAllowed) => ListPendingResponse::Forbidden(BasicMessage::new(
            "You do not moderate any courses.",
        )),
        Err(_) => ListPendingResponse::DbError(BasicMessage::new(
            "Failed to pull pending folders from database. Check server logs for details",
        )),
    }
}

#[post("/folders/<id>/approve")]
pub fn approve_folder(id: &str, auth: Auth) -> ApproveFolderResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return ApproveFolderResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match service::approve_folder(id, &user) {
        Ok(folder) => ApproveFolderResponse::Success(Json::from(folder)),
        Err(ApproveFolderError::FolderNotFound) => ApproveFolderResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(ApproveFolderError::NotPending) => ApproveFolderResponse::NotPending(
            BasicMessage::new("That folder has already been moderated."),
        ),
        Err(ApproveFolderError::NotAllowed) => ApproveFolderResponse::Forbidden(
            BasicMessage::new("You do not moderate the course this folder belongs to."),
        ),
        Err(_) => ApproveFolderResponse::DbError(BasicMessage::new(
            "Failed to approve folder. Check server logs for details",
        )),
    }
}

#[post("/folders/<id>/reject")]
pub fn reject_folder(id: &str, auth: Auth) -> RejectFolderResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return RejectFolderResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match service::reject_folder(id, &user) {
        Ok(()) => RejectFolderResponse::Success(()),
        Err(RejectFolderError::FolderNotFound) => RejectFolderResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(RejectFolderError::NotPending) => RejectFolderResponse::NotPending(
            BasicMessage::new("That folder has already been moderated."),
        ),
        Err(RejectFolderError::NotAllowed) => RejectFolderResponse::Forbidden(BasicMessage::new(
            "You do not moderate the course this folder belongs to.",
        )),
        Err(_) => RejectFolderResponse::DbError(BasicMessage::new(
            "Failed to reject folder. Check server logs for details",
        )),
    }
}

#[post("/folders/<id>/files/<index>/approve")]
pub fn approve_file(id: &str, index: usize, auth: Auth) -> ModerateFileResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return ModerateFileResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    map_file_moderation(service::approve_file(id, index, &user))
}

#[post("/folders/<id>/files/<index>/reject")]
pub fn reject_file(id: &str, index: usize, auth: Auth) -> ModerateFileResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return ModerateFileResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    map_file_moderation(service::reject_file(id, index, &user))
}

fn map_file_moderation(
    res: Result<crate::model::response::folder_responses::FolderApi, ModerateFileError>,
) -> ModerateFileResponse {
    match res {
        Ok(folder) => ModerateFileResponse::Success(Json::from(folder)),
        Err(ModerateFileError::FolderNotFound) => ModerateFileResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(ModerateFileError::FileNotFound) => ModerateFileResponse::FileNotFound(
            BasicMessage::new("The folder has no file at the passed index."),
        ),
        Err(ModerateFileError::NotAllowed) => ModerateFileResponse::Forbidden(BasicMessage::new(
            "You do not moderate the course this folder belongs to.",
        )),
        Err(_) => ModerateFileResponse::DbError(BasicMessage::new(
            "Failed to moderate file. Check server logs for details",
        )),
    }
}
