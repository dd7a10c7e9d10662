use std::backtrace::Backtrace;

use chrono::Utc;
use rocket::fs::TempFile;
use rocket::http::ContentType;
use rusqlite::Connection;
use uuid::Uuid;

use crate::contributions;
use crate::model::error::folder_errors::{
    DeleteFileEntryError, DeleteFolderError, GetFolderError, ListFoldersError, RestoreFolderError,
    SetImportanceError, UploadError,
};
use crate::model::moderation::ModerationStatus;
use crate::model::repository;
use crate::model::repository::{FileEntry, FolderRef};
use crate::model::request::folder_requests::ResourceUpload;
use crate::model::response::folder_responses::FolderApi;
use crate::model::role::Role;
use crate::repository::{course_repository, folder_repository, open_connection};
use crate::service::notification_service;
use crate::storage;
use crate::util::RequestLimiter;

/// takes a multipart upload and turns it into a folder document plus stored
/// blobs. An existing live folder with the same (course, name) receives the
/// files appended; otherwise a new folder row is created. Everything the
/// caller sent is validated before the first blob is written
pub async fn upload_resource(
    request: &mut ResourceUpload<'_>,
    user: &repository::User,
    limiter: &RequestLimiter,
) -> Result<FolderApi, UploadError> {
    if request.files.is_empty() {
        return Err(UploadError::NoFiles);
    }
    let con = open_connection();
    let course = match course_repository::get_course_by_id(request.course_id.as_str(), &con) {
        Ok(Some(course)) => course,
        Ok(None) => {
            con.close().unwrap();
            return Err(UploadError::CourseNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(UploadError::DbFailure);
        }
    };
    let existing = match folder_repository::get_folder_by_course_and_name(
        request.course_id.as_str(),
        request.folder_name.as_str(),
        &con,
    ) {
        Ok(existing) => existing,
        Err(_) => {
            con.close().unwrap();
            return Err(UploadError::DbFailure);
        }
    };
    for file in request.files.iter() {
        let name = file_name_of(file);
        if !check_file_type(name.as_str(), file.content_type()) {
            con.close().unwrap();
            return Err(UploadError::InvalidFileType(name));
        }
    }
    con.close().unwrap();
    let status = if user.can_moderate(course.id.as_str()) {
        ModerationStatus::Approved
    } else {
        ModerationStatus::Pending
    };
    // existing folders keep their id as the storage segment; new folders
    // are keyed by name because the id doesn't exist yet
    let folder_key = match &existing {
        Some(folder) => folder.id.clone(),
        None => request.folder_name.clone(),
    };
    // no connection may be held here: blob writes await, and the sqlite
    // handle has to stay on one thread
    let mut entries: Vec<FileEntry> = Vec::with_capacity(request.files.len());
    for file in request.files.iter_mut() {
        let name = file_name_of(file);
        let mime_type = entry_mime_type(name.as_str(), file.content_type());
        let object_path = storage::object_path_for(
            request.course_id.as_str(),
            folder_key.as_str(),
            name.as_str(),
            Utc::now().timestamp_millis(),
        );
        let size = match storage::save_blob(object_path.as_str(), file).await {
            Ok(size) => size,
            Err(e) => {
                log::error!(
                    "Failed to store blob {object_path}! Error is {e:?}\n{}",
                    Backtrace::force_capture()
                );
                return Err(UploadError::StorageFailure);
            }
        };
        entries.push(FileEntry {
            name,
            url: storage::download_url(object_path.as_str()),
            size,
            mime_type,
            moderation_status: status,
            uploaded_by: user.display_name.clone(),
            uploaded_by_id: user.id.clone(),
            uploaded_at: Utc::now(),
            moderated_by: None,
            moderated_by_id: None,
            moderated_at: None,
        });
    }
    let file_count = entries.len() as u32;
    let (folder, item_type) = match existing {
        Some(mut folder) => {
            folder.files.append(&mut entries);
            folder.uploaded_at = Utc::now();
            (folder, "files")
        }
        None => (
            repository::Folder {
                id: Uuid::new_v4().to_string(),
                course_id: Some(course.id.clone()),
                name: request.folder_name.clone(),
                uploaded_by: user.display_name.clone(),
                uploaded_by_id: user.id.clone(),
                files: entries,
                moderation_status: status,
                moderated_by: None,
                moderated_by_id: None,
                moderated_at: None,
                is_important: request.is_important,
                deleted: false,
                deleted_at: None,
                deleted_by: None,
                created_at: Utc::now(),
                uploaded_at: Utc::now(),
            },
            "folder",
        ),
    };
    let mut con = open_connection();
    let tx_result = con.transaction();
    if let Err(e) = &tx_result {
        log::error!(
            "Failed to open transaction to save upload! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        drop(tx_result);
        con.close().unwrap();
        return Err(UploadError::DbFailure);
    }
    let tx = tx_result.unwrap();
    let write_res = match item_type {
        "files" => folder_repository::update_files(
            folder.id.as_str(),
            &folder.files,
            folder.uploaded_at,
            &tx,
        ),
        _ => folder_repository::create_folder(&folder, &tx),
    }
    .and_then(|_| add_course_entry(&course, folder.id.as_str(), &tx));
    let commit_res = match write_res {
        Ok(()) => tx.commit(),
        Err(e) => {
            log::error!(
                "Failed to save uploaded folder {}! Error is {e:?}\n{}",
                folder.name,
                Backtrace::force_capture()
            );
            drop(tx);
            con.close().unwrap();
            return Err(UploadError::DbFailure);
        }
    };
    if let Err(e) = commit_res {
        log::error!(
            "Failed to commit upload! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(UploadError::DbFailure);
    }
    con.close().unwrap();
    if status == ModerationStatus::Pending {
        notification_service::notify_course_admins(
            &course,
            user,
            item_type,
            folder.name.as_str(),
            file_count,
            limiter,
        );
    }
    contributions::queue_recalculation(folder.uploaded_by_id.as_str());
    Ok(FolderApi::from(folder))
}

/// soft-deleted folders are returned here on purpose, so their owner can
/// still see them and ask for a restore
pub fn get_folder(id: &str) -> Result<FolderApi, GetFolderError> {
    let con = open_connection();
    let folder = folder_repository::get_folder_by_id(id, &con);
    con.close().unwrap();
    match folder {
        Ok(Some(folder)) => Ok(FolderApi::from(folder)),
        Ok(None) => Err(GetFolderError::FolderNotFound),
        Err(_) => Err(GetFolderError::DbFailure),
    }
}

pub fn get_folders_for_course(course_id: &str) -> Result<Vec<FolderApi>, ListFoldersError> {
    let con = open_connection();
    let folders = folder_repository::get_folders_for_course(course_id, &con);
    con.close().unwrap();
    match folders {
        Ok(folders) => Ok(folders.into_iter().map(FolderApi::from).collect()),
        Err(_) => Err(ListFoldersError::DbFailure),
    }
}

/// flags the folder deleted and drops it from its course's summary array in
/// one transaction. Files and blobs stay put so the folder can be restored
pub fn soft_delete_folder(id: &str, user: &repository::User) -> Result<(), DeleteFolderError> {
    let mut con = open_connection();
    let folder = match folder_repository::get_folder_by_id(id, &con) {
        Ok(Some(folder)) if !folder.deleted => folder,
        Ok(_) => {
            con.close().unwrap();
            return Err(DeleteFolderError::FolderNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(DeleteFolderError::DbFailure);
        }
    };
    if !can_manage(user, &folder) {
        con.close().unwrap();
        return Err(DeleteFolderError::NotAllowed);
    }
    let tx_result = con.transaction();
    if let Err(e) = &tx_result {
        log::error!(
            "Failed to open transaction to delete folder! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        drop(tx_result);
        con.close().unwrap();
        return Err(DeleteFolderError::DbFailure);
    }
    let tx = tx_result.unwrap();
    let write_res = folder_repository::soft_delete_folder(id, Utc::now(), user.id.as_str(), &tx)
        .and_then(|_| remove_course_entry(folder.course_id.as_deref(), id, &tx));
    let commit_res = match write_res {
        Ok(()) => tx.commit(),
        Err(e) => {
            log::error!(
                "Failed to soft delete folder {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            drop(tx);
            con.close().unwrap();
            return Err(DeleteFolderError::DbFailure);
        }
    };
    if let Err(e) = commit_res {
        log::error!(
            "Failed to commit folder soft delete! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(DeleteFolderError::DbFailure);
    }
    con.close().unwrap();
    contributions::queue_recalculation(folder.uploaded_by_id.as_str());
    Ok(())
}

/// clears the soft-delete flags. The course summary entry is not put back
/// here; the maintenance repair pass re-adds refs for live folders, which
/// keeps restore a single-row write
pub fn restore_folder(id: &str) -> Result<FolderApi, RestoreFolderError> {
    let con = open_connection();
    let mut folder = match folder_repository::get_folder_by_id(id, &con) {
        Ok(Some(folder)) => folder,
        Ok(None) => {
            con.close().unwrap();
            return Err(RestoreFolderError::FolderNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(RestoreFolderError::DbFailure);
        }
    };
    if let Err(e) = folder_repository::restore_folder(id, &con) {
        log::error!(
            "Failed to restore folder {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(RestoreFolderError::DbFailure);
    }
    con.close().unwrap();
    contributions::queue_recalculation(folder.uploaded_by_id.as_str());
    folder.deleted = false;
    folder.deleted_at = None;
    folder.deleted_by = None;
    Ok(FolderApi::from(folder))
}

/// removes the folder row and its summary entry for good. Blob deletion runs
/// first and is best-effort: an object we can't remove shouldn't keep the
/// document alive
pub fn delete_folder_permanently(id: &str) -> Result<(), DeleteFolderError> {
    let mut con = open_connection();
    let folder = match folder_repository::get_folder_by_id(id, &con) {
        Ok(Some(folder)) => folder,
        Ok(None) => {
            con.close().unwrap();
            return Err(DeleteFolderError::FolderNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(DeleteFolderError::DbFailure);
        }
    };
    remove_blobs(&folder.files);
    let tx_result = con.transaction();
    if let Err(e) = &tx_result {
        log::error!(
            "Failed to open transaction to purge folder! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        drop(tx_result);
        con.close().unwrap();
        return Err(DeleteFolderError::DbFailure);
    }
    let tx = tx_result.unwrap();
    let write_res = folder_repository::delete_folder(id, &tx)
        .and_then(|_| remove_course_entry(folder.course_id.as_deref(), id, &tx));
    let commit_res = match write_res {
        Ok(()) => tx.commit(),
        Err(e) => {
            log::error!(
                "Failed to purge folder {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            drop(tx);
            con.close().unwrap();
            return Err(DeleteFolderError::DbFailure);
        }
    };
    if let Err(e) = commit_res {
        log::error!(
            "Failed to commit folder purge! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(DeleteFolderError::DbFailure);
    }
    con.close().unwrap();
    contributions::queue_recalculation(folder.uploaded_by_id.as_str());
    Ok(())
}

/// importance is a curation flag, so only moderators of the owning course
/// may flip it; the uploader alone is not enough
pub fn set_importance(
    id: &str,
    is_important: bool,
    user: &repository::User,
) -> Result<FolderApi, SetImportanceError> {
    let con = open_connection();
    let mut folder = match folder_repository::get_folder_by_id(id, &con) {
        Ok(Some(folder)) if !folder.deleted => folder,
        Ok(_) => {
            con.close().unwrap();
            return Err(SetImportanceError::FolderNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(SetImportanceError::DbFailure);
        }
    };
    let allowed = match folder.course_id.as_deref() {
        Some(course_id) => user.can_moderate(course_id),
        None => user.role == Role::SuperAdmin,
    };
    if !allowed {
        con.close().unwrap();
        return Err(SetImportanceError::NotAllowed);
    }
    if let Err(e) = folder_repository::set_importance(id, is_important, &con) {
        log::error!(
            "Failed to set importance on folder {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(SetImportanceError::DbFailure);
    }
    con.close().unwrap();
    contributions::queue_recalculation(folder.uploaded_by_id.as_str());
    folder.is_important = is_important;
    Ok(FolderApi::from(folder))
}

/// removes the file entry at the passed position, deleting its blob
/// best-effort first
pub fn delete_file_entry(
    folder_id: &str,
    index: usize,
    user: &repository::User,
) -> Result<FolderApi, DeleteFileEntryError> {
    let con = open_connection();
    let mut folder = match folder_repository::get_folder_by_id(folder_id, &con) {
        Ok(Some(folder)) if !folder.deleted => folder,
        Ok(_) => {
            con.close().unwrap();
            return Err(DeleteFileEntryError::FolderNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(DeleteFileEntryError::DbFailure);
        }
    };
    if !can_manage(user, &folder) {
        con.close().unwrap();
        return Err(DeleteFileEntryError::NotAllowed);
    }
    if index >= folder.files.len() {
        con.close().unwrap();
        return Err(DeleteFileEntryError::FileNotFound);
    }
    let removed = folder.files.remove(index);
    remove_blobs(std::slice::from_ref(&removed));
    // the folder's uploadedAt marks the last append, so removal keeps it
    if let Err(e) =
        folder_repository::update_files(folder_id, &folder.files, folder.uploaded_at, &con)
    {
        log::error!(
            "Failed to remove file entry {index} from folder {folder_id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(DeleteFileEntryError::DbFailure);
    }
    con.close().unwrap();
    contributions::queue_recalculation(folder.uploaded_by_id.as_str());
    Ok(FolderApi::from(folder))
}

/// whether the user may delete this folder or its files: the uploader, a
/// moderator of the owning course, or a superadmin when the folder has no
/// course left to moderate
pub fn can_manage(user: &repository::User, folder: &repository::Folder) -> bool {
    if user.id == folder.uploaded_by_id {
        return true;
    }
    match folder.course_id.as_deref() {
        Some(course_id) => user.can_moderate(course_id),
        None => user.role == Role::SuperAdmin,
    }
}

/// drops the folder from the course's summary array. A missing course (the
/// folder is orphaned) or an already-absent entry is fine
pub fn remove_course_entry(
    course_id: Option<&str>,
    folder_id: &str,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let course_id = match course_id {
        Some(course_id) => course_id,
        None => return Ok(()),
    };
    let course = match course_repository::get_course_by_id(course_id, con)? {
        Some(course) => course,
        None => return Ok(()),
    };
    let folders: Vec<FolderRef> = course
        .folders
        .iter()
        .filter(|entry| entry.folder_id() != Some(folder_id))
        .cloned()
        .collect();
    if folders.len() == course.folders.len() {
        return Ok(());
    }
    course_repository::update_folders(course_id, &folders, con)
}

/// ensures the course's summary array lists the folder, in the canonical
/// id-string form. Entries already present in either form are left alone
fn add_course_entry(
    course: &repository::Course,
    folder_id: &str,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let already_listed = course
        .folders
        .iter()
        .any(|entry| entry.folder_id() == Some(folder_id));
    if already_listed {
        return Ok(());
    }
    let mut folders = course.folders.clone();
    folders.push(FolderRef::Id(folder_id.to_string()));
    course_repository::update_folders(course.id.as_str(), &folders, con)
}

/// best-effort blob removal for the passed entries; failures are logged and
/// skipped so one stuck object can't block a delete
pub fn remove_blobs(files: &[FileEntry]) {
    for entry in files {
        let object_path = match storage::object_path_from_url(entry.url.as_str()) {
            Some(object_path) => object_path,
            None => {
                log::warn!("File entry url {} has no storage path in it", entry.url);
                continue;
            }
        };
        if let Err(e) = storage::delete_blob(object_path.as_str()) {
            log::warn!("Failed to remove blob {object_path}! Error is {e:?}");
        }
    }
}

fn file_name_of(file: &TempFile<'_>) -> String {
    file.raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string())
        .unwrap_or_else(|| "unnamed".to_string())
}

/// rejects a file whose extension we recognize but whose declared content
/// type disagrees with it. Unknown extensions and missing declarations pass;
/// the portal stores plenty of formats this table doesn't cover
fn check_file_type(name: &str, content_type: Option<&ContentType>) -> bool {
    let extension = match name.rsplit_once('.') {
        Some((_, extension)) => extension.to_lowercase(),
        None => return true,
    };
    let expected = match expected_mime(extension.as_str()) {
        Some(expected) => expected,
        None => return true,
    };
    match content_type {
        Some(declared) => {
            format!("{}/{}", declared.top(), declared.sub()).to_lowercase() == expected
        }
        None => true,
    }
}

/// what goes in the entry's mimeType field: the declared type when the
/// client sent one, the table value when only the extension is known
fn entry_mime_type(name: &str, content_type: Option<&ContentType>) -> String {
    if let Some(declared) = content_type {
        return format!("{}/{}", declared.top(), declared.sub()).to_lowercase();
    }
    name.rsplit_once('.')
        .and_then(|(_, extension)| expected_mime(extension.to_lowercase().as_str()))
        .unwrap_or("application/octet-stream")
        .to_string()
}

/// the content type each recognized extension is expected to declare
fn expected_mime(extension: &str) -> Option<&'static str> {
    let mime = match extension {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "text/xml",
        "zip" => "application/zip",
        "rar" => "application/vnd.rar",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod folder_lifecycle_tests {
    use crate::model::error::folder_errors::{
        DeleteFileEntryError, DeleteFolderError, SetImportanceError,
    };
    use crate::model::repository::FolderRef;
    use crate::model::role::Role;
    use crate::repository::{course_repository, folder_repository, open_connection, user_repository};
    use crate::service::folder_service::{
        delete_file_entry, get_folder, restore_folder, set_importance, soft_delete_folder,
    };
    use crate::test::{
        cleanup, create_course_db_entry, create_folder_db_entry, create_user_db_entry, refresh_db,
    };

    #[test]
    fn soft_delete_folder_removes_course_entry_in_step() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let folder_id = create_folder_db_entry("Week 1", Some(course_id.as_str()), uploader_id.as_str(), 2);
        let con = open_connection();
        course_repository::update_folders(
            course_id.as_str(),
            &[FolderRef::Id(folder_id.clone())],
            &con,
        )
        .unwrap();
        let uploader = user_repository::get_user_by_id(uploader_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        soft_delete_folder(folder_id.as_str(), &uploader).unwrap();
        let con = open_connection();
        let folder = folder_repository::get_folder_by_id(folder_id.as_str(), &con)
            .unwrap()
            .unwrap();
        let course = course_repository::get_course_by_id(course_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        assert!(folder.deleted);
        assert_eq!(Some(uploader_id), folder.deleted_by);
        assert!(course.folders.is_empty());
        cleanup();
    }

    #[test]
    fn soft_delete_folder_rejects_unrelated_user() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let other_id = create_user_db_entry("other", Role::User);
        let course_id = create_course_db_entry("Signals");
        let folder_id = create_folder_db_entry("Week 1", Some(course_id.as_str()), uploader_id.as_str(), 1);
        let con = open_connection();
        let other = user_repository::get_user_by_id(other_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        let res = soft_delete_folder(folder_id.as_str(), &other).unwrap_err();
        assert_eq!(DeleteFolderError::NotAllowed, res);
        cleanup();
    }

    #[test]
    fn soft_deleted_folder_stays_readable_and_restores() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let folder_id = create_folder_db_entry("Week 1", Some(course_id.as_str()), uploader_id.as_str(), 1);
        let con = open_connection();
        let uploader = user_repository::get_user_by_id(uploader_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        soft_delete_folder(folder_id.as_str(), &uploader).unwrap();
        let deleted = get_folder(folder_id.as_str()).unwrap();
        assert!(deleted.deleted);
        let restored = restore_folder(folder_id.as_str()).unwrap();
        assert!(!restored.deleted);
        let con = open_connection();
        let folder = folder_repository::get_folder_by_id(folder_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        assert!(!folder.deleted);
        assert_eq!(None, folder.deleted_at);
        assert_eq!(None, folder.deleted_by);
        cleanup();
    }

    #[test]
    fn set_importance_rejects_the_plain_uploader() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let folder_id = create_folder_db_entry("Week 1", Some(course_id.as_str()), uploader_id.as_str(), 1);
        let con = open_connection();
        let uploader = user_repository::get_user_by_id(uploader_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        let res = set_importance(folder_id.as_str(), true, &uploader).unwrap_err();
        assert_eq!(SetImportanceError::NotAllowed, res);
        cleanup();
    }

    #[test]
    fn set_importance_allows_superadmin() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let admin_id = create_user_db_entry("root", Role::SuperAdmin);
        let course_id = create_course_db_entry("Signals");
        let folder_id = create_folder_db_entry("Week 1", Some(course_id.as_str()), uploader_id.as_str(), 1);
        let con = open_connection();
        let admin = user_repository::get_user_by_id(admin_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        let updated = set_importance(folder_id.as_str(), true, &admin).unwrap();
        assert!(updated.is_important);
        cleanup();
    }

    #[test]
    fn delete_file_entry_shrinks_the_folder() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let folder_id = create_folder_db_entry("Week 1", Some(course_id.as_str()), uploader_id.as_str(), 3);
        let con = open_connection();
        let uploader = user_repository::get_user_by_id(uploader_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        let updated = delete_file_entry(folder_id.as_str(), 1, &uploader).unwrap();
        assert_eq!(2, updated.files.len());
        let missing = delete_file_entry(folder_id.as_str(), 5, &uploader).unwrap_err();
        assert_eq!(DeleteFileEntryError::FileNotFound, missing);
        cleanup();
    }
}

#[cfg(test)]
mod file_type_tests {
    use rocket::http::ContentType;

    use crate::service::folder_service::{check_file_type, entry_mime_type};

    #[test]
    fn check_file_type_rejects_mismatched_declaration() {
        assert!(!check_file_type("notes.pdf", Some(&ContentType::PNG)));
        assert!(check_file_type("notes.pdf", Some(&ContentType::PDF)));
    }

    #[test]
    fn check_file_type_allows_unknown_extensions_and_missing_types() {
        assert!(check_file_type("archive.tar.lz4", Some(&ContentType::Binary)));
        assert!(check_file_type("notes.pdf", None));
        assert!(check_file_type("README", Some(&ContentType::Text)));
    }

    #[test]
    fn entry_mime_type_prefers_the_declared_type() {
        assert_eq!("image/png", entry_mime_type("shot.pdf", Some(&ContentType::PNG)));
        assert_eq!("application/pdf", entry_mime_type("notes.pdf", None));
        assert_eq!("application/octet-stream", entry_mime_type("data.bin", None));
    }
}
