use std::backtrace::Backtrace;

use chrono::Utc;

use crate::contributions;
use crate::model::moderation::ModerationStatus;
use crate::model::repository;
use crate::model::response::folder_responses::FolderApi;
use crate::model::role::Role;
use crate::moderation::models::{
    ApproveFolderError, ListPendingError, ModerateFileError, RejectFolderError,
};
use crate::repository::{folder_repository, open_connection, user_repository};
use crate::service::folder_service;

/// the moderation queue as the caller is allowed to see it: everything for a
/// superadmin, the courses in their admin set for an admin
pub fn get_pending_folders(
    user: &repository::User,
) -> Result<Vec<FolderApi>, ListPendingError> {
    let con = open_connection();
    let folders = match user.role {
        Role::SuperAdmin => folder_repository::get_pending_folders(&con),
        Role::Admin => {
            folder_repository::get_pending_folders_for_courses(&user.admin_courses, &con)
        }
        _ => {
            con.close().unwrap();
            return Err(ListPendingError::NotAllowed);
        }
    };
    con.close().unwrap();
    match folders {
        Ok(folders) => Ok(folders.into_iter().map(FolderApi::from).collect()),
        Err(_) => Err(ListPendingError::DbFailure),
    }
}

/// flips a pending folder and every entry in it to approved, stamping the
/// moderator and time in the same row update
pub fn approve_folder(
    id: &str,
    moderator: &repository::User,
) -> Result<FolderApi, ApproveFolderError> {
    let con = open_connection();
    let mut folder = match folder_repository::get_folder_by_id(id, &con) {
        Ok(Some(folder)) if !folder.deleted => folder,
        Ok(_) => {
            con.close().unwrap();
            return Err(ApproveFolderError::FolderNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(ApproveFolderError::DbFailure);
        }
    };
    if folder.moderation_status != ModerationStatus::Pending {
        con.close().unwrap();
        return Err(ApproveFolderError::NotPending);
    }
    if !can_decide(moderator, &folder) {
        con.close().unwrap();
        return Err(ApproveFolderError::NotAllowed);
    }
    let now = Utc::now();
    folder.moderation_status = ModerationStatus::Approved;
    folder.moderated_by = Some(moderator.display_name.clone());
    folder.moderated_by_id = Some(moderator.id.clone());
    folder.moderated_at = Some(now);
    for entry in folder.files.iter_mut() {
        entry.moderation_status = ModerationStatus::Approved;
        entry.moderated_by = Some(moderator.display_name.clone());
        entry.moderated_by_id = Some(moderator.id.clone());
        entry.moderated_at = Some(now);
    }
    if let Err(e) = folder_repository::update_moderation(
        id,
        ModerationStatus::Approved,
        moderator.display_name.as_str(),
        moderator.id.as_str(),
        now,
        &folder.files,
        &con,
    ) {
        log::error!(
            "Failed to approve folder {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(ApproveFolderError::DbFailure);
    }
    con.close().unwrap();
    contributions::queue_recalculation(folder.uploaded_by_id.as_str());
    Ok(FolderApi::from(folder))
}

/// rejection is terminal: blobs are removed best-effort, then the folder
/// row, its course summary entry and the uploader's contribution counter
/// all change in one transaction
pub fn reject_folder(id: &str, moderator: &repository::User) -> Result<(), RejectFolderError> {
    let mut con = open_connection();
    let folder = match folder_repository::get_folder_by_id(id, &con) {
        Ok(Some(folder)) if !folder.deleted => folder,
        Ok(_) => {
            con.close().unwrap();
            return Err(RejectFolderError::FolderNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(RejectFolderError::DbFailure);
        }
    };
    if folder.moderation_status != ModerationStatus::Pending {
        con.close().unwrap();
        return Err(RejectFolderError::NotPending);
    }
    if !can_decide(moderator, &folder) {
        con.close().unwrap();
        return Err(RejectFolderError::NotAllowed);
    }
    folder_service::remove_blobs(&folder.files);
    let tx_result = con.transaction();
    if let Err(e) = &tx_result {
        log::error!(
            "Failed to open transaction to reject folder! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        drop(tx_result);
        con.close().unwrap();
        return Err(RejectFolderError::DbFailure);
    }
    let tx = tx_result.unwrap();
    let file_count = folder.files.len() as u32;
    let write_res = folder_repository::delete_folder(id, &tx)
        .and_then(|_| folder_service::remove_course_entry(folder.course_id.as_deref(), id, &tx))
        .and_then(|_| {
            if file_count > 0 {
                user_repository::decrement_contributions(
                    folder.uploaded_by_id.as_str(),
                    file_count,
                    Utc::now(),
                    &tx,
                )
            } else {
                Ok(())
            }
        });
    let commit_res = match write_res {
        Ok(()) => tx.commit(),
        Err(e) => {
            log::error!(
                "Failed to reject folder {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            drop(tx);
            con.close().unwrap();
            return Err(RejectFolderError::DbFailure);
        }
    };
    if let Err(e) = commit_res {
        log::error!(
            "Failed to commit folder rejection! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(RejectFolderError::DbFailure);
    }
    con.close().unwrap();
    contributions::queue_recalculation(folder.uploaded_by_id.as_str());
    Ok(())
}

/// flips one entry to approved in place. The folder's own status is left
/// alone; a folder stays pending until it is decided as a whole
pub fn approve_file(
    folder_id: &str,
    index: usize,
    moderator: &repository::User,
) -> Result<FolderApi, ModerateFileError> {
    let con = open_connection();
    let mut folder = match load_moderatable(folder_id, index, moderator, &con) {
        Ok(folder) => folder,
        Err(e) => {
            con.close().unwrap();
            return Err(e);
        }
    };
    let now = Utc::now();
    let entry = &mut folder.files[index];
    entry.moderation_status = ModerationStatus::Approved;
    entry.moderated_by = Some(moderator.display_name.clone());
    entry.moderated_by_id = Some(moderator.id.clone());
    entry.moderated_at = Some(now);
    if let Err(e) =
        folder_repository::update_files(folder_id, &folder.files, folder.uploaded_at, &con)
    {
        log::error!(
            "Failed to approve file {index} in folder {folder_id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(ModerateFileError::DbFailure);
    }
    con.close().unwrap();
    contributions::queue_recalculation(folder.uploaded_by_id.as_str());
    Ok(FolderApi::from(folder))
}

/// rejects one entry: its blob goes best-effort, then the entry removal and
/// the uploader's single-count decrement land in one transaction
pub fn reject_file(
    folder_id: &str,
    index: usize,
    moderator: &repository::User,
) -> Result<FolderApi, ModerateFileError> {
    let mut con = open_connection();
    let mut folder = match load_moderatable(folder_id, index, moderator, &con) {
        Ok(folder) => folder,
        Err(e) => {
            con.close().unwrap();
            return Err(e);
        }
    };
    let removed = folder.files.remove(index);
    folder_service::remove_blobs(std::slice::from_ref(&removed));
    let tx_result = con.transaction();
    if let Err(e) = &tx_result {
        log::error!(
            "Failed to open transaction to reject file! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        drop(tx_result);
        con.close().unwrap();
        return Err(ModerateFileError::DbFailure);
    }
    let tx = tx_result.unwrap();
    let write_res =
        folder_repository::update_files(folder_id, &folder.files, folder.uploaded_at, &tx)
            .and_then(|_| {
                user_repository::decrement_contributions(
                    folder.uploaded_by_id.as_str(),
                    1,
                    Utc::now(),
                    &tx,
                )
            });
    let commit_res = match write_res {
        Ok(()) => tx.commit(),
        Err(e) => {
            log::error!(
                "Failed to reject file {index} in folder {folder_id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            drop(tx);
            con.close().unwrap();
            return Err(ModerateFileError::DbFailure);
        }
    };
    if let Err(e) = commit_res {
        log::error!(
            "Failed to commit file rejection! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(ModerateFileError::DbFailure);
    }
    con.close().unwrap();
    contributions::queue_recalculation(folder.uploaded_by_id.as_str());
    Ok(FolderApi::from(folder))
}

/// shared lookup for the single-file decisions: live folder, authority,
/// index in range. The caller still owns closing the connection
fn load_moderatable(
    folder_id: &str,
    index: usize,
    moderator: &repository::User,
    con: &rusqlite::Connection,
) -> Result<repository::Folder, ModerateFileError> {
    let folder = match folder_repository::get_folder_by_id(folder_id, con) {
        Ok(Some(folder)) if !folder.deleted => folder,
        Ok(_) => return Err(ModerateFileError::FolderNotFound),
        Err(_) => return Err(ModerateFileError::DbFailure),
    };
    if !can_decide(moderator, &folder) {
        return Err(ModerateFileError::NotAllowed);
    }
    if index >= folder.files.len() {
        return Err(ModerateFileError::FileNotFound);
    }
    Ok(folder)
}

/// moderation authority over the folder: superadmin anywhere, admin inside
/// their course set. Orphaned folders fall to superadmin
fn can_decide(user: &repository::User, folder: &repository::Folder) -> bool {
    match folder.course_id.as_deref() {
        Some(course_id) => user.can_moderate(course_id),
        None => user.role == Role::SuperAdmin,
    }
}
