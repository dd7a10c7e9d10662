use std::backtrace::Backtrace;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::model::moderation::ModerationStatus;
use crate::model::repository;
use crate::model::repository::FileEntry;
use crate::repository::parse_json_column;

pub fn create_folder(
    folder: &repository::Folder,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/create_folder.sql"
    ))?;
    let files_json = serde_json::to_string(&folder.files).unwrap();
    pst.execute(rusqlite::params![
        folder.id,
        folder.course_id,
        folder.name,
        folder.uploaded_by,
        folder.uploaded_by_id,
        files_json,
        folder.moderation_status,
        folder.is_important,
        folder.created_at,
        folder.uploaded_at
    ])?;
    Ok(())
}

/// if `None` is returned, no folder with that id exists. Soft-deleted folders
/// are still returned here; filtering them is the caller's business
pub fn get_folder_by_id(
    id: &str,
    con: &Connection,
) -> Result<Option<repository::Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/get_folder_by_id.sql"
    ))?;
    match pst.query_row(rusqlite::params![id], folder_mapper) {
        Ok(folder) => Ok(Some(folder)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => {
            log::error!(
                "Failed to get folder by id, error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(e)
        }
    }
}

/// searches the course's live folders for one with the passed name. Uploads
/// use this to decide between appending and creating
pub fn get_folder_by_course_and_name(
    course_id: &str,
    name: &str,
    con: &Connection,
) -> Result<Option<repository::Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/get_folder_by_course_and_name.sql"
    ))?;
    match pst.query_row(rusqlite::params![course_id, name], folder_mapper) {
        Ok(folder) => Ok(Some(folder)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => {
            log::error!(
                "Failed to get folder by course and name, error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(e)
        }
    }
}

/// every folder row, soft-deleted ones included. The maintenance module scans
/// with this; everything else should use the narrower queries
pub fn get_all_folders(con: &Connection) -> Result<Vec<repository::Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/get_all_folders.sql"
    ))?;
    let rows = pst.query_map([], folder_mapper)?;
    rows.collect()
}

/// the uploader's live folders, newest-upload first is not guaranteed here
pub fn get_folders_by_uploader(
    uploader_id: &str,
    con: &Connection,
) -> Result<Vec<repository::Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/get_folders_by_uploader.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![uploader_id], folder_mapper)?;
    rows.collect()
}

pub fn get_folders_for_course(
    course_id: &str,
    con: &Connection,
) -> Result<Vec<repository::Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/get_folders_for_course.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![course_id], folder_mapper)?;
    rows.collect()
}

/// every live folder still awaiting a moderation decision
pub fn get_pending_folders(con: &Connection) -> Result<Vec<repository::Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/get_pending_folders.sql"
    ))?;
    let rows = pst.query_map([], folder_mapper)?;
    rows.collect()
}

/// pending folders restricted to the passed course ids. The ids are bound as
/// a json array and unpacked with json_each
pub fn get_pending_folders_for_courses(
    course_ids: &[String],
    con: &Connection,
) -> Result<Vec<repository::Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/get_pending_folders_for_courses.sql"
    ))?;
    let ids_json = serde_json::to_string(course_ids).unwrap();
    let rows = pst.query_map(rusqlite::params![ids_json], folder_mapper)?;
    rows.collect()
}

/// replaces the folder's file entries and bumps its uploadedAt
pub fn update_files(
    id: &str,
    files: &[FileEntry],
    uploaded_at: DateTime<Utc>,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/update_folder_files.sql"
    ))?;
    let files_json = serde_json::to_string(files).unwrap();
    pst.execute(rusqlite::params![files_json, uploaded_at, id])?;
    Ok(())
}

/// stamps a moderation decision onto the folder along with the file entries
/// updated to match it
pub fn update_moderation(
    id: &str,
    status: ModerationStatus,
    moderated_by: &str,
    moderated_by_id: &str,
    moderated_at: DateTime<Utc>,
    files: &[FileEntry],
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/update_folder_moderation.sql"
    ))?;
    let files_json = serde_json::to_string(files).unwrap();
    pst.execute(rusqlite::params![
        status,
        moderated_by,
        moderated_by_id,
        moderated_at,
        files_json,
        id
    ])?;
    Ok(())
}

pub fn soft_delete_folder(
    id: &str,
    deleted_at: DateTime<Utc>,
    deleted_by: &str,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/soft_delete_folder.sql"
    ))?;
    pst.execute(rusqlite::params![deleted_at, deleted_by, id])?;
    Ok(())
}

/// clears the soft-delete flags. Putting the folder back into its course's
/// summary array is left to the repair pass
pub fn restore_folder(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/restore_folder.sql"
    ))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

pub fn set_importance(
    id: &str,
    is_important: bool,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/set_folder_importance.sql"
    ))?;
    pst.execute(rusqlite::params![is_important, id])?;
    Ok(())
}

/// removes the folder row for good; the blobs and summary entry are the
/// service's responsibility
pub fn delete_folder(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folders/delete_folder.sql"
    ))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

/// 1. id
/// 2. courseId
/// 3. name
/// 4. uploadedBy
/// 5. uploadedById
/// 6. files
/// 7. moderationStatus
/// 8. moderatedBy
/// 9. moderatedById
/// 10. moderatedAt
/// 11. isImportant
/// 12. deleted
/// 13. deletedAt
/// 14. deletedBy
/// 15. createdAt
/// 16. uploadedAt
fn folder_mapper(row: &rusqlite::Row) -> Result<repository::Folder, rusqlite::Error> {
    let files: String = row.get(5)?;
    let status: String = row.get(6)?;
    Ok(repository::Folder {
        id: row.get(0)?,
        course_id: row.get(1)?,
        name: row.get(2)?,
        uploaded_by: row.get(3)?,
        uploaded_by_id: row.get(4)?,
        files: parse_json_column(5, files)?,
        moderation_status: ModerationStatus::from(status.as_str()),
        moderated_by: row.get(7)?,
        moderated_by_id: row.get(8)?,
        moderated_at: row.get(9)?,
        is_important: row.get(10)?,
        deleted: row.get(11)?,
        deleted_at: row.get(12)?,
        deleted_by: row.get(13)?,
        created_at: row.get(14)?,
        uploaded_at: row.get(15)?,
    })
}
