use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::model::repository;
use crate::model::repository::FolderRef;
use crate::repository::parse_json_column;

pub fn create_course(
    course: &repository::Course,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/courses/create_course.sql"
    ))?;
    let folders_json = serde_json::to_string(&course.folders).unwrap();
    pst.execute(rusqlite::params![
        course.id,
        course.name,
        course.college_id,
        folders_json,
        course.created_at
    ])?;
    Ok(())
}

/// if `None` is returned, no course with that id exists
pub fn get_course_by_id(
    id: &str,
    con: &Connection,
) -> Result<Option<repository::Course>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/courses/get_course_by_id.sql"
    ))?;
    match pst.query_row(rusqlite::params![id], course_mapper) {
        Ok(course) => Ok(Some(course)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => {
            log::error!(
                "Failed to get course by id, error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(e)
        }
    }
}

pub fn get_all_courses(con: &Connection) -> Result<Vec<repository::Course>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/courses/get_all_courses.sql"
    ))?;
    let rows = pst.query_map([], course_mapper)?;
    rows.collect()
}

/// replaces the course's denormalized folder summary array
pub fn update_folders(
    id: &str,
    folders: &[FolderRef],
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/courses/update_course_folders.sql"
    ))?;
    let folders_json = serde_json::to_string(folders).unwrap();
    pst.execute(rusqlite::params![folders_json, id])?;
    Ok(())
}

/// removes the course row. Folders pointing at it are left behind on purpose;
/// the maintenance module reports them as orphaned
pub fn delete_course(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/courses/delete_course.sql"
    ))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

/// 1. id
/// 2. name
/// 3. collegeId
/// 4. folders
/// 5. createdAt
fn course_mapper(row: &rusqlite::Row) -> Result<repository::Course, rusqlite::Error> {
    let folders: String = row.get(3)?;
    Ok(repository::Course {
        id: row.get(0)?,
        name: row.get(1)?,
        college_id: row.get(2)?,
        folders: parse_json_column(3, folders)?,
        created_at: row.get(4)?,
    })
}
