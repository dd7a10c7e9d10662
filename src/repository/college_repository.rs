use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::model::repository;
use crate::repository::parse_json_column;

pub fn create_college(
    college: &repository::College,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/colleges/create_college.sql"
    ))?;
    let extensions_json = serde_json::to_string(&college.email_extensions).unwrap();
    let links_json = serde_json::to_string(&college.links).unwrap();
    let courses_json = serde_json::to_string(&college.courses).unwrap();
    pst.execute(rusqlite::params![
        college.id,
        college.name,
        college.extension_url,
        extensions_json,
        college.logo,
        links_json,
        courses_json,
        college.created_at
    ])?;
    Ok(())
}

/// if `None` is returned, no college with that id exists
pub fn get_college_by_id(
    id: &str,
    con: &Connection,
) -> Result<Option<repository::College>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/colleges/get_college_by_id.sql"
    ))?;
    match pst.query_row(rusqlite::params![id], college_mapper) {
        Ok(college) => Ok(Some(college)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => {
            log::error!(
                "Failed to get college by id, error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(e)
        }
    }
}

pub fn get_all_colleges(con: &Connection) -> Result<Vec<repository::College>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/colleges/get_all_colleges.sql"
    ))?;
    let rows = pst.query_map([], college_mapper)?;
    rows.collect()
}

/// updates the college's own fields; the courses membership array has its own
/// update so course create / delete can touch it without racing edits here
pub fn update_college(
    college: &repository::College,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/colleges/update_college.sql"
    ))?;
    let extensions_json = serde_json::to_string(&college.email_extensions).unwrap();
    let links_json = serde_json::to_string(&college.links).unwrap();
    pst.execute(rusqlite::params![
        college.name,
        college.extension_url,
        extensions_json,
        college.logo,
        links_json,
        college.id
    ])?;
    Ok(())
}

pub fn update_courses(
    id: &str,
    courses: &[String],
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/colleges/update_college_courses.sql"
    ))?;
    let courses_json = serde_json::to_string(courses).unwrap();
    pst.execute(rusqlite::params![courses_json, id])?;
    Ok(())
}

pub fn delete_college(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/colleges/delete_college.sql"
    ))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

/// 1. id
/// 2. name
/// 3. extensionUrl
/// 4. emailExtensions
/// 5. logo
/// 6. links
/// 7. courses
/// 8. createdAt
fn college_mapper(row: &rusqlite::Row) -> Result<repository::College, rusqlite::Error> {
    let extensions: String = row.get(3)?;
    let links: String = row.get(5)?;
    let courses: String = row.get(6)?;
    Ok(repository::College {
        id: row.get(0)?,
        name: row.get(1)?,
        extension_url: row.get(2)?,
        email_extensions: parse_json_column(3, extensions)?,
        logo: row.get(4)?,
        links: parse_json_column(5, links)?,
        courses: parse_json_column(6, courses)?,
        created_at: row.get(7)?,
    })
}
