use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::model::repository;
use crate::repository::parse_json_column;

pub fn create_skill(skill: &repository::Skill, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/skills/create_skill.sql"))?;
    let courses_json = serde_json::to_string(&skill.courses).unwrap();
    pst.execute(rusqlite::params![
        skill.id,
        skill.name,
        skill.icon,
        courses_json,
        skill.created_at
    ])?;
    Ok(())
}

/// if `None` is returned, no skill with that id exists
pub fn get_skill_by_id(
    id: &str,
    con: &Connection,
) -> Result<Option<repository::Skill>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/skills/get_skill_by_id.sql"
    ))?;
    match pst.query_row(rusqlite::params![id], skill_mapper) {
        Ok(skill) => Ok(Some(skill)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => {
            log::error!(
                "Failed to get skill by id, error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(e)
        }
    }
}

pub fn get_all_skills(con: &Connection) -> Result<Vec<repository::Skill>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/skills/get_all_skills.sql"
    ))?;
    let rows = pst.query_map([], skill_mapper)?;
    rows.collect()
}

pub fn update_skill(skill: &repository::Skill, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/skills/update_skill.sql"))?;
    let courses_json = serde_json::to_string(&skill.courses).unwrap();
    pst.execute(rusqlite::params![
        skill.name,
        skill.icon,
        courses_json,
        skill.id
    ])?;
    Ok(())
}

/// 1. id
/// 2. name
/// 3. icon
/// 4. courses
/// 5. createdAt
fn skill_mapper(row: &rusqlite::Row) -> Result<repository::Skill, rusqlite::Error> {
    let courses: String = row.get(3)?;
    Ok(repository::Skill {
        id: row.get(0)?,
        name: row.get(1)?,
        icon: row.get(2)?,
        courses: parse_json_column(3, courses)?,
        created_at: row.get(4)?,
    })
}
