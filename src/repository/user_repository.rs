use std::backtrace::Backtrace;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::model::repository;
use crate::model::role::Role;
use crate::repository::parse_json_column;

/// inserts the passed user. Uniqueness of the username must be checked on the
/// caller's end; the database will reject duplicates with a constraint error
pub fn create_user(user: &repository::User, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/create_user.sql"))?;
    pst.execute(rusqlite::params![
        user.id,
        user.username,
        user.password,
        user.display_name,
        user.email,
        user.college_id,
        user.role,
        user.created_at
    ])?;
    Ok(())
}

/// if `None` is returned, no user with that id exists
pub fn get_user_by_id(
    id: &str,
    con: &Connection,
) -> Result<Option<repository::User>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/get_user_by_id.sql"))?;
    match pst.query_row(rusqlite::params![id], user_mapper) {
        Ok(user) => Ok(Some(user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => {
            log::error!(
                "Failed to get user by id, error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(e)
        }
    }
}

/// if `None` is returned, no user with that username exists
pub fn get_user_by_username(
    username: &str,
    con: &Connection,
) -> Result<Option<repository::User>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/users/get_user_by_username.sql"
    ))?;
    match pst.query_row(rusqlite::params![username], user_mapper) {
        Ok(user) => Ok(Some(user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => {
            log::error!(
                "Failed to get user by username, error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(e)
        }
    }
}

pub fn get_all_users(con: &Connection) -> Result<Vec<repository::User>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/get_all_users.sql"))?;
    let rows = pst.query_map([], user_mapper)?;
    rows.collect()
}

/// every user whose adminCourses set contains the passed course id. Used for
/// the upload notification fan-out; superadmins are not included here
pub fn get_admins_for_course(
    course_id: &str,
    con: &Connection,
) -> Result<Vec<repository::User>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/users/get_admins_for_course.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![course_id], user_mapper)?;
    rows.collect()
}

pub fn count_users(con: &Connection) -> Result<u32, rusqlite::Error> {
    con.query_row(
        include_str!("../assets/queries/users/count_users.sql"),
        [],
        |row| row.get(0),
    )
}

/// overwrites the user's derived counters with freshly recalculated values
pub fn update_contributions(
    id: &str,
    contributions: u32,
    xp: u32,
    updated_at: DateTime<Utc>,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/users/update_user_contributions.sql"
    ))?;
    pst.execute(rusqlite::params![contributions, xp, updated_at, id])?;
    Ok(())
}

/// subtracts `amount` from the user's contributions, floored at 0, and keeps
/// xp in step. The floor lives in the sql so no read is needed first
pub fn decrement_contributions(
    id: &str,
    amount: u32,
    updated_at: DateTime<Utc>,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/users/decrement_user_contributions.sql"
    ))?;
    pst.execute(rusqlite::params![amount, updated_at, id])?;
    Ok(())
}

/// replaces the user's role, adminCourses set and premium flag in one shot.
/// Checking that the user exists needs to be done on the caller's end
pub fn update_role(
    id: &str,
    role: Role,
    admin_courses: &[String],
    is_premium: bool,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/users/update_user_role.sql"
    ))?;
    let courses_json = serde_json::to_string(admin_courses).unwrap();
    pst.execute(rusqlite::params![role, courses_json, is_premium, id])?;
    Ok(())
}

/// 1. id
/// 2. username
/// 3. password
/// 4. displayName
/// 5. email
/// 6. collegeId
/// 7. bio
/// 8. photoUrl
/// 9. role
/// 10. adminCourses
/// 11. contributions
/// 12. xp
/// 13. contributionsUpdatedAt
/// 14. isPremium
/// 15. createdAt
fn user_mapper(row: &rusqlite::Row) -> Result<repository::User, rusqlite::Error> {
    let role: String = row.get(8)?;
    let admin_courses: String = row.get(9)?;
    Ok(repository::User {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
        display_name: row.get(3)?,
        email: row.get(4)?,
        college_id: row.get(5)?,
        bio: row.get(6)?,
        photo_url: row.get(7)?,
        role: Role::from(role.as_str()),
        admin_courses: parse_json_column(9, admin_courses)?,
        contributions: row.get(10)?,
        xp: row.get(11)?,
        contributions_updated_at: row.get(12)?,
        is_premium: row.get(13)?,
        created_at: row.get(14)?,
    })
}
