use rusqlite::Connection;

use crate::model::repository;

pub fn create_session(
    session: &repository::SessionLog,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/activity/create_session.sql"
    ))?;
    pst.execute(rusqlite::params![
        session.id,
        session.user_id,
        session.course_id,
        session.activity_type,
        session.file_name,
        session.duration_seconds,
        session.timestamp
    ])?;
    Ok(())
}

pub fn create_download(
    download: &repository::DownloadLog,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/activity/create_download.sql"
    ))?;
    pst.execute(rusqlite::params![
        download.id,
        download.user_id,
        download.course_id,
        download.file_name,
        download.timestamp
    ])?;
    Ok(())
}
