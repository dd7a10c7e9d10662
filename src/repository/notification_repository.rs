use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::model::repository;

pub fn create_notification(
    notification: &repository::Notification,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/notifications/create_notification.sql"
    ))?;
    pst.execute(rusqlite::params![
        notification.id,
        notification.user_id,
        notification.notification_type,
        notification.course_id,
        notification.course_name,
        notification.uploader_id,
        notification.uploader_name,
        notification.item_type,
        notification.item_name,
        notification.file_count,
        notification.read,
        notification.created_at
    ])?;
    Ok(())
}

/// if `None` is returned, no notification with that id exists
pub fn get_notification_by_id(
    id: &str,
    con: &Connection,
) -> Result<Option<repository::Notification>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/notifications/get_notification_by_id.sql"
    ))?;
    match pst.query_row(rusqlite::params![id], notification_mapper) {
        Ok(notification) => Ok(Some(notification)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => {
            log::error!(
                "Failed to get notification by id, error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(e)
        }
    }
}

/// the user's notifications, newest first
pub fn get_notifications_for_user(
    user_id: &str,
    con: &Connection,
) -> Result<Vec<repository::Notification>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/notifications/get_notifications_for_user.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![user_id], notification_mapper)?;
    rows.collect()
}

pub fn mark_read(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/notifications/mark_notification_read.sql"
    ))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

pub fn mark_all_read(user_id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/notifications/mark_all_notifications_read.sql"
    ))?;
    pst.execute(rusqlite::params![user_id])?;
    Ok(())
}

pub fn delete_notification(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/notifications/delete_notification.sql"
    ))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

/// 1. id
/// 2. userId
/// 3. type
/// 4. courseId
/// 5. courseName
/// 6. uploaderId
/// 7. uploaderName
/// 8. itemType
/// 9. itemName
/// 10. fileCount
/// 11. isRead
/// 12. createdAt
fn notification_mapper(row: &rusqlite::Row) -> Result<repository::Notification, rusqlite::Error> {
    Ok(repository::Notification {
        id: row.get(0)?,
        user_id: row.get(1)?,
        notification_type: row.get(2)?,
        course_id: row.get(3)?,
        course_name: row.get(4)?,
        uploader_id: row.get(5)?,
        uploader_name: row.get(6)?,
        item_type: row.get(7)?,
        item_name: row.get(8)?,
        file_count: row.get(9)?,
        read: row.get(10)?,
        created_at: row.get(11)?,
    })
}
