use std::backtrace::Backtrace;

use chrono::Utc;
use uuid::Uuid;

use crate::model::error::notification_errors::{
    DeleteNotificationError, ListNotificationsError, UpdateNotificationError,
};
use crate::model::repository;
use crate::model::response::notification_responses::NotificationApi;
use crate::repository::{notification_repository, open_connection, user_repository};
use crate::util::RequestLimiter;

/// writes an upload notification for every admin of the course, skipping the
/// uploader themselves. Fan-out is best-effort: a failed row is logged and
/// the rest still go out. Writes are paced through the limiter because a
/// course can have arbitrarily many admins
pub fn notify_course_admins(
    course: &repository::Course,
    uploader: &repository::User,
    item_type: &str,
    item_name: &str,
    file_count: u32,
    limiter: &RequestLimiter,
) {
    let con = open_connection();
    let admins = match user_repository::get_admins_for_course(course.id.as_str(), &con) {
        Ok(admins) => admins,
        Err(e) => {
            log::error!(
                "Failed to look up admins for course {}! Error is {e:?}\n{}",
                course.id,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return;
        }
    };
    for admin in admins {
        if admin.id == uploader.id {
            continue;
        }
        limiter.acquire();
        let notification = repository::Notification {
            id: Uuid::new_v4().to_string(),
            user_id: admin.id,
            notification_type: "upload".to_string(),
            course_id: course.id.clone(),
            course_name: course.name.clone(),
            uploader_id: uploader.id.clone(),
            uploader_name: uploader.display_name.clone(),
            item_type: item_type.to_string(),
            item_name: item_name.to_string(),
            file_count,
            read: false,
            created_at: Utc::now(),
        };
        if let Err(e) = notification_repository::create_notification(&notification, &con) {
            log::error!(
                "Failed to write notification for user {}! Error is {e:?}\n{}",
                notification.user_id,
                Backtrace::force_capture()
            );
        }
    }
    con.close().unwrap();
}

/// the caller's own notifications, newest first
pub fn get_notifications(
    user: &repository::User,
) -> Result<Vec<NotificationApi>, ListNotificationsError> {
    let con = open_connection();
    let notifications =
        match notification_repository::get_notifications_for_user(user.id.as_str(), &con) {
            Ok(notifications) => notifications,
            Err(e) => {
                log::error!(
                    "Failed to list notifications for user {}! Error is {e:?}\n{}",
                    user.id,
                    Backtrace::force_capture()
                );
                con.close().unwrap();
                return Err(ListNotificationsError::DbFailure);
            }
        };
    con.close().unwrap();
    Ok(notifications.into_iter().map(NotificationApi::from).collect())
}

pub fn mark_read(
    id: &str,
    user: &repository::User,
) -> Result<NotificationApi, UpdateNotificationError> {
    let con = open_connection();
    let mut notification = match notification_repository::get_notification_by_id(id, &con) {
        Ok(Some(notification)) => notification,
        Ok(None) => {
            con.close().unwrap();
            return Err(UpdateNotificationError::NotificationNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(UpdateNotificationError::DbFailure);
        }
    };
    if notification.user_id != user.id {
        con.close().unwrap();
        return Err(UpdateNotificationError::NotAllowed);
    }
    if let Err(e) = notification_repository::mark_read(id, &con) {
        log::error!(
            "Failed to mark notification {id} read! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(UpdateNotificationError::DbFailure);
    }
    con.close().unwrap();
    notification.read = true;
    Ok(NotificationApi::from(notification))
}

pub fn mark_all_read(user: &repository::User) -> Result<(), ListNotificationsError> {
    let con = open_connection();
    if let Err(e) = notification_repository::mark_all_read(user.id.as_str(), &con) {
        log::error!(
            "Failed to mark notifications read for user {}! Error is {e:?}\n{}",
            user.id,
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(ListNotificationsError::DbFailure);
    }
    con.close().unwrap();
    Ok(())
}

pub fn delete_notification(
    id: &str,
    user: &repository::User,
) -> Result<(), DeleteNotificationError> {
    let con = open_connection();
    let notification = match notification_repository::get_notification_by_id(id, &con) {
        Ok(Some(notification)) => notification,
        Ok(None) => {
            con.close().unwrap();
            return Err(DeleteNotificationError::NotificationNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(DeleteNotificationError::DbFailure);
        }
    };
    if notification.user_id != user.id {
        con.close().unwrap();
        return Err(DeleteNotificationError::NotAllowed);
    }
    if let Err(e) = notification_repository::delete_notification(id, &con) {
        log::error!(
            "Failed to delete notification {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(DeleteNotificationError::DbFailure);
    }
    con.close().unwrap();
    Ok(())
}

#[cfg(test)]
mod notification_service_tests {
    use crate::model::error::notification_errors::UpdateNotificationError;
    use crate::model::role::Role;
    use crate::repository::{course_repository, open_connection, user_repository};
    use crate::service::notification_service::{
        get_notifications, mark_read, notify_course_admins,
    };
    use crate::test::{
        cleanup, create_course_db_entry, create_user_db_entry_with_admin_courses, refresh_db,
    };
    use crate::util::RequestLimiter;

    #[test]
    fn notify_course_admins_skips_the_uploader() {
        refresh_db();
        let course_id = create_course_db_entry("Calculus");
        let admin_id =
            create_user_db_entry_with_admin_courses("admin1", Role::Admin, vec![&course_id]);
        let uploader_id =
            create_user_db_entry_with_admin_courses("admin2", Role::Admin, vec![&course_id]);
        let con = open_connection();
        let course = course_repository::get_course_by_id(course_id.as_str(), &con)
            .unwrap()
            .unwrap();
        let admin = user_repository::get_user_by_id(admin_id.as_str(), &con)
            .unwrap()
            .unwrap();
        let uploader = user_repository::get_user_by_id(uploader_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        let limiter = RequestLimiter::new(100, 1_000);
        notify_course_admins(&course, &uploader, "folder", "Week 1", 3, &limiter);
        let admin_inbox = get_notifications(&admin).unwrap();
        let uploader_inbox = get_notifications(&uploader).unwrap();
        assert_eq!(1, admin_inbox.len());
        assert_eq!("Week 1", admin_inbox[0].item_name);
        assert_eq!(3, admin_inbox[0].file_count);
        assert!(uploader_inbox.is_empty());
        cleanup();
    }

    #[test]
    fn mark_read_rejects_other_users_notifications() {
        refresh_db();
        let course_id = create_course_db_entry("Physics");
        let admin_id =
            create_user_db_entry_with_admin_courses("admin", Role::Admin, vec![&course_id]);
        let uploader_id = create_user_db_entry_with_admin_courses("uploader", Role::User, vec![]);
        let con = open_connection();
        let course = course_repository::get_course_by_id(course_id.as_str(), &con)
            .unwrap()
            .unwrap();
        let admin = user_repository::get_user_by_id(admin_id.as_str(), &con)
            .unwrap()
            .unwrap();
        let uploader = user_repository::get_user_by_id(uploader_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        let limiter = RequestLimiter::new(100, 1_000);
        notify_course_admins(&course, &uploader, "files", "Week 2", 1, &limiter);
        let inbox = get_notifications(&admin).unwrap();
        let res = mark_read(inbox[0].id.as_str(), &uploader).unwrap_err();
        assert_eq!(UpdateNotificationError::NotAllowed, res);
        let marked = mark_read(inbox[0].id.as_str(), &admin).unwrap();
        assert!(marked.read);
        cleanup();
    }
}
