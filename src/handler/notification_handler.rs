use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::model::error::notification_errors::{DeleteNotificationError, UpdateNotificationError};
use crate::model::response::notification_responses::{
    DeleteNotificationResponse, ListNotificationsResponse, MarkAllNotificationsReadResponse,
    MarkNotificationReadResponse,
};
use crate::model::response::BasicMessage;
use crate::service::notification_service;

/// the caller's notifications, newest first
#[get("/")]
pub fn get_notifications(auth: Auth) -> ListNotificationsResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return ListNotificationsResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match notification_service::get_notifications(&user) {
        Ok(notifications) => ListNotificationsResponse::Success(Json::from(notifications)),
        Err(_) => ListNotificationsResponse::NotificationDbError(BasicMessage::new(
            "Failed to pull notifications from database. Check server logs for details",
        )),
    }
}

#[patch("/<id>/read")]
pub fn mark_read(id: &str, auth: Auth) -> MarkNotificationReadResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return MarkNotificationReadResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match notification_service::mark_read(id, &user) {
        Ok(notification) => MarkNotificationReadResponse::Success(Json::from(notification)),
        Err(UpdateNotificationError::NotificationNotFound) => {
            MarkNotificationReadResponse::NotificationNotFound(BasicMessage::new(
                "The notification with the passed id could not be found.",
            ))
        }
        Err(UpdateNotificationError::NotAllowed) => MarkNotificationReadResponse::Forbidden(
            BasicMessage::new("That notification belongs to a different user."),
        ),
        Err(_) => MarkNotificationReadResponse::NotificationDbError(BasicMessage::new(
            "Failed to update notification. Check server logs for details",
        )),
    }
}

#[post("/read-all")]
pub fn mark_all_read(auth: Auth) -> MarkAllNotificationsReadResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return MarkAllNotificationsReadResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match notification_service::mark_all_read(&user) {
        Ok(()) => MarkAllNotificationsReadResponse::Success(()),
        Err(_) => MarkAllNotificationsReadResponse::NotificationDbError(BasicMessage::new(
            "Failed to update notifications. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_notification(id: &str, auth: Auth) -> DeleteNotificationResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return DeleteNotificationResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match notification_service::delete_notification(id, &user) {
        Ok(()) => DeleteNotificationResponse::Success(()),
        Err(DeleteNotificationError::NotificationNotFound) => {
            DeleteNotificationResponse::NotificationNotFound(BasicMessage::new(
                "The notification with the passed id could not be found.",
            ))
        }
        Err(DeleteNotificationError::NotAllowed) => DeleteNotificationResponse::Forbidden(
            BasicMessage::new("That notification belongs to a different user."),
        ),
        Err(_) => DeleteNotificationResponse::NotificationDbError(BasicMessage::new(
            "Failed to delete notification. Check server logs for details",
        )),
    }
}
