#[derive(PartialEq, Debug)]
pub enum ListNotificationsError {
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum UpdateNotificationError {
    NotificationNotFound,
    /// the notification belongs to a different user
    NotAllowed,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum DeleteNotificationError {
    NotificationNotFound,
    /// the notification belongs to a different user
    NotAllowed,
    DbFailure,
}
