use rocket::http::{Header, Status};
use rocket::local::blocking::Client;

use crate::model::response::notification_responses::NotificationApi;
use crate::model::response::BasicMessage;
use crate::model::role::Role;
use crate::rocket;
use crate::test::*;

/// student:password
static STUDENT_AUTH: &str = "Basic c3R1ZGVudDpwYXNzd29yZA==";

fn client() -> Client {
    Client::tracked(rocket()).unwrap()
}

#[test]
fn notifications_without_creds() {
    refresh_db();
    let client = client();
    let res = client.get(uri!("/notifications")).dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
    cleanup();
}

#[test]
fn notifications_start_empty() {
    refresh_db();
    create_user_db_entry("username", Role::User);
    let client = client();
    let res = client
        .get(uri!("/notifications"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let inbox: Vec<NotificationApi> = res.into_json().unwrap();
    assert!(inbox.is_empty());
    cleanup();
}

#[test]
fn pending_upload_lands_in_the_course_admins_inbox() {
    refresh_db();
    let course_id = create_course_db_entry("Calculus");
    create_user_db_entry_with_admin_courses("username", Role::Admin, vec![&course_id]);
    create_user_db_entry("student", Role::User);
    let client = client();
    let body = format!(
        "--BOUNDARY\r\n\
Content-Disposition: form-data; name=\"files\"; filename=\"notes.pdf\"\r\n\
Content-Type: application/pdf\r\n\
\r\n\
aGk=\r\n\
--BOUNDARY\r\n\
Content-Disposition: form-data; name=\"courseId\"\r\n\
\r\n\
{course_id}\r\n\
--BOUNDARY\r\n\
Content-Disposition: form-data; name=\"folderName\"\r\n\
\r\n\
Week 1\r\n\
--BOUNDARY--"
    );
    let res = client
        .post(uri!("/folders"))
        .header(Header::new("Authorization", STUDENT_AUTH))
        .header(Header::new(
            "Content-Type",
            "multipart/form-data; boundary=BOUNDARY",
        ))
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let res = client
        .get(uri!("/notifications"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let inbox: Vec<NotificationApi> = res.into_json().unwrap();
    assert_eq!(1, inbox.len());
    assert_eq!("upload", inbox[0].notification_type);
    assert_eq!("folder", inbox[0].item_type);
    assert_eq!("Week 1", inbox[0].item_name);
    assert_eq!("Calculus", inbox[0].course_name);
    assert_eq!("student", inbox[0].uploader_name);
    assert_eq!(1, inbox[0].file_count);
    assert!(!inbox[0].read);
    cleanup();
}

#[test]
fn mark_read_works() {
    refresh_db();
    let user_id = create_user_db_entry("username", Role::Admin);
    let notification_id = create_notification_db_entry(&user_id, "calc-101");
    let client = client();
    let res = client
        .patch(format!("/notifications/{notification_id}/read"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let notification: NotificationApi = res.into_json().unwrap();
    assert!(notification.read);
    cleanup();
}

#[test]
fn mark_read_rejects_foreign_notifications() {
    refresh_db();
    create_user_db_entry("username", Role::User);
    let other_id = create_user_db_entry("other", Role::Admin);
    let notification_id = create_notification_db_entry(&other_id, "calc-101");
    let client = client();
    let res = client
        .patch(format!("/notifications/{notification_id}/read"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);
    let body: BasicMessage = res.into_json().unwrap();
    assert_eq!(
        "That notification belongs to a different user.",
        body.message
    );
    cleanup();
}

#[test]
fn mark_read_missing() {
    refresh_db();
    create_user_db_entry("username", Role::User);
    let client = client();
    let res = client
        .patch("/notifications/nope/read")
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
    let body: BasicMessage = res.into_json().unwrap();
    assert_eq!(
        "The notification with the passed id could not be found.",
        body.message
    );
    cleanup();
}

#[test]
fn read_all_works() {
    refresh_db();
    let user_id = create_user_db_entry("username", Role::Admin);
    create_notification_db_entry(&user_id, "calc-101");
    create_notification_db_entry(&user_id, "phys-201");
    let client = client();
    let res = client
        .post(uri!("/notifications/read-all"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::NoContent);
    let res = client
        .get(uri!("/notifications"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    let inbox: Vec<NotificationApi> = res.into_json().unwrap();
    assert_eq!(2, inbox.len());
    assert!(inbox.iter().all(|n| n.read));
    cleanup();
}

#[test]
fn delete_notification_works() {
    refresh_db();
    let user_id = create_user_db_entry("username", Role::Admin);
    let notification_id = create_notification_db_entry(&user_id, "calc-101");
    let client = client();
    let res = client
        .delete(format!("/notifications/{notification_id}"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::NoContent);
    let res = client
        .get(uri!("/notifications"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    let inbox: Vec<NotificationApi> = res.into_json().unwrap();
    assert!(inbox.is_empty());
    cleanup();
}

#[test]
fn delete_notification_rejects_foreign_notifications() {
    refresh_db();
    create_user_db_entry("username", Role::User);
    let other_id = create_user_db_entry("other", Role::Admin);
    let notification_id = create_notification_db_entry(&other_id, "calc-101");
    let client = client();
    let res = client
        .delete(format!("/notifications/{notification_id}"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);
    let body: BasicMessage = res.into_json().unwrap();
    assert_eq!(
        "That notification belongs to a different user.",
        body.message
    );
    cleanup();
}
