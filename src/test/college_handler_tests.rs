use rocket::http::{Header, Status};
use rocket::local::blocking::Client;

use crate::model::response::college_responses::CollegeApi;
use crate::model::response::BasicMessage;
use crate::model::role::Role;
use crate::rocket;
use crate::test::*;

fn client() -> Client {
    Client::tracked(rocket()).unwrap()
}

#[test]
fn create_college_requires_superadmin() {
    refresh_db();
    create_user_db_entry("username", Role::Admin);
    let client = client();
    let res = client
        .post(uri!("/colleges"))
        .header(Header::new("Authorization", AUTH))
        .body(r#"{"name":"State"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);
    let body: BasicMessage = res.into_json().unwrap();
    assert_eq!("Only superadmins may create colleges.", body.message);
    cleanup();
}

#[test]
fn create_college_works() {
    refresh_db();
    create_user_db_entry("username", Role::SuperAdmin);
    let client = client();
    let res = client
        .post(uri!("/colleges"))
        .header(Header::new("Authorization", AUTH))
        .body(r#"{"name":"State","extensionUrl":"https://state.edu","emailExtensions":["@state.edu"]}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let college: CollegeApi = res.into_json().unwrap();
    assert_eq!("State", college.name);
    assert_eq!("https://state.edu", college.extension_url);
    assert_eq!(vec!["@state.edu".to_string()], college.email_extensions);
    assert!(college.courses.is_empty());
    cleanup();
}

#[test]
fn get_colleges_works() {
    refresh_db();
    create_user_db_entry("username", Role::User);
    create_college_db_entry("State", vec!["@state.edu"]);
    create_college_db_entry("Tech", vec!["@tech.edu"]);
    let client = client();
    let res = client
        .get(uri!("/colleges"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let colleges: Vec<CollegeApi> = res.into_json().unwrap();
    assert_eq!(2, colleges.len());
    cleanup();
}

#[test]
fn get_college_works() {
    refresh_db();
    create_user_db_entry("username", Role::User);
    let college_id = create_college_db_entry("State", vec!["@state.edu"]);
    let client = client();
    let res = client
        .get(format!("/colleges/{college_id}"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let college: CollegeApi = res.into_json().unwrap();
    assert_eq!("State", college.name);
    cleanup();
}

#[test]
fn get_college_missing() {
    refresh_db();
    create_user_db_entry("username", Role::User);
    let client = client();
    let res = client
        .get("/colleges/nope")
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
    let body: BasicMessage = res.into_json().unwrap();
    assert_eq!(
        "The college with the passed id could not be found.",
        body.message
    );
    cleanup();
}

#[test]
fn update_college_works() {
    refresh_db();
    create_user_db_entry("username", Role::SuperAdmin);
    let college_id = create_college_db_entry("State", vec!["@state.edu"]);
    let client = client();
    let res = client
        .put(format!("/colleges/{college_id}"))
        .header(Header::new("Authorization", AUTH))
        .body(r#"{"name":"State University","emailExtensions":["@state.edu","@mail.state.edu"]}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let college: CollegeApi = res.into_json().unwrap();
    assert_eq!("State University", college.name);
    assert_eq!(2, college.email_extensions.len());
    cleanup();
}

#[test]
fn update_college_missing() {
    refresh_db();
    create_user_db_entry("username", Role::SuperAdmin);
    let client = client();
    let res = client
        .put("/colleges/nope")
        .header(Header::new("Authorization", AUTH))
        .body(r#"{"name":"Ghost"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
    cleanup();
}

#[test]
fn delete_college_requires_superadmin() {
    refresh_db();
    create_user_db_entry("username", Role::User);
    let college_id = create_college_db_entry("State", vec!["@state.edu"]);
    let client = client();
    let res = client
        .delete(format!("/colleges/{college_id}"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);
    let body: BasicMessage = res.into_json().unwrap();
    assert_eq!("Only superadmins may delete colleges.", body.message);
    cleanup();
}

#[test]
fn delete_college_works() {
    refresh_db();
    create_user_db_entry("username", Role::SuperAdmin);
    let college_id = create_college_db_entry("State", vec!["@state.edu"]);
    let client = client();
    let res = client
        .delete(format!("/colleges/{college_id}"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::NoContent);
    let res = client
        .get(format!("/colleges/{college_id}"))
        .header(Header::new("Authorization", AUTH))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
    cleanup();
}
