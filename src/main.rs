#[macro_use]
extern crate rocket;

use std::fs;
use std::path::Path;

use rocket::{Build, Rocket};

use handler::{
    activity_handler::{log_download, log_session},
    api_handler::api_version,
    college_handler::{create_college, delete_college, get_college, get_colleges, update_college},
    course_handler::{create_course, delete_course, get_course, get_courses},
    folder_handler::{
        delete_file_entry, delete_folder, delete_folder_permanently, get_folder, get_folders,
        restore_folder, set_importance, upload,
    },
    notification_handler::{delete_notification, get_notifications, mark_all_read, mark_read},
    skill_handler::{create_skill, get_skill, get_skills, update_skill},
    storage_handler::download_object,
    user_handler::{get_user, get_users, register, update_role},
};

use crate::contributions::handler::recalculate;
use crate::maintenance::handler::{diagnostics, repair};
use crate::moderation::handler::{
    approve_file, approve_folder, get_pending, reject_file, reject_folder,
};
use crate::repository::initialize_db;
use crate::util::RequestLimiter;

mod config;
mod contributions;
mod db_migrations;
mod guard;
mod handler;
mod maintenance;
mod model;
mod moderation;
mod queue;
mod repository;
mod service;
mod storage;
#[cfg(test)]
mod test;
mod util;

/// where uploads are buffered before they move into the object store. Kept
/// next to the storage directory so the move never crosses filesystems
#[cfg(not(test))]
pub fn temp_dir() -> String {
    String::from("./.resource_server_temp")
}

#[cfg(test)]
pub fn temp_dir() -> String {
    format!("./{}_temp", test::current_thread_name())
}

#[launch]
fn rocket() -> Rocket<Build> {
    #[cfg(not(test))]
    util::set_up_logging().unwrap();
    initialize_db().unwrap();
    let upload_dir = temp_dir();
    fs::remove_dir_all(Path::new(upload_dir.as_str())).unwrap_or(());
    fs::create_dir_all(Path::new(upload_dir.as_str())).unwrap();
    queue::contribution_recalc_consumer(contributions::service::handle_recalc_message);
    let figment = rocket::Config::figment().merge(("temp_dir", upload_dir));
    rocket::custom(figment)
        .manage(RequestLimiter::from_config())
        .mount("/api", routes![api_version])
        .mount("/users", routes![register, get_users, get_user, update_role])
        .mount(
            "/courses",
            routes![create_course, get_courses, get_course, delete_course],
        )
        .mount(
            "/colleges",
            routes![
                create_college,
                get_colleges,
                get_college,
                update_college,
                delete_college
            ],
        )
        .mount(
            "/skills",
            routes![create_skill, get_skills, get_skill, update_skill],
        )
        .mount(
            "/folders",
            routes![
                upload,
                get_folder,
                get_folders,
                delete_folder,
                restore_folder,
                delete_folder_permanently,
                set_importance,
                delete_file_entry
            ],
        )
        .mount(
            "/moderation",
            routes![
                get_pending,
                approve_folder,
                reject_folder,
                approve_file,
                reject_file
            ],
        )
        .mount("/contributions", routes![recalculate])
        .mount("/maintenance", routes![diagnostics, repair])
        .mount(
            "/notifications",
            routes![
                get_notifications,
                mark_read,
                mark_all_read,
                delete_notification
            ],
        )
        .mount("/activity", routes![log_session, log_download])
        .mount("/storage", routes![download_object])
}
