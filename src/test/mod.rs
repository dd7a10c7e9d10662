use std::fs::{remove_dir_all, remove_file};
use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use crate::guard::hash_password;
use crate::model::moderation::ModerationStatus;
use crate::model::repository::{College, Course, FileEntry, Folder, Notification, User};
use crate::model::request::user_requests::RegisterUserRequest;
use crate::model::role::Role;
use crate::repository::{
    college_repository, course_repository, folder_repository, initialize_db,
    notification_repository, open_connection, user_repository,
};
use crate::storage;

mod college_handler_tests;
mod notification_handler_tests;

/// username:password
#[cfg(test)]
pub static AUTH: &str = "Basic dXNlcm5hbWU6cGFzc3dvcmQ=";

#[cfg(test)]
pub fn refresh_db() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    initialize_db().unwrap();
}

#[cfg(test)]
pub fn remove_files() {
    let storage_path = storage::storage_dir();
    let storage_path = Path::new(storage_path.as_str());
    if storage_path.exists() {
        remove_dir_all(storage_path).unwrap_or(());
    }
}

#[cfg(test)]
pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

/// every created user authenticates with the password behind [AUTH]
#[cfg(test)]
pub fn create_user_db_entry(username: &str, role: Role) -> String {
    create_user_db_entry_with_admin_courses(username, role, vec![])
}

#[cfg(test)]
pub fn create_user_db_entry_with_admin_courses(
    username: &str,
    role: Role,
    courses: Vec<&str>,
) -> String {
    let id = Uuid::new_v4().to_string();
    let user = User {
        id: id.clone(),
        username: String::from(username),
        password: hash_password("password"),
        display_name: String::from(username),
        email: format!("{username}@example.edu"),
        college_id: None,
        bio: String::new(),
        photo_url: String::from("/person.svg"),
        role,
        admin_courses: Vec::new(),
        contributions: 0,
        xp: 0,
        contributions_updated_at: None,
        is_premium: false,
        created_at: Utc::now(),
    };
    let con = open_connection();
    user_repository::create_user(&user, &con).unwrap();
    if !courses.is_empty() {
        let courses: Vec<String> = courses.iter().map(|c| c.to_string()).collect();
        user_repository::update_role(id.as_str(), role, &courses, false, &con).unwrap();
    }
    con.close().unwrap();
    id
}

#[cfg(test)]
pub fn create_course_db_entry(name: &str) -> String {
    let id = Uuid::new_v4().to_string();
    let course = Course {
        id: id.clone(),
        name: String::from(name),
        college_id: None,
        folders: Vec::new(),
        created_at: Utc::now(),
    };
    let con = open_connection();
    course_repository::create_course(&course, &con).unwrap();
    con.close().unwrap();
    id
}

/// inserts a pending folder with `file_count` pdf entries whose urls decode
/// back to real object paths, so blob removal paths can be exercised without
/// anything on disk
#[cfg(test)]
pub fn create_folder_db_entry(
    name: &str,
    course_id: Option<&str>,
    uploader_id: &str,
    file_count: usize,
) -> String {
    let id = Uuid::new_v4().to_string();
    let con = open_connection();
    let uploader = user_repository::get_user_by_id(uploader_id, &con)
        .unwrap()
        .unwrap();
    let now = Utc::now();
    let mut files: Vec<FileEntry> = Vec::with_capacity(file_count);
    for i in 0..file_count {
        let file_name = format!("file{i}.pdf");
        let object_path = storage::object_path_for(
            course_id.unwrap_or("unassigned"),
            id.as_str(),
            file_name.as_str(),
            now.timestamp_millis(),
        );
        files.push(FileEntry {
            name: file_name,
            url: storage::download_url(object_path.as_str()),
            size: 128,
            mime_type: String::from("application/pdf"),
            moderation_status: ModerationStatus::Pending,
            uploaded_by: uploader.display_name.clone(),
            uploaded_by_id: String::from(uploader_id),
            uploaded_at: now,
            moderated_by: None,
            moderated_by_id: None,
            moderated_at: None,
        });
    }
    let folder = Folder {
        id: id.clone(),
        course_id: course_id.map(String::from),
        name: String::from(name),
        uploaded_by: uploader.display_name,
        uploaded_by_id: String::from(uploader_id),
        files,
        moderation_status: ModerationStatus::Pending,
        moderated_by: None,
        moderated_by_id: None,
        moderated_at: None,
        is_important: false,
        deleted: false,
        deleted_at: None,
        deleted_by: None,
        created_at: now,
        uploaded_at: now,
    };
    folder_repository::create_folder(&folder, &con).unwrap();
    con.close().unwrap();
    id
}

#[cfg(test)]
pub fn create_college_db_entry(name: &str, extensions: Vec<&str>) -> String {
    let id = Uuid::new_v4().to_string();
    let college = College {
        id: id.clone(),
        name: String::from(name),
        extension_url: String::new(),
        email_extensions: extensions.iter().map(|e| e.to_string()).collect(),
        logo: String::new(),
        links: Vec::new(),
        courses: Vec::new(),
        created_at: Utc::now(),
    };
    let con = open_connection();
    college_repository::create_college(&college, &con).unwrap();
    con.close().unwrap();
    id
}

#[cfg(test)]
pub fn create_notification_db_entry(user_id: &str, course_id: &str) -> String {
    let id = Uuid::new_v4().to_string();
    let notification = Notification {
        id: id.clone(),
        user_id: String::from(user_id),
        notification_type: "upload".to_string(),
        course_id: String::from(course_id),
        course_name: "Calculus".to_string(),
        uploader_id: "uploader".to_string(),
        uploader_name: "Uploader".to_string(),
        item_type: "folder".to_string(),
        item_name: "Week 1".to_string(),
        file_count: 2,
        read: false,
        created_at: Utc::now(),
    };
    let con = open_connection();
    notification_repository::create_notification(&notification, &con).unwrap();
    con.close().unwrap();
    id
}

#[cfg(test)]
pub fn new_register_request(username: &str, email: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        username: String::from(username),
        password: String::from("password"),
        display_name: String::from(username),
        email: String::from(email),
    }
}

#[cfg(test)]
pub fn cleanup() {
    let thread_name = current_thread_name();
    let temp_dir_name = crate::temp_dir();
    remove_files();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    remove_dir_all(Path::new(temp_dir_name.as_str())).unwrap_or(());
}
