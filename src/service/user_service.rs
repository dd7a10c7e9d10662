use std::backtrace::Backtrace;

use chrono::Utc;
use uuid::Uuid;

use crate::guard::hash_password;
use crate::model::error::user_errors::{
    GetUserError, ListUsersError, RegisterUserError, UpdateUserRoleError,
};
use crate::model::repository;
use crate::model::request::user_requests::{RegisterUserRequest, UpdateUserRoleRequest};
use crate::model::response::UserApi;
use crate::model::role::Role;
use crate::repository::{college_repository, open_connection, user_repository};

/// registers a new account. The very first account on a fresh database comes
/// up as superadmin so the instance can be administered at all; everyone
/// after that starts as a plain user
pub fn register_user(request: RegisterUserRequest) -> Result<UserApi, RegisterUserError> {
    let con = open_connection();
    match user_repository::get_user_by_username(request.username.as_str(), &con) {
        Ok(None) => { /* no op - username is free */ }
        Ok(Some(_)) => {
            con.close().unwrap();
            return Err(RegisterUserError::UsernameTaken);
        }
        Err(e) => {
            log::error!(
                "Failed to check if username {} is taken! Error is {e:?}\n{}",
                request.username,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(RegisterUserError::DbFailure);
        }
    };
    let role = match user_repository::count_users(&con) {
        Ok(0) => Role::SuperAdmin,
        Ok(_) => Role::User,
        Err(e) => {
            log::error!(
                "Failed to count users! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(RegisterUserError::DbFailure);
        }
    };
    let college_id = match match_college(request.email.as_str(), &con) {
        Ok(id) => id,
        Err(e) => {
            log::error!(
                "Failed to match email {} against college extensions! Error is {e:?}\n{}",
                request.email,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(RegisterUserError::DbFailure);
        }
    };
    let user = repository::User {
        id: Uuid::new_v4().to_string(),
        username: request.username,
        password: hash_password(request.password.as_str()),
        display_name: request.display_name,
        email: request.email,
        college_id,
        bio: String::new(),
        photo_url: "/person.svg".to_string(),
        role,
        admin_courses: Vec::new(),
        contributions: 0,
        xp: 0,
        contributions_updated_at: None,
        is_premium: false,
        created_at: Utc::now(),
    };
    if let Err(e) = user_repository::create_user(&user, &con) {
        log::error!(
            "Failed to create user {}! Error is {e:?}\n{}",
            user.username,
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(RegisterUserError::DbFailure);
    }
    con.close().unwrap();
    Ok(UserApi::from(user))
}

pub fn get_user(id: &str) -> Result<UserApi, GetUserError> {
    let con = open_connection();
    let user = match user_repository::get_user_by_id(id, &con) {
        Ok(Some(user)) => user,
        Ok(None) => {
            con.close().unwrap();
            return Err(GetUserError::UserNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(GetUserError::DbFailure);
        }
    };
    con.close().unwrap();
    Ok(UserApi::from(user))
}

pub fn get_all_users() -> Result<Vec<UserApi>, ListUsersError> {
    let con = open_connection();
    let users = match user_repository::get_all_users(&con) {
        Ok(users) => users,
        Err(e) => {
            log::error!(
                "Failed to list users! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(ListUsersError::DbFailure);
        }
    };
    con.close().unwrap();
    Ok(users.into_iter().map(UserApi::from).collect())
}

/// replaces the user's role and premium flag. The adminCourses set is kept
/// only when the new role is admin; any other role clears it so stale
/// moderation grants can't linger on demoted accounts
pub fn update_user_role(
    id: &str,
    request: UpdateUserRoleRequest,
) -> Result<UserApi, UpdateUserRoleError> {
    let con = open_connection();
    let mut user = match user_repository::get_user_by_id(id, &con) {
        Ok(Some(user)) => user,
        Ok(None) => {
            con.close().unwrap();
            return Err(UpdateUserRoleError::UserNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(UpdateUserRoleError::DbFailure);
        }
    };
    let role = Role::from(request.role.as_str());
    let admin_courses = if role == Role::Admin {
        request.admin_courses.unwrap_or_default()
    } else {
        Vec::new()
    };
    let is_premium = request.is_premium.unwrap_or(user.is_premium);
    if let Err(e) = user_repository::update_role(id, role, &admin_courses, is_premium, &con) {
        log::error!(
            "Failed to update role for user {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(UpdateUserRoleError::DbFailure);
    }
    con.close().unwrap();
    user.role = role;
    user.admin_courses = admin_courses;
    user.is_premium = is_premium;
    Ok(UserApi::from(user))
}

/// finds the college whose email extensions contain the address's domain.
/// Extensions are stored with or without a leading `@`
fn match_college(
    email: &str,
    con: &rusqlite::Connection,
) -> Result<Option<String>, rusqlite::Error> {
    let domain = match email.split('@').nth(1) {
        Some(domain) if !domain.is_empty() => domain.to_lowercase(),
        _ => return Ok(None),
    };
    let colleges = college_repository::get_all_colleges(con)?;
    let matched = colleges.into_iter().find(|college| {
        college
            .email_extensions
            .iter()
            .any(|ext| ext.trim_start_matches('@').to_lowercase() == domain)
    });
    Ok(matched.map(|college| college.id))
}


#[cfg(test)]
mod update_user_role_tests {
    use crate::model::request::user_requests::UpdateUserRoleRequest;
    use crate::model::role::Role;
    use crate::service::user_service::update_user_role;
    use crate::test::{cleanup, create_user_db_entry, refresh_db};

    #[test]
    fn update_user_role_keeps_admin_courses_only_for_admins() {
        refresh_db();
        let id = create_user_db_entry("mod_candidate", Role::User);
        let promoted = update_user_role(
            id.as_str(),
            UpdateUserRoleRequest {
                role: "admin".to_string(),
                admin_courses: Some(vec!["course1".to_string()]),
                is_premium: None,
            },
        )
        .unwrap();
        assert_eq!(Role::Admin, promoted.role);
        assert_eq!(vec!["course1".to_string()], promoted.admin_courses);
        let demoted = update_user_role(
            id.as_str(),
            UpdateUserRoleRequest {
                role: "user".to_string(),
                admin_courses: Some(vec!["course1".to_string()]),
                is_premium: None,
            },
        )
        .unwrap();
        assert_eq!(Role::User, demoted.role);
        assert!(demoted.admin_courses.is_empty());
        cleanup();
    }
}
