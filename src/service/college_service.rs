use std::backtrace::Backtrace;

use chrono::Utc;
use uuid::Uuid;

use crate::model::error::college_errors::{
    CreateCollegeError, DeleteCollegeError, GetCollegeError, ListCollegesError, UpdateCollegeError,
};
use crate::model::repository;
use crate::model::request::college_requests::{CreateCollegeRequest, UpdateCollegeRequest};
use crate::model::response::college_responses::CollegeApi;
use crate::repository::{college_repository, open_connection};

pub fn create_college(request: CreateCollegeRequest) -> Result<CollegeApi, CreateCollegeError> {
    let college = repository::College {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        extension_url: request.extension_url.unwrap_or_default(),
        email_extensions: request.email_extensions.unwrap_or_default(),
        logo: request.logo.unwrap_or_default(),
        links: request.links.unwrap_or_default(),
        courses: Vec::new(),
        created_at: Utc::now(),
    };
    let con = open_connection();
    if let Err(e) = college_repository::create_college(&college, &con) {
        log::error!(
            "Failed to create college {}! Error is {e:?}\n{}",
            college.name,
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(CreateCollegeError::DbFailure);
    }
    con.close().unwrap();
    Ok(CollegeApi::from(college))
}

pub fn get_college(id: &str) -> Result<CollegeApi, GetCollegeError> {
    let con = open_connection();
    let college = match college_repository::get_college_by_id(id, &con) {
        Ok(Some(college)) => college,
        Ok(None) => {
            con.close().unwrap();
            return Err(GetCollegeError::CollegeNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(GetCollegeError::DbFailure);
        }
    };
    con.close().unwrap();
    Ok(CollegeApi::from(college))
}

pub fn get_all_colleges() -> Result<Vec<CollegeApi>, ListCollegesError> {
    let con = open_connection();
    let colleges = match college_repository::get_all_colleges(&con) {
        Ok(colleges) => colleges,
        Err(e) => {
            log::error!(
                "Failed to list colleges! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(ListCollegesError::DbFailure);
        }
    };
    con.close().unwrap();
    Ok(colleges.into_iter().map(CollegeApi::from).collect())
}

/// updates the college's own fields. The courses membership array is managed
/// by course create / delete and left untouched here
pub fn update_college(
    id: &str,
    request: UpdateCollegeRequest,
) -> Result<CollegeApi, UpdateCollegeError> {
    let con = open_connection();
    let mut college = match college_repository::get_college_by_id(id, &con) {
        Ok(Some(college)) => college,
        Ok(None) => {
            con.close().unwrap();
            return Err(UpdateCollegeError::CollegeNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(UpdateCollegeError::DbFailure);
        }
    };
    college.name = request.name;
    if let Some(extension_url) = request.extension_url {
        college.extension_url = extension_url;
    }
    if let Some(email_extensions) = request.email_extensions {
        college.email_extensions = email_extensions;
    }
    if let Some(logo) = request.logo {
        college.logo = logo;
    }
    if let Some(links) = request.links {
        college.links = links;
    }
    if let Err(e) = college_repository::update_college(&college, &con) {
        log::error!(
            "Failed to update college {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(UpdateCollegeError::DbFailure);
    }
    con.close().unwrap();
    Ok(CollegeApi::from(college))
}

/// removes the college row. Its courses survive as skill-less strays; the
/// maintenance diagnostics do not govern colleges so this mirrors course
/// deletion's leave-the-children behavior
pub fn delete_college(id: &str) -> Result<(), DeleteCollegeError> {
    let con = open_connection();
    match college_repository::get_college_by_id(id, &con) {
        Ok(Some(_)) => { /* no op */ }
        Ok(None) => {
            con.close().unwrap();
            return Err(DeleteCollegeError::CollegeNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(DeleteCollegeError::DbFailure);
        }
    };
    if let Err(e) = college_repository::delete_college(id, &con) {
        log::error!(
            "Failed to delete college {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(DeleteCollegeError::DbFailure);
    }
    con.close().unwrap();
    Ok(())
}

#[cfg(test)]
mod college_service_tests {
    use crate::model::error::college_errors::GetCollegeError;
    use crate::model::repository::CollegeLink;
    use crate::model::request::college_requests::{CreateCollegeRequest, UpdateCollegeRequest};
    use crate::service::college_service::{create_college, get_college, update_college};
    use crate::test::{cleanup, refresh_db};

    #[test]
    fn create_college_then_get_returns_it() {
        refresh_db();
        let created = create_college(CreateCollegeRequest {
            name: "Engineering".to_string(),
            extension_url: Some("https://eng.example.edu".to_string()),
            email_extensions: Some(vec!["@eng.example.edu".to_string()]),
            logo: None,
            links: Some(vec![CollegeLink {
                title: "Library".to_string(),
                url: "https://lib.example.edu".to_string(),
            }]),
        })
        .unwrap();
        let fetched = get_college(created.id.as_str()).unwrap();
        assert_eq!(created, fetched);
        cleanup();
    }

    #[test]
    fn get_college_not_found() {
        refresh_db();
        let res = get_college("missing").unwrap_err();
        assert_eq!(GetCollegeError::CollegeNotFound, res);
        cleanup();
    }

    #[test]
    fn update_college_keeps_unset_fields() {
        refresh_db();
        let created = create_college(CreateCollegeRequest {
            name: "Science".to_string(),
            extension_url: Some("https://sci.example.edu".to_string()),
            email_extensions: Some(vec!["sci.example.edu".to_string()]),
            logo: Some("/sci.png".to_string()),
            links: None,
        })
        .unwrap();
        let updated = update_college(
            created.id.as_str(),
            UpdateCollegeRequest {
                name: "Sciences".to_string(),
                extension_url: None,
                email_extensions: None,
                logo: None,
                links: None,
            },
        )
        .unwrap();
        assert_eq!("Sciences", updated.name);
        assert_eq!(created.extension_url, updated.extension_url);
        assert_eq!(created.email_extensions, updated.email_extensions);
        assert_eq!(created.logo, updated.logo);
        cleanup();
    }
}
