use std::backtrace::Backtrace;

use chrono::Utc;
use uuid::Uuid;

use crate::model::error::course_errors::{
    CreateCourseError, DeleteCourseError, GetCourseError, ListCoursesError,
};
use crate::model::repository;
use crate::model::request::course_requests::CreateCourseRequest;
use crate::model::response::course_responses::{CourseApi, CourseDetailApi};
use crate::model::response::folder_responses::FolderApi;
use crate::repository::{college_repository, course_repository, folder_repository, open_connection};

/// creates a course, attaching it to a college when one is passed. The course
/// row and the college's courses array are written in one transaction so a
/// crash can't leave a course its college doesn't know about
pub fn create_course(request: CreateCourseRequest) -> Result<CourseApi, CreateCourseError> {
    let mut con = open_connection();
    let college = match request.college_id.as_deref() {
        Some(college_id) => match college_repository::get_college_by_id(college_id, &con) {
            Ok(Some(college)) => Some(college),
            Ok(None) => {
                con.close().unwrap();
                return Err(CreateCourseError::CollegeNotFound);
            }
            Err(_) => {
                con.close().unwrap();
                return Err(CreateCourseError::DbFailure);
            }
        },
        // no college means a skill course
        None => None,
    };
    let course = repository::Course {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        college_id: request.college_id,
        folders: Vec::new(),
        created_at: Utc::now(),
    };
    let tx_result = con.transaction();
    if let Err(e) = &tx_result {
        log::error!(
            "Failed to open transaction to create course! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        drop(tx_result);
        con.close().unwrap();
        return Err(CreateCourseError::DbFailure);
    }
    let tx = tx_result.unwrap();
    let write_res = course_repository::create_course(&course, &tx).and_then(|_| {
        if let Some(college) = &college {
            let mut courses = college.courses.clone();
            if !courses.contains(&course.id) {
                courses.push(course.id.clone());
            }
            college_repository::update_courses(college.id.as_str(), &courses, &tx)?;
        }
        Ok(())
    });
    let commit_res = match write_res {
        Ok(()) => tx.commit(),
        Err(e) => {
            log::error!(
                "Failed to create course {}! Error is {e:?}\n{}",
                course.name,
                Backtrace::force_capture()
            );
            drop(tx);
            con.close().unwrap();
            return Err(CreateCourseError::DbFailure);
        }
    };
    if let Err(e) = commit_res {
        log::error!(
            "Failed to commit course creation! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(CreateCourseError::DbFailure);
    }
    con.close().unwrap();
    Ok(CourseApi::from(course))
}

/// the course with its non-deleted folders resolved from the authoritative
/// table; the denormalized summary array is only for list views
pub fn get_course(id: &str) -> Result<CourseDetailApi, GetCourseError> {
    let con = open_connection();
    let course = match course_repository::get_course_by_id(id, &con) {
        Ok(Some(course)) => course,
        Ok(None) => {
            con.close().unwrap();
            return Err(GetCourseError::CourseNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(GetCourseError::DbFailure);
        }
    };
    let folders = match folder_repository::get_folders_for_course(id, &con) {
        Ok(folders) => folders,
        Err(e) => {
            log::error!(
                "Failed to resolve folders for course {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(GetCourseError::DbFailure);
        }
    };
    con.close().unwrap();
    Ok(CourseDetailApi {
        id: course.id,
        name: course.name,
        college_id: course.college_id,
        folders: folders.into_iter().map(FolderApi::from).collect(),
        created_at: course.created_at.to_rfc3339(),
    })
}

pub fn get_all_courses() -> Result<Vec<CourseApi>, ListCoursesError> {
    let con = open_connection();
    let courses = match course_repository::get_all_courses(&con) {
        Ok(courses) => courses,
        Err(e) => {
            log::error!(
                "Failed to list courses! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(ListCoursesError::DbFailure);
        }
    };
    con.close().unwrap();
    Ok(courses.into_iter().map(CourseApi::from).collect())
}

/// removes the course and its entry in the owning college's courses array in
/// one transaction. Folders pointing at the course are deliberately left
/// behind; the maintenance diagnostics pick them up as orphans
pub fn delete_course(id: &str) -> Result<(), DeleteCourseError> {
    let mut con = open_connection();
    let course = match course_repository::get_course_by_id(id, &con) {
        Ok(Some(course)) => course,
        Ok(None) => {
            con.close().unwrap();
            return Err(DeleteCourseError::CourseNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(DeleteCourseError::DbFailure);
        }
    };
    let college = match course.college_id.as_deref() {
        Some(college_id) => match college_repository::get_college_by_id(college_id, &con) {
            Ok(college) => college,
            Err(_) => {
                con.close().unwrap();
                return Err(DeleteCourseError::DbFailure);
            }
        },
        None => None,
    };
    let tx_result = con.transaction();
    if let Err(e) = &tx_result {
        log::error!(
            "Failed to open transaction to delete course! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        drop(tx_result);
        con.close().unwrap();
        return Err(DeleteCourseError::DbFailure);
    }
    let tx = tx_result.unwrap();
    let write_res = match &college {
        Some(college) => {
            let courses: Vec<String> = college
                .courses
                .iter()
                .filter(|course_id| course_id.as_str() != id)
                .cloned()
                .collect();
            college_repository::update_courses(college.id.as_str(), &courses, &tx)
                .and_then(|_| course_repository::delete_course(id, &tx))
        }
        None => course_repository::delete_course(id, &tx),
    };
    let commit_res = match write_res {
        Ok(()) => tx.commit(),
        Err(e) => {
            log::error!(
                "Failed to delete course {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            drop(tx);
            con.close().unwrap();
            return Err(DeleteCourseError::DbFailure);
        }
    };
    if let Err(e) = commit_res {
        log::error!(
            "Failed to commit course deletion! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(DeleteCourseError::DbFailure);
    }
    con.close().unwrap();
    Ok(())
}

#[cfg(test)]
mod course_service_tests {
    use crate::model::error::course_errors::CreateCourseError;
    use crate::model::request::course_requests::CreateCourseRequest;
    use crate::repository::{college_repository, open_connection};
    use crate::service::course_service::{create_course, delete_course, get_course};
    use crate::test::{cleanup, create_college_db_entry, refresh_db};

    #[test]
    fn create_course_syncs_college_courses_array() {
        refresh_db();
        let college_id = create_college_db_entry("Engineering", vec!["eng.edu"]);
        let course = create_course(CreateCourseRequest {
            name: "Signals".to_string(),
            college_id: Some(college_id.clone()),
        })
        .unwrap();
        let con = open_connection();
        let college = college_repository::get_college_by_id(college_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        assert_eq!(vec![course.id], college.courses);
        cleanup();
    }

    #[test]
    fn create_course_rejects_missing_college() {
        refresh_db();
        let res = create_course(CreateCourseRequest {
            name: "Nowhere".to_string(),
            college_id: Some("missing".to_string()),
        })
        .unwrap_err();
        assert_eq!(CreateCourseError::CollegeNotFound, res);
        cleanup();
    }

    #[test]
    fn create_course_without_college_makes_skill_course() {
        refresh_db();
        let course = create_course(CreateCourseRequest {
            name: "Public Speaking".to_string(),
            college_id: None,
        })
        .unwrap();
        assert_eq!(None, course.college_id);
        cleanup();
    }

    #[test]
    fn delete_course_removes_college_entry() {
        refresh_db();
        let college_id = create_college_db_entry("Science", vec!["sci.edu"]);
        let course = create_course(CreateCourseRequest {
            name: "Chemistry".to_string(),
            college_id: Some(college_id.clone()),
        })
        .unwrap();
        delete_course(course.id.as_str()).unwrap();
        let con = open_connection();
        let college = college_repository::get_college_by_id(college_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        assert!(college.courses.is_empty());
        assert!(get_course(course.id.as_str()).is_err());
        cleanup();
    }
}
