use std::backtrace::Backtrace;

use chrono::Utc;
use uuid::Uuid;

use crate::model::error::skill_errors::{
    CreateSkillError, GetSkillError, ListSkillsError, UpdateSkillError,
};
use crate::model::repository;
use crate::model::request::skill_requests::{CreateSkillRequest, UpdateSkillRequest};
use crate::model::response::skill_responses::SkillApi;
use crate::repository::{open_connection, skill_repository};

pub fn create_skill(request: CreateSkillRequest) -> Result<SkillApi, CreateSkillError> {
    let con = open_connection();
    match find_by_name(request.name.as_str(), &con) {
        Ok(None) => { /* no op - name is free */ }
        Ok(Some(_)) => {
            con.close().unwrap();
            return Err(CreateSkillError::AlreadyExists);
        }
        Err(e) => {
            log::error!(
                "Failed to check if skill {} already exists! Error is {e:?}\n{}",
                request.name,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(CreateSkillError::DbFailure);
        }
    };
    let skill = repository::Skill {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        icon: request.icon.unwrap_or_default(),
        courses: request.courses.unwrap_or_default(),
        created_at: Utc::now(),
    };
    if let Err(e) = skill_repository::create_skill(&skill, &con) {
        log::error!(
            "Failed to create skill {}! Error is {e:?}\n{}",
            skill.name,
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(CreateSkillError::DbFailure);
    }
    con.close().unwrap();
    Ok(SkillApi::from(skill))
}

pub fn get_skill(id: &str) -> Result<SkillApi, GetSkillError> {
    let con = open_connection();
    let skill = match skill_repository::get_skill_by_id(id, &con) {
        Ok(Some(skill)) => skill,
        Ok(None) => {
            con.close().unwrap();
            return Err(GetSkillError::SkillNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(GetSkillError::DbFailure);
        }
    };
    con.close().unwrap();
    Ok(SkillApi::from(skill))
}

pub fn get_all_skills() -> Result<Vec<SkillApi>, ListSkillsError> {
    let con = open_connection();
    let skills = match skill_repository::get_all_skills(&con) {
        Ok(skills) => skills,
        Err(e) => {
            log::error!(
                "Failed to list skills! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(ListSkillsError::DbFailure);
        }
    };
    con.close().unwrap();
    Ok(skills.into_iter().map(SkillApi::from).collect())
}

pub fn update_skill(id: &str, request: UpdateSkillRequest) -> Result<SkillApi, UpdateSkillError> {
    let con = open_connection();
    let mut skill = match skill_repository::get_skill_by_id(id, &con) {
        Ok(Some(skill)) => skill,
        Ok(None) => {
            con.close().unwrap();
            return Err(UpdateSkillError::SkillNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(UpdateSkillError::DbFailure);
        }
    };
    // a rename must not collide with a different skill
    match find_by_name(request.name.as_str(), &con) {
        Ok(Some(existing)) if existing.id != skill.id => {
            con.close().unwrap();
            return Err(UpdateSkillError::AlreadyExists);
        }
        Ok(_) => { /* no op */ }
        Err(e) => {
            log::error!(
                "Failed to check if skill name {} is taken! Error is {e:?}\n{}",
                request.name,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(UpdateSkillError::DbFailure);
        }
    };
    skill.name = request.name;
    if let Some(icon) = request.icon {
        skill.icon = icon;
    }
    if let Some(courses) = request.courses {
        skill.courses = courses;
    }
    if let Err(e) = skill_repository::update_skill(&skill, &con) {
        log::error!(
            "Failed to update skill {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(UpdateSkillError::DbFailure);
    }
    con.close().unwrap();
    Ok(SkillApi::from(skill))
}

fn find_by_name(
    name: &str,
    con: &rusqlite::Connection,
) -> Result<Option<repository::Skill>, rusqlite::Error> {
    let skills = skill_repository::get_all_skills(con)?;
    Ok(skills
        .into_iter()
        .find(|skill| skill.name.eq_ignore_ascii_case(name)))
}
