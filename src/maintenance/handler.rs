use rocket::serde::json::Json;
use rocket::State;

use crate::guard::{Auth, ValidateResult};
use crate::maintenance::models::{DiagnosticsResponse, RepairResponse};
use crate::maintenance::service;
use crate::model::response::BasicMessage;
use crate::model::role::Role;
use crate::util::RequestLimiter;

#[get("/diagnostics")]
pub fn diagnostics(auth: Auth) -> DiagnosticsResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return DiagnosticsResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return DiagnosticsResponse::Forbidden(BasicMessage::new(
            "Only superadmins may run diagnostics.",
        ));
    }
    match service::run_diagnostics() {
        Ok(report) => DiagnosticsResponse::Success(Json::from(report)),
        Err(_) => DiagnosticsResponse::DbError(BasicMessage::new(
            "Failed to scan the database. Check server logs for details",
        )),
    }
}

#[post("/repair")]
pub fn repair(auth: Auth, limiter: &State<RequestLimiter>) -> RepairResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return RepairResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    if user.role != Role::SuperAdmin {
        return RepairResponse::Forbidden(BasicMessage::new(
            "Only superadmins may run a repair pass.",
        ));
    }
    match service::run_repair(limiter) {
        Ok(summary) => RepairResponse::Success(Json::from(summary)),
        Err(_) => RepairResponse::DbError(BasicMessage::new(
            "The repair pass failed partway through. Check server logs for details",
        )),
    }
}
