use rusqlite::ToSql;
use serde::{Deserialize, Serialize};

/// a user's privilege level.
///
/// `Admin` moderation authority is scoped to the courses in the user's
/// `admin_courses` set; `SuperAdmin` authority is unscoped.
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Copy, Clone)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "collegeadmin")]
    CollegeAdmin,
    #[serde(rename = "superadmin")]
    SuperAdmin,
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "user" => Self::User,
            "admin" => Self::Admin,
            "collegeadmin" => Self::CollegeAdmin,
            "superadmin" => Self::SuperAdmin,
            _ => {
                log::warn!("role from database {value} does not match any branches in Role#from");
                Self::User
            }
        }
    }
}

impl ToSql for Role {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        match self {
            Self::User => Ok("user".into()),
            Self::Admin => Ok("admin".into()),
            Self::CollegeAdmin => Ok("collegeadmin".into()),
            Self::SuperAdmin => Ok("superadmin".into()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
            Self::CollegeAdmin => write!(f, "collegeadmin"),
            Self::SuperAdmin => write!(f, "superadmin"),
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}
