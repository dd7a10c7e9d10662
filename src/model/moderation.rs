use rusqlite::ToSql;
use serde::{Deserialize, Serialize};

/// the lifecycle state of a folder or of a single file entry inside one.
///
/// Folders are born `Pending` unless the uploader can moderate the target
/// course themselves, in which case they are born `Approved`. `Rejected` is
/// terminal for folders: the document is removed rather than kept around with
/// that status, so it only ever appears on individual file entries.
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Copy, Clone)]
pub enum ModerationStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "approved")]
    Approved,
    #[serde(rename = "rejected")]
    Rejected,
}

impl From<&str> for ModerationStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => {
                log::warn!(
                    "moderation status from database {value} does not match any branches in ModerationStatus#from"
                );
                Self::Pending
            }
        }
    }
}

impl ToSql for ModerationStatus {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        match self {
            Self::Pending => Ok("pending".into()),
            Self::Approved => Ok("approved".into()),
            Self::Rejected => Ok("rejected".into()),
        }
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl Default for ModerationStatus {
    fn default() -> Self {
        Self::Pending
    }
}
