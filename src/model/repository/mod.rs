use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::moderation::ModerationStatus;
use super::role::Role;

/// a registered user. `contributions` and `xp` are derived counters owned by
/// the recalculation path; nothing else should write them directly except the
/// moderation decrement.
#[derive(Debug, PartialEq, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    /// sha256 hex of the password; never serialized outward
    pub password: String,
    pub display_name: String,
    pub email: String,
    /// matched from the email domain against college email extensions at registration
    pub college_id: Option<String>,
    pub bio: String,
    pub photo_url: String,
    pub role: Role,
    /// course ids this user moderates; only meaningful for [Role::Admin]
    pub admin_courses: Vec<String>,
    pub contributions: u32,
    pub xp: u32,
    pub contributions_updated_at: Option<DateTime<Utc>>,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// whether this user may decide moderation for the passed course
    pub fn can_moderate(&self, course_id: &str) -> bool {
        match self.role {
            Role::SuperAdmin => true,
            Role::Admin => self.admin_courses.iter().any(|c| c == course_id),
            _ => false,
        }
    }
}

/// one entry in a course's denormalized `folders` summary array.
///
/// Historically the array held either bare folder-id strings or embedded
/// metadata objects, so both shapes have to parse. Everything written today is
/// the `Id` form; the repair pass converges stored data and the `Legacy` arm
/// goes away once no object-form rows remain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FolderRef {
    Id(String),
    Legacy(LegacyFolderRef),
}

/// the object form of a [FolderRef]. Every field is optional because rows in
/// the wild are missing arbitrary pieces; an entry without an `id` cannot be
/// resolved and is dropped during standardization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LegacyFolderRef {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "fileCount")]
    pub file_count: Option<u32>,
    #[serde(rename = "isImportant")]
    pub is_important: Option<bool>,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: Option<String>,
}

impl FolderRef {
    /// the folder id this entry points at, whichever form it is stored in
    pub fn folder_id(&self) -> Option<&str> {
        match self {
            FolderRef::Id(id) => Some(id.as_str()),
            FolderRef::Legacy(legacy) => legacy.id.as_deref(),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Course {
    pub id: String,
    pub name: String,
    /// `None` marks a skill course
    pub college_id: Option<String>,
    /// denormalized summary of the course's folders, for cheap reads. The
    /// authoritative list lives on the Folders table; the maintenance module
    /// reconciles the two.
    pub folders: Vec<FolderRef>,
    pub created_at: DateTime<Utc>,
}

/// a file inside a folder document. These are embedded in the folder's JSON
/// `files` column, not rows of their own, and carry a moderation status
/// independent of the folder's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    /// download url; the sole handle back to the stored object, so deleting
    /// the object means decoding the storage path back out of this
    pub url: String,
    pub size: u64,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "moderationStatus")]
    pub moderation_status: ModerationStatus,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: String,
    #[serde(rename = "uploadedById")]
    pub uploaded_by_id: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
    #[serde(rename = "moderatedBy")]
    pub moderated_by: Option<String>,
    #[serde(rename = "moderatedById")]
    pub moderated_by_id: Option<String>,
    #[serde(rename = "moderatedAt")]
    pub moderated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Folder {
    pub id: String,
    /// owning course; may be `None` or point at a course that no longer
    /// exists, which is exactly what the maintenance diagnostics report
    pub course_id: Option<String>,
    pub name: String,
    pub uploaded_by: String,
    pub uploaded_by_id: String,
    pub files: Vec<FileEntry>,
    pub moderation_status: ModerationStatus,
    pub moderated_by: Option<String>,
    pub moderated_by_id: Option<String>,
    pub moderated_at: Option<DateTime<Utc>>,
    pub is_important: bool,
    /// soft-delete flag; soft-deleted folders are excluded from listings and
    /// from contribution counts but stay queryable for restore
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<String>,
    pub created_at: DateTime<Utc>,
    /// bumped whenever files are appended
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct College {
    pub id: String,
    pub name: String,
    pub extension_url: String,
    /// email domains (with or without a leading `@`) used to match new
    /// registrations to this college
    pub email_extensions: Vec<String>,
    pub logo: String,
    pub links: Vec<CollegeLink>,
    pub courses: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// ids of the skill courses (courses with no college) under this skill
    pub courses: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Notification {
    pub id: String,
    /// the recipient
    pub user_id: String,
    pub notification_type: String,
    pub course_id: String,
    pub course_name: String,
    pub uploader_id: String,
    pub uploader_name: String,
    /// `folder` when the upload created a folder, `files` when it appended
    pub item_type: String,
    pub item_name: String,
    pub file_count: u32,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SessionLog {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub activity_type: String,
    pub file_name: String,
    pub duration_seconds: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DownloadLog {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub file_name: String,
    pub timestamp: DateTime<Utc>,
}
