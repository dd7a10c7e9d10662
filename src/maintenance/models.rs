use rocket::serde::json::Json;
use rocket::serde::Serialize;

use crate::model::response::BasicMessage;

/// how a course's folder summary array is stored. Only [SummaryShape::Id] and
/// [SummaryShape::Empty] survive a repair pass; the other two mark arrays the
/// standardization step will rewrite
#[derive(Serialize, Debug, PartialEq, Clone, Copy)]
#[serde(crate = "rocket::serde")]
pub enum SummaryShape {
    /// every entry is a plain folder-id string
    #[serde(rename = "string")]
    Id,
    /// every entry is an embedded metadata object
    #[serde(rename = "object")]
    Object,
    #[serde(rename = "mixed")]
    Mixed,
    #[serde(rename = "empty")]
    Empty,
}

/// per-shape course counts across the whole scan
#[derive(Serialize, Debug, PartialEq, Clone, Default)]
#[serde(crate = "rocket::serde")]
pub struct ShapeCounts {
    pub string: u32,
    pub object: u32,
    pub mixed: u32,
    pub empty: u32,
}

/// a folder the scan flagged, with enough context to eyeball it
#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct FolderFinding {
    #[serde(rename = "folderId")]
    pub folder_id: String,
    pub name: String,
    #[serde(rename = "courseId")]
    pub course_id: Option<String>,
    #[serde(rename = "fileCount")]
    pub file_count: u32,
}

/// everything wrong with one course's summary array. Courses whose array is
/// clean and string-typed don't get an entry
#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct CourseFinding {
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "courseName")]
    pub course_name: String,
    pub shape: SummaryShape,
    /// entries pointing at folders that don't exist
    #[serde(rename = "danglingRefs")]
    pub dangling_refs: Vec<String>,
    /// folder ids appearing more than once, listed once each
    #[serde(rename = "duplicateRefs")]
    pub duplicate_refs: Vec<String>,
    /// live folders owned by this course but absent from its array
    #[serde(rename = "missingRefs")]
    pub missing_refs: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct DiagnosticsReport {
    #[serde(rename = "scannedCourses")]
    pub scanned_courses: u32,
    #[serde(rename = "scannedFolders")]
    pub scanned_folders: u32,
    #[serde(rename = "summaryShapes")]
    pub summary_shapes: ShapeCounts,
    #[serde(rename = "orphanedFolders")]
    pub orphaned_folders: Vec<FolderFinding>,
    #[serde(rename = "emptyFolders")]
    pub empty_folders: Vec<FolderFinding>,
    #[serde(rename = "courseFindings")]
    pub course_findings: Vec<CourseFinding>,
}

/// what a repair pass changed, by step. All zeroes means the pass found
/// nothing to do
#[derive(Serialize, Debug, PartialEq, Clone, Default)]
#[serde(crate = "rocket::serde")]
pub struct RepairSummary {
    /// courses whose array was rewritten to deduplicated id-string form
    #[serde(rename = "standardizedCourses")]
    pub standardized_courses: u32,
    /// empty orphaned folders deleted outright
    #[serde(rename = "deletedFolders")]
    pub deleted_folders: u32,
    /// dangling entries stripped out of course arrays
    #[serde(rename = "strippedRefs")]
    pub stripped_refs: u32,
    /// refs added for live folders their course had lost track of
    #[serde(rename = "addedRefs")]
    pub added_refs: u32,
}

#[derive(PartialEq, Debug)]
pub enum DiagnosticsError {
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum RepairError {
    DbFailure,
}

#[derive(Responder)]
pub enum DiagnosticsResponse {
    #[response(status = 200)]
    Success(Json<DiagnosticsReport>),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum RepairResponse {
    #[response(status = 200)]
    Success(Json<RepairSummary>),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
}
