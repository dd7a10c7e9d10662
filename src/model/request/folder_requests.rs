use rocket::fs::TempFile;
use rocket::serde::{Deserialize, Serialize};
use rocket::FromForm;

/// multipart upload of one or more files into a course folder. The folder is
/// found by (course, name) among non-deleted folders, or created if absent.
#[derive(FromForm)]
pub struct ResourceUpload<'a> {
    #[field(name = "courseId")]
    pub course_id: String,
    #[field(name = "folderName")]
    pub folder_name: String,
    #[field(name = "isImportant", default = false)]
    pub is_important: bool,
    pub files: Vec<TempFile<'a>>,
}

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SetImportanceRequest {
    #[serde(rename = "isImportant")]
    pub is_important: bool,
}
