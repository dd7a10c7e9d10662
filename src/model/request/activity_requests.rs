use rocket::serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct LogSessionRequest {
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "activityType")]
    pub activity_type: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "durationSeconds")]
    pub duration_seconds: u32,
}

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct LogDownloadRequest {
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}
