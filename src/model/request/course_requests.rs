use rocket::serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CreateCourseRequest {
    pub name: String,
    /// `None` creates a skill course
    #[serde(rename = "collegeId")]
    pub college_id: Option<String>,
}
