use rocket::serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CreateSkillRequest {
    pub name: String,
    pub icon: Option<String>,
    /// ids of skill courses to group under this skill
    pub courses: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateSkillRequest {
    pub name: String,
    pub icon: Option<String>,
    pub courses: Option<Vec<String>>,
}
