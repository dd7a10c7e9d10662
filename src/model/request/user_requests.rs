use rocket::serde::{Deserialize, Serialize};

/// registration payload. Because `Auth` is used as a request guard, we can't
/// use it to carry new credentials; this accepts them in a post body instead.
#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub email: String,
}

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateUserRoleRequest {
    pub role: String,
    /// kept only when the new role is `admin`; cleared otherwise
    #[serde(rename = "adminCourses")]
    pub admin_courses: Option<Vec<String>>,
    #[serde(rename = "isPremium")]
    pub is_premium: Option<bool>,
}
