use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::CollegeLink;

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CreateCollegeRequest {
    pub name: String,
    #[serde(rename = "extensionUrl")]
    pub extension_url: Option<String>,
    /// email domains used to match new registrations to this college
    #[serde(rename = "emailExtensions")]
    pub email_extensions: Option<Vec<String>>,
    pub logo: Option<String>,
    pub links: Option<Vec<CollegeLink>>,
}

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateCollegeRequest {
    pub name: String,
    #[serde(rename = "extensionUrl")]
    pub extension_url: Option<String>,
    #[serde(rename = "emailExtensions")]
    pub email_extensions: Option<Vec<String>>,
    pub logo: Option<String>,
    pub links: Option<Vec<CollegeLink>>,
}
