use std::io::Write;

use base64::{engine::general_purpose, Engine as _};
use rocket::async_trait;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use sha2::{Digest, Sha256};

use crate::model::repository::User;
use crate::repository::{open_connection, user_repository};

/// used to represent the result of calling `Auth::validate`
pub enum ValidateResult {
    /// the credentials matched; carries the authenticated user so handlers
    /// don't have to look it up again
    Ok(User),
    Invalid,
}

#[derive(Debug)]
pub struct Auth {
    pub username: String,
    pub password: String,
}

impl Auth {
    /// creates an `Auth` object from the passed header value.
    /// The value of header must be base64-encoded basic auth.
    pub fn from(header: &str) -> Result<Auth, &str> {
        // remove the "Basic " from the header, leaving only the base64 part
        let stripped_header = header.to_string().replace("Basic ", "");
        match general_purpose::STANDARD.decode(stripped_header.as_str()) {
            Ok(value) => {
                let combined = String::from_utf8(value).unwrap();
                let split = combined.split(':').collect::<Vec<&str>>();
                // if there aren't exactly 2 parts, then something is wrong here
                if split.len() != 2 || split.contains(&"") {
                    return Err("Invalid basic auth format: missing username or password");
                }
                Ok(Auth {
                    username: String::from(split[0].trim()),
                    password: String::from(split[1].trim()),
                })
            }
            Err(_) => Err("Invalid basic auth format: not base64"),
        }
    }

    /// compares our credentials against the users table.
    ///
    /// _this is a convenience method to be used only in handlers_
    pub fn validate(self) -> ValidateResult {
        let con = open_connection();
        let user = user_repository::get_user_by_username(self.username.as_str(), &con);
        con.close().unwrap();
        match user {
            Ok(Some(user)) if user.password == self.hashed_password() => ValidateResult::Ok(user),
            Ok(_) => ValidateResult::Invalid,
            // already logged at the repository level
            Err(_) => ValidateResult::Invalid,
        }
    }

    /// the sha256 hex of the password, the same shape the users table stores
    pub fn hashed_password(&self) -> String {
        hash_password(self.password.as_str())
    }
}

/// hashes the passed password the way the users table stores it
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.write(password.trim().as_bytes()).unwrap();
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl<'a> FromRequest<'a> for Auth {
    type Error = AuthError;

    async fn from_request(request: &'a Request<'_>) -> Outcome<Self, Self::Error> {
        // just check if it's basic auth
        fn check_basic_auth(value: &str) -> bool {
            String::from(value).starts_with("Basic")
        }
        match request.headers().get_one("Authorization") {
            None => Outcome::Error((Status::Unauthorized, AuthError::Missing)),
            Some(value) if check_basic_auth(value) => match Auth::from(value) {
                Ok(auth) => Outcome::Success(auth),
                Err(_) => Outcome::Error((Status::Unauthorized, AuthError::Invalid)),
            },
            Some(_) => Outcome::Error((Status::BadRequest, AuthError::Invalid)),
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    Missing,
    Invalid,
}
