pub mod error;
pub mod moderation;
pub mod repository;
pub mod request;
pub mod response;
pub mod role;
