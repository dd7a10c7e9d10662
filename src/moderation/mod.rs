pub mod handler;
pub mod models;
pub mod service;


// make it easier to just use models
pub use models::*;
