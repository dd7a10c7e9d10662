pub mod handler;
pub mod models;
pub mod service;

#[cfg(test)]
mod tests;

// make it easier to just use models
pub use models::*;
pub use service::queue_recalculation;
