pub mod activity_errors;
pub mod college_errors;
pub mod course_errors;
pub mod folder_errors;
pub mod notification_errors;
pub mod skill_errors;
pub mod user_errors;
