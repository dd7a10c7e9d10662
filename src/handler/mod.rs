pub mod activity_handler;
pub mod api_handler;
pub mod college_handler;
pub mod course_handler;
pub mod folder_handler;
pub mod notification_handler;
pub mod skill_handler;
pub mod storage_handler;
pub mod user_handler;
