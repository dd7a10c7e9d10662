pub mod activity_service;
pub mod college_service;
pub mod course_service;
pub mod folder_service;
pub mod notification_service;
pub mod skill_service;
pub mod user_service;
