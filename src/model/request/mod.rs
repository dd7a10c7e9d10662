pub mod activity_requests;
pub mod college_requests;
pub mod course_requests;
pub mod folder_requests;
pub mod skill_requests;
pub mod user_requests;
