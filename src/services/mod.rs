pub mod activity_service;
pub mod board_service;
pub mod candidate_service;
pub mod comment_service;
pub mod job_service;
pub mod profile_service;
