pub mod auth;
pub mod common;
pub mod course_registers;
pub mod courses;
pub mod students;
pub mod tutors;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::{ApiResponse, ErrorCode};

/// Wall-clock moment the process started, kept in app data for logging.
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
