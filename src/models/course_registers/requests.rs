use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CourseRegisterListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

// Body for POST /course_registers and POST /courses/{id}/course_registers.
// The nested route takes its course from the path, so course_id is optional
// there and required at the top level.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRegisterRequest {
    pub name: String,
    pub course_id: Option<i64>,
}
