use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CourseListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub subject_type: String,
    pub test_providers: Option<String>,
    #[serde(default)]
    pub tutor_count: i32,
    pub summary: Option<String>,
}

// Body for PUT /courses/{id}; the insert path of the upsert needs name and
// subject_type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub subject_type: Option<String>,
    pub test_providers: Option<String>,
    pub tutor_count: Option<i32>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CourseListQuery {
    pub page: i64,
    pub size: i64,
    pub search: Option<String>,
}

impl From<CourseListParams> for CourseListQuery {
    fn from(params: CourseListParams) -> Self {
        Self {
            page: params.pagination.page,
            size: params.pagination.size,
            search: params.search,
        }
    }
}
