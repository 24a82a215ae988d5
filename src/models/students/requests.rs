use crate::models::common::PaginationQuery;
use serde::Deserialize;

// List query parameters (from the HTTP request)
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: i32,
    pub summary: Option<String>,
}

// Body for PUT /students/{id}. Every field is optional for updates; the
// insert path of the upsert additionally needs name, username, email,
// password and age.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub summary: Option<String>,
    pub profile_picture: Option<String>,
}

// List query passed down to the storage layer
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: i64,
    pub size: i64,
    pub search: Option<String>,
}

impl From<StudentListParams> for StudentListQuery {
    fn from(params: StudentListParams) -> Self {
        Self {
            page: params.pagination.page,
            size: params.pagination.size,
            search: params.search,
        }
    }
}
