use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TutorListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTutorRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: i32,
    pub summary: Option<String>,
}

// Body for PUT /tutors/{id}; same upsert contract as students.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTutorRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub summary: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TutorListQuery {
    pub page: i64,
    pub size: i64,
    pub search: Option<String>,
}

impl From<TutorListParams> for TutorListQuery {
    fn from(params: TutorListParams) -> Self {
        Self {
            page: params.pagination.page,
            size: params.pagination.size,
            search: params.search,
        }
    }
}
