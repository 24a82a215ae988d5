use serde::Serialize;

use super::entities::Tutor;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct TutorResponse {
    pub tutor: Tutor,
}

#[derive(Debug, Serialize)]
pub struct TutorListResponse {
    pub items: Vec<Tutor>,
    pub pagination: PaginationInfo,
}
