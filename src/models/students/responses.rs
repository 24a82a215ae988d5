use serde::Serialize;

use super::entities::Student;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: Student,
}

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub pagination: PaginationInfo,
}
