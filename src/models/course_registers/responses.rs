use serde::Serialize;

use super::entities::{CourseRegister, CourseRegisterDetail};
use crate::models::common::PaginationInfo;
use crate::models::students::entities::Student;
use crate::models::tutors::entities::Tutor;

#[derive(Debug, Serialize)]
pub struct CourseRegisterResponse {
    pub course_register: CourseRegister,
}

#[derive(Debug, Serialize)]
pub struct CourseRegisterListResponse {
    pub items: Vec<CourseRegister>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize)]
pub struct CourseRegisterDetailListResponse {
    pub items: Vec<CourseRegisterDetail>,
}

// Returned when a student is withdrawn from a register
#[derive(Debug, Serialize)]
pub struct StudentWithdrawalResponse {
    pub student: Student,
    pub course_register: CourseRegister,
}

// Returned when a tutor is withdrawn from a register
#[derive(Debug, Serialize)]
pub struct TutorWithdrawalResponse {
    pub tutor: Tutor,
    pub course_register: CourseRegister,
}
