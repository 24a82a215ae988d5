use serde::{Deserialize, Serialize};

use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;
use crate::models::tutors::entities::Tutor;

// One scheduled session of a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRegister {
    pub id: i64,
    pub name: String,
    pub course_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Register with its course and enrolled members resolved. This is the shape
/// the front end needs for "my tutors" / "my students" / "my courses".
#[derive(Debug, Clone, Serialize)]
pub struct CourseRegisterDetail {
    pub id: i64,
    pub name: String,
    pub course: Option<Course>,
    pub students: Vec<Student>,
    pub tutors: Vec<Tutor>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
