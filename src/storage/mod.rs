use std::sync::Arc;

use crate::models::{
    course_registers::{
        entities::{CourseRegister, CourseRegisterDetail},
        responses::CourseRegisterListResponse,
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    tutors::{
        entities::Tutor,
        requests::{CreateTutorRequest, TutorListQuery, UpdateTutorRequest},
        responses::TutorListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Student accounts
    // Create a student; the password arrives pre-hashed
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_username(&self, username: &str) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // Update-or-insert; the bool is true when the row was created
    async fn upsert_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<(Student, bool)>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    async fn set_student_profile_picture(&self, id: i64, path: &str) -> Result<bool>;

    /// Tutor accounts
    async fn create_tutor(&self, tutor: CreateTutorRequest) -> Result<Tutor>;
    async fn get_tutor_by_id(&self, id: i64) -> Result<Option<Tutor>>;
    async fn get_tutor_by_username(&self, username: &str) -> Result<Option<Tutor>>;
    async fn list_tutors_with_pagination(&self, query: TutorListQuery)
    -> Result<TutorListResponse>;
    async fn upsert_tutor(&self, id: i64, update: UpdateTutorRequest) -> Result<(Tutor, bool)>;
    async fn delete_tutor(&self, id: i64) -> Result<bool>;
    async fn set_tutor_profile_picture(&self, id: i64, path: &str) -> Result<bool>;

    /// Courses
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    async fn upsert_course(&self, id: i64, update: UpdateCourseRequest) -> Result<(Course, bool)>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// Course registers
    async fn create_course_register(&self, name: &str, course_id: i64) -> Result<CourseRegister>;
    async fn get_course_register_by_id(&self, id: i64) -> Result<Option<CourseRegister>>;
    // Duplicate-name probe for POST /courses/{id}/course_registers
    async fn get_course_register_by_course_and_name(
        &self,
        course_id: i64,
        name: &str,
    ) -> Result<Option<CourseRegister>>;
    async fn list_course_registers_with_pagination(
        &self,
        page: i64,
        size: i64,
    ) -> Result<CourseRegisterListResponse>;
    async fn list_registers_in_course(&self, course_id: i64) -> Result<Vec<CourseRegister>>;
    async fn delete_course_register(&self, id: i64) -> Result<bool>;
    async fn count_students_in_register(&self, register_id: i64) -> Result<u64>;

    /// Enrollment (join-table rows)
    async fn enroll_student(&self, student_id: i64, register_id: i64) -> Result<()>;
    async fn withdraw_student(&self, student_id: i64, register_id: i64) -> Result<bool>;
    async fn is_student_enrolled(&self, student_id: i64, register_id: i64) -> Result<bool>;
    async fn enroll_tutor(&self, tutor_id: i64, register_id: i64) -> Result<()>;
    async fn withdraw_tutor(&self, tutor_id: i64, register_id: i64) -> Result<bool>;
    async fn is_tutor_enrolled(&self, tutor_id: i64, register_id: i64) -> Result<bool>;
    // Registers with course and members resolved, for the front end views
    async fn list_register_details_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<CourseRegisterDetail>>;
    async fn list_register_details_for_tutor(
        &self,
        tutor_id: i64,
    ) -> Result<Vec<CourseRegisterDetail>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
