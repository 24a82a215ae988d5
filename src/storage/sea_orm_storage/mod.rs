//! SeaORM storage implementation.
//!
//! One database layer for SQLite, PostgreSQL and MySQL; the backend is
//! inferred from the connection URL scheme.

mod course_registers;
mod courses;
mod enrollments;
mod students;
mod tutors;

use crate::config::AppConfig;
use crate::errors::{Result, TutorHubError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM-backed storage
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // run pending migrations before serving anything
        Migrator::up(&db, None)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite connection with WAL and pragma tuning.
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TutorHubError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                TutorHubError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Generic connection (PostgreSQL, MySQL).
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TutorHubError::database_connection(format!("Database unreachable: {e}")))
    }

    /// Infer the backend from the URL and normalize it.
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TutorHubError::database_config(format!(
                "Cannot infer database backend from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }

    /// Classify a database error, surfacing unique-key violations so the
    /// service layer can answer 409 instead of 500.
    pub(crate) fn map_db_err(context: &str, err: sea_orm::DbErr) -> TutorHubError {
        let msg = err.to_string();
        if msg.contains("UNIQUE constraint failed")
            || msg.contains("duplicate key")
            || msg.contains("Duplicate entry")
        {
            TutorHubError::duplicate_record(format!("{context}: {msg}"))
        } else {
            TutorHubError::database_operation(format!("{context}: {msg}"))
        }
    }
}

// Storage trait wiring
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // students
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_username(&self, username: &str) -> Result<Option<Student>> {
        self.get_student_by_username_impl(username).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn upsert_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<(Student, bool)> {
        self.upsert_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn set_student_profile_picture(&self, id: i64, path: &str) -> Result<bool> {
        self.set_student_profile_picture_impl(id, path).await
    }

    // tutors
    async fn create_tutor(&self, tutor: CreateTutorRequest) -> Result<Tutor> {
        self.create_tutor_impl(tutor).await
    }

    async fn get_tutor_by_id(&self, id: i64) -> Result<Option<Tutor>> {
        self.get_tutor_by_id_impl(id).await
    }

    async fn get_tutor_by_username(&self, username: &str) -> Result<Option<Tutor>> {
        self.get_tutor_by_username_impl(username).await
    }

    async fn list_tutors_with_pagination(
        &self,
        query: TutorListQuery,
    ) -> Result<TutorListResponse> {
        self.list_tutors_with_pagination_impl(query).await
    }

    async fn upsert_tutor(&self, id: i64, update: UpdateTutorRequest) -> Result<(Tutor, bool)> {
        self.upsert_tutor_impl(id, update).await
    }

    async fn delete_tutor(&self, id: i64) -> Result<bool> {
        self.delete_tutor_impl(id).await
    }

    async fn set_tutor_profile_picture(&self, id: i64, path: &str) -> Result<bool> {
        self.set_tutor_profile_picture_impl(id, path).await
    }

    // courses
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn upsert_course(&self, id: i64, update: UpdateCourseRequest) -> Result<(Course, bool)> {
        self.upsert_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // course registers
    async fn create_course_register(&self, name: &str, course_id: i64) -> Result<CourseRegister> {
        self.create_course_register_impl(name, course_id).await
    }

    async fn get_course_register_by_id(&self, id: i64) -> Result<Option<CourseRegister>> {
        self.get_course_register_by_id_impl(id).await
    }

    async fn get_course_register_by_course_and_name(
        &self,
        course_id: i64,
        name: &str,
    ) -> Result<Option<CourseRegister>> {
        self.get_course_register_by_course_and_name_impl(course_id, name)
            .await
    }

    async fn list_course_registers_with_pagination(
        &self,
        page: i64,
        size: i64,
    ) -> Result<CourseRegisterListResponse> {
        self.list_course_registers_with_pagination_impl(page, size)
            .await
    }

    async fn list_registers_in_course(&self, course_id: i64) -> Result<Vec<CourseRegister>> {
        self.list_registers_in_course_impl(course_id).await
    }

    async fn delete_course_register(&self, id: i64) -> Result<bool> {
        self.delete_course_register_impl(id).await
    }

    async fn count_students_in_register(&self, register_id: i64) -> Result<u64> {
        self.count_students_in_register_impl(register_id).await
    }

    // enrollment
    async fn enroll_student(&self, student_id: i64, register_id: i64) -> Result<()> {
        self.enroll_student_impl(student_id, register_id).await
    }

    async fn withdraw_student(&self, student_id: i64, register_id: i64) -> Result<bool> {
        self.withdraw_student_impl(student_id, register_id).await
    }

    async fn is_student_enrolled(&self, student_id: i64, register_id: i64) -> Result<bool> {
        self.is_student_enrolled_impl(student_id, register_id).await
    }

    async fn enroll_tutor(&self, tutor_id: i64, register_id: i64) -> Result<()> {
        self.enroll_tutor_impl(tutor_id, register_id).await
    }

    async fn withdraw_tutor(&self, tutor_id: i64, register_id: i64) -> Result<bool> {
        self.withdraw_tutor_impl(tutor_id, register_id).await
    }

    async fn is_tutor_enrolled(&self, tutor_id: i64, register_id: i64) -> Result<bool> {
        self.is_tutor_enrolled_impl(tutor_id, register_id).await
    }

    async fn list_register_details_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<CourseRegisterDetail>> {
        self.list_register_details_for_student_impl(student_id)
            .await
    }

    async fn list_register_details_for_tutor(
        &self,
        tutor_id: i64,
    ) -> Result<Vec<CourseRegisterDetail>> {
        self.list_register_details_for_tutor_impl(tutor_id).await
    }
}
