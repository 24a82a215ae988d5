use super::SeaOrmStorage;
use crate::entity::prelude::{
    CourseRegisterModel, CourseRegisters, Courses, StudentRegisterActiveModel, StudentRegisters,
    Students, TutorRegisterActiveModel, TutorRegisters, Tutors,
};
use crate::entity::{student_registers, tutor_registers};
use crate::errors::{Result, TutorHubError};
use crate::models::course_registers::entities::CourseRegisterDetail;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set,
};

impl SeaOrmStorage {
    pub async fn enroll_student_impl(&self, student_id: i64, register_id: i64) -> Result<()> {
        let model = StudentRegisterActiveModel {
            student_id: Set(student_id),
            course_register_id: Set(register_id),
            enrolled_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_db_err("Failed to enroll student", e))?;

        Ok(())
    }

    pub async fn withdraw_student_impl(&self, student_id: i64, register_id: i64) -> Result<bool> {
        let result = StudentRegisters::delete_many()
            .filter(student_registers::Column::StudentId.eq(student_id))
            .filter(student_registers::Column::CourseRegisterId.eq(register_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Failed to withdraw student: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn is_student_enrolled_impl(
        &self,
        student_id: i64,
        register_id: i64,
    ) -> Result<bool> {
        let count = StudentRegisters::find()
            .filter(student_registers::Column::StudentId.eq(student_id))
            .filter(student_registers::Column::CourseRegisterId.eq(register_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Enrollment lookup failed: {e}"))
            })?;

        Ok(count > 0)
    }

    pub async fn enroll_tutor_impl(&self, tutor_id: i64, register_id: i64) -> Result<()> {
        let model = TutorRegisterActiveModel {
            tutor_id: Set(tutor_id),
            course_register_id: Set(register_id),
            enrolled_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_db_err("Failed to enroll tutor", e))?;

        Ok(())
    }

    pub async fn withdraw_tutor_impl(&self, tutor_id: i64, register_id: i64) -> Result<bool> {
        let result = TutorRegisters::delete_many()
            .filter(tutor_registers::Column::TutorId.eq(tutor_id))
            .filter(tutor_registers::Column::CourseRegisterId.eq(register_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Failed to withdraw tutor: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn is_tutor_enrolled_impl(&self, tutor_id: i64, register_id: i64) -> Result<bool> {
        let count = TutorRegisters::find()
            .filter(tutor_registers::Column::TutorId.eq(tutor_id))
            .filter(tutor_registers::Column::CourseRegisterId.eq(register_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Enrollment lookup failed: {e}"))
            })?;

        Ok(count > 0)
    }

    /// Resolve one register into its detail view: course plus both member
    /// lists.
    async fn resolve_register_detail(
        &self,
        register: CourseRegisterModel,
    ) -> Result<CourseRegisterDetail> {
        let course = register
            .find_related(Courses)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Course lookup failed: {e}")))?;

        let students = register
            .find_related(Students)
            .all(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Enrolled students lookup failed: {e}"))
            })?;

        let tutors = register
            .find_related(Tutors)
            .all(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Enrolled tutors lookup failed: {e}"))
            })?;

        Ok(CourseRegisterDetail {
            id: register.id,
            name: register.name,
            course: course.map(|c| c.into_course()),
            students: students.into_iter().map(|s| s.into_student()).collect(),
            tutors: tutors.into_iter().map(|t| t.into_tutor()).collect(),
            created_at: chrono::DateTime::<chrono::Utc>::from_timestamp(register.created_at, 0)
                .unwrap_or_default(),
        })
    }

    pub async fn list_register_details_for_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<CourseRegisterDetail>> {
        let Some(student) = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Student lookup failed: {e}")))?
        else {
            return Err(TutorHubError::not_found(format!(
                "Student {student_id} does not exist"
            )));
        };

        let registers = student
            .find_related(CourseRegisters)
            .all(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Register lookup failed: {e}"))
            })?;

        let mut details = Vec::with_capacity(registers.len());
        for register in registers {
            details.push(self.resolve_register_detail(register).await?);
        }
        Ok(details)
    }

    pub async fn list_register_details_for_tutor_impl(
        &self,
        tutor_id: i64,
    ) -> Result<Vec<CourseRegisterDetail>> {
        let Some(tutor) = Tutors::find_by_id(tutor_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Tutor lookup failed: {e}")))?
        else {
            return Err(TutorHubError::not_found(format!(
                "Tutor {tutor_id} does not exist"
            )));
        };

        let registers = tutor
            .find_related(CourseRegisters)
            .all(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Register lookup failed: {e}"))
            })?;

        let mut details = Vec::with_capacity(registers.len());
        for register in registers {
            details.push(self.resolve_register_detail(register).await?);
        }
        Ok(details)
    }
}
