use super::SeaOrmStorage;
use crate::entity::course_registers::{ActiveModel, Column, Entity as CourseRegisters};
use crate::entity::student_registers::{
    Column as StudentRegisterColumn, Entity as StudentRegisters,
};
use crate::errors::{Result, TutorHubError};
use crate::models::{
    PaginationInfo,
    course_registers::{entities::CourseRegister, responses::CourseRegisterListResponse},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_course_register_impl(
        &self,
        name: &str,
        course_id: i64,
    ) -> Result<CourseRegister> {
        let model = ActiveModel {
            name: Set(name.to_string()),
            course_id: Set(course_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_db_err("Failed to create course register", e))?;

        Ok(result.into_course_register())
    }

    pub async fn get_course_register_by_id_impl(&self, id: i64) -> Result<Option<CourseRegister>> {
        let result = CourseRegisters::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Course register lookup failed: {e}"))
            })?;

        Ok(result.map(|m| m.into_course_register()))
    }

    pub async fn get_course_register_by_course_and_name_impl(
        &self,
        course_id: i64,
        name: &str,
    ) -> Result<Option<CourseRegister>> {
        let result = CourseRegisters::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Course register lookup failed: {e}"))
            })?;

        Ok(result.map(|m| m.into_course_register()))
    }

    pub async fn list_course_registers_with_pagination_impl(
        &self,
        page: i64,
        size: i64,
    ) -> Result<CourseRegisterListResponse> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let paginator = CourseRegisters::find()
            .order_by_asc(Column::Id)
            .paginate(&self.db, size);

        let total = paginator.num_items().await.map_err(|e| {
            TutorHubError::database_operation(format!("Course register count failed: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TutorHubError::database_operation(format!("Course register page count failed: {e}"))
        })?;

        let registers = paginator.fetch_page(page - 1).await.map_err(|e| {
            TutorHubError::database_operation(format!("Course register list failed: {e}"))
        })?;

        Ok(CourseRegisterListResponse {
            items: registers
                .into_iter()
                .map(|m| m.into_course_register())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_registers_in_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<CourseRegister>> {
        let registers = CourseRegisters::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Course register list failed: {e}"))
            })?;

        Ok(registers
            .into_iter()
            .map(|m| m.into_course_register())
            .collect())
    }

    pub async fn delete_course_register_impl(&self, id: i64) -> Result<bool> {
        let result = CourseRegisters::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Failed to delete course register: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_students_in_register_impl(&self, register_id: i64) -> Result<u64> {
        let count = StudentRegisters::find()
            .filter(StudentRegisterColumn::CourseRegisterId.eq(register_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Enrollment count failed: {e}"))
            })?;

        Ok(count)
    }
}
