use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{Result, TutorHubError};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            subject_type: Set(req.subject_type),
            test_providers: Set(req.test_providers),
            tutor_count: Set(req.tutor_count),
            summary: Set(req.summary),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_db_err("Failed to create course", e))?;

        Ok(result.into_course())
    }

    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Course lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Courses::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::SubjectType.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Course count failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TutorHubError::database_operation(format!("Course page count failed: {e}"))
        })?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Course list failed: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Update-or-insert on an explicit id; the insert path needs at least a
    /// name and a subject type.
    pub async fn upsert_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<(Course, bool)> {
        let now = chrono::Utc::now().timestamp();
        let existing = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Course lookup failed: {e}")))?;

        match existing {
            Some(_) => {
                let mut model = ActiveModel {
                    id: Set(id),
                    updated_at: Set(now),
                    ..Default::default()
                };

                if let Some(name) = update.name {
                    model.name = Set(name);
                }
                if let Some(subject_type) = update.subject_type {
                    model.subject_type = Set(subject_type);
                }
                if let Some(test_providers) = update.test_providers {
                    model.test_providers = Set(Some(test_providers));
                }
                if let Some(tutor_count) = update.tutor_count {
                    model.tutor_count = Set(tutor_count);
                }
                if let Some(summary) = update.summary {
                    model.summary = Set(Some(summary));
                }

                let updated = model
                    .update(&self.db)
                    .await
                    .map_err(|e| Self::map_db_err("Failed to update course", e))?;

                Ok((updated.into_course(), false))
            }
            None => {
                let (Some(name), Some(subject_type)) = (update.name, update.subject_type) else {
                    return Err(TutorHubError::validation(
                        "Creating a course requires name and subject_type",
                    ));
                };

                let model = ActiveModel {
                    id: Set(id),
                    name: Set(name),
                    subject_type: Set(subject_type),
                    test_providers: Set(update.test_providers),
                    tutor_count: Set(update.tutor_count.unwrap_or(0)),
                    summary: Set(update.summary),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                let inserted = model
                    .insert(&self.db)
                    .await
                    .map_err(|e| Self::map_db_err("Failed to create course", e))?;

                Ok((inserted.into_course(), true))
            }
        }
    }

    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Failed to delete course: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
