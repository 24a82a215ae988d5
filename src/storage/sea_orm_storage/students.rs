use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, TutorHubError};
use crate::models::{
    PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// Create a student row. `req.password` must already be hashed.
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            age: Set(req.age),
            summary: Set(req.summary),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_db_err("Failed to create student", e))?;

        Ok(result.into_student())
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Student lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    pub async fn get_student_by_username_impl(&self, username: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Student lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Students::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Username.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Student count failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TutorHubError::database_operation(format!("Student page count failed: {e}"))
        })?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Student list failed: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Update-or-insert on an explicit id. Returns the row plus a created
    /// flag so the handler can answer 200 or 201.
    pub async fn upsert_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<(Student, bool)> {
        let now = chrono::Utc::now().timestamp();
        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Student lookup failed: {e}")))?;

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
                if let Some(username) = update.username {
                    model.username = Set(username);
                }
                if let Some(email) = update.email {
                    model.email = Set(email);
                }
                if let Some(password) = update.password {
                    model.password_hash = Set(password);
                }
                if let Some(age) = update.age {
                    model.age = Set(age);
                }
                if let Some(summary) = update.summary {
                    model.summary = Set(Some(summary));
                }
                if let Some(profile_picture) = update.profile_picture {
                    model.profile_picture = Set(Some(profile_picture));
                }

                let updated = model
                    .update(&self.db)
                    .await
                    .map_err(|e| Self::map_db_err("Failed to update student", e))?;

                Ok((updated.into_student(), false))
            }
            None => {
                // Insert path: the request must carry a complete account.
                let (Some(name), Some(username), Some(email), Some(password), Some(age)) = (
                    update.name,
                    update.username,
                    update.email,
                    update.password,
                    update.age,
                ) else {
                    return Err(TutorHubError::validation(
                        "Creating a student requires name, username, email, password and age",
                    ));
                };

                let model = ActiveModel {
                    id: Set(id),
                    name: Set(name),
                    username: Set(username),
                    email: Set(email),
                    password_hash: Set(password),
                    age: Set(age),
                    summary: Set(update.summary),
                    profile_picture: Set(update.profile_picture),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                let inserted = model
                    .insert(&self.db)
                    .await
                    .map_err(|e| Self::map_db_err("Failed to create student", e))?;

                Ok((inserted.into_student(), true))
            }
        }
    }

    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Failed to delete student: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_student_profile_picture_impl(&self, id: i64, path: &str) -> Result<bool> {
        let result = Students::update_many()
            .col_expr(
                Column::ProfilePicture,
                sea_orm::sea_query::Expr::value(path),
            )
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!(
                    "Failed to update student profile picture: {e}"
                ))
            })?;

        Ok(result.rows_affected > 0)
    }
}
