use super::SeaOrmStorage;
use crate::entity::tutors::{ActiveModel, Column, Entity as Tutors};
use crate::errors::{Result, TutorHubError};
use crate::models::{
    PaginationInfo,
    tutors::{
        entities::Tutor,
        requests::{CreateTutorRequest, TutorListQuery, UpdateTutorRequest},
        responses::TutorListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// Create a tutor row. `req.password` must already be hashed.
    pub async fn create_tutor_impl(&self, req: CreateTutorRequest) -> Result<Tutor> {
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
            .map_err(|e| Self::map_db_err("Failed to create tutor", e))?;

        Ok(result.into_tutor())
    }

    pub async fn get_tutor_by_id_impl(&self, id: i64) -> Result<Option<Tutor>> {
        let result = Tutors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Tutor lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_tutor()))
    }

    pub async fn get_tutor_by_username_impl(&self, username: &str) -> Result<Option<Tutor>> {
        let result = Tutors::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Tutor lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_tutor()))
    }

    pub async fn list_tutors_with_pagination_impl(
        &self,
        query: TutorListQuery,
    ) -> Result<TutorListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Tutors::find();

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
            .map_err(|e| TutorHubError::database_operation(format!("Tutor count failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TutorHubError::database_operation(format!("Tutor page count failed: {e}"))
        })?;

        let tutors = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Tutor list failed: {e}")))?;

        Ok(TutorListResponse {
            items: tutors.into_iter().map(|m| m.into_tutor()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Update-or-insert on an explicit id; same contract as students.
    pub async fn upsert_tutor_impl(
        &self,
        id: i64,
        update: UpdateTutorRequest,
    ) -> Result<(Tutor, bool)> {
        let now = chrono::Utc::now().timestamp();
        let existing = Tutors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorHubError::database_operation(format!("Tutor lookup failed: {e}")))?;

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
                    .map_err(|e| Self::map_db_err("Failed to update tutor", e))?;

                Ok((updated.into_tutor(), false))
            }
            None => {
                let (Some(name), Some(username), Some(email), Some(password), Some(age)) = (
                    update.name,
                    update.username,
                    update.email,
                    update.password,
                    update.age,
                ) else {
                    return Err(TutorHubError::validation(
                        "Creating a tutor requires name, username, email, password and age",
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
                    .map_err(|e| Self::map_db_err("Failed to create tutor", e))?;

                Ok((inserted.into_tutor(), true))
            }
        }
    }

    pub async fn delete_tutor_impl(&self, id: i64) -> Result<bool> {
        let result = Tutors::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                TutorHubError::database_operation(format!("Failed to delete tutor: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_tutor_profile_picture_impl(&self, id: i64, path: &str) -> Result<bool> {
        let result = Tutors::update_many()
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
                    "Failed to update tutor profile picture: {e}"
                ))
            })?;

        Ok(result.rows_affected > 0)
    }
}
