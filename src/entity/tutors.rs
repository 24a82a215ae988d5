//! Tutor account entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tutors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub age: i32,
    pub summary: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tutor_registers::Entity")]
    TutorRegisters,
}

impl Related<super::tutor_registers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TutorRegisters.def()
    }
}

impl Related<super::course_registers::Entity> for Entity {
    fn to() -> RelationDef {
        super::tutor_registers::Relation::CourseRegister.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tutor_registers::Relation::Tutor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_tutor(self) -> crate::models::tutors::entities::Tutor {
        use crate::models::tutors::entities::Tutor;
        use chrono::{DateTime, Utc};

        Tutor {
            id: self.id,
            name: self.name,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            age: self.age,
            summary: self.summary,
            profile_picture: self.profile_picture,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
