//! Student account entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
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
    #[sea_orm(has_many = "super::student_registers::Entity")]
    StudentRegisters,
}

impl Related<super::student_registers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentRegisters.def()
    }
}

impl Related<super::course_registers::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_registers::Relation::CourseRegister.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_registers::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
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
