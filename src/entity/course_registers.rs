//! Course register entity: one scheduled session of a course.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_registers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub course_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::student_registers::Entity")]
    StudentRegisters,
    #[sea_orm(has_many = "super::tutor_registers::Entity")]
    TutorRegisters,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::student_registers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentRegisters.def()
    }
}

impl Related<super::tutor_registers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TutorRegisters.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_registers::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::student_registers::Relation::CourseRegister
                .def()
                .rev(),
        )
    }
}

impl Related<super::tutors::Entity> for Entity {
    fn to() -> RelationDef {
        super::tutor_registers::Relation::Tutor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tutor_registers::Relation::CourseRegister.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course_register(self) -> crate::models::course_registers::entities::CourseRegister {
        use crate::models::course_registers::entities::CourseRegister;
        use chrono::{DateTime, Utc};

        CourseRegister {
            id: self.id,
            name: self.name,
            course_id: self.course_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
