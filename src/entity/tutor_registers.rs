//! Tutor enrollment join table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tutor_registers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tutor_id: i64,
    pub course_register_id: i64,
    pub enrolled_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tutors::Entity",
        from = "Column::TutorId",
        to = "super::tutors::Column::Id"
    )]
    Tutor,
    #[sea_orm(
        belongs_to = "super::course_registers::Entity",
        from = "Column::CourseRegisterId",
        to = "super::course_registers::Column::Id"
    )]
    CourseRegister,
}

impl Related<super::tutors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tutor.def()
    }
}

impl Related<super::course_registers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseRegister.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
