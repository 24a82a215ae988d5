use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // students
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(
                        ColumnDef::new(Students::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Students::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Students::Age).integer().not_null())
                    .col(ColumnDef::new(Students::Summary).text().null())
                    .col(ColumnDef::new(Students::ProfilePicture).string().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // tutors
        manager
            .create_table(
                Table::create()
                    .table(Tutors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tutors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tutors::Name).string().not_null())
                    .col(
                        ColumnDef::new(Tutors::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Tutors::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Tutors::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Tutors::Age).integer().not_null())
                    .col(ColumnDef::new(Tutors::Summary).text().null())
                    .col(ColumnDef::new(Tutors::ProfilePicture).string().null())
                    .col(ColumnDef::new(Tutors::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Tutors::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // courses
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::SubjectType).string().not_null())
                    .col(ColumnDef::new(Courses::TestProviders).string().null())
                    .col(
                        ColumnDef::new(Courses::TutorCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Courses::Summary).text().null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // course registers
        manager
            .create_table(
                Table::create()
                    .table(CourseRegisters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseRegisters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseRegisters::Name).string().not_null())
                    .col(
                        ColumnDef::new(CourseRegisters::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseRegisters::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseRegisters::Table, CourseRegisters::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // one register name per course
        manager
            .create_index(
                Index::create()
                    .name("idx_course_registers_course_id_name")
                    .table(CourseRegisters::Table)
                    .col(CourseRegisters::CourseId)
                    .col(CourseRegisters::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // student enrollment join table
        manager
            .create_table(
                Table::create()
                    .table(StudentRegisters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentRegisters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentRegisters::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentRegisters::CourseRegisterId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentRegisters::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentRegisters::Table, StudentRegisters::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentRegisters::Table, StudentRegisters::CourseRegisterId)
                            .to(CourseRegisters::Table, CourseRegisters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_registers_student_register")
                    .table(StudentRegisters::Table)
                    .col(StudentRegisters::StudentId)
                    .col(StudentRegisters::CourseRegisterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // tutor enrollment join table
        manager
            .create_table(
                Table::create()
                    .table(TutorRegisters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TutorRegisters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TutorRegisters::TutorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TutorRegisters::CourseRegisterId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TutorRegisters::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TutorRegisters::Table, TutorRegisters::TutorId)
                            .to(Tutors::Table, Tutors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TutorRegisters::Table, TutorRegisters::CourseRegisterId)
                            .to(CourseRegisters::Table, CourseRegisters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tutor_registers_tutor_register")
                    .table(TutorRegisters::Table)
                    .col(TutorRegisters::TutorId)
                    .col(TutorRegisters::CourseRegisterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TutorRegisters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentRegisters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseRegisters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tutors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    Username,
    Email,
    PasswordHash,
    Age,
    Summary,
    ProfilePicture,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tutors {
    #[sea_orm(iden = "tutors")]
    Table,
    Id,
    Name,
    Username,
    Email,
    PasswordHash,
    Age,
    Summary,
    ProfilePicture,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Name,
    SubjectType,
    TestProviders,
    TutorCount,
    Summary,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseRegisters {
    #[sea_orm(iden = "course_registers")]
    Table,
    Id,
    Name,
    CourseId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum StudentRegisters {
    #[sea_orm(iden = "student_registers")]
    Table,
    Id,
    StudentId,
    CourseRegisterId,
    EnrolledAt,
}

#[derive(DeriveIden)]
enum TutorRegisters {
    #[sea_orm(iden = "tutor_registers")]
    Table,
    Id,
    TutorId,
    CourseRegisterId,
    EnrolledAt,
}
