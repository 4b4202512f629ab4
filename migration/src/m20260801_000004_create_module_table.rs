use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000002_create_instructor_table::Instructor,
    m20260801_000003_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Module::Table)
                    .if_not_exists()
                    .col(pk_auto(Module::Id))
                    .col(integer(Module::CourseId))
                    .col(integer(Module::InstructorId))
                    .col(string(Module::Code))
                    .col(string(Module::Title))
                    .col(text(Module::Description))
                    .col(date(Module::StartDate))
                    .col(date(Module::EndDate))
                    .col(integer(Module::Capacity).check(Expr::col(Module::Capacity).gt(0)))
                    .col(
                        integer(Module::Enrolled)
                            .default(0)
                            .check(Expr::col(Module::Enrolled).lte(Expr::col(Module::Capacity))),
                    )
                    .col(string(Module::Schedule))
                    .col(string(Module::Location))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_module_course_id")
                            .from(Module::Table, Module::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_module_instructor_id")
                            .from(Module::Table, Module::InstructorId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Module::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Module {
    Table,
    Id,
    CourseId,
    InstructorId,
    Code,
    Title,
    Description,
    StartDate,
    EndDate,
    Capacity,
    Enrolled,
    Schedule,
    Location,
}
