use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User, m20260801_000004_create_module_table::Module,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(integer(Enrollment::UserId))
                    .col(integer(Enrollment::ModuleId))
                    .col(
                        timestamp(Enrollment::EnrolledAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_user_id")
                            .from(Enrollment::Table, Enrollment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_module_id")
                            .from(Enrollment::Table, Enrollment::ModuleId)
                            .to(Module::Table, Module::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Pair uniqueness lives in the schema, not in application pre-checks.
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_user_module")
                    .table(Enrollment::Table)
                    .col(Enrollment::UserId)
                    .col(Enrollment::ModuleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    Table,
    Id,
    UserId,
    ModuleId,
    EnrolledAt,
}
