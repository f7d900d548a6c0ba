use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create admins table - the derived mirror of users with isAdmin set.
        // The id is the upstream user id, assigned externally.
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admins::Email).string().null())
                    .col(ColumnDef::new(Admins::SchoolId).string().null())
                    .col(ColumnDef::new(Admins::SchoolName).string().null())
                    .col(ColumnDef::new(Admins::FullName).string().null())
                    .col(ColumnDef::new(Admins::IsMentor).boolean().null())
                    .col(
                        ColumnDef::new(Admins::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Admins::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
    Email,
    SchoolId,
    SchoolName,
    FullName,
    IsMentor,
    CreatedAt,
    UpdatedAt,
}
