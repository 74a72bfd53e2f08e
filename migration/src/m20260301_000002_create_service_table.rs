use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_unit_table::Unit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_auto(Service::Id))
                    .col(integer(Service::UnitId))
                    .col(string(Service::Name))
                    .col(big_integer(Service::PriceCents))
                    .col(integer(Service::DurationMinutes))
                    .col(boolean(Service::IsActive).default(true))
                    .col(
                        timestamp(Service::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Service::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_unit_id")
                            .from(Service::Table, Service::UnitId)
                            .to(Unit::Table, Unit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_unit_id")
                    .table(Service::Table)
                    .col(Service::UnitId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    Table,
    Id,
    UnitId,
    Name,
    PriceCents,
    DurationMinutes,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
