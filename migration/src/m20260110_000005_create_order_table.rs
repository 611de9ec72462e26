use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000003_create_dish_table::Dish, m20260110_000004_create_visit_table::Visit,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(integer(Order::VisitId))
                    .col(integer(Order::DishId))
                    .col(double_null(Order::Rating))
                    .col(text_null(Order::ReviewText))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_visit_id")
                            .from(Order::Table, Order::VisitId)
                            .to(Visit::Table, Visit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_dish_id")
                            .from(Order::Table, Order::DishId)
                            .to(Dish::Table, Dish::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    VisitId,
    DishId,
    Rating,
    ReviewText,
}
