use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000001_foodgram_user::FoodgramUser;

static IDX_SUBSCRIPTION_AUTHOR_ID: &str = "idx-subscription-author_id";
static FK_SUBSCRIPTION_USER_ID: &str = "fk-subscription-user_id";
static FK_SUBSCRIPTION_AUTHOR_ID: &str = "fk-subscription-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(integer(Subscription::UserId))
                    .col(integer(Subscription::AuthorId))
                    .col(timestamp(Subscription::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(Subscription::UserId)
                            .col(Subscription::AuthorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBSCRIPTION_USER_ID)
                            .from(Subscription::Table, Subscription::UserId)
                            .to(FoodgramUser::Table, FoodgramUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBSCRIPTION_AUTHOR_ID)
                            .from(Subscription::Table, Subscription::AuthorId)
                            .to(FoodgramUser::Table, FoodgramUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBSCRIPTION_AUTHOR_ID)
                    .table(Subscription::Table)
                    .col(Subscription::AuthorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUBSCRIPTION_AUTHOR_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Subscription {
    Table,
    UserId,
    AuthorId,
    CreatedAt,
}
