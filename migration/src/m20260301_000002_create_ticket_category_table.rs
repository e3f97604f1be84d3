use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_guild_settings_table::GuildSettings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketCategory::Id))
                    .col(string(TicketCategory::GuildId))
                    .col(integer(TicketCategory::Position))
                    .col(string(TicketCategory::Name))
                    .col(string(TicketCategory::Description))
                    .col(string(TicketCategory::Emoji))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_category_guild_id")
                            .from(TicketCategory::Table, TicketCategory::GuildId)
                            .to(GuildSettings::Table, GuildSettings::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_category_guild_position")
                    .table(TicketCategory::Table)
                    .col(TicketCategory::GuildId)
                    .col(TicketCategory::Position)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketCategory {
    Table,
    Id,
    GuildId,
    Position,
    Name,
    Description,
    Emoji,
}
