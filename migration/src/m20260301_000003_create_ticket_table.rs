use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(string(Ticket::TicketId))
                    .col(string(Ticket::GuildId))
                    .col(string_uniq(Ticket::ChannelId))
                    .col(string(Ticket::UserId))
                    .col(string(Ticket::Category))
                    .col(string(Ticket::Priority).default("medium"))
                    .col(string(Ticket::Status).default("open"))
                    .col(string(Ticket::Subject))
                    .col(text(Ticket::Description))
                    .col(string_null(Ticket::AssignedTo))
                    .col(
                        timestamp(Ticket::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Ticket::ClosedAt))
                    .col(string_null(Ticket::ClosedBy))
                    .col(timestamp(Ticket::LastActivity))
                    .col(json(Ticket::Tags))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_guild_ticket_id")
                    .table(Ticket::Table)
                    .col(Ticket::GuildId)
                    .col(Ticket::TicketId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_guild_user_status")
                    .table(Ticket::Table)
                    .col(Ticket::GuildId)
                    .col(Ticket::UserId)
                    .col(Ticket::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    TicketId,
    GuildId,
    ChannelId,
    UserId,
    Category,
    Priority,
    Status,
    Subject,
    Description,
    AssignedTo,
    CreatedAt,
    ClosedAt,
    ClosedBy,
    LastActivity,
    Tags,
}
