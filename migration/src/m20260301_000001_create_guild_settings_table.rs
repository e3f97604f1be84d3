use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildSettings::Id))
                    .col(string_uniq(GuildSettings::GuildId))
                    .col(string(GuildSettings::SupportRoleId))
                    .col(string(GuildSettings::AdminRoleId))
                    .col(string(GuildSettings::LogChannelId))
                    .col(big_integer(GuildSettings::TicketCounter).default(0))
                    .col(text(GuildSettings::WelcomeMessage))
                    .col(text(GuildSettings::CloseMessage))
                    .col(integer(GuildSettings::MaxTicketsPerUser).default(3))
                    .col(integer(GuildSettings::AutoCloseHours).default(0))
                    .col(
                        timestamp(GuildSettings::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSettings {
    Table,
    Id,
    GuildId,
    SupportRoleId,
    AdminRoleId,
    LogChannelId,
    TicketCounter,
    WelcomeMessage,
    CloseMessage,
    MaxTicketsPerUser,
    AutoCloseHours,
    CreatedAt,
}
