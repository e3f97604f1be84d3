use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ticket_id: String,
    pub guild_id: String,
    #[sea_orm(unique)]
    pub channel_id: String,
    pub user_id: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub assigned_to: Option<String>,
    pub created_at: DateTimeUtc,
    pub closed_at: Option<DateTimeUtc>,
    pub closed_by: Option<String>,
    pub last_activity: DateTimeUtc,
    pub tags: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
