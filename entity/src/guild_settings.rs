use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub support_role_id: String,
    pub admin_role_id: String,
    pub log_channel_id: String,
    pub ticket_counter: i64,
    #[sea_orm(column_type = "Text")]
    pub welcome_message: String,
    #[sea_orm(column_type = "Text")]
    pub close_message: String,
    pub max_tickets_per_user: i32,
    pub auto_close_hours: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ticket_category::Entity")]
    TicketCategory,
}

impl Related<super::ticket_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
