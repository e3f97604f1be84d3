use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub position: i32,
    pub name: String,
    pub description: String,
    pub emoji: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild_settings::Entity",
        from = "Column::GuildId",
        to = "super::guild_settings::Column::GuildId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GuildSettings,
}

impl Related<super::guild_settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildSettings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
