use super::*;

/// Tests listing guilds with auto-close enabled.
///
/// Verifies that only guilds with a positive auto-close window are returned.
///
/// Expected: Ok with the single enabled guild
#[tokio::test]
async fn returns_only_enabled_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("100")
        .auto_close_hours(24)
        .build()
        .await?;
    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("200")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let enabled = repo.get_auto_close_enabled().await?;

    assert_eq!(enabled.len(), 1);
    assert_eq!(enabled[0].guild_id, 100);
    assert_eq!(enabled[0].auto_close_hours, 24);

    Ok(())
}
