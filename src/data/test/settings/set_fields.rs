use super::*;

/// Tests updating the configurable settings fields.
///
/// Verifies that each setter changes only its own column.
///
/// Expected: Ok(true) for every setter and values persisted
#[tokio::test]
async fn updates_each_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("100")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);

    assert!(repo.set_welcome_message(100, "Hello there").await?);
    assert!(repo.set_close_message(100, "Goodbye").await?);
    assert!(repo.set_max_tickets_per_user(100, 5).await?);
    assert!(repo.set_auto_close_hours(100, 48).await?);

    let settings = repo.find_by_guild_id(100).await?.unwrap();
    assert_eq!(settings.welcome_message, "Hello there");
    assert_eq!(settings.close_message, "Goodbye");
    assert_eq!(settings.max_tickets_per_user, 5);
    assert_eq!(settings.auto_close_hours, 48);

    Ok(())
}

/// Tests updating settings of an unconfigured guild.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);

    assert!(!repo.set_welcome_message(100, "Hello").await?);
    assert!(!repo.set_auto_close_hours(100, 1).await?);

    Ok(())
}
