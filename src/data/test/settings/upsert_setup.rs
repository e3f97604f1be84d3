use super::*;

/// Tests running setup for a new guild.
///
/// Verifies that settings are created with default messages, a zero
/// counter, and the four default categories.
///
/// Expected: Ok with created flag set
#[tokio::test]
async fn creates_settings_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let (settings, created) = repo
        .upsert_setup(&SetupParam {
            guild_id: 100,
            support_role_id: 200,
            admin_role_id: 300,
            log_channel_id: 400,
        })
        .await?;

    assert!(created);
    assert_eq!(settings.guild_id, 100);
    assert_eq!(settings.support_role_id, 200);
    assert_eq!(settings.admin_role_id, 300);
    assert_eq!(settings.log_channel_id, 400);
    assert_eq!(settings.ticket_counter, 0);
    assert_eq!(settings.welcome_message, DEFAULT_WELCOME_MESSAGE);
    assert_eq!(settings.auto_close_hours, 0);
    assert_eq!(settings.categories, TicketCategory::defaults());

    Ok(())
}

/// Tests re-running setup for a configured guild.
///
/// Verifies that roles and log channel are replaced while categories,
/// messages, and the ticket counter are preserved.
///
/// Expected: Ok with created flag unset and existing state kept
#[tokio::test]
async fn updates_roles_and_preserves_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("100")
        .ticket_counter(41)
        .welcome_message("Custom welcome")
        .build()
        .await?;
    factory::ticket_category::TicketCategoryFactory::new(db, &settings.guild_id)
        .name("Only")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let (updated, created) = repo
        .upsert_setup(&SetupParam {
            guild_id: 100,
            support_role_id: 201,
            admin_role_id: 301,
            log_channel_id: 401,
        })
        .await?;

    assert!(!created);
    assert_eq!(updated.support_role_id, 201);
    assert_eq!(updated.admin_role_id, 301);
    assert_eq!(updated.log_channel_id, 401);
    assert_eq!(updated.ticket_counter, 41);
    assert_eq!(updated.welcome_message, "Custom welcome");
    assert_eq!(updated.categories.len(), 1);
    assert_eq!(updated.categories[0].name, "Only");

    let count = entity::prelude::GuildSettings::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}
