use super::*;

/// Tests incrementing the ticket counter.
///
/// Verifies that successive calls return strictly increasing values
/// starting after the stored counter.
///
/// Expected: Ok(42) then Ok(43)
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("100")
        .ticket_counter(41)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);

    assert_eq!(repo.next_ticket_counter(100).await?, 42);
    assert_eq!(repo.next_ticket_counter(100).await?, 43);

    let stored = repo.find_by_guild_id(100).await?.unwrap();
    assert_eq!(stored.ticket_counter, 43);

    Ok(())
}

/// Tests that counters of different guilds are independent.
///
/// Expected: each guild starts at 1
#[tokio::test]
async fn counters_are_per_guild() -> Result<(), DbErr> {
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
    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("200")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);

    assert_eq!(repo.next_ticket_counter(100).await?, 1);
    assert_eq!(repo.next_ticket_counter(200).await?, 1);
    assert_eq!(repo.next_ticket_counter(100).await?, 2);

    Ok(())
}

/// Tests incrementing the counter of an unconfigured guild.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let result = repo.next_ticket_counter(100).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
