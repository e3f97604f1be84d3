use super::*;

/// Tests the inactivity sweep.
///
/// Verifies that only open tickets idle for longer than the guild's window are closed
/// and that the close is logged as automatic.
///
/// Expected: Ok(1)
#[tokio::test]
async fn closes_only_stale_tickets() {
    let harness = Harness::new().await;
    let settings = factory::guild_settings::GuildSettingsFactory::new(harness.db())
        .auto_close_hours(24)
        .build()
        .await
        .unwrap();
    let now = Utc::now();

    factory::ticket::TicketFactory::new(harness.db(), &settings.guild_id, "42")
        .channel_id("555")
        .last_activity(now - Duration::hours(25))
        .build()
        .await
        .unwrap();
    factory::ticket::TicketFactory::new(harness.db(), &settings.guild_id, "43")
        .channel_id("556")
        .last_activity(now - Duration::hours(2))
        .build()
        .await
        .unwrap();

    let closed = TicketService::new(&harness.state)
        .auto_close_stale(now)
        .await
        .unwrap();

    assert_eq!(closed, 1);
    let repo = TicketRepository::new(harness.db());
    let stale = repo.find_by_channel_id(555).await.unwrap().unwrap();
    let active = repo.find_by_channel_id(556).await.unwrap().unwrap();
    assert_eq!(stale.status, TicketStatus::Closed);
    assert_eq!(stale.closed_by, None);
    assert!(active.is_open());

    let log = harness
        .platform
        .sent_to(settings.log_channel_id.parse().unwrap());
    assert!(log[0].embeds[0]["description"]
        .as_str()
        .unwrap()
        .contains("auto-close after 24 hours"));
}

/// Tests the sweep for guilds with auto-close disabled.
///
/// Expected: Ok(0)
#[tokio::test]
async fn skips_disabled_guilds() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    factory::ticket::TicketFactory::new(
        harness.db(),
        &settings.guild_id.to_string(),
        "42",
    )
    .last_activity(Utc::now() - Duration::days(90))
    .build()
    .await
    .unwrap();

    let closed = TicketService::new(&harness.state)
        .auto_close_stale(Utc::now())
        .await
        .unwrap();

    assert_eq!(closed, 0);
}

/// Tests that message activity postpones auto-close.
///
/// Expected: Ok(0) after activity is recorded
#[tokio::test]
async fn activity_postpones_close() {
    let harness = Harness::new().await;
    let settings = factory::guild_settings::GuildSettingsFactory::new(harness.db())
        .auto_close_hours(24)
        .build()
        .await
        .unwrap();
    let now = Utc::now();
    factory::ticket::TicketFactory::new(harness.db(), &settings.guild_id, "42")
        .channel_id("555")
        .last_activity(now - Duration::hours(30))
        .build()
        .await
        .unwrap();
    let service = TicketService::new(&harness.state);

    assert!(service.record_activity(555, now).await.unwrap());
    let closed = service.auto_close_stale(now).await.unwrap();

    assert_eq!(closed, 0);
}
