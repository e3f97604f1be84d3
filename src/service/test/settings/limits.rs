use super::*;

/// Tests setting the ticket cap inside and outside its range.
///
/// Expected: Ok for 1 and 10, Err(Validation) for 0 and 11
#[tokio::test]
async fn ticket_cap_must_be_in_range() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());
    let admin = administrator(1);

    assert_eq!(
        service.set_max_tickets(settings.guild_id, &admin, 1).await.unwrap(),
        1
    );
    assert_eq!(
        service.set_max_tickets(settings.guild_id, &admin, 10).await.unwrap(),
        10
    );
    assert!(matches!(
        service.set_max_tickets(settings.guild_id, &admin, 0).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.set_max_tickets(settings.guild_id, &admin, 11).await,
        Err(AppError::Validation(_))
    ));

    let stored = service.get(settings.guild_id).await.unwrap();
    assert_eq!(stored.max_tickets_per_user, 10);
}

/// Tests setting the auto-close window.
///
/// Expected: 0 and 720 accepted, 721 and negative values rejected
#[tokio::test]
async fn auto_close_must_be_in_range() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());
    let admin = administrator(1);

    assert_eq!(
        service.set_auto_close(settings.guild_id, &admin, 720).await.unwrap(),
        720
    );
    assert_eq!(
        service.set_auto_close(settings.guild_id, &admin, 0).await.unwrap(),
        0
    );
    assert!(matches!(
        service.set_auto_close(settings.guild_id, &admin, 721).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.set_auto_close(settings.guild_id, &admin, -1).await,
        Err(AppError::Validation(_))
    ));
}

/// Tests updating the welcome message with surrounding whitespace.
///
/// Expected: Ok with the trimmed message stored
#[tokio::test]
async fn stores_trimmed_welcome_message() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());

    let message = service
        .set_welcome_message(settings.guild_id, &administrator(1), "  Hello there!  ")
        .await
        .unwrap();

    assert_eq!(message, "Hello there!");
    assert_eq!(
        service.get(settings.guild_id).await.unwrap().welcome_message,
        "Hello there!"
    );
}

/// Tests updating the close message with blank input.
///
/// Expected: Err(Validation) and the message unchanged
#[tokio::test]
async fn rejects_blank_close_message() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());

    let result = service
        .set_close_message(settings.guild_id, &administrator(1), "   ")
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(
        service.get(settings.guild_id).await.unwrap().close_message,
        settings.close_message
    );
}

/// Tests reading settings of a guild that never ran setup.
///
/// Expected: Err(NotFound) with the setup hint
#[tokio::test]
async fn unconfigured_guild_is_not_found() {
    let harness = Harness::new().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());

    match service.get_for_admin(999, &administrator(1)).await {
        Err(AppError::NotFound(msg)) => assert!(msg.contains("/setup")),
        other => panic!("expected not found, got {:?}", other),
    }
}
