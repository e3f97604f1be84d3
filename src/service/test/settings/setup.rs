use super::*;

fn param(guild_id: u64) -> SetupParam {
    SetupParam {
        guild_id,
        support_role_id: 20,
        admin_role_id: 30,
        log_channel_id: 40,
    }
}

/// Tests running setup as an administrator.
///
/// Verifies that settings are created with default categories, the panel is posted
/// to the command channel, and a setup log entry links to it.
///
/// Expected: Ok with created = true
#[tokio::test]
async fn creates_settings_and_posts_panel() {
    let harness = Harness::new().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());

    let outcome = service
        .setup(param(10), &administrator(1), 50)
        .await
        .unwrap();

    assert!(outcome.created);
    assert_eq!(outcome.settings.categories, TicketCategory::defaults());

    let panel = harness.platform.sent_to(50);
    assert_eq!(panel.len(), 1);
    assert_eq!(panel[0].component_rows, 1);

    let log = harness.platform.sent_to(40);
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].embeds[0]["title"], "Ticket System Setup");
    assert!(log[0].embeds[0]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["name"] == "Panel Message"));
}

/// Tests running setup a second time.
///
/// Verifies that roles are updated while previously added categories survive.
///
/// Expected: Ok with created = false
#[tokio::test]
async fn rerun_keeps_categories() {
    let harness = Harness::new().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());
    let admin = administrator(1);

    service.setup(param(10), &admin, 50).await.unwrap();
    service
        .add_category(10, &admin, "Appeals", "Ban appeals", "⚖️")
        .await
        .unwrap();

    let outcome = service
        .setup(
            SetupParam {
                support_role_id: 21,
                ..param(10)
            },
            &admin,
            50,
        )
        .await
        .unwrap();

    assert!(!outcome.created);
    assert_eq!(outcome.settings.support_role_id, 21);
    assert_eq!(outcome.settings.categories.len(), 5);
}

/// Tests running setup without the Administrator permission.
///
/// Verifies that nothing is stored even for members holding the admin role.
///
/// Expected: Err(PermissionDenied)
#[tokio::test]
async fn requires_administrator() {
    let harness = Harness::new().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());

    let result = service.setup(param(10), &member(1, vec![30]), 50).await;

    assert!(matches!(result, Err(AppError::PermissionDenied(_))));
    assert!(matches!(service.get(10).await, Err(AppError::NotFound(_))));
    assert!(harness.platform.sent().is_empty());
}

/// Tests setup when the panel cannot be posted.
///
/// Verifies that settings are still stored and the log omits the panel link.
///
/// Expected: Ok
#[tokio::test]
async fn panel_failure_does_not_fail_setup() {
    let harness = Harness::new().await;
    harness.platform.fail_channel(50);
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());

    let outcome = service.setup(param(10), &administrator(1), 50).await;

    assert!(outcome.is_ok());
    let log = harness.platform.sent_to(40);
    assert_eq!(log.len(), 1);
    assert!(!log[0].embeds[0]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["name"] == "Panel Message"));
}
