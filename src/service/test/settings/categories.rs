use super::*;

/// Tests adding a category with padded input.
///
/// Verifies that fields are trimmed and the category is appended last.
///
/// Expected: Ok with trimmed category
#[tokio::test]
async fn adds_trimmed_category() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());

    let category = service
        .add_category(
            settings.guild_id,
            &administrator(1),
            "  Appeals ",
            " Ban appeals ",
            " ⚖ ",
        )
        .await
        .unwrap();

    assert_eq!(category, TicketCategory::new("Appeals", "Ban appeals", "⚖"));
    let stored = service.get(settings.guild_id).await.unwrap();
    assert_eq!(stored.categories.last(), Some(&category));
}

/// Tests adding a category whose name differs only by case.
///
/// Expected: Err(Validation) naming the duplicate
#[tokio::test]
async fn rejects_duplicate_name() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());

    let result = service
        .add_category(
            settings.guild_id,
            &administrator(1),
            "billing",
            "Other",
            "💵",
        )
        .await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert_eq!(msg, "A category with the name \"billing\" already exists.")
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    let stored = service.get(settings.guild_id).await.unwrap();
    assert_eq!(stored.categories.len(), settings.categories.len());
}

/// Tests adding a category with an oversized emoji.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_long_emoji() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());

    let result = service
        .add_category(
            settings.guild_id,
            &administrator(1),
            "Appeals",
            "Ban appeals",
            "abcde",
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests category management by a support-only member.
///
/// Verifies that category operations require the admin role.
///
/// Expected: Err(PermissionDenied)
#[tokio::test]
async fn support_role_cannot_manage_categories() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());
    let support = member(2, vec![settings.support_role_id]);

    let result = service
        .add_category(settings.guild_id, &support, "Appeals", "Ban appeals", "⚖")
        .await;

    assert!(matches!(result, Err(AppError::PermissionDenied(_))));
}

/// Tests removing a category by index.
///
/// Expected: Ok with the removed category and the rest kept in order
#[tokio::test]
async fn removes_category_at_index() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());
    let admin = member(3, vec![settings.admin_role_id]);

    let removed = service
        .remove_category(settings.guild_id, &admin, 1)
        .await
        .unwrap();

    assert_eq!(removed.name, "Technical Support");
    let names: Vec<_> = service
        .get(settings.guild_id)
        .await
        .unwrap()
        .categories
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["General Support", "Billing", "Report"]);
}

/// Tests removing a category with an out-of-range index.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_invalid_index() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());

    let result = service
        .remove_category(settings.guild_id, &administrator(1), 4)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests listing categories for removal when none are configured.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn no_categories_to_remove() {
    let harness = Harness::new().await;
    let service = SettingsService::new(harness.db(), harness.platform.as_ref());
    let admin = administrator(1);
    service
        .setup(
            SetupParam {
                guild_id: 10,
                support_role_id: 20,
                admin_role_id: 30,
                log_channel_id: 40,
            },
            &admin,
            50,
        )
        .await
        .unwrap();
    for _ in 0..4 {
        service.remove_category(10, &admin, 0).await.unwrap();
    }

    let result = service.categories_for_removal(10, &admin).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}
