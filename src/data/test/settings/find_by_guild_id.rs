use super::*;

/// Tests finding settings for a guild with categories.
///
/// Verifies that the repository returns the settings with categories
/// ordered by their stored position.
///
/// Expected: Ok(Some) with four categories in position order
#[tokio::test]
async fn finds_settings_with_ordered_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (settings, _categories) = factory::create_settings_with_categories(db).await?;

    let repo = GuildSettingsRepository::new(db);
    let result = repo
        .find_by_guild_id(settings.guild_id.parse().unwrap())
        .await?;

    assert!(result.is_some());
    let found = result.unwrap();
    let names: Vec<&str> = found.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["General Support", "Technical Support", "Billing", "Report"]
    );
    assert_eq!(found.ticket_counter, 0);

    Ok(())
}

/// Tests category ordering when rows were inserted out of order.
///
/// Verifies that position, not insertion order, determines category order.
///
/// Expected: Ok(Some) with categories sorted by position
#[tokio::test]
async fn orders_categories_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    factory::ticket_category::TicketCategoryFactory::new(db, &settings.guild_id)
        .position(2)
        .name("Third")
        .build()
        .await?;
    factory::ticket_category::TicketCategoryFactory::new(db, &settings.guild_id)
        .position(0)
        .name("First")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let found = repo
        .find_by_guild_id(settings.guild_id.parse().unwrap())
        .await?
        .unwrap();

    assert_eq!(found.categories[0].name, "First");
    assert_eq!(found.categories[1].name, "Third");

    Ok(())
}

/// Tests finding settings for a guild that never ran setup.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let result = repo.find_by_guild_id(999_999).await?;

    assert!(result.is_none());

    Ok(())
}
