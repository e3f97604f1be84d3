use super::*;

/// Tests removing a category by index.
///
/// Verifies that the category at the index is removed and the remaining
/// categories keep their relative order.
///
/// Expected: Ok(Some) with the removed category
#[tokio::test]
async fn removes_category_at_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (settings, _) = factory::create_settings_with_categories(db).await?;
    let guild_id: u64 = settings.guild_id.parse().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let removed = repo.remove_category_at(guild_id, 1).await?;

    assert_eq!(removed.map(|c| c.name), Some("Technical Support".to_string()));

    let found = repo.find_by_guild_id(guild_id).await?.unwrap();
    let names: Vec<&str> = found.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["General Support", "Billing", "Report"]);

    Ok(())
}

/// Tests removing with an index past the end of the list.
///
/// Expected: Ok(None) and no categories removed
#[tokio::test]
async fn returns_none_for_out_of_range_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (settings, _) = factory::create_settings_with_categories(db).await?;
    let guild_id: u64 = settings.guild_id.parse().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let removed = repo.remove_category_at(guild_id, 4).await?;

    assert!(removed.is_none());
    let count = entity::prelude::TicketCategory::find().all(db).await?.len();
    assert_eq!(count, 4);

    Ok(())
}
