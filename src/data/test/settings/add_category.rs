use super::*;

/// Tests appending a category.
///
/// Verifies that the new category is placed after the existing ones.
///
/// Expected: Ok with category last in order
#[tokio::test]
async fn appends_after_existing_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (settings, _) = factory::create_settings_with_categories(db).await?;
    let guild_id: u64 = settings.guild_id.parse().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.add_category(
        guild_id,
        TicketCategory::new("Appeals", "Ban appeals", "⚖️"),
    )
    .await?;

    let found = repo.find_by_guild_id(guild_id).await?.unwrap();
    assert_eq!(found.categories.len(), 5);
    assert_eq!(
        found.categories[4],
        TicketCategory::new("Appeals", "Ban appeals", "⚖️")
    );

    Ok(())
}

/// Tests adding the first category to a guild without any.
///
/// Expected: Ok with a single category
#[tokio::test]
async fn adds_first_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    let guild_id: u64 = settings.guild_id.parse().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.add_category(guild_id, TicketCategory::new("Only", "The only one", "📁"))
        .await?;

    let found = repo.find_by_guild_id(guild_id).await?.unwrap();
    assert_eq!(found.categories.len(), 1);
    assert_eq!(found.categories[0].name, "Only");

    Ok(())
}
