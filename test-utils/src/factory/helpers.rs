//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates guild settings seeded with the four default categories.
///
/// Categories are created in order: General Support, Technical Support,
/// Billing, Report (positions 0 through 3).
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((settings, categories))` - Created settings and ordered categories
/// - `Err(DbErr)` - Database error during creation
pub async fn create_settings_with_categories(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::guild_settings::Model,
        Vec<entity::ticket_category::Model>,
    ),
    DbErr,
> {
    let settings = crate::factory::guild_settings::create_settings(db).await?;

    let defaults = [
        ("General Support", "General questions and assistance", "❓"),
        ("Technical Support", "Technical issues and troubleshooting", "🔧"),
        ("Billing", "Billing inquiries and payment issues", "💰"),
        ("Report", "Report users or issues", "🚨"),
    ];

    let mut categories = Vec::with_capacity(defaults.len());
    for (position, (name, description, emoji)) in defaults.into_iter().enumerate() {
        let category = crate::factory::ticket_category::TicketCategoryFactory::new(
            db,
            &settings.guild_id,
        )
        .position(position as i32)
        .name(name)
        .description(description)
        .emoji(emoji)
        .build()
        .await?;
        categories.push(category);
    }

    Ok((settings, categories))
}
