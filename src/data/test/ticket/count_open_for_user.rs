use super::*;

/// Tests counting a member's open tickets.
///
/// Verifies that closed tickets, other members, and other guilds are excluded.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_only_open_tickets_of_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_ticket(db, "100", "42").await?;
    factory::create_ticket(db, "100", "42").await?;
    factory::ticket::TicketFactory::new(db, "100", "42")
        .status("closed")
        .build()
        .await?;
    factory::create_ticket(db, "100", "43").await?;
    factory::create_ticket(db, "200", "42").await?;

    let repo = TicketRepository::new(db);
    let count = repo.count_open_for_user(100, 42).await?;

    assert_eq!(count, 2);

    Ok(())
}
