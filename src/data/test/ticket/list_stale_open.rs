use super::*;

/// Tests listing open tickets inactive since before a cutoff.
///
/// Expected: Ok with only the stale open ticket
#[tokio::test]
async fn lists_tickets_inactive_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let stale = factory::ticket::TicketFactory::new(db, "100", "1")
        .last_activity(now - Duration::hours(30))
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, "100", "2")
        .last_activity(now - Duration::hours(1))
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, "100", "3")
        .last_activity(now - Duration::hours(30))
        .status("closed")
        .build()
        .await?;

    let repo = TicketRepository::new(db);
    let tickets = repo
        .list_stale_open(100, now - Duration::hours(24))
        .await?;

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].id, stale.id);

    Ok(())
}
