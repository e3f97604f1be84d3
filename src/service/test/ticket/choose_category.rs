use super::*;

/// Tests completing a ticket after choosing a category.
///
/// Verifies that the private channel is created for the creator and both staff roles,
/// the ticket is stored open with medium priority, the welcome message is posted in the
/// new channel, and the creation is logged.
///
/// Expected: Ok with ticket 0001
#[tokio::test]
async fn opens_ticket_in_new_channel() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = TicketService::new(&harness.state);
    let creator = member(42, vec![]);

    let pending = service
        .submit_form(settings.guild_id, &creator, "Login issue", "Cannot log in")
        .await
        .unwrap();
    let ticket = service
        .choose_category(settings.guild_id, &creator, pending.counter, "billing")
        .await
        .unwrap();

    assert_eq!(ticket.ticket_id, "0001");
    assert_eq!(ticket.category, "Billing");
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.priority, TicketPriority::Medium);

    let channels = harness.platform.created_channels();
    assert_eq!(channels.len(), 1);
    let (channel_id, spec) = &channels[0];
    assert_eq!(ticket.channel_id, *channel_id);
    assert_eq!(spec.name, "ticket-0001-user42");
    assert_eq!(
        spec.topic,
        "Support ticket for user42 | ID: 0001 | Subject: Login issue"
    );
    assert_eq!(spec.creator_id, 42);
    assert_eq!(
        spec.staff_role_ids,
        vec![settings.support_role_id, settings.admin_role_id]
    );

    let welcome = harness.platform.sent_to(*channel_id);
    assert_eq!(welcome.len(), 1);
    assert!(welcome[0]
        .content
        .as_deref()
        .unwrap()
        .starts_with("Welcome <@42>! "));
    assert_eq!(welcome[0].component_rows, 1);

    let log = harness.platform.sent_to(settings.log_channel_id);
    assert_eq!(log[0].embeds[0]["title"], "New Ticket Created");
}

/// Tests choosing a category for the same draft twice.
///
/// Verifies that a draft is consumed by the first selection.
///
/// Expected: Err(NotFound) on the second selection
#[tokio::test]
async fn draft_is_consumed() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = TicketService::new(&harness.state);
    let creator = member(42, vec![]);

    let pending = service
        .submit_form(settings.guild_id, &creator, "Login", "Cannot log in")
        .await
        .unwrap();
    service
        .choose_category(settings.guild_id, &creator, pending.counter, "Billing")
        .await
        .unwrap();

    let result = service
        .choose_category(settings.guild_id, &creator, pending.counter, "Billing")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(harness.platform.created_channels().len(), 1);
}

/// Tests selecting a category for another member's draft.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn drafts_are_scoped_to_member() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = TicketService::new(&harness.state);

    let pending = service
        .submit_form(settings.guild_id, &member(42, vec![]), "Login", "Cannot log in")
        .await
        .unwrap();

    let result = service
        .choose_category(settings.guild_id, &member(43, vec![]), pending.counter, "Billing")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests selecting a category that was removed after the form was submitted.
///
/// Expected: Err(Validation) and no channel created
#[tokio::test]
async fn rejects_unknown_category() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = TicketService::new(&harness.state);
    let creator = member(42, vec![]);

    let pending = service
        .submit_form(settings.guild_id, &creator, "Login", "Cannot log in")
        .await
        .unwrap();
    let result = service
        .choose_category(settings.guild_id, &creator, pending.counter, "Refunds")
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(harness.platform.created_channels().is_empty());
}

/// Tests channel creation failing on the platform.
///
/// Verifies that no ticket row is stored.
///
/// Expected: Err and no open tickets
#[tokio::test]
async fn channel_failure_stores_nothing() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    harness.platform.fail_channel_creation();
    let service = TicketService::new(&harness.state);
    let creator = member(42, vec![]);

    let pending = service
        .submit_form(settings.guild_id, &creator, "Login", "Cannot log in")
        .await
        .unwrap();
    let result = service
        .choose_category(settings.guild_id, &creator, pending.counter, "Billing")
        .await;

    assert!(result.is_err());
    let open = TicketRepository::new(harness.db())
        .count_open_for_user(settings.guild_id, 42)
        .await
        .unwrap();
    assert_eq!(open, 0);
}

/// Tests that concurrent drafts cannot exceed the cap.
///
/// Verifies that the cap is checked again when the category is chosen.
///
/// Expected: second selection rejected with Err(Validation)
#[tokio::test]
async fn cap_is_rechecked_on_selection() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    for i in 0..2 {
        seed_ticket(&harness, &settings, &format!("900{}", i), 700 + i, 42).await;
    }
    let service = TicketService::new(&harness.state);
    let creator = member(42, vec![]);

    let first = service
        .submit_form(settings.guild_id, &creator, "One", "First")
        .await
        .unwrap();
    let second = service
        .submit_form(settings.guild_id, &creator, "Two", "Second")
        .await
        .unwrap();

    service
        .choose_category(settings.guild_id, &creator, first.counter, "Billing")
        .await
        .unwrap();
    let result = service
        .choose_category(settings.guild_id, &creator, second.counter, "Billing")
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(harness.platform.created_channels().len(), 1);
}
