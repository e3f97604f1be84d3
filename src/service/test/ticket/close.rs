use super::*;
use crate::service::transcript::HISTORY_UNAVAILABLE;

fn history() -> Vec<TranscriptMessage> {
    vec![
        TranscriptMessage {
            timestamp: Utc::now() - Duration::minutes(5),
            author_tag: "user42".to_string(),
            content: "I cannot log in".to_string(),
            attachments: vec![],
        },
        TranscriptMessage {
            timestamp: Utc::now(),
            author_tag: "staff".to_string(),
            content: "Fixed".to_string(),
            attachments: vec![],
        },
    ]
}

/// Tests a staff member confirming a close.
///
/// Verifies that the ticket is closed with its closer, the transcript is written,
/// the close notice is posted, the log carries the transcript attachment, and the
/// channel is queued for deletion.
///
/// Expected: Ok with a closed ticket
#[tokio::test]
async fn closes_ticket_with_transcript() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    seed_ticket(&harness, &settings, "0007", 555, 42).await;
    harness.platform.set_history(555, history());
    let service = TicketService::new(&harness.state);
    let staff = member(7, vec![settings.support_role_id]);

    let ticket = service
        .confirm_close(settings.guild_id, "0007", &staff)
        .await
        .unwrap();

    assert_eq!(ticket.status, TicketStatus::Closed);
    assert_eq!(ticket.closed_by, Some(7));

    let stored = TicketRepository::new(harness.db())
        .find_by_channel_id(555)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, TicketStatus::Closed);
    assert_eq!(stored.closed_by, Some(7));

    let path = harness.state.transcripts.path_for(settings.guild_id, "0007");
    let transcript = std::fs::read_to_string(path).unwrap();
    let first = transcript.find("user42: I cannot log in").unwrap();
    let second = transcript.find("staff: Fixed").unwrap();
    assert!(first < second);
    assert!(transcript.contains("\n\n"));

    let notice = harness.platform.sent_to(555);
    assert_eq!(notice[0].embeds[0]["description"], settings.close_message);

    let log = harness.platform.sent_to(settings.log_channel_id);
    let (filename, data) = log[0].attachment.clone().unwrap();
    assert_eq!(filename, "ticket-0007.txt");
    assert_eq!(String::from_utf8(data).unwrap(), transcript);

    assert!(harness.state.deletions.is_pending(555).await);
}

/// Tests the creator confirming a close of their own ticket.
///
/// Expected: Ok
#[tokio::test]
async fn creator_may_close() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    seed_ticket(&harness, &settings, "0007", 555, 42).await;
    let service = TicketService::new(&harness.state);

    let result = service
        .confirm_close(settings.guild_id, "0007", &member(42, vec![]))
        .await;

    assert!(result.is_ok());
}

/// Tests an unrelated member requesting a close.
///
/// Expected: Err(PermissionDenied) and the ticket left open
#[tokio::test]
async fn other_members_may_not_close() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    seed_ticket(&harness, &settings, "0007", 555, 42).await;
    let service = TicketService::new(&harness.state);
    let stranger = member(99, vec![]);

    let requested = service
        .request_close_in_channel(settings.guild_id, 555, &stranger)
        .await;
    let confirmed = service
        .confirm_close(settings.guild_id, "0007", &stranger)
        .await;

    assert!(matches!(requested, Err(AppError::PermissionDenied(_))));
    assert!(matches!(confirmed, Err(AppError::PermissionDenied(_))));
    let stored = TicketRepository::new(harness.db())
        .find_by_channel_id(555)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_open());
}

/// Tests confirming the close of a ticket that is already closed.
///
/// Verifies that the second confirmation neither posts nor logs anything.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn second_confirmation_is_rejected() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    seed_ticket(&harness, &settings, "0007", 555, 42).await;
    let service = TicketService::new(&harness.state);
    let creator = member(42, vec![]);

    service
        .confirm_close(settings.guild_id, "0007", &creator)
        .await
        .unwrap();
    let sent = harness.platform.sent().len();

    let result = service
        .confirm_close(settings.guild_id, "0007", &creator)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(harness.platform.sent().len(), sent);
}

/// Tests requesting a close outside a ticket channel.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn request_outside_ticket_channel() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    let service = TicketService::new(&harness.state);

    let result = service
        .request_close_in_channel(settings.guild_id, 12345, &member(42, vec![]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests closing when the log channel is unavailable.
///
/// Verifies that log delivery failures do not undo the close.
///
/// Expected: Ok and the ticket closed
#[tokio::test]
async fn log_failure_keeps_close() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    seed_ticket(&harness, &settings, "0007", 555, 42).await;
    harness.platform.fail_channel(settings.log_channel_id);
    let service = TicketService::new(&harness.state);

    let result = service
        .confirm_close(settings.guild_id, "0007", &member(42, vec![]))
        .await;

    assert!(result.is_ok());
    assert!(harness.state.deletions.is_pending(555).await);
}

/// Tests closing a ticket whose channel history cannot be read.
///
/// Verifies that the close is still committed, the cap is released, a placeholder
/// transcript is logged, and the channel is still queued for deletion.
///
/// Expected: Ok with a closed ticket
#[tokio::test]
async fn unreadable_history_still_closes() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    seed_ticket(&harness, &settings, "0007", 555, 42).await;
    harness.platform.fail_channel(555);
    let service = TicketService::new(&harness.state);
    let staff = member(7, vec![settings.support_role_id]);

    let ticket = service
        .confirm_close(settings.guild_id, "0007", &staff)
        .await
        .unwrap();

    assert_eq!(ticket.status, TicketStatus::Closed);
    let repo = TicketRepository::new(harness.db());
    let stored = repo.find_by_channel_id(555).await.unwrap().unwrap();
    assert_eq!(stored.status, TicketStatus::Closed);
    assert_eq!(stored.closed_by, Some(7));
    assert_eq!(
        repo.count_open_for_user(settings.guild_id, 42).await.unwrap(),
        0
    );

    let log = harness.platform.sent_to(settings.log_channel_id);
    let (_, data) = log[0].attachment.clone().unwrap();
    assert_eq!(String::from_utf8(data).unwrap(), HISTORY_UNAVAILABLE);
    assert!(harness.state.deletions.is_pending(555).await);
}

/// Tests a ticket channel deleted outside the bot.
///
/// Verifies that the open ticket is closed without a closer.
///
/// Expected: Ok(true), then Ok(false) for a repeat event
#[tokio::test]
async fn external_channel_deletion_closes_ticket() {
    let harness = Harness::new().await;
    let settings = harness.seed_guild().await;
    seed_ticket(&harness, &settings, "0007", 555, 42).await;
    let service = TicketService::new(&harness.state);

    assert!(service.handle_channel_deleted(555).await.unwrap());
    assert!(!service.handle_channel_deleted(555).await.unwrap());

    let stored = TicketRepository::new(harness.db())
        .find_by_channel_id(555)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, TicketStatus::Closed);
    assert_eq!(stored.closed_by, None);
}
