use test_utils::listings_fixture;

use super::Conversation;
use super::FALLBACK_APOLOGY;
use crate::domain::models::AnalyzeRecord;
use crate::domain::models::HistoryRecord;
use crate::domain::models::ListingsMode;
use crate::domain::models::MessageType;
use crate::domain::models::ResultType;
use crate::domain::models::ViewState;

fn listing_record(id: &str) -> AnalyzeRecord {
    return AnalyzeRecord {
        id: Some(id.to_string()),
        description: "Found 5 homes!!! Want to see more options!".to_string(),
        result_type: "listing".to_string(),
        results: Some(listings_fixture().to_string()),
    };
}

#[test]
fn it_rejects_empty_input_and_closes_the_chat() {
    let mut conversation = Conversation::default();
    conversation.view = ViewState::ChatWithAnalysis;

    assert!(conversation.submit("   ").is_none());
    assert_eq!(conversation.view, ViewState::SuggestionPrompt);
    assert!(!conversation.waiting_for_backend);
    assert!(conversation.messages.is_empty());
}

#[test]
fn it_opens_the_chat_on_first_query() {
    let mut conversation = Conversation::default();
    let request = conversation
        .submit("Show me 3 bed, 2 bath homes in Austin, TX under $350K")
        .unwrap();

    assert_eq!(request.seq, 1);
    assert_eq!(request.id, None);
    assert_eq!(request.last_question, None);
    assert_eq!(conversation.view, ViewState::ChatWithAnalysis);
    assert!(conversation.waiting_for_backend);
    assert_eq!(
        conversation.session.title,
        "Show me 3 bed, 2 bath homes in Austin, TX under $350K"
    );
}

#[test]
fn it_dispatches_listing_responses() {
    let mut conversation = Conversation::default();
    let request = conversation
        .submit("Show me 3 bed, 2 bath homes in Austin, TX under $350K")
        .unwrap();

    conversation.apply_response(request.seq, listing_record("sess-1"));

    assert_eq!(conversation.session.description, "Found 5 homes");
    assert_eq!(
        conversation.session.last_question,
        Some("Want to see more options".to_string())
    );
    assert_eq!(conversation.session.results.len(), 2);
    assert_eq!(conversation.session.result_type, ResultType::Listing);
    assert_eq!(
        conversation.view,
        ViewState::ChatWithListings(ListingsMode::Card)
    );
    assert!(!conversation.waiting_for_backend);
}

#[test]
fn it_threads_session_id_and_follow_up_into_the_next_query() {
    let mut conversation = Conversation::default();
    let request = conversation.submit("homes in Austin").unwrap();
    conversation.apply_response(request.seq, listing_record("sess-1"));

    let next = conversation.submit("under 300k").unwrap();

    assert_eq!(next.seq, 2);
    assert_eq!(next.id, Some("sess-1".to_string()));
    assert_eq!(
        next.last_question,
        Some("Want to see more options".to_string())
    );
}

#[test]
fn it_clears_listings_on_analysis_responses() {
    let mut conversation = Conversation::default();
    let request = conversation.submit("homes in Austin").unwrap();
    conversation.apply_response(request.seq, listing_record("sess-1"));

    let request = conversation.submit("what is the ARV for the first one").unwrap();
    conversation.apply_response(
        request.seq,
        AnalyzeRecord {
            id: Some("sess-1".to_string()),
            description: "The estimated ARV is $410K!!! Want a full report!".to_string(),
            result_type: "analysis".to_string(),
            // Whatever the backend sends here is ignored for analysis replies.
            results: Some(listings_fixture().to_string()),
        },
    );

    assert!(conversation.session.results.is_empty());
    assert_eq!(conversation.session.result_type, ResultType::Analysis);
    assert_eq!(conversation.view, ViewState::ChatWithAnalysis);
    assert_eq!(conversation.session.description, "The estimated ARV is $410K");
}

#[test]
fn it_displays_unknown_types_verbatim() {
    let mut conversation = Conversation::default();
    let request = conversation.submit("hello").unwrap();

    conversation.apply_response(
        request.seq,
        AnalyzeRecord {
            id: None,
            description: "Hi there!!! How can I help!".to_string(),
            result_type: "greeting".to_string(),
            results: None,
        },
    );

    // No extraction, no view change.
    assert_eq!(conversation.session.description, "Hi there!!! How can I help!");
    assert_eq!(conversation.session.last_question, None);
    assert_eq!(conversation.view, ViewState::ChatWithAnalysis);
    assert_eq!(conversation.session.result_type, ResultType::Other);
}

#[test]
fn it_drops_responses_superseded_by_a_newer_query() {
    let mut conversation = Conversation::default();
    let first = conversation.submit("homes in Austin").unwrap();
    let second = conversation.submit("homes in Dallas").unwrap();

    conversation.apply_response(first.seq, listing_record("stale"));
    assert!(conversation.waiting_for_backend);
    assert!(conversation.session.results.is_empty());

    conversation.apply_response(second.seq, listing_record("sess-2"));
    assert!(!conversation.waiting_for_backend);
    assert_eq!(conversation.session.id, Some("sess-2".to_string()));
}

#[test]
fn it_keeps_listings_when_a_query_fails() {
    let mut conversation = Conversation::default();
    let request = conversation.submit("homes in Austin").unwrap();
    conversation.apply_response(request.seq, listing_record("sess-1"));

    let request = conversation.submit("more please").unwrap();
    conversation.apply_failure(request.seq);

    assert_eq!(conversation.session.description, FALLBACK_APOLOGY);
    assert_eq!(conversation.session.results.len(), 2);
    assert_eq!(
        conversation.messages.last().unwrap().message_type(),
        MessageType::Error
    );
}

#[test]
fn it_shows_empty_listing_replies_in_the_chat_view() {
    let mut conversation = Conversation::default();
    let request = conversation.submit("homes on the moon").unwrap();

    conversation.apply_response(
        request.seq,
        AnalyzeRecord {
            id: None,
            description: "No matches!!! Try another area!".to_string(),
            result_type: "listing".to_string(),
            results: None,
        },
    );

    assert!(conversation.session.results.is_empty());
    assert_eq!(conversation.view, ViewState::ChatWithAnalysis);
}

#[test]
fn it_restores_a_stored_session() {
    let mut conversation = Conversation::default();

    conversation.apply_history(HistoryRecord {
        id: "sess-9".to_string(),
        title: "homes in Florence".to_string(),
        description: "Here are the results from last time!!! anything else".to_string(),
        lasttitle: Some("Want to see more options".to_string()),
        result_type: "listing".to_string(),
        results: Some(listings_fixture().to_string()),
    });

    // Only the sentinel stripping applies to stored descriptions.
    assert_eq!(
        conversation.session.description,
        "Here are the results from last time anything else"
    );
    assert_eq!(
        conversation.session.last_question,
        Some("Want to see more options".to_string())
    );
    assert_eq!(conversation.session.id, Some("sess-9".to_string()));
    assert_eq!(conversation.session.results.len(), 2);
    assert_eq!(
        conversation.view,
        ViewState::ChatWithListings(ListingsMode::Card)
    );
}

#[test]
fn it_exports_results_as_csv() {
    let mut conversation = Conversation::default();
    assert!(conversation.export().is_none());

    let request = conversation.submit("homes in Austin").unwrap();
    conversation.apply_response(request.seq, listing_record("sess-1"));

    let bytes = conversation.export().unwrap();
    let csv = String::from_utf8(bytes).unwrap();
    assert!(csv.starts_with("streetAddress,city,state,zipcode"));
    assert_eq!(csv.split("\r\n").count(), 3);
}

#[test]
fn it_toggles_listing_modes_only_with_results() {
    let mut conversation = Conversation::default();
    assert!(!conversation.set_listings_mode(ListingsMode::Map));

    let request = conversation.submit("homes in Austin").unwrap();
    conversation.apply_response(request.seq, listing_record("sess-1"));

    assert!(conversation.set_listings_mode(ListingsMode::Map));
    assert_eq!(
        conversation.view,
        ViewState::ChatWithListings(ListingsMode::Map)
    );
}
