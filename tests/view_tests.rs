use summarizer_client::api::models::SummarizeResponse;
use summarizer_client::controller::SubmitOutcome;
use summarizer_client::view::{format_score, render, DisplayState, KeywordEntry, ScrollTarget};

#[test]
fn test_format_score_four_decimals() {
    assert_eq!(format_score(0.5), "0.5000");
    assert_eq!(format_score(0.25), "0.2500");
    assert_eq!(format_score(1.0), "1.0000");
}

#[test]
fn test_render_summary_with_keywords() {
    let outcome = SubmitOutcome::Summary(SummarizeResponse {
        summary: "S".to_string(),
        top_keywords: vec![("x".to_string(), 0.5)],
    });

    let state = render(&outcome);
    assert_eq!(state.summary.as_deref(), Some("S"));
    assert_eq!(
        state.keywords,
        Some(vec![KeywordEntry {
            keyword: "x".to_string(),
            score: "0.5000".to_string(),
        }])
    );
    assert_eq!(state.error, None);
    assert!(!state.loading);
    assert_eq!(state.scroll_to, ScrollTarget::Summary);
}

#[test]
fn test_render_empty_keywords_keeps_region_hidden() {
    let outcome = SubmitOutcome::Summary(SummarizeResponse {
        summary: "S".to_string(),
        top_keywords: vec![],
    });

    let state = render(&outcome);
    assert_eq!(state.summary.as_deref(), Some("S"));
    assert_eq!(state.keywords, None);
}

#[test]
fn test_render_absent_keywords_keeps_region_hidden() {
    // The server may omit the field entirely
    let response: SummarizeResponse = serde_json::from_str(r#"{"summary": "S"}"#).unwrap();
    let state = render(&SubmitOutcome::Summary(response));
    assert_eq!(state.keywords, None);
}

#[test]
fn test_render_failures_reveal_error_region() {
    for outcome in [
        SubmitOutcome::Invalid("Please enter some text to summarize.".to_string()),
        SubmitOutcome::ServerError("bad input".to_string()),
        SubmitOutcome::TransportError("Network error: Could not connect to the server.".to_string()),
    ] {
        let expected = match &outcome {
            SubmitOutcome::Invalid(m)
            | SubmitOutcome::ServerError(m)
            | SubmitOutcome::TransportError(m) => m.clone(),
            SubmitOutcome::Summary(_) => unreachable!(),
        };

        let state = render(&outcome);
        assert_eq!(state.error, Some(expected));
        assert_eq!(state.summary, None);
        assert_eq!(state.keywords, None);
        assert!(!state.loading);
        assert_eq!(state.scroll_to, ScrollTarget::Error);
    }
}

#[test]
fn test_hidden_state_hides_everything() {
    let state = DisplayState::hidden();
    assert_eq!(state.summary, None);
    assert_eq!(state.keywords, None);
    assert_eq!(state.error, None);
    assert!(!state.loading);
    assert_eq!(state.scroll_to, ScrollTarget::None);
}

#[test]
fn test_loading_state_shows_only_the_indicator() {
    let state = DisplayState::loading();
    assert!(state.loading);
    assert_eq!(state.summary, None);
    assert_eq!(state.keywords, None);
    assert_eq!(state.error, None);
}
