use crate::controller::SubmitOutcome;

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordEntry {
    pub keyword: String,
    /// Relevance score, already formatted to 4 decimal places.
    pub score: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget {
    Summary,
    Error,
    None,
}

/// What the form should show after an event. `None` fields are hidden
/// regions; the keyword region is hidden whenever the server returned no
/// keywords. Pure data, painted separately.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub summary: Option<String>,
    pub keywords: Option<Vec<KeywordEntry>>,
    pub error: Option<String>,
    pub loading: bool,
    pub scroll_to: ScrollTarget,
}

impl DisplayState {
    /// Everything hidden: the page-ready state, and the state after the
    /// clear action.
    pub fn hidden() -> Self {
        Self {
            summary: None,
            keywords: None,
            error: None,
            loading: false,
            scroll_to: ScrollTarget::None,
        }
    }

    /// Loading indicator only, prior results and errors hidden.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::hidden()
        }
    }
}

pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Maps a submission outcome to the display state. Total and pure: every
/// outcome hides the loading indicator, success reveals the summary (and
/// the keyword region only when non-empty), every failure reveals the
/// error region with its message.
pub fn render(outcome: &SubmitOutcome) -> DisplayState {
    match outcome {
        SubmitOutcome::Summary(response) => {
            let keywords = if response.top_keywords.is_empty() {
                None
            } else {
                Some(
                    response
                        .top_keywords
                        .iter()
                        .map(|(keyword, score)| KeywordEntry {
                            keyword: keyword.clone(),
                            score: format_score(*score),
                        })
                        .collect(),
                )
            };
            DisplayState {
                summary: Some(response.summary.clone()),
                keywords,
                error: None,
                loading: false,
                scroll_to: ScrollTarget::Summary,
            }
        }
        SubmitOutcome::Invalid(msg)
        | SubmitOutcome::ServerError(msg)
        | SubmitOutcome::TransportError(msg) => DisplayState {
            summary: None,
            keywords: None,
            error: Some(msg.clone()),
            loading: false,
            scroll_to: ScrollTarget::Error,
        },
    }
}

/// Paints a display state to the terminal. The only side-effectful part of
/// the view.
pub fn paint(state: &DisplayState) {
    if state.loading {
        println!("Summarizing...");
        return;
    }

    if let Some(error) = &state.error {
        println!("Error: {}", error);
    }

    if let Some(summary) = &state.summary {
        println!("--- Summary ---");
        println!("{}", summary);
    }

    if let Some(keywords) = &state.keywords {
        println!("--- Top Keywords ---");
        for entry in keywords {
            println!("  {:<20} {}", entry.keyword, entry.score);
        }
    }
}
