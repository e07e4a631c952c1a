use crate::api::client;
use crate::api::models::{SummarizeRequest, SummarizeResponse};
use crate::config::Config;
use crate::error::{AppError, Result};

pub const VALIDATION_MESSAGE: &str = "Please enter some text to summarize.";
pub const BUSY_MESSAGE: &str = "A summarization request is already in progress.";

pub const EXAMPLE_TEXT: &str = "Text summarization is the process of distilling the most important information from a source text. There are two main approaches to text summarization: extractive and abstractive. Extractive summarization involves selecting important sentences from the original text to form a summary. Abstractive summarization involves generating new sentences that capture the meaning of the original text. TF-IDF, which stands for Term Frequency-Inverse Document Frequency, is a numerical statistic used in information retrieval to reflect how important a word is to a document in a collection. In the context of text summarization, TF-IDF can be used to identify keywords that are significant to the document.";

/// Discriminated result of one submission. Rendering is a separate, pure
/// concern (see `view::render`).
pub enum SubmitOutcome {
    Summary(SummarizeResponse),
    Invalid(String),
    ServerError(String),
    TransportError(String),
}

struct InFlightGuard<'a>(&'a mut bool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Owns the transient state of one form: the input buffer, the desired
/// sentence count, and whether a request is in flight. All state is
/// discarded between submissions except the input buffer itself.
pub struct FormController {
    endpoint: String,
    text: String,
    num_sentences: u32,
    in_flight: bool,
}

impl FormController {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.summarizer_url.clone(),
            text: String::new(),
            num_sentences: config.num_sentences,
            in_flight: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn num_sentences(&self) -> u32 {
        self.num_sentences
    }

    pub fn set_num_sentences(&mut self, n: u32) {
        self.num_sentences = n;
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Appends one line of input to the buffer.
    pub fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    /// Replaces the input with the fixed illustrative paragraph.
    pub fn insert_example(&mut self) {
        self.text = EXAMPLE_TEXT.to_string();
    }

    /// Empties the input. Hiding the result regions is the renderer's job.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Validates and submits the buffered text. Empty input and an
    /// in-flight request are both rejected before any network call; every
    /// other path issues exactly one POST. Failure is terminal for this
    /// submission, never for the form.
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.try_submit().await {
            Ok(response) => SubmitOutcome::Summary(response),
            Err(AppError::Validation(msg)) => SubmitOutcome::Invalid(msg),
            Err(AppError::Server(msg)) => SubmitOutcome::ServerError(msg),
            Err(AppError::Transport(msg)) => SubmitOutcome::TransportError(msg),
            Err(other) => SubmitOutcome::ServerError(other.to_string()),
        }
    }

    async fn try_submit(&mut self) -> Result<SummarizeResponse> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(VALIDATION_MESSAGE.to_string()));
        }
        if self.in_flight {
            return Err(AppError::Validation(BUSY_MESSAGE.to_string()));
        }

        let request = SummarizeRequest {
            text: trimmed.to_string(),
            num_sentences: self.num_sentences,
        };

        let endpoint = self.endpoint.clone();
        self.in_flight = true;
        // The guard clears the flag even when the caller drops this future
        // mid-request, so a cancelled submission cannot wedge the form.
        let _guard = InFlightGuard(&mut self.in_flight);
        client::summarize(&endpoint, &request).await
    }
}
