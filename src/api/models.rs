use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub num_sentences: u32,
}

#[derive(Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    /// Ranked (keyword, relevance score) pairs, highest relevance first.
    /// The server may omit the field entirely.
    #[serde(default)]
    pub top_keywords: Vec<(String, f64)>,
}

#[derive(Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
}
