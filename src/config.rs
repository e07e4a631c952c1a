use std::env;
use crate::error::{AppError, Result};

pub const DEFAULT_NUM_SENTENCES: u32 = 3;

#[derive(Clone)]
pub struct Config {
    pub summarizer_url: String,
    pub num_sentences: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let summarizer_url = env::var("SUMMARIZER_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
        // Trailing slashes would produce "//summarize" when the path is joined
        let summarizer_url = summarizer_url.trim_end_matches('/').to_string();

        let num_sentences = match env::var("NUM_SENTENCES") {
            Ok(raw) => parse_num_sentences(&raw)?,
            Err(_) => DEFAULT_NUM_SENTENCES,
        };

        Ok(Config {
            summarizer_url,
            num_sentences,
        })
    }
}

/// Parses a sentence count, rejecting zero and non-integers.
pub fn parse_num_sentences(raw: &str) -> Result<u32> {
    let n = raw
        .trim()
        .parse::<u32>()
        .map_err(|e| AppError::Config(format!("Invalid sentence count '{}': {}", raw, e)))?;
    if n == 0 {
        return Err(AppError::Config(
            "Sentence count must be a positive integer".to_string(),
        ));
    }
    Ok(n)
}
