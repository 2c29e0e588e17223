//! Transcript summarization through a hosted language model.

mod claude;
mod messages;

pub use claude::{ClaudeClient, ClaudeSettings, ANTHROPIC_VERSION};
pub use messages::{ContentBlock, Message, MessagesRequest, MessagesResponse};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Claude API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Claude API call failed with status {status} {reason}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Claude API response contained no text")]
    EmptyResponse,
}

/// Produces a summary for a transcript
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, api_key: &str, transcript: &str) -> Result<String, SummarizerError>;
}

/// Instructional prompt wrapping the transcript
pub fn build_prompt(transcript: &str, language: &str) -> String {
    format!(
        "You are a professional and concise meeting summarization assistant.\n\
         Please summarize the following meeting transcript into a clear and well-structured summary.\n\
         Highlight key decisions, action items, and any open questions.\n\
         \n\
         <transcript>\n\
         {}\n\
         </transcript>\n\
         \n\
         Provide the summary in {}.",
        transcript, language
    )
}
