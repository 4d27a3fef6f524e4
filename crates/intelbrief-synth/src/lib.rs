//! Debrief synthesis: renders a news window into prompt text and asks the
//! model for a narrative intelligence debrief.

mod format;
mod prompt;

use intelbrief_anthropic::{AnthropicClient, AnthropicError, Message, MessagesRequest};
use intelbrief_core::NewsItem;

pub use format::format_news;
pub use prompt::{build_user_prompt, DEBRIEF_MAX_TOKENS, DEBRIEF_MODEL, SYSTEM_PROMPT};

/// Generate a debrief from the given news items.
///
/// Builds the fixed system prompt and a user prompt embedding the item count
/// and the formatted news block, then makes one Messages API call and
/// returns the first text block of the response unmodified.
///
/// Callers must pass a non-empty slice — the orchestrator short-circuits the
/// run before this point when the window is empty.
///
/// # Errors
///
/// Returns [`AnthropicError`] on any call failure. Nothing is retried and
/// there is no fallback model; a failed call fails the run.
pub async fn generate_debrief(
    client: &AnthropicClient,
    items: &[NewsItem],
) -> Result<String, AnthropicError> {
    let formatted = format_news(items);
    let user_prompt = build_user_prompt(items.len(), &formatted);

    let request = MessagesRequest {
        model: DEBRIEF_MODEL.to_string(),
        max_tokens: DEBRIEF_MAX_TOKENS,
        system: SYSTEM_PROMPT.to_string(),
        messages: vec![Message::user(user_prompt)],
    };

    tracing::info!(item_count = items.len(), model = DEBRIEF_MODEL, "generating debrief");

    let response = client.create_message(&request).await?;
    Ok(response.first_text()?.to_string())
}
