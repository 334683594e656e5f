//! SuggestSymptomsHandler - Command handler for symptom suggestions.
//!
//! Turns raw user input into exactly ten symptom suggestions. The completion
//! service is asked once; if its reply holds fewer than ten entries a single
//! corrective request tops the list up. Whatever happens upstream, the caller
//! gets a full list: canned suggestions stand in when nothing usable comes
//! back.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::triage::prompts::{
    additional_suggestions_prompt, suggestion_prompt, SUGGESTION_SYSTEM_PROMPT,
};
use crate::domain::triage::{
    decode_suggestions, merge_unique, SuggestionList, COMMON_SYMPTOMS, SUGGESTION_COUNT,
};
use crate::ports::{CompletionClient, CompletionError, CompletionRequest};

/// Sampling parameters for the primary suggestion request.
const SUGGESTION_TEMPERATURE: f32 = 0.3;
const SUGGESTION_MAX_TOKENS: u32 = 500;
const SUGGESTION_PRESENCE_PENALTY: f32 = 0.3;
const SUGGESTION_FREQUENCY_PENALTY: f32 = 0.3;

/// The corrective request runs slightly warmer to surface new entries.
const CORRECTIVE_TEMPERATURE: f32 = 0.4;

/// Command to suggest symptoms for raw user input.
#[derive(Debug, Clone)]
pub struct SuggestSymptomsCommand {
    /// Whatever the user typed into the symptom field.
    pub input: String,
}

/// Handler for symptom suggestions.
pub struct SuggestSymptomsHandler {
    completion: Arc<dyn CompletionClient>,
}

impl SuggestSymptomsHandler {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    /// Produces exactly ten suggestions for the given input.
    ///
    /// This operation cannot fail; every upstream problem degrades to the
    /// canned suggestion list with the user's input as the first entry.
    pub async fn handle(&self, cmd: SuggestSymptomsCommand) -> SuggestionList {
        let request = CompletionRequest::new(suggestion_prompt(&cmd.input))
            .with_system_prompt(SUGGESTION_SYSTEM_PROMPT)
            .with_temperature(SUGGESTION_TEMPERATURE)
            .with_max_tokens(SUGGESTION_MAX_TOKENS)
            .with_penalties(SUGGESTION_PRESENCE_PENALTY, SUGGESTION_FREQUENCY_PENALTY);

        let reply = match self.completion.complete(request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "suggestion request failed, using canned suggestions");
                return SuggestionList::fallback(&cmd.input);
            }
        };

        let mut entries = match decode_suggestions(&reply.content) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "suggestion reply undecodable, using canned suggestions");
                return SuggestionList::fallback(&cmd.input);
            }
        };

        if entries.len() < SUGGESTION_COUNT {
            debug!(
                count = entries.len(),
                "suggestion reply came up short, requesting more"
            );
            match self.request_additional(&cmd.input).await {
                Ok(Some(more)) => merge_unique(&mut entries, more),
                Ok(None) => {
                    merge_unique(&mut entries, COMMON_SYMPTOMS.iter().map(|s| s.to_string()))
                }
                Err(err) => {
                    warn!(error = %err, "corrective request failed, using canned suggestions");
                    return SuggestionList::fallback(&cmd.input);
                }
            }
        }

        SuggestionList::from_partial(entries, &cmd.input)
    }

    /// Issues the corrective request for more suggestions.
    ///
    /// `Ok(None)` means the reply arrived but could not be decoded; the
    /// caller pads from the common-symptom list instead.
    async fn request_additional(
        &self,
        input: &str,
    ) -> Result<Option<Vec<String>>, CompletionError> {
        let request = CompletionRequest::new(additional_suggestions_prompt(input))
            .with_temperature(CORRECTIVE_TEMPERATURE);

        let reply = self.completion.complete(request).await?;
        match decode_suggestions(&reply.content) {
            Ok(more) => Ok(Some(more)),
            Err(err) => {
                debug!(error = %err, "corrective reply undecodable, padding with common symptoms");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockCompletionClient, MockFailure};

    fn ten_entries() -> Vec<String> {
        (0..10).map(|i| format!("symptom {i} (detail)")).collect()
    }

    fn command(input: &str) -> SuggestSymptomsCommand {
        SuggestSymptomsCommand {
            input: input.to_string(),
        }
    }

    #[tokio::test]
    async fn full_reply_is_returned_verbatim() {
        let entries = ten_entries();
        let client = Arc::new(
            MockCompletionClient::new().with_reply(serde_json::to_string(&entries).unwrap()),
        );
        let handler = SuggestSymptomsHandler::new(client.clone());

        let list = handler.handle(command("cough")).await;

        assert_eq!(list.as_slice(), entries.as_slice());
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn fenced_reply_is_accepted() {
        let entries = ten_entries();
        let fenced = format!("```json\n{}\n```", serde_json::to_string(&entries).unwrap());
        let client = Arc::new(MockCompletionClient::new().with_reply(fenced));
        let handler = SuggestSymptomsHandler::new(client);

        let list = handler.handle(command("cough")).await;

        assert_eq!(list.as_slice(), entries.as_slice());
    }

    #[tokio::test]
    async fn short_reply_triggers_corrective_request() {
        let client = Arc::new(
            MockCompletionClient::new()
                .with_reply(r#"["cough (dry)", "wheezing (whistling)"]"#)
                .with_reply(r#"["shortness of breath (hard to breathe)", "chest tightness (pressure)"]"#),
        );
        let handler = SuggestSymptomsHandler::new(client.clone());

        let list = handler.handle(command("cough")).await;

        assert_eq!(client.call_count(), 2);
        assert_eq!(list.len(), SUGGESTION_COUNT);
        assert_eq!(list.as_slice()[0], "cough (dry)");
        assert_eq!(list.as_slice()[2], "shortness of breath (hard to breathe)");
        // Remaining slots come from the canned list.
        assert!(list.as_slice().contains(&"cough (main symptom)".to_string()));
    }

    #[tokio::test]
    async fn undecodable_corrective_reply_pads_with_common_symptoms() {
        let client = Arc::new(
            MockCompletionClient::new()
                .with_reply(r#"["cough (dry)"]"#)
                .with_reply("Sure! Here are some related symptoms you may experience."),
        );
        let handler = SuggestSymptomsHandler::new(client.clone());

        let list = handler.handle(command("cough")).await;

        assert_eq!(client.call_count(), 2);
        assert_eq!(list.len(), SUGGESTION_COUNT);
        assert_eq!(list.as_slice()[0], "cough (dry)");
        assert_eq!(list.as_slice()[1], COMMON_SYMPTOMS[0]);
    }

    #[tokio::test]
    async fn failed_corrective_request_falls_back_entirely() {
        let client = Arc::new(
            MockCompletionClient::new()
                .with_reply(r#"["cough (dry)"]"#)
                .with_failure(MockFailure::Unavailable {
                    message: "upstream down".to_string(),
                }),
        );
        let handler = SuggestSymptomsHandler::new(client.clone());

        let list = handler.handle(command("cough")).await;

        assert_eq!(client.call_count(), 2);
        assert_eq!(list.len(), SUGGESTION_COUNT);
        assert_eq!(list.as_slice()[0], "cough (main symptom)");
    }

    #[tokio::test]
    async fn failed_primary_request_falls_back_without_second_call() {
        let client = Arc::new(MockCompletionClient::new().with_failure(
            MockFailure::RateLimited {
                retry_after_secs: 30,
            },
        ));
        let handler = SuggestSymptomsHandler::new(client.clone());

        let list = handler.handle(command("fever")).await;

        assert_eq!(client.call_count(), 1);
        assert_eq!(list.as_slice()[0], "fever (main symptom)");
        assert_eq!(list.len(), SUGGESTION_COUNT);
    }

    #[tokio::test]
    async fn undecodable_primary_reply_falls_back_without_second_call() {
        let client = Arc::new(
            MockCompletionClient::new().with_reply("I'm sorry, I cannot help with that."),
        );
        let handler = SuggestSymptomsHandler::new(client.clone());

        let list = handler.handle(command("rash")).await;

        assert_eq!(client.call_count(), 1);
        assert_eq!(list.as_slice()[0], "rash (main symptom)");
    }

    #[tokio::test]
    async fn overlong_reply_is_truncated() {
        let entries: Vec<String> = (0..14).map(|i| format!("symptom {i}")).collect();
        let client = Arc::new(
            MockCompletionClient::new().with_reply(serde_json::to_string(&entries).unwrap()),
        );
        let handler = SuggestSymptomsHandler::new(client);

        let list = handler.handle(command("anything")).await;

        assert_eq!(list.len(), SUGGESTION_COUNT);
        assert_eq!(list.as_slice()[9], "symptom 9");
    }

    #[tokio::test]
    async fn primary_request_carries_sampling_parameters() {
        let client = Arc::new(
            MockCompletionClient::new().with_reply(serde_json::to_string(&ten_entries()).unwrap()),
        );
        let handler = SuggestSymptomsHandler::new(client.clone());

        handler.handle(command("sore throat")).await;

        let calls = client.get_calls();
        assert_eq!(calls.len(), 1);
        let request = &calls[0];
        assert_eq!(request.system_prompt.as_deref(), Some(SUGGESTION_SYSTEM_PROMPT));
        assert_eq!(request.temperature, Some(SUGGESTION_TEMPERATURE));
        assert_eq!(request.max_tokens, Some(SUGGESTION_MAX_TOKENS));
        assert_eq!(request.presence_penalty, Some(SUGGESTION_PRESENCE_PENALTY));
        assert_eq!(request.frequency_penalty, Some(SUGGESTION_FREQUENCY_PENALTY));
        assert!(request.prompt.contains("'sore throat'"));
    }

    #[tokio::test]
    async fn corrective_request_uses_warmer_temperature() {
        let client = Arc::new(
            MockCompletionClient::new()
                .with_reply(r#"["cough (dry)"]"#)
                .with_reply(r#"["fever (high)"]"#),
        );
        let handler = SuggestSymptomsHandler::new(client.clone());

        handler.handle(command("cough")).await;

        let calls = client.get_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].temperature, Some(CORRECTIVE_TEMPERATURE));
        assert!(calls[1].system_prompt.is_none());
        assert!(calls[1].prompt.contains("'cough'"));
    }
}
