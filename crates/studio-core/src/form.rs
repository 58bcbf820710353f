//! Generation Form
//!
//! State behind the "Create Your AI Video" card: the prompt, the selected
//! duration and the busy flag, plus everything the card derives from them.
//!
//! ```text
//!   idle ──submit()──▶ generating ──complete(Ok)──▶ idle (prompt cleared)
//!     ▲                    │
//!     └──complete(Err)─────┘  (prompt kept)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::{Catalog, DurationOption};
use crate::config::StudioConfig;
use crate::error::{Result, StudioError};
use crate::notify::Toast;

/// A submitted generation run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationTicket {
    pub id: Uuid,
    pub prompt: String,
    pub duration_secs: u32,
    pub credits: u32,
    pub started_at: DateTime<Utc>,
}

impl GenerationTicket {
    /// Toast text raised when the run starts
    pub fn started_message(&self) -> String {
        format!("Video generation started! Using {} credits.", self.credits)
    }
}

/// Result of a finished simulated run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReceipt {
    pub ticket_id: Uuid,
    pub credits: u32,
    pub finished_at: DateTime<Utc>,
}

/// Prompt/duration form state
#[derive(Clone, Debug)]
pub struct GenerationForm {
    catalog: Arc<Catalog>,
    prompt: String,
    duration_secs: u32,
    active: Option<Uuid>,
    max_chars: usize,
    min_chars: usize,
    warn_chars: usize,
}

impl GenerationForm {
    pub fn new(config: &StudioConfig, catalog: Arc<Catalog>) -> Result<Self> {
        let duration_secs = config.default_duration_secs;
        if catalog.duration(duration_secs).is_none() {
            return Err(StudioError::UnknownDuration(duration_secs));
        }
        Ok(Self {
            catalog,
            prompt: String::new(),
            duration_secs,
            active: None,
            max_chars: config.max_prompt_chars,
            min_chars: config.min_prompt_chars,
            warn_chars: config.warn_prompt_chars,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Prompt length in characters
    pub fn prompt_len(&self) -> usize {
        self.prompt.chars().count()
    }

    pub const fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub const fn is_generating(&self) -> bool {
        self.active.is_some()
    }

    /// Replace the prompt, keeping only the first `max_prompt_chars` characters.
    ///
    /// Ignored while a run is in flight; returns whether the prompt was taken.
    pub fn set_prompt(&mut self, text: &str) -> bool {
        if self.is_generating() {
            tracing::debug!("Prompt edit ignored while generating");
            return false;
        }
        self.prompt = match text.char_indices().nth(self.max_chars) {
            Some((cut, _)) => text[..cut].to_string(),
            None => text.to_string(),
        };
        true
    }

    pub fn select_duration(&mut self, seconds: u32) -> Result<()> {
        if self.is_generating() {
            return Err(StudioError::GenerationInProgress);
        }
        if self.catalog.duration(seconds).is_none() {
            tracing::warn!(seconds, "Rejected unknown duration");
            return Err(StudioError::UnknownDuration(seconds));
        }
        self.duration_secs = seconds;
        Ok(())
    }

    pub fn selected_duration(&self) -> Option<&DurationOption> {
        self.catalog.duration(self.duration_secs)
    }

    pub fn credits_required(&self) -> u32 {
        self.catalog.credits_for(self.duration_secs)
    }

    pub fn meets_minimum(&self) -> bool {
        self.prompt_len() >= self.min_chars
    }

    /// Helper text under the textarea
    pub fn prompt_hint(&self) -> String {
        if self.meets_minimum() {
            "Good description length".into()
        } else {
            format!("Minimum {} characters required", self.min_chars)
        }
    }

    /// Character counter, e.g. `42/500`
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.prompt_len(), self.max_chars)
    }

    /// Whether the counter should be highlighted
    pub fn is_near_limit(&self) -> bool {
        self.prompt_len() > self.warn_chars
    }

    /// Sentence in the cost panel, e.g. "Standard (60s) video will use 2 credits"
    pub fn cost_summary(&self) -> String {
        let label = self.selected_duration().map_or("", |d| d.label.as_str());
        format!("{label} video will use {} credits", self.credits_required())
    }

    pub fn can_submit(&self) -> bool {
        !self.is_generating() && self.meets_minimum()
    }

    pub fn submit_label(&self) -> String {
        let credits = self.credits_required();
        if self.is_generating() {
            format!("Generating Video... ({credits} credits)")
        } else if self.meets_minimum() {
            format!("Generate Video ({credits} credits)")
        } else {
            "Enter Video Description".into()
        }
    }

    /// Validate the prompt and enter the generating state.
    ///
    /// On error nothing changes.
    pub fn submit(&mut self) -> Result<GenerationTicket> {
        if self.is_generating() {
            return Err(StudioError::GenerationInProgress);
        }
        if self.prompt.trim().is_empty() {
            tracing::warn!("Rejected empty prompt");
            return Err(StudioError::EmptyPrompt);
        }
        let len = self.prompt_len();
        if len < self.min_chars {
            tracing::warn!(len, min = self.min_chars, "Rejected short prompt");
            return Err(StudioError::PromptTooShort { len, min: self.min_chars });
        }

        let ticket = GenerationTicket {
            id: Uuid::new_v4(),
            prompt: self.prompt.clone(),
            duration_secs: self.duration_secs,
            credits: self.credits_required(),
            started_at: Utc::now(),
        };
        self.active = Some(ticket.id);
        tracing::info!(id = %ticket.id, credits = ticket.credits, duration = ticket.duration_secs, "Generation started");
        Ok(ticket)
    }

    /// Leave the generating state and build the toast for the outcome.
    ///
    /// Returns `None` for a ticket that is not the active run.
    pub fn complete(
        &mut self,
        ticket: &GenerationTicket,
        outcome: &Result<GenerationReceipt>,
    ) -> Option<Toast> {
        if self.active != Some(ticket.id) {
            tracing::debug!(id = %ticket.id, "Ignoring stale generation result");
            return None;
        }
        self.active = None;

        match outcome {
            Ok(receipt) => {
                tracing::info!(id = %receipt.ticket_id, "Generation finished");
                self.prompt.clear();
                Some(Toast::success("Video generated successfully!"))
            }
            Err(err) => {
                tracing::warn!(id = %ticket.id, error = %err, "Generation failed");
                Some(Toast::from(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> GenerationForm {
        GenerationForm::new(&StudioConfig::default(), Arc::new(Catalog::standard())).unwrap()
    }

    fn receipt(ticket: &GenerationTicket) -> Result<GenerationReceipt> {
        Ok(GenerationReceipt {
            ticket_id: ticket.id,
            credits: ticket.credits,
            finished_at: Utc::now(),
        })
    }

    #[test]
    fn test_initial_state() {
        let form = form();
        assert_eq!(form.prompt(), "");
        assert_eq!(form.duration_secs(), 30);
        assert_eq!(form.credits_required(), 1);
        assert!(!form.is_generating());
        assert_eq!(form.submit_label(), "Enter Video Description");
    }

    #[test]
    fn test_short_prompts_rejected() {
        for prompt in ["", "   ", "Hi", "123456789"] {
            let mut form = form();
            form.set_prompt(prompt);
            let err = form.submit().unwrap_err();
            assert!(err.is_validation());
            assert_eq!(form.prompt(), prompt);
            assert!(!form.is_generating());
        }
    }

    #[test]
    fn test_hi_is_too_short() {
        let mut form = form();
        form.set_prompt("Hi");
        assert!(matches!(
            form.submit(),
            Err(StudioError::PromptTooShort { len: 2, min: 10 })
        ));
        assert_eq!(form.prompt(), "Hi");
        assert!(!form.is_generating());
    }

    #[test]
    fn test_long_blank_prompt_is_empty() {
        let mut form = form();
        form.set_prompt(&" ".repeat(12));
        assert!(form.meets_minimum());
        assert!(matches!(form.submit(), Err(StudioError::EmptyPrompt)));
        assert!(!form.is_generating());
        assert_eq!(form.prompt_len(), 12);
    }

    #[test]
    fn test_counter_warning_threshold() {
        let mut form = form();
        form.set_prompt(&"a".repeat(450));
        assert!(!form.is_near_limit());
        assert_eq!(form.counter_label(), "450/500");

        form.set_prompt(&"a".repeat(451));
        assert!(form.is_near_limit());
        assert_eq!(form.counter_label(), "451/500");
    }

    #[test]
    fn test_prompt_truncated_to_limit() {
        let mut form = form();
        form.set_prompt(&"a".repeat(750));
        assert_eq!(form.prompt_len(), 500);

        // Multi-byte characters are counted, not bytes
        form.set_prompt(&"é".repeat(501));
        assert_eq!(form.prompt_len(), 500);
        assert_eq!(form.counter_label(), "500/500");
        assert!(form.is_near_limit());
    }

    #[test]
    fn test_credits_follow_duration() {
        let mut form = form();
        for (secs, credits) in [(30, 1), (60, 2), (120, 4)] {
            form.select_duration(secs).unwrap();
            assert_eq!(form.credits_required(), credits);
        }
        assert!(matches!(form.select_duration(90), Err(StudioError::UnknownDuration(90))));
        assert_eq!(form.duration_secs(), 120);
    }

    #[test]
    fn test_submit_and_complete() {
        let mut form = form();
        form.set_prompt(&"x".repeat(50));
        form.select_duration(60).unwrap();
        assert_eq!(form.submit_label(), "Generate Video (2 credits)");

        let ticket = form.submit().unwrap();
        assert!(form.is_generating());
        assert_eq!(ticket.credits, 2);
        assert_eq!(ticket.started_message(), "Video generation started! Using 2 credits.");
        assert_eq!(form.submit_label(), "Generating Video... (2 credits)");
        assert!(!form.can_submit());

        // Controls are locked while busy
        assert!(!form.set_prompt("something else entirely"));
        assert!(matches!(form.select_duration(30), Err(StudioError::GenerationInProgress)));
        assert!(matches!(form.submit(), Err(StudioError::GenerationInProgress)));

        let toast = form.complete(&ticket, &receipt(&ticket)).unwrap();
        assert_eq!(toast.message, "Video generated successfully!");
        assert!(!form.is_generating());
        assert_eq!(form.prompt(), "");
    }

    #[test]
    fn test_failed_run_keeps_prompt() {
        let mut form = form();
        form.set_prompt("A sunrise over a quiet mountain lake");
        let ticket = form.submit().unwrap();

        let toast = form
            .complete(&ticket, &Err(StudioError::GenerationFailed("boom".into())))
            .unwrap();
        assert_eq!(toast.message, "Failed to generate video");
        assert!(!form.is_generating());
        assert_eq!(form.prompt(), "A sunrise over a quiet mountain lake");
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut form = form();
        form.set_prompt("A sunrise over a quiet mountain lake");
        let ticket = form.submit().unwrap();
        form.complete(&ticket, &receipt(&ticket));

        assert!(form.complete(&ticket, &receipt(&ticket)).is_none());
    }

    #[test]
    fn test_display_helpers() {
        let mut form = form();
        assert_eq!(form.prompt_hint(), "Minimum 10 characters required");
        form.set_prompt("Ten chars!");
        assert_eq!(form.prompt_hint(), "Good description length");
        form.select_duration(60).unwrap();
        assert_eq!(form.cost_summary(), "Standard (60s) video will use 2 credits");
    }

    #[test]
    fn test_unknown_default_duration() {
        let config = StudioConfig { default_duration_secs: 45, ..StudioConfig::default() };
        assert!(matches!(
            GenerationForm::new(&config, Arc::new(Catalog::standard())),
            Err(StudioError::UnknownDuration(45))
        ));
    }
}
