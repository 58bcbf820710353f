//! Simulated Generation
//!
//! Stands in for a video generation call: waits a fixed interval and then
//! reports success. The wait goes through [`Pause`] so the browser can use a
//! JS timer and tests can use a paused tokio clock.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let ticket = form.submit()?;
//! let outcome = simulator.run(&ticket).await;
//! let toast = form.complete(&ticket, &outcome);
//! ```

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

use crate::config::StudioConfig;
use crate::error::Result;
use crate::form::{GenerationReceipt, GenerationTicket};

/// Timer seam for the simulated delay.
///
/// Browser timer futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait Pause {
    /// Wait for `duration`; an error aborts the run
    async fn pause(&self, duration: Duration) -> Result<()>;
}

/// Runs the fixed-delay generation stand-in
pub struct GenerationSimulator<P> {
    pause: P,
    delay: Duration,
}

impl<P: Pause> GenerationSimulator<P> {
    pub const fn new(pause: P, delay: Duration) -> Self {
        Self { pause, delay }
    }

    pub const fn from_config(pause: P, config: &StudioConfig) -> Self {
        Self::new(pause, config.generation_delay())
    }

    /// Simulate generating the ticket's video
    pub async fn run(&self, ticket: &GenerationTicket) -> Result<GenerationReceipt> {
        tracing::debug!(id = %ticket.id, delay_ms = self.delay.as_millis(), "Simulating generation");
        self.pause.pause(self.delay).await?;
        Ok(GenerationReceipt {
            ticket_id: ticket.id,
            credits: ticket.credits,
            finished_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::StudioError;
    use crate::form::GenerationForm;
    use std::sync::Arc;

    struct TokioPause;

    #[async_trait(?Send)]
    impl Pause for TokioPause {
        async fn pause(&self, duration: Duration) -> Result<()> {
            tokio::time::sleep(duration).await;
            Ok(())
        }
    }

    struct FailingPause;

    #[async_trait(?Send)]
    impl Pause for FailingPause {
        async fn pause(&self, _duration: Duration) -> Result<()> {
            Err(StudioError::GenerationFailed("timer cancelled".into()))
        }
    }

    fn form() -> GenerationForm {
        GenerationForm::new(&StudioConfig::default(), Arc::new(Catalog::standard())).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_waits_configured_delay() {
        let simulator = GenerationSimulator::from_config(TokioPause, &StudioConfig::default());
        let mut form = form();
        form.set_prompt(&"v".repeat(50));
        form.select_duration(60).unwrap();

        let ticket = form.submit().unwrap();
        assert!(form.is_generating());
        assert_eq!(form.credits_required(), 2);

        let start = tokio::time::Instant::now();
        let outcome = simulator.run(&ticket).await;
        assert!(start.elapsed() >= Duration::from_millis(3000));

        let receipt = outcome.as_ref().unwrap();
        assert_eq!(receipt.ticket_id, ticket.id);
        assert_eq!(receipt.credits, 2);

        form.complete(&ticket, &outcome).unwrap();
        assert!(!form.is_generating());
        assert_eq!(form.prompt(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_until_delay_elapses() {
        let simulator = GenerationSimulator::from_config(TokioPause, &StudioConfig::default());
        let mut form = form();
        form.set_prompt(&"v".repeat(50));
        let ticket = form.submit().unwrap();

        let early = tokio::time::timeout(Duration::from_millis(2999), simulator.run(&ticket)).await;
        assert!(early.is_err());
        assert!(form.is_generating());
        assert_eq!(form.prompt_len(), 50);

        let outcome = simulator.run(&ticket).await;
        form.complete(&ticket, &outcome).unwrap();
        assert!(!form.is_generating());
        assert_eq!(form.prompt(), "");
    }

    #[tokio::test]
    async fn test_failed_pause_clears_busy_flag() {
        let simulator = GenerationSimulator::new(FailingPause, Duration::from_secs(3));
        let mut form = form();
        form.set_prompt("Golden light over a misty lake");
        let ticket = form.submit().unwrap();

        let outcome = simulator.run(&ticket).await;
        let toast = form.complete(&ticket, &outcome).unwrap();
        assert_eq!(toast.message, "Failed to generate video");
        assert!(!form.is_generating());
    }
}
