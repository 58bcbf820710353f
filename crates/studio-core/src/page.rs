//! Home View Model
//!
//! Ties the form, the catalog and the notification surface together so each
//! user action maps to one call that also raises the right toast.

use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::{Catalog, PackageTier};
use crate::config::StudioConfig;
use crate::error::{Result, StudioError};
use crate::form::{GenerationForm, GenerationReceipt, GenerationTicket};
use crate::notify::{Toast, ToastQueue};

/// Everything the home view renders from
#[derive(Clone, Debug)]
pub struct StudioPage {
    pub form: GenerationForm,
    pub toasts: ToastQueue,
    catalog: Arc<Catalog>,
}

impl StudioPage {
    pub fn new(config: &StudioConfig) -> Result<Self> {
        Self::with_catalog(config, Catalog::standard())
    }

    pub fn with_catalog(config: &StudioConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        let catalog = Arc::new(catalog);
        Ok(Self {
            form: GenerationForm::new(config, Arc::clone(&catalog))?,
            toasts: ToastQueue::from_config(config),
            catalog,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// "Get Started" on a pricing card: only a notification
    pub fn select_package(&mut self, tier: PackageTier) -> Result<Uuid> {
        let notice = self
            .catalog
            .package(tier)
            .map(|p| p.selection_notice())
            .ok_or_else(|| StudioError::UnknownPackage(tier.to_string()))?;
        tracing::info!(package = tier.as_str(), "Package selected");
        Ok(self.toasts.push(Toast::success(notice)))
    }

    /// Submit the form, raising either the "started" or a validation toast
    pub fn submit(&mut self) -> Result<GenerationTicket> {
        match self.form.submit() {
            Ok(ticket) => {
                self.toasts.push(Toast::success(ticket.started_message()));
                Ok(ticket)
            }
            Err(err) => {
                if !err.is_validation() {
                    tracing::warn!(error = %err, "Submit refused");
                }
                self.toasts.push(Toast::from(&err));
                Err(err)
            }
        }
    }

    /// Apply a finished run to the form and raise its toast
    pub fn complete(&mut self, ticket: &GenerationTicket, outcome: &Result<GenerationReceipt>) {
        if let Some(toast) = self.form.complete(ticket, outcome) {
            self.toasts.push(toast);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;
    use chrono::Utc;

    fn page() -> StudioPage {
        StudioPage::new(&StudioConfig::default()).unwrap()
    }

    #[test]
    fn test_select_pro_only_notifies() {
        let mut page = page();
        page.form.set_prompt("A cinematic shot of a sunrise");
        page.form.select_duration(120).unwrap();
        let catalog_before = page.catalog().clone();

        page.select_package(PackageTier::Pro).unwrap();

        let toasts = page.toasts.to_vec();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, "Selected Pro package!");

        assert_eq!(page.catalog(), &catalog_before);
        assert_eq!(page.form.prompt(), "A cinematic shot of a sunrise");
        assert_eq!(page.form.duration_secs(), 120);
        assert!(!page.form.is_generating());
    }

    #[test]
    fn test_rejected_submit_raises_error_toast() {
        let mut page = page();
        page.form.set_prompt("Hi");
        assert!(page.submit().is_err());

        let toasts = page.toasts.to_vec();
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(
            toasts[0].message,
            "Please provide a more detailed description (at least 10 characters)"
        );
        assert!(!page.form.is_generating());
    }

    #[test]
    fn test_full_run_toasts() {
        let mut page = page();
        page.form.set_prompt("Morning mist rolling over the water");
        let ticket = page.submit().unwrap();
        page.complete(
            &ticket,
            &Ok(GenerationReceipt {
                ticket_id: ticket.id,
                credits: ticket.credits,
                finished_at: Utc::now(),
            }),
        );

        let messages: Vec<_> = page.toasts.to_vec().into_iter().map(|t| t.message).collect();
        assert_eq!(
            messages,
            [
                "Video generation started! Using 1 credits.",
                "Video generated successfully!",
            ]
        );
        assert_eq!(page.form.prompt(), "");
    }
}
