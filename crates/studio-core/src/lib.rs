//! # studio-core
//!
//! Platform-independent model behind the SKV Global AI video studio page.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      StudioPage                           │
//! │  ┌──────────────┐  ┌──────────────┐  ┌─────────────────┐  │
//! │  │GenerationForm│──│   Catalog    │  │   ToastQueue    │  │
//! │  │ prompt/busy  │  │ packages,    │  │ notifications   │  │
//! │  └──────┬───────┘  │ durations    │  └─────────────────┘  │
//! │         │          └──────────────┘                       │
//! │  ┌──────▼──────────────┐                                  │
//! │  │ GenerationSimulator │── Pause (browser timer / tokio)  │
//! │  └─────────────────────┘                                  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here talks to a network or stores anything: generation and
//! purchases are simulated with a fixed delay and a toast.

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod generation;
pub mod notify;
pub mod page;

pub use catalog::{Catalog, CreditPackage, DurationOption, Feature, PackageTier};
pub use config::StudioConfig;
pub use error::{Result, StudioError};
pub use form::{GenerationForm, GenerationReceipt, GenerationTicket};
pub use generation::{GenerationSimulator, Pause};
pub use notify::{Toast, ToastKind, ToastQueue};
pub use page::StudioPage;
