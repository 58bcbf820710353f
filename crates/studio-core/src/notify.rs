//! Notification Surface
//!
//! Transient toasts raised by the form and the pricing grid. The queue keeps
//! at most `capacity` toasts; the oldest is dropped when a new one arrives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use uuid::Uuid;

use crate::config::StudioConfig;
use crate::error::StudioError;

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Whether the toast has outlived `ttl` at `now`
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let Ok(ttl) = chrono::Duration::from_std(ttl) else {
            return false;
        };
        now - self.created_at >= ttl
    }
}

impl From<&StudioError> for Toast {
    fn from(err: &StudioError) -> Self {
        Self::error(err.user_message())
    }
}

/// Bounded queue of visible toasts, oldest first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    capacity: usize,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::from_config(&StudioConfig::default())
    }
}

impl ToastQueue {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            ttl,
        }
    }

    pub fn from_config(config: &StudioConfig) -> Self {
        Self::new(config.max_toasts, config.toast_ttl())
    }

    /// Append a toast, returning its id
    pub fn push(&mut self, toast: Toast) -> Uuid {
        while self.toasts.len() >= self.capacity {
            if let Some(dropped) = self.toasts.pop_front() {
                tracing::debug!(id = %dropped.id, "Toast evicted");
            }
        }
        let id = toast.id;
        tracing::debug!(%id, kind = toast.kind.as_str(), message = %toast.message, "Toast raised");
        self.toasts.push_back(toast);
        id
    }

    /// Remove a toast; returns whether it was present
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast older than the configured lifetime
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let ttl = self.ttl;
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now, ttl));
        before - self.toasts.len()
    }

    pub fn to_vec(&self) -> Vec<Toast> {
        self.toasts.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Toast::success("Selected Pro package!"));
        assert_eq!(queue.len(), 1);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut queue = ToastQueue::new(3, Duration::from_secs(4));
        for i in 0..5 {
            queue.push(Toast::success(format!("toast {i}")));
        }
        let messages: Vec<_> = queue.to_vec().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, ["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn test_expire() {
        let mut queue = ToastQueue::new(3, Duration::from_millis(4000));
        let toast = Toast::success("done");
        let created = toast.created_at;
        queue.push(toast);

        assert_eq!(queue.expire(created + chrono::Duration::milliseconds(3999)), 0);
        assert_eq!(queue.expire(created + chrono::Duration::milliseconds(4000)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_error_toast_uses_user_message() {
        let toast = Toast::from(&StudioError::EmptyPrompt);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Please enter a video description");
    }
}
