// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// Errors from notify operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send to {recipient} failed: {reason}")]
    SendFailed { recipient: String, reason: String },
}

/// Adapter delivering a notification text to a recipient (a chat channel or
/// user identifier).
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError>;
}

/// Writes each notification to a stream, framed by its recipient.
///
/// Used for dry runs and for piping messages into an external sender.
#[derive(Clone)]
pub struct ConsoleNotifyAdapter {
    out: Arc<Mutex<Box<dyn AsyncWrite + Send + Unpin>>>,
}

impl ConsoleNotifyAdapter {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }

    pub fn new(out: impl AsyncWrite + Send + Unpin + 'static) -> Self {
        Self { out: Arc::new(Mutex::new(Box::new(out))) }
    }
}

impl Default for ConsoleNotifyAdapter {
    fn default() -> Self {
        Self::stdout()
    }
}

#[async_trait]
impl NotifyAdapter for ConsoleNotifyAdapter {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
        let framed = format!("--- {} ---\n{}\n", recipient, message.trim_end());
        let mut out = self.out.lock().await;
        let written = async {
            out.write_all(framed.as_bytes()).await?;
            out.flush().await
        }
        .await;
        match written {
            Ok(()) => {
                tracing::info!(%recipient, "notification written");
                Ok(())
            }
            Err(e) => Err(NotifyError::SendFailed {
                recipient: recipient.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{NotifyAdapter, NotifyError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashSet;
    use std::sync::Arc;

    /// Recorded notification
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct NotifyCall {
        pub recipient: String,
        pub message: String,
    }

    #[derive(Default)]
    struct FakeNotifyState {
        calls: Vec<NotifyCall>,
        failing: HashSet<String>,
    }

    /// Fake notification adapter for testing
    #[derive(Clone, Default)]
    pub struct FakeNotifyAdapter {
        inner: Arc<Mutex<FakeNotifyState>>,
    }

    impl FakeNotifyAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every send to `recipient` fail.
        pub fn fail_for(&self, recipient: &str) {
            self.inner.lock().failing.insert(recipient.to_string());
        }

        /// Get all recorded notifications
        pub fn calls(&self) -> Vec<NotifyCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl NotifyAdapter for FakeNotifyAdapter {
        async fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
            let mut state = self.inner.lock();
            if state.failing.contains(recipient) {
                return Err(NotifyError::SendFailed {
                    recipient: recipient.to_string(),
                    reason: "rejected by fake".to_string(),
                });
            }
            state
                .calls
                .push(NotifyCall { recipient: recipient.to_string(), message: message.to_string() });
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
