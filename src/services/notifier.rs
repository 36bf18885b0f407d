//! Alert delivery interface.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::services::error::ServiceError;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Best-effort delivery of an opaque text payload.
    async fn send(&self, text: &str) -> Result<(), ServiceError>;
}

/// Keeps every message in memory instead of delivering it.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), ServiceError> {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(text.to_string());
        }
        Ok(())
    }
}
