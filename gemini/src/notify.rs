use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tokio::sync::mpsc;

use crate::error::DeliveryError;

pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Opaque handle for the surface a result should be shown on, e.g. a browser tab.
/// Deserializes from either a numeric tab id or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NotificationTarget(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTarget {
    Tab(u64),
    Named(String),
}

impl<'de> Deserialize<'de> for NotificationTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawTarget::deserialize(deserializer)? {
            RawTarget::Tab(id) => id.into(),
            RawTarget::Named(name) => Self(name),
        })
    }
}

impl NotificationTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for NotificationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationTarget {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NotificationTarget {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for NotificationTarget {
    fn from(tab_id: u64) -> Self {
        Self(tab_id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarNotification {
    pub question: String,
    pub answer: String,
    pub loading: bool,
}

impl SidebarNotification {
    pub fn loading(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: LOADING_PLACEHOLDER.to_string(),
            loading: true,
        }
    }

    pub fn finished(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            loading: false,
        }
    }
}

/// Where the orchestrator sends loading and final states. Delivery is
/// fire-and-forget; callers decide what to do with a [`DeliveryError`].
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(
        &self,
        target: &NotificationTarget,
        notification: SidebarNotification,
    ) -> Result<(), DeliveryError>;
}

/// Writes every notification to the log. Used by the command-line runner.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn deliver(
        &self,
        target: &NotificationTarget,
        notification: SidebarNotification,
    ) -> Result<(), DeliveryError> {
        if notification.loading {
            log::info!("[{}] loading answer for {:?}", target, notification.question);
        } else {
            log::info!(
                "[{}] answer ready for {:?} ({} chars)",
                target,
                notification.question,
                notification.answer.chars().count()
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub target: NotificationTarget,
    pub notification: SidebarNotification,
}

/// Forwards notifications over an unbounded channel to whoever renders them.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Delivery>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Delivery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl NotificationSink for ChannelSink {
    async fn deliver(
        &self,
        target: &NotificationTarget,
        notification: SidebarNotification,
    ) -> Result<(), DeliveryError> {
        self.tx
            .send(Delivery {
                target: target.clone(),
                notification,
            })
            .map_err(|_| DeliveryError::Closed)
    }
}
