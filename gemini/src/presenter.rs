use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::DeliveryError;
use crate::notify::{NotificationSink, NotificationTarget, SidebarNotification};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarBody {
    Loading,
    Answer(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub question: String,
    pub body: SidebarBody,
}

/// In-memory model of the injected sidebar: one view per target, each render
/// replacing whatever was shown. Notifications are applied in arrival order
/// with no staleness check, so a slow earlier query can overwrite a newer one.
#[derive(Debug, Default)]
pub struct SidebarPresenter {
    views: Mutex<HashMap<NotificationTarget, SidebarView>>,
}

impl SidebarPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn views(&self) -> MutexGuard<'_, HashMap<NotificationTarget, SidebarView>> {
        self.views.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Shows `notification` on `target`, creating the view if it is missing.
    pub fn render(&self, target: &NotificationTarget, notification: SidebarNotification) {
        let body = if notification.loading {
            SidebarBody::Loading
        } else {
            SidebarBody::Answer(notification.answer)
        };

        self.views().insert(
            target.clone(),
            SidebarView {
                question: notification.question,
                body,
            },
        );
    }

    /// Closes the view. Returns whether one was open.
    pub fn dismiss(&self, target: &NotificationTarget) -> bool {
        self.views().remove(target).is_some()
    }

    pub fn view(&self, target: &NotificationTarget) -> Option<SidebarView> {
        self.views().get(target).cloned()
    }
}

#[async_trait]
impl NotificationSink for SidebarPresenter {
    async fn deliver(
        &self,
        target: &NotificationTarget,
        notification: SidebarNotification,
    ) -> Result<(), DeliveryError> {
        self.render(target, notification);
        Ok(())
    }
}
