use serde::{Deserialize, Serialize};

use crate::notify::{NotificationSink, NotificationTarget, SidebarNotification};
use crate::orchestrator::Orchestrator;

/// Messages the foreground surface sends to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InboundMessage {
    /// Typed question from the popup; answered through the direct path.
    AskGemini {
        #[serde(default)]
        question: String,
    },
    /// Text selected on a page plus the tab it came from; answered in the sidebar.
    ContextMenuSelection {
        #[serde(rename = "selectionText", default)]
        selection_text: String,
        #[serde(rename = "tabId")]
        target: NotificationTarget,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    DisplaySidebarAnswer(SidebarNotification),
}

impl From<SidebarNotification> for OutboundMessage {
    fn from(notification: SidebarNotification) -> Self {
        Self::DisplaySidebarAnswer(notification)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskReply {
    pub answer: String,
}

/// Routes one inbound message. Only `askGemini` produces a reply; a blank
/// question or selection is ignored.
pub async fn handle_message(
    orchestrator: &Orchestrator,
    sink: &dyn NotificationSink,
    message: InboundMessage,
) -> Option<AskReply> {
    match message {
        InboundMessage::AskGemini { question } => {
            let question = question.trim();
            if question.is_empty() {
                return None;
            }
            let answer = match orchestrator.ask_direct(question).await {
                Ok(answer) => answer,
                Err(e) => format!("Error: {e}"),
            };
            Some(AskReply { answer })
        }
        InboundMessage::ContextMenuSelection {
            selection_text,
            target,
        } => {
            let selection = selection_text.trim();
            if !selection.is_empty() {
                orchestrator.ask(selection, &target, sink).await;
            }
            None
        }
    }
}
