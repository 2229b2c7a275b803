pub mod config;
pub mod error;
pub mod gemini_service;
pub mod messages;
pub mod models;
pub mod notify;
pub mod orchestrator;
pub mod presenter;
pub mod retry;

pub use config::GeminiConfig;
pub use error::{AskError, AttemptError, AttemptFailure, DeliveryError};
pub use gemini_service::{GeminiService, PromptStyle};
pub use messages::{handle_message, AskReply, InboundMessage, OutboundMessage};
pub use models::*;
pub use notify::{ChannelSink, Delivery, LogSink, NotificationSink, NotificationTarget, SidebarNotification};
pub use orchestrator::Orchestrator;
pub use presenter::{SidebarBody, SidebarPresenter, SidebarView};
pub use retry::{BackoffPolicy, RetryPolicy};
