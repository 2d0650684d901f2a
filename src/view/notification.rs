use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

pub const DEFAULT_TOASTER: &str = "b-toaster-top-center";
pub const AUTO_HIDE_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Info,
    Success,
    Danger,
}

/// A toast request. Display is up to whoever drains the [`Notifier`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message_key: String,
    pub param: Option<String>,
    /// `message_key` rendered in the current language.
    pub message: String,
    pub toaster: &'static str,
    pub title: &'static str,
    pub variant: Variant,
    pub solid: bool,
    #[serde(skip)]
    pub auto_hide_delay: Duration,
}

impl Notification {
    pub fn new(
        title: &'static str,
        variant: Variant,
        message_key: impl Into<String>,
        param: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message_key: message_key.into(),
            param,
            message: message.into(),
            toaster: DEFAULT_TOASTER,
            title,
            variant,
            solid: true,
            auto_hide_delay: AUTO_HIDE_DELAY,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn toast(&self, notification: Notification);
}

/// Forwards notifications to a channel drained by the display layer.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn toast(&self, notification: Notification) {
        if let Err(err) = self.tx.send(notification) {
            warn!(key = %err.0.message_key, "Notification dropped: no display attached");
        }
    }
}
