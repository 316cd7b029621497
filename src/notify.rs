// ABOUTME: Toast notifications as an injected fire-and-forget capability
// Pages emit through a Notifier; the ToastCenter drains and displays them until they expire

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::debug;

use crate::config::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    /// Overrides the configured lifetime for this kind when set
    pub duration: Option<Duration>,
}

impl Notification {
    fn new(notification_type: NotificationType, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            notification_type,
            created_at: Instant::now(),
            duration: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationType::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationType::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NotificationType::Info, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(NotificationType::Warning, title)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Capability to show a message to the user. No result, no ordering guarantee.
pub trait Notifier {
    fn emit(&self, notification: Notification);
}

/// Notifier backed by an unbounded channel into the toast surface
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier for ChannelNotifier {
    fn emit(&self, notification: Notification) {
        debug!(title = %notification.title, "Emitting notification");
        // Receiver gone means the UI is shutting down
        let _ = self.tx.send(notification);
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_after: Duration,
}

impl Toast {
    pub fn is_expired(&self) -> bool {
        self.notification.created_at.elapsed() > self.expires_after
    }
}

/// The toast surface: receives notifications and keeps the live ones
#[derive(Debug)]
pub struct ToastCenter {
    rx: mpsc::UnboundedReceiver<Notification>,
    toasts: Vec<Toast>,
    lifetimes: NotificationConfig,
}

impl ToastCenter {
    /// Create the surface and the notifier that feeds it
    pub fn new(lifetimes: NotificationConfig) -> (Self, ChannelNotifier) {
        let (tx, rx) = mpsc::unbounded_channel();
        let center = Self {
            rx,
            toasts: Vec::new(),
            lifetimes,
        };
        (center, ChannelNotifier { tx })
    }

    /// Pull everything emitted since the last call and drop expired toasts
    pub fn tick(&mut self) {
        while let Ok(notification) = self.rx.try_recv() {
            let expires_after = notification
                .duration
                .unwrap_or_else(|| self.lifetimes.lifetime(notification.notification_type));
            self.toasts.push(Toast {
                notification,
                expires_after,
            });
        }
        self.toasts.retain(|toast| !toast.is_expired());
    }

    /// Live toasts, newest last
    pub fn current(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emitted_notifications_appear_after_tick() {
        let (mut center, notifier) = ToastCenter::new(NotificationConfig::default());
        notifier.emit(Notification::success("Saved").with_description("All good"));
        notifier.emit(Notification::info("Heads up"));
        assert!(center.current().is_empty());

        center.tick();
        let titles: Vec<_> = center
            .current()
            .iter()
            .map(|t| t.notification.title.as_str())
            .collect();
        assert_eq!(titles, ["Saved", "Heads up"]);
        assert_eq!(
            center.current()[0].notification.description.as_deref(),
            Some("All good")
        );
    }

    #[test]
    fn test_lifetime_follows_notification_type() {
        let config = NotificationConfig::default();
        let (mut center, notifier) = ToastCenter::new(config.clone());
        notifier.emit(Notification::error("Broken"));
        center.tick();
        assert_eq!(center.current()[0].expires_after, config.lifetime(NotificationType::Error));
    }

    #[test]
    fn test_expired_toasts_are_dropped() {
        let (mut center, notifier) = ToastCenter::new(NotificationConfig::default());
        notifier.emit(Notification::warning("Gone").with_duration(Duration::ZERO));
        std::thread::sleep(Duration::from_millis(5));
        center.tick();
        assert!(center.current().is_empty());
    }

    #[test]
    fn test_emit_after_center_dropped_is_silent() {
        let (center, notifier) = ToastCenter::new(NotificationConfig::default());
        drop(center);
        notifier.emit(Notification::info("Nobody listening"));
    }
}
