//! Encode notification / diagnostic system.
//!
//! Non-fatal issues encountered while encoding are collected as
//! `Notification` items instead of aborting the write. Each one is also
//! forwarded to `tracing` at the matching level, so a subscriber sees the
//! same stream the caller later inspects in [`EncodedDwg::notifications`].
//!
//! [`EncodedDwg::notifications`]: crate::io::dwg::writer::EncodedDwg

use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// An object or class layout is not implemented; raw bytes were replayed.
    NotImplemented,
    /// A layout exists but has never been checked against real files.
    NotSupported,
    /// Non-fatal warning (handle code mismatch, corrected address, ...).
    Warning,
    /// Error that was recovered from (oversized picture, bad class index, ...).
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented => write!(f, "NotImplemented"),
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced during encoding.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The severity / category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Collects notifications during an encode call.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification and forward it to the log.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        let message = message.into();
        match notification_type {
            NotificationType::Error => tracing::error!("{message}"),
            NotificationType::Warning => tracing::warn!("{message}"),
            NotificationType::NotImplemented | NotificationType::NotSupported => {
                tracing::info!("{notification_type}: {message}")
            }
        }
        self.items.push(Notification::new(notification_type, message));
    }

    /// Shorthand for a [`NotificationType::Warning`].
    pub fn warn(&mut self, message: impl Into<String>) {
        self.notify(NotificationType::Warning, message);
    }

    /// Shorthand for a recovered [`NotificationType::Error`].
    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NotificationType::Error, message);
    }

    /// Move every notification of `other` into this collection.
    pub fn append(&mut self, other: &mut NotificationCollection) {
        self.items.append(&mut other.items);
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Check whether any notification message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.items.iter().any(|n| n.message.contains(needle))
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationType::Warning, "handle code mismatch");
        assert_eq!(n.notification_type, NotificationType::Warning);
        assert_eq!(n.message, "handle code mismatch");
    }

    #[test]
    fn test_collection_basics() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.warn("w1");
        c.error("e1");
        c.notify(NotificationType::Warning, "w2");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_type(NotificationType::Warning).len(), 2);
        assert!(c.has_type(NotificationType::Error));
        assert!(!c.has_type(NotificationType::NotImplemented));
        assert!(c.contains("e1"));
    }

    #[test]
    fn test_append_moves_items() {
        let mut a = NotificationCollection::new();
        let mut b = NotificationCollection::new();
        b.warn("from object writer");
        a.append(&mut b);
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_display() {
        let n = Notification::new(NotificationType::NotImplemented, "class MATERIAL");
        assert_eq!(format!("{}", n), "[NotImplemented] class MATERIAL");
    }
}
