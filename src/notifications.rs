//! Notification feed persisted alongside the rest of the demo state. Newest
//! entries sit at the front, matching what the badge and feed UI expect.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::store::{read_typed, write_typed, StateStore, StoreError, NOTIFICATIONS_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Mission,
    Transfer,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub date: String,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub fn mission_completed(text: &str, at: DateTime<Local>) -> Self {
        Self {
            kind: NotificationKind::Mission,
            title: "Mission complete".to_string(),
            message: format!("Sub-mission done: {text}"),
            date: at.format("%-m.%-d %H:%M").to_string(),
            read: false,
        }
    }
}

/// Prepend a notification to the stored feed.
pub fn push_notification<S: StateStore + ?Sized>(
    store: &S,
    notification: Notification,
) -> Result<(), StoreError> {
    let mut feed = read_typed::<Vec<Notification>, S>(store, NOTIFICATIONS_KEY)?.unwrap_or_default();
    feed.insert(0, notification);
    write_typed(store, NOTIFICATIONS_KEY, &feed)
}

/// Unread count backing the nav badge.
pub fn unread_count<S: StateStore + ?Sized>(store: &S) -> Result<usize, StoreError> {
    let feed = read_typed::<Vec<Notification>, S>(store, NOTIFICATIONS_KEY)?.unwrap_or_default();
    Ok(feed.iter().filter(|notification| !notification.read).count())
}
