//! User notifications.
//!
//! The widget reports finished uploads through a [`Notifier`]. In the
//! browser, [`ToastNotifier`] shows them as toasts that dismiss
//! themselves.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::config::{MAX_NOTIFICATIONS, NOTIFICATION_DURATION_MS};
use crate::types::Notification;

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Pushes notifications into a toast signal and removes each one after
/// [`NOTIFICATION_DURATION_MS`].
#[derive(Clone)]
pub struct ToastNotifier {
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: Rc<Cell<u64>>,
}

impl ToastNotifier {
    pub fn new(set_toasts: WriteSignal<Vec<Toast>>) -> Self {
        Self {
            set_toasts,
            next_id: Rc::new(Cell::new(0)),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        log::info!("{} {}", notification.level.emoji(), notification.message);

        self.set_toasts
            .update(|toasts| push_toast(toasts, Toast { id, notification }));

        let set_toasts = self.set_toasts;
        Timeout::new(NOTIFICATION_DURATION_MS, move || {
            // the stack may be gone by now
            set_toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }
}

/// Append a toast, dropping the oldest ones beyond [`MAX_NOTIFICATIONS`].
pub fn push_toast(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_NOTIFICATIONS {
        let excess = toasts.len() - MAX_NOTIFICATIONS;
        toasts.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            notification: Notification::upload_succeeded(&format!("log-{}.csv", id)),
        }
    }

    #[test]
    fn test_push_keeps_newest_toasts() {
        let mut toasts = Vec::new();
        for id in 0..(MAX_NOTIFICATIONS as u64 + 2) {
            push_toast(&mut toasts, toast(id));
        }

        let ids: Vec<u64> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), MAX_NOTIFICATIONS);
        assert_eq!(ids.first(), Some(&2));
        assert_eq!(ids.last(), Some(&(MAX_NOTIFICATIONS as u64 + 1)));
    }

    #[test]
    fn test_push_below_limit_keeps_all() {
        let mut toasts = vec![toast(0)];
        push_toast(&mut toasts, toast(1));

        assert_eq!(toasts, vec![toast(0), toast(1)]);
    }
}
