// ============================================================================
// USE NOTIFICATION HOOK - banner message with cancellable auto-clear
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::state::{Notification, NotificationCategory, NotificationState};

#[derive(Clone)]
pub struct UseNotificationHandle {
    state: Rc<RefCell<NotificationState>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    refresh: UseForceUpdateHandle,
    duration_ms: u32,
}

impl UseNotificationHandle {
    pub fn current(&self) -> Option<Notification> {
        self.state.borrow().current().cloned()
    }

    /// Shows `message` and schedules its removal. Replacing the stored
    /// `Timeout` drops, and so cancels, the previous one.
    pub fn announce(&self, message: impl Into<String>, category: NotificationCategory) {
        let ticket = self.state.borrow_mut().announce(message, category);

        let state = self.state.clone();
        let refresh = self.refresh.clone();
        let timeout = Timeout::new(self.duration_ms, move || {
            if state.borrow_mut().expire(ticket) {
                refresh.force_update();
            }
        });
        *self.timer.borrow_mut() = Some(timeout);

        self.refresh.force_update();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.announce(message, NotificationCategory::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::error!("❌ {}", message);
        self.announce(message, NotificationCategory::Error);
    }

    pub fn clear(&self) {
        self.timer.borrow_mut().take();
        self.state.borrow_mut().clear();
        self.refresh.force_update();
    }
}

#[hook]
pub fn use_notification() -> UseNotificationHandle {
    let state = use_mut_ref(NotificationState::default);
    let timer = use_mut_ref(|| None::<Timeout>);
    let refresh = use_force_update();

    UseNotificationHandle {
        state,
        timer,
        refresh,
        duration_ms: CONFIG.notification_timeout_ms,
    }
}
