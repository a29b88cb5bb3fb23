// ============================================================================
// NOTIFICATION STATE - transient success/error message
// ============================================================================
// Every announcement gets a ticket. Expiry is keyed by ticket, so a timer
// scheduled for a superseded message can never clear a newer one.
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    Success,
    Error,
}

impl NotificationCategory {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Success => "green",
            Self::Error => "red",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub category: NotificationCategory,
    pub ticket: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    current: Option<Notification>,
    last_ticket: u64,
}

impl NotificationState {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Shows `message`, superseding whatever was shown. Returns the ticket
    /// to hand to [`NotificationState::expire`].
    pub fn announce(&mut self, message: impl Into<String>, category: NotificationCategory) -> u64 {
        self.last_ticket += 1;
        self.current = Some(Notification {
            message: message.into(),
            category,
            ticket: self.last_ticket,
        });
        self.last_ticket
    }

    /// Clears the message if `ticket` is still the live one. Returns whether
    /// anything changed.
    pub fn expire(&mut self, ticket: u64) -> bool {
        match &self.current {
            Some(notification) if notification.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
