//! Headless UI flows for the admin panel.
//!
//! Each controller owns the transient state of one piece of the panel (a
//! dialog, a confirmation, the list page). They call the server through a
//! [`UserApi`](crate::UserApi) and apply results to the
//! [`SharedCache`](crate::SharedCache) they were given.

mod add_user;
mod delete_user;
mod edit_user;
mod form;
mod panel;
mod users_page;

pub use add_user::AddUserModal;
pub use delete_user::DeleteUserConfirm;
pub use edit_user::EditUserModal;
pub use form::{is_valid_email, FieldError, FormField, FormKind, UserFormValues};
pub use panel::AdminPanel;
pub use users_page::{GridField, PageStatus, UsersPage, DEFAULT_PAGE_SIZE, PAGE_SIZES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast shown after an operation settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub description: String,
}

impl Notification {
    pub fn success(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            description: description.into(),
        }
    }

    pub fn error(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            description: description.into(),
        }
    }
}

/// Progress of a user-triggered operation.
///
/// `Success` and `Failed` hold until the next user action resets them to
/// `Idle`. While `Submitting`, the submit control is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Submitting,
    Success(Notification),
    Failed(Notification),
}

impl ActionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Success(n) | Self::Failed(n) => Some(n),
            Self::Idle | Self::Submitting => None,
        }
    }

    /// Clear a settled outcome once the user acts again.
    pub(crate) fn settle(&mut self) {
        if !self.is_submitting() {
            *self = Self::Idle;
        }
    }
}
