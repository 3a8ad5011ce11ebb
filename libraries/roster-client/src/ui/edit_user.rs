use crate::api::UserApi;
use crate::cache::SharedCache;
use crate::ui::form::{FieldError, FormKind, UserFormValues};
use crate::ui::{ActionState, Notification};
use roster_core::{UpdateUser, User, UserId};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Default)]
struct DialogState {
    editing: Option<UserId>,
    form: UserFormValues,
    action: ActionState,
}

/// The "Edit User" dialog, opened against one record.
pub struct EditUserModal {
    api: Arc<dyn UserApi>,
    cache: SharedCache,
    state: Mutex<DialogState>,
}

impl EditUserModal {
    pub fn new(api: Arc<dyn UserApi>, cache: SharedCache) -> Self {
        Self {
            api,
            cache,
            state: Mutex::new(DialogState::default()),
        }
    }

    /// Open for `user`, prefilling the form with its current values.
    pub async fn open(&self, user: &User) {
        let mut state = self.state.lock().await;
        if state.action.is_submitting() {
            return;
        }
        state.editing = Some(user.id.clone());
        state.form = UserFormValues::from_user(user);
        state.action = ActionState::Idle;
    }

    pub async fn cancel(&self) {
        let mut state = self.state.lock().await;
        if state.action.is_submitting() {
            return;
        }
        *state = DialogState::default();
    }

    pub async fn set_values(&self, values: UserFormValues) {
        let mut state = self.state.lock().await;
        if state.action.is_submitting() {
            return;
        }
        state.form = values;
        state.action.settle();
    }

    pub async fn values(&self) -> UserFormValues {
        self.state.lock().await.form.clone()
    }

    /// Id of the record being edited, if the dialog is open.
    pub async fn editing(&self) -> Option<UserId> {
        self.state.lock().await.editing.clone()
    }

    pub async fn is_open(&self) -> bool {
        self.state.lock().await.editing.is_some()
    }

    pub async fn state(&self) -> ActionState {
        self.state.lock().await.action.clone()
    }

    /// Validate and send a full-replace update for the open record.
    ///
    /// Returns `Ok(ActionState::Idle)` when the dialog is not open.
    pub async fn submit(&self) -> Result<ActionState, Vec<FieldError>> {
        let (id, update) = {
            let mut state = self.state.lock().await;
            if state.action.is_submitting() {
                return Ok(ActionState::Submitting);
            }
            let Some(id) = state.editing.clone() else {
                return Ok(ActionState::Idle);
            };
            let input = state.form.validate(FormKind::Edit)?;
            state.action = ActionState::Submitting;
            (id, UpdateUser::from(input))
        };

        let ticket = self.cache.write().await.issue_ticket();
        let result = self.api.update_user(&id, update).await;

        let mut state = self.state.lock().await;
        state.action = match result {
            Ok(user) => {
                info!(user_id = %user.id, "User updated");
                let notification = Notification::success(
                    "User Updated",
                    format!("User {} has been updated successfully!", user.name),
                );
                {
                    let mut cache = self.cache.write().await;
                    if cache.accept(&user.id, ticket) {
                        cache.replace_one(user);
                    }
                }
                state.editing = None;
                state.form = UserFormValues::default();
                ActionState::Success(notification)
            }
            Err(e) => {
                warn!(user_id = %id, error = %e, "Failed to update user");
                ActionState::Failed(update_failed())
            }
        };
        Ok(state.action.clone())
    }
}

pub(crate) fn update_failed() -> Notification {
    Notification::error(
        "Error",
        "There was an error updating the user. Please try again.",
    )
}
