use crate::api::UserApi;
use crate::cache::SharedCache;
use crate::ui::{ActionState, Notification};
use roster_core::UserId;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Default)]
struct ConfirmState {
    target: Option<UserId>,
    action: ActionState,
}

/// Confirmation step in front of a delete.
pub struct DeleteUserConfirm {
    api: Arc<dyn UserApi>,
    cache: SharedCache,
    state: Mutex<ConfirmState>,
}

impl DeleteUserConfirm {
    pub fn new(api: Arc<dyn UserApi>, cache: SharedCache) -> Self {
        Self {
            api,
            cache,
            state: Mutex::new(ConfirmState::default()),
        }
    }

    /// Ask for confirmation before deleting `id`.
    pub async fn request(&self, id: UserId) {
        let mut state = self.state.lock().await;
        if state.action.is_submitting() {
            return;
        }
        state.target = Some(id);
        state.action = ActionState::Idle;
    }

    pub async fn cancel(&self) {
        let mut state = self.state.lock().await;
        if state.action.is_submitting() {
            return;
        }
        *state = ConfirmState::default();
    }

    pub async fn pending(&self) -> Option<UserId> {
        self.state.lock().await.target.clone()
    }

    pub async fn state(&self) -> ActionState {
        self.state.lock().await.action.clone()
    }

    /// Delete the pending record.
    ///
    /// On failure the confirmation stays open so the user can retry.
    pub async fn confirm(&self) -> ActionState {
        let id = {
            let mut state = self.state.lock().await;
            if state.action.is_submitting() {
                return ActionState::Submitting;
            }
            let Some(id) = state.target.clone() else {
                return ActionState::Idle;
            };
            state.action = ActionState::Submitting;
            id
        };

        let ticket = self.cache.write().await.issue_ticket();
        let result = self.api.delete_user(&id).await;

        let mut state = self.state.lock().await;
        state.action = match result {
            Ok(user) => {
                info!(user_id = %user.id, name = %user.name, "User deleted");
                {
                    let mut cache = self.cache.write().await;
                    if cache.accept(&id, ticket) {
                        cache.remove_one(&id);
                    }
                }
                state.target = None;
                ActionState::Success(Notification::success(
                    "User Deleted Successfully",
                    "The user has been deleted.",
                ))
            }
            Err(e) => {
                warn!(user_id = %id, error = %e, "Failed to delete user");
                ActionState::Failed(Notification::error(
                    "Error Deleting User",
                    "There was an error while deleting the user. Please try again.",
                ))
            }
        };
        state.action.clone()
    }
}
