use crate::api::UserApi;
use crate::cache::SharedCache;
use crate::ui::form::{FieldError, FormKind, UserFormValues};
use crate::ui::{ActionState, Notification};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Default)]
struct DialogState {
    open: bool,
    form: UserFormValues,
    action: ActionState,
}

/// The "Add User" dialog.
///
/// On success the dialog closes, the form resets and the new record is
/// appended to the cache. On failure the dialog stays open with the values
/// the user entered.
pub struct AddUserModal {
    api: Arc<dyn UserApi>,
    cache: SharedCache,
    state: Mutex<DialogState>,
}

impl AddUserModal {
    pub fn new(api: Arc<dyn UserApi>, cache: SharedCache) -> Self {
        Self {
            api,
            cache,
            state: Mutex::new(DialogState::default()),
        }
    }

    pub async fn open(&self) {
        let mut state = self.state.lock().await;
        state.open = true;
        state.action.settle();
    }

    /// Close without submitting. Ignored while a request is in flight.
    pub async fn cancel(&self) {
        let mut state = self.state.lock().await;
        if state.action.is_submitting() {
            return;
        }
        state.open = false;
        state.form = UserFormValues::default();
        state.action = ActionState::Idle;
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

    pub async fn is_open(&self) -> bool {
        self.state.lock().await.open
    }

    pub async fn state(&self) -> ActionState {
        self.state.lock().await.action.clone()
    }

    /// Validate the form and create the user.
    ///
    /// Returns the field failures when validation fails; no request is sent.
    /// While a previous submit is in flight this returns
    /// [`ActionState::Submitting`] without sending anything.
    pub async fn submit(&self) -> Result<ActionState, Vec<FieldError>> {
        let input = {
            let mut state = self.state.lock().await;
            if state.action.is_submitting() {
                return Ok(ActionState::Submitting);
            }
            let input = state.form.validate(FormKind::Add)?;
            state.action = ActionState::Submitting;
            input
        };

        let ticket = self.cache.write().await.issue_ticket();
        let result = self.api.create_user(input).await;

        let mut state = self.state.lock().await;
        state.action = match result {
            Ok(user) => {
                info!(user_id = %user.id, "User added");
                let notification = Notification::success(
                    "User Added Successfully!",
                    format!("User {} has been added.", user.name),
                );
                {
                    let mut cache = self.cache.write().await;
                    if cache.accept(&user.id, ticket) {
                        cache.add(user);
                    }
                }
                state.open = false;
                state.form = UserFormValues::default();
                ActionState::Success(notification)
            }
            Err(e) => {
                warn!(error = %e, "Failed to add user");
                ActionState::Failed(Notification::error(
                    "Error Adding User",
                    "There was an error while adding the user. Please try again.",
                ))
            }
        };
        Ok(state.action.clone())
    }
}
