use crate::api::UserApi;
use crate::cache::SharedCache;
use crate::ui::edit_user::update_failed;
use crate::ui::form::is_valid_email;
use crate::ui::{ActionState, Notification};
use roster_core::{Birthdate, CoreError, Role, UpdateUser, User, UserId, UserStatus};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Page sizes the grid offers.
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Load state of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    Ready,
    /// Text shown in place of the grid
    Error(String),
}

/// Editable grid columns. The id column is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridField {
    Name,
    Email,
    Role,
    Status,
    Birthdate,
}

#[derive(Debug)]
struct PageState {
    status: PageStatus,
    page: usize,
    page_size: usize,
    edit: ActionState,
}

/// The user list page: fetch, client-side pagination and inline edits.
pub struct UsersPage {
    api: Arc<dyn UserApi>,
    cache: SharedCache,
    state: Mutex<PageState>,
}

impl UsersPage {
    pub fn new(api: Arc<dyn UserApi>, cache: SharedCache) -> Self {
        Self {
            api,
            cache,
            state: Mutex::new(PageState {
                status: PageStatus::Loading,
                page: 0,
                page_size: DEFAULT_PAGE_SIZE,
                edit: ActionState::Idle,
            }),
        }
    }

    /// Fetch the full list and replace the cache with it.
    ///
    /// Mutations that resolve while the fetch is in flight are kept.
    pub async fn load(&self) -> PageStatus {
        self.state.lock().await.status = PageStatus::Loading;

        let ticket = self.cache.write().await.issue_ticket();
        let result = self.api.get_users().await;

        let status = match result {
            Ok(users) => {
                let count = users.len();
                if self.cache.write().await.apply_snapshot(ticket, users) {
                    debug!(count, "User list loaded");
                } else {
                    debug!("Discarding user list older than one already loaded");
                }
                PageStatus::Ready
            }
            Err(e) => {
                warn!(error = %e, "Failed to load users");
                PageStatus::Error(format!("Error: {}", e))
            }
        };

        let mut state = self.state.lock().await;
        state.status = status.clone();
        status
    }

    pub async fn status(&self) -> PageStatus {
        self.state.lock().await.status.clone()
    }

    /// Records on the current page.
    pub async fn rows(&self) -> Vec<User> {
        let (page, page_size) = {
            let state = self.state.lock().await;
            (state.page, state.page_size)
        };
        let cache = self.cache.read().await;
        let page = page.min(page_count(cache.len(), page_size).saturating_sub(1));
        cache
            .users()
            .iter()
            .skip(page * page_size)
            .take(page_size)
            .cloned()
            .collect()
    }

    /// Total records across every page.
    pub async fn total_rows(&self) -> usize {
        self.cache.read().await.len()
    }

    pub async fn page(&self) -> usize {
        self.state.lock().await.page
    }

    pub async fn page_size(&self) -> usize {
        self.state.lock().await.page_size
    }

    /// Number of pages; at least one, even when empty.
    pub async fn page_count(&self) -> usize {
        let page_size = self.state.lock().await.page_size;
        page_count(self.cache.read().await.len(), page_size).max(1)
    }

    /// Jump to a zero-based page, clamped to the last one.
    pub async fn set_page(&self, page: usize) {
        let last = self.page_count().await - 1;
        self.state.lock().await.page = page.min(last);
    }

    /// Change the page size. Returns `false` for a size the grid does not
    /// offer.
    pub async fn set_page_size(&self, size: usize) -> bool {
        if !PAGE_SIZES.contains(&size) {
            return false;
        }
        let mut state = self.state.lock().await;
        state.page_size = size;
        state.page = 0;
        true
    }

    pub async fn edit_state(&self) -> ActionState {
        self.state.lock().await.edit.clone()
    }

    /// Commit an inline cell edit.
    ///
    /// The update sent is the cached record with one field replaced. A value
    /// that does not parse for its column fails without a request.
    pub async fn edit_cell(&self, id: &UserId, field: GridField, value: &str) -> ActionState {
        {
            let mut state = self.state.lock().await;
            if state.edit.is_submitting() {
                return ActionState::Submitting;
            }
            state.edit = ActionState::Submitting;
        }

        let current = self.cache.read().await.get(id).cloned();
        let update = match current {
            Some(user) => apply_cell(user.to_update(), field, value),
            None => Err(CoreError::invalid_input(format!("no cached user {}", id))),
        };

        let outcome = match update {
            Ok(update) => self.send_update(id, update).await,
            Err(e) => {
                warn!(user_id = %id, field = ?field, error = %e, "Rejected cell edit");
                ActionState::Failed(update_failed())
            }
        };

        let mut state = self.state.lock().await;
        state.edit = outcome.clone();
        outcome
    }

    async fn send_update(&self, id: &UserId, update: UpdateUser) -> ActionState {
        let ticket = self.cache.write().await.issue_ticket();
        match self.api.update_user(id, update).await {
            Ok(user) => {
                info!(user_id = %user.id, "User updated from grid");
                let notification = Notification::success(
                    "User Updated",
                    format!("User {} has been updated successfully!", user.name),
                );
                let mut cache = self.cache.write().await;
                if cache.accept(&user.id, ticket) {
                    cache.replace_one(user);
                }
                ActionState::Success(notification)
            }
            Err(e) => {
                warn!(user_id = %id, error = %e, "Failed to update user from grid");
                ActionState::Failed(update_failed())
            }
        }
    }
}

fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

fn apply_cell(mut update: UpdateUser, field: GridField, value: &str) -> Result<UpdateUser, CoreError> {
    let value = value.trim();
    match field {
        GridField::Name => {
            if value.is_empty() {
                return Err(CoreError::invalid_input("name cannot be empty"));
            }
            update.name = value.to_string();
        }
        GridField::Email => {
            if !is_valid_email(value) {
                return Err(CoreError::invalid_input(format!("invalid email {}", value)));
            }
            update.email = value.to_string();
        }
        GridField::Role => update.role = value.parse::<Role>()?,
        GridField::Status => update.status = value.parse::<UserStatus>()?,
        GridField::Birthdate => update.birthdate = Birthdate::parse(value)?,
    }
    Ok(update)
}
