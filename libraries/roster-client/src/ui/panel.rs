use crate::api::UserApi;
use crate::cache::{self, SharedCache, UserCache};
use crate::client::RosterClient;
use crate::error::Result;
use crate::types::ClientConfig;
use crate::ui::{AddUserModal, DeleteUserConfirm, EditUserModal, UsersPage};
use std::sync::Arc;

/// Every controller of the panel, wired to one API and one cache.
pub struct AdminPanel {
    pub users: UsersPage,
    pub add: AddUserModal,
    pub edit: EditUserModal,
    pub delete: DeleteUserConfirm,
    cache: SharedCache,
}

impl AdminPanel {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        let cache = cache::shared(UserCache::new());
        Self {
            users: UsersPage::new(api.clone(), cache.clone()),
            add: AddUserModal::new(api.clone(), cache.clone()),
            edit: EditUserModal::new(api.clone(), cache.clone()),
            delete: DeleteUserConfirm::new(api, cache.clone()),
            cache,
        }
    }

    /// Build a panel talking to a Roster endpoint over HTTP.
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let client = RosterClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }
}
