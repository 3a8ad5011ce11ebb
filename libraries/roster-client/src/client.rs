//! HTTP transport for the Roster GraphQL endpoint.

use crate::api::UserApi;
use crate::documents::{
    Operation, CREATE_USER, DELETE_USER, GET_USERS, GET_USER_BY_ID, UPDATE_USER,
};
use crate::error::{ClientError, Result};
use crate::types::{
    ClientConfig, CreateUserData, CreateUserVariables, DeleteUserData, GetUserByIdData,
    GetUsersData, GraphqlRequest, GraphqlResponse, IdVariables, UpdateUserData,
    UpdateUserVariables,
};
use async_trait::async_trait;
use reqwest::Client;
use roster_core::{CreateUser, UpdateUser, User, UserId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info, warn};
use url::Url;

/// Client for a Roster GraphQL endpoint.
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, RosterClient};
///
/// let client = RosterClient::new(ClientConfig::new("http://localhost:4000/"))?;
/// let users = client.get_users().await?;
/// println!("{} users", users.len());
/// ```
#[derive(Debug, Clone)]
pub struct RosterClient {
    http: Client,
    endpoint: String,
}

impl RosterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = normalize_url(&config.url)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, endpoint })
    }

    /// Normalized endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post an operation and decode its `data` payload.
    pub async fn execute<V, T>(&self, operation: Operation, variables: V) -> Result<T>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        debug!(operation = operation.name, endpoint = %self.endpoint, "Sending GraphQL request");

        let body = GraphqlRequest {
            query: operation.document,
            operation_name: operation.name,
            variables,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(operation = operation.name, status = %status, "GraphQL request rejected");
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let envelope: GraphqlResponse<T> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::ParseError(format!(
                    "Failed to parse {} response: {}",
                    operation.name, e
                ))
            }
        })?;

        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(operation = operation.name, error = %message, "GraphQL operation failed");
            return Err(ClientError::Graphql { message });
        }

        envelope.data.ok_or(ClientError::EmptyResponse)
    }
}

#[async_trait]
impl UserApi for RosterClient {
    async fn get_users(&self) -> Result<Vec<User>> {
        let data: GetUsersData = self.execute(GET_USERS, json!({})).await?;
        debug!(count = data.get_users.len(), "Fetched users");
        Ok(data.get_users)
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>> {
        let data: GetUserByIdData = self
            .execute(GET_USER_BY_ID, IdVariables { id: id.as_str() })
            .await?;
        Ok(data.get_user_by_id)
    }

    async fn create_user(&self, input: CreateUser) -> Result<User> {
        let data: CreateUserData = self
            .execute(CREATE_USER, CreateUserVariables::from(input))
            .await?;
        info!(user_id = %data.create_user.id, "User created");
        Ok(data.create_user)
    }

    async fn update_user(&self, id: &UserId, update: UpdateUser) -> Result<User> {
        let data: UpdateUserData = self
            .execute(UPDATE_USER, UpdateUserVariables::new(id.as_str(), update))
            .await?;
        info!(user_id = %id, "User updated");
        Ok(data.update_user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<User> {
        let data: DeleteUserData = self
            .execute(DELETE_USER, IdVariables { id: id.as_str() })
            .await?;
        info!(user_id = %id, "User deleted");
        Ok(data.delete_user)
    }
}

fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    let parsed = Url::parse(trimmed).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(ClientError::InvalidUrl("URL has no host".into()));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(
            normalize_url("http://localhost:4000///").unwrap(),
            "http://localhost:4000"
        );
        assert_eq!(
            normalize_url(" https://example.com/graphql/ ").unwrap(),
            "https://example.com/graphql"
        );
    }

    #[test]
    fn bad_urls_are_rejected() {
        assert!(matches!(normalize_url(""), Err(ClientError::InvalidUrl(_))));
        assert!(matches!(
            normalize_url("ftp://example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            normalize_url("http://"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
