/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_graphql")]
    pub graphql: GraphqlSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphqlSettings {
    /// Serve GraphiQL on `GET /`
    #[serde(default = "default_playground")]
    pub playground: bool,

    /// Maximum selection depth of an incoming query
    #[serde(default = "default_depth_limit")]
    pub depth_limit: usize,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` when given, otherwise `config.toml` if it exists, then
    /// applies `ROSTER_` variables on top (`ROSTER_SERVER__PORT=4001`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = Path::new("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Port must be non-zero (set ROSTER_SERVER__PORT)".to_string(),
            ));
        }

        if self.graphql.depth_limit == 0 {
            return Err(ServerError::Config(
                "GraphQL depth limit must be at least 1".to_string(),
            ));
        }

        self.socket_addr().map(|_| ())
    }

    /// Address the listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let host = self.server.host.parse::<IpAddr>().map_err(|e| {
            ServerError::Config(format!("Invalid host {:?}: {}", self.server.host, e))
        })?;

        Ok(SocketAddr::from((host, self.server.port)))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_graphql() -> GraphqlSettings {
    GraphqlSettings {
        playground: default_playground(),
        depth_limit: default_depth_limit(),
    }
}

fn default_playground() -> bool {
    true
}

fn default_depth_limit() -> usize {
    8
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            graphql: default_graphql(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_listen_on_port_4000() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 4000);
        assert!(config.graphql.playground);
        assert_eq!(
            config.socket_addr().unwrap(),
            "0.0.0.0:4000".parse::<SocketAddr>().unwrap()
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let mut config = ServerConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn validate_rejects_bad_host() {
        let mut config = ServerConfig::default();
        config.server.host = "not an ip".to_string();
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn validate_rejects_zero_depth() {
        let mut config = ServerConfig::default();
        config.graphql.depth_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_toml_file_and_fills_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[server]\nhost = \"127.0.0.1\"\nport = 4100\n").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.graphql.depth_limit, 8);
    }

    #[test]
    fn load_missing_file_is_a_config_error() {
        let result = ServerConfig::load(Some(Path::new("/nonexistent/roster.toml")));
        assert!(matches!(result, Err(ServerError::Config(_))));
    }
}
