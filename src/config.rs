use crate::error::{PostsError, Result};
use crate::model::Post;
use crate::storage::{PostStore, seed_posts};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default = "seed_posts")]
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub const DEFAULT_PORT: u16 = 4000;

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_endpoint() -> String {
    "/graphql".to_string()
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            endpoint: default_endpoint(),
            graphiql: default_graphiql(),
        }
    }
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            posts: seed_posts(),
        }
    }
}

/// Values given on the command line or through the environment.
/// Each one that is set wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub graphiql: Option<bool>,
}

impl ServerSettings {
    /// `host:port`, resolved when the listener is bound.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Browsable URL of the endpoint. Wildcard hosts are shown as `localhost`.
    pub fn display_url(&self, port: u16) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "localhost",
            host => host,
        };
        format!("http://{}:{}{}", host, port, self.endpoint)
    }
}

impl PostsConfig {
    /// Loads a config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Self::from_yaml(&content)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to `null`, which means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn apply(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(graphiql) = overrides.graphiql {
            self.server.graphiql = graphiql;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.server.endpoint.starts_with('/') {
            return Err(PostsError::Config(format!(
                "Endpoint must start with '/': {}",
                self.server.endpoint
            )));
        }
        if self.server.host.is_empty() {
            return Err(PostsError::Config("Host cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn store(&self) -> PostStore {
        PostStore::new(self.posts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = PostsConfig::load(None).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.endpoint, "/graphql");
        assert!(config.server.graphiql);
        assert_eq!(config.posts, seed_posts());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = PostsConfig::from_yaml("   \n").unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.posts.len(), 2);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = PostsConfig::from_yaml("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.endpoint, "/graphql");
        assert_eq!(config.posts, seed_posts());
    }

    #[test]
    fn test_custom_posts_replace_seed() {
        let yaml = "posts:\n  - author: Ada\n    body: First\n";
        let config = PostsConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.posts, vec![Post::new("Ada", "First")]);
        assert_eq!(config.store().len(), 1);
    }

    #[test]
    fn test_empty_posts_list() {
        let config = PostsConfig::from_yaml("posts: []\n").unwrap();
        assert!(config.store().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  host: 127.0.0.1\n  graphiql: false").unwrap();

        let config = PostsConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.server.graphiql);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PostsConfig::load(Some(Path::new("/nonexistent/posts.yml"))).unwrap_err();
        assert!(matches!(err, PostsError::Io(_)));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let err = PostsConfig::from_yaml("server: [1, 2").unwrap_err();
        assert!(matches!(err, PostsError::Yaml(_)));
    }

    #[test]
    fn test_overrides_win() {
        let config = PostsConfig::from_yaml("server:\n  port: 8080\n")
            .unwrap()
            .apply(Overrides {
                host: Some("127.0.0.1".to_string()),
                port: Some(9000),
                graphiql: Some(false),
            })
            .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.server.graphiql);
    }

    #[test]
    fn test_unset_overrides_keep_file_values() {
        let config = PostsConfig::from_yaml("server:\n  port: 8080\n")
            .unwrap()
            .apply(Overrides::default())
            .unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_endpoint_must_be_absolute() {
        let config = PostsConfig::from_yaml("server:\n  endpoint: graphql\n").unwrap();
        assert!(matches!(config.validate(), Err(PostsError::Config(_))));
    }

    #[test]
    fn test_listen_addr() {
        let settings = ServerSettings {
            host: "localhost".to_string(),
            port: 4321,
            ..ServerSettings::default()
        };
        assert_eq!(settings.listen_addr(), "localhost:4321");
    }

    #[test]
    fn test_display_url_uses_configured_host() {
        let settings = ServerSettings {
            host: "127.0.0.1".to_string(),
            endpoint: "/api".to_string(),
            ..ServerSettings::default()
        };
        assert_eq!(settings.display_url(8080), "http://127.0.0.1:8080/api");
    }

    #[test]
    fn test_display_url_wildcard_host() {
        let settings = ServerSettings::default();
        assert_eq!(settings.display_url(4000), "http://localhost:4000/graphql");
    }
}
