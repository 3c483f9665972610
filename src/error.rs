use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid post ID: {0}")]
    InvalidId(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PostsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_message() {
        let err = PostsError::InvalidId("abc".to_string());
        assert_eq!(err.to_string(), "Invalid post ID: abc");
    }

    #[test]
    fn test_bind_message_includes_address() {
        let err = PostsError::Bind {
            addr: "127.0.0.1:4000".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        let message = err.to_string();
        assert!(message.contains("127.0.0.1:4000"));
        assert!(message.contains("address in use"));
    }
}
