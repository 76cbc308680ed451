use thiserror::Error;

/// Errors produced by configuration loading, connection setup, and schema
/// provisioning.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database unavailable after {attempts} connection attempts")]
    Unavailable { attempts: u32 },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::Unavailable { attempts: 30 };
        assert_eq!(
            err.to_string(),
            "Database unavailable after 30 connection attempts"
        );

        let err = Error::Config("invalid port: \"abc\"".to_string());
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_database_error_conversion() {
        let err: Error = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, Error::Database(_)));
    }
}
