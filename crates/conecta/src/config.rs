//! Connection configuration, loaded once at process start.

use crate::error::Error;
use crate::schema::SchemaVariant;

/// Connection target and schema selection for one run.
///
/// Values come from `DB_*` environment variables with the standard `PG*`
/// names as fallback, so the binaries run unchanged inside the compose setup
/// or against a local database. A `DATABASE_URL`, when present, overrides the
/// individual parts entirely.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Which of the two schema variants to provision and seed against.
    pub variant: SchemaVariant,
    url_override: Option<String>,
}

impl DbConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary lookup function.
    ///
    /// The binaries go through [`DbConfig::from_env`]; tests pass a closure
    /// over a map so they never mutate process-wide state.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let first = |keys: &[&str]| keys.iter().find_map(|key| get(key));

        let host = first(&["DB_HOST", "PGHOST"]).unwrap_or_else(|| "db".to_string());
        let port = match first(&["DB_PORT", "PGPORT"]) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("invalid port: {raw:?}")))?,
            None => 5432,
        };
        let database = first(&["DB_NAME", "PGDATABASE"]).unwrap_or_else(|| "appdb".to_string());
        let user = first(&["DB_USER", "PGUSER"]).unwrap_or_else(|| "app".to_string());
        let password = first(&["DB_PASS", "PGPASSWORD"]).unwrap_or_else(|| "secret".to_string());

        let variant = match get("SCHEMA_VARIANT") {
            Some(raw) => raw.parse::<SchemaVariant>().map_err(Error::Config)?,
            None => SchemaVariant::default(),
        };

        Ok(Self {
            host,
            port,
            database,
            user,
            password,
            variant,
            url_override: get("DATABASE_URL"),
        })
    }

    /// The connection URL for this configuration.
    pub fn url(&self) -> String {
        match &self.url_override {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.database
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DbConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.host, "db");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "appdb");
        assert_eq!(config.user, "app");
        assert_eq!(config.password, "secret");
        assert_eq!(config.variant, SchemaVariant::Strict);
        assert_eq!(config.url(), "postgres://app:secret@db:5432/appdb");
    }

    #[test]
    fn test_db_vars_win_over_pg_vars() {
        let config = DbConfig::from_lookup(lookup(&[
            ("DB_HOST", "primary"),
            ("PGHOST", "fallback"),
            ("PGPORT", "5433"),
        ]))
        .unwrap();

        assert_eq!(config.host, "primary");
        assert_eq!(config.port, 5433);
    }

    #[test]
    fn test_database_url_overrides_parts() {
        let config = DbConfig::from_lookup(lookup(&[
            ("DB_HOST", "ignored"),
            ("DATABASE_URL", "postgres://u:p@elsewhere:6543/other"),
        ]))
        .unwrap();

        assert_eq!(config.url(), "postgres://u:p@elsewhere:6543/other");
    }

    #[test]
    fn test_schema_variant_from_env() {
        let config = DbConfig::from_lookup(lookup(&[("SCHEMA_VARIANT", "loose")])).unwrap();
        assert_eq!(config.variant, SchemaVariant::Loose);

        let err = DbConfig::from_lookup(lookup(&[("SCHEMA_VARIANT", "sloppy")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_port() {
        let err = DbConfig::from_lookup(lookup(&[("DB_PORT", "abc")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
