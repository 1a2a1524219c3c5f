use std::fmt;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

/// Connection settings for the MySQL `world` schema.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Schema holding the `city` table.
    pub database: String,
    pub max_connections: u32,
    /// How long a request may wait for a pooled connection before failing.
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `DB_HOST`                 | `localhost` |
    /// | `DB_PORT`                 | `3306`      |
    /// | `DB_USER`                 | `root`      |
    /// | `DB_PASSWORD`             | (empty)     |
    /// | `DB_NAME`                 | `world`     |
    /// | `DB_MAX_CONNECTIONS`      | `10`        |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`        |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Panics on unparseable numeric values so misconfiguration fails at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let port: u16 = var("DB_PORT", "3306")
            .parse()
            .expect("DB_PORT must be a valid u16");

        let max_connections: u32 = var("DB_MAX_CONNECTIONS", "10")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let acquire_timeout_secs: u64 = var("DB_ACQUIRE_TIMEOUT_SECS", "30")
            .parse()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        Self {
            host: var("DB_HOST", "localhost"),
            port,
            user: var("DB_USER", "root"),
            password: var("DB_PASSWORD", ""),
            database: var("DB_NAME", "world"),
            max_connections,
            acquire_timeout_secs,
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

// Keeps the password out of startup logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}
