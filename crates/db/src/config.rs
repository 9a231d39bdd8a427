use std::fmt;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

/// Connection settings for the catalog database.
///
/// Populated once at startup by the API's configuration loader.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Upper bound on concurrently open connections.
    pub max_connections: u32,
    /// How long a query waits for a free connection before failing.
    ///
    /// The query deadline also covers acquisition, so only values below
    /// `query_timeout` change behaviour once the pool exists. The first
    /// connection made by `create_pool` is bounded by this value alone.
    pub acquire_timeout: Duration,
    /// Deadline applied to each catalog query, acquisition included.
    pub query_timeout: Duration,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 3306,
            user: "root".into(),
            password: String::new(),
            name: "db_cinematic".into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(10),
            query_timeout: Duration::from_secs(10),
        }
    }
}

// Hand-written so the password never reaches the logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("query_timeout", &self.query_timeout)
            .finish()
    }
}
