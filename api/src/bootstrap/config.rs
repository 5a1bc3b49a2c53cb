use std::env;
use std::fmt;

pub const DEFAULT_SERVICE_NAME: &str = "Account REST API Service";

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub service_name: String,
    pub frontend_url: Option<String>,
    /// Full connection string; wins over the discrete database fields.
    pub database_uri: Option<String>,
    pub database_host: String,
    pub database_port: u16,
    pub database_user: String,
    pub database_password: String,
    pub database_name: String,
    pub database_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            service_name: DEFAULT_SERVICE_NAME.into(),
            frontend_url: None,
            database_uri: None,
            database_host: "localhost".into(),
            database_port: 5432,
            database_user: "postgres".into(),
            database_password: "postgres".into(),
            database_name: "postgres".into(),
            database_max_connections: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {v:?}"))?,
            None => defaults.port,
        };
        let database_port = match non_empty("DATABASE_PORT") {
            Some(v) => v.parse().map_err(|_| {
                anyhow::anyhow!("DATABASE_PORT must be a valid port number, got {v:?}")
            })?,
            None => defaults.database_port,
        };
        let database_max_connections = non_empty("DATABASE_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.database_max_connections);

        Ok(Self {
            port,
            service_name: non_empty("SERVICE_NAME").unwrap_or(defaults.service_name),
            frontend_url: non_empty("FRONTEND_URL"),
            database_uri: non_empty("DATABASE_URI"),
            database_host: non_empty("DATABASE_HOST").unwrap_or(defaults.database_host),
            database_port,
            database_user: non_empty("DATABASE_USER").unwrap_or(defaults.database_user),
            database_password: non_empty("DATABASE_PASSWORD")
                .unwrap_or(defaults.database_password),
            database_name: non_empty("DATABASE_NAME").unwrap_or(defaults.database_name),
            database_max_connections,
        })
    }

    pub fn database_url(&self) -> String {
        match &self.database_uri {
            Some(uri) => uri.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.database_user,
                self.database_password,
                self.database_host,
                self.database_port,
                self.database_name
            ),
        }
    }
}

// Keeps credentials out of startup logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("service_name", &self.service_name)
            .field("frontend_url", &self.frontend_url)
            .field("database_uri", &self.database_uri.as_ref().map(|_| "<redacted>"))
            .field("database_host", &self.database_host)
            .field("database_port", &self.database_port)
            .field("database_user", &self.database_user)
            .field("database_password", &"<redacted>")
            .field("database_name", &self.database_name)
            .field("database_max_connections", &self.database_max_connections)
            .finish()
    }
}
