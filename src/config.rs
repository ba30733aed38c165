const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body; bigger bodies are rejected as unreadable.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Loads configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            host: match lookup("HOST") {
                Some(host) if host.trim().is_empty() => anyhow::bail!("HOST cannot be empty"),
                Some(host) => host.trim().to_string(),
                None => DEFAULT_HOST.to_string(),
            },
            port: lookup("PORT")
                .map(|port| {
                    port.trim()
                        .parse::<u16>()
                        .ok()
                        .filter(|port| *port != 0)
                        .ok_or_else(|| {
                            anyhow::anyhow!("PORT must be a valid number between 1-65535")
                        })
                })
                .transpose()?
                .unwrap_or(DEFAULT_PORT),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .map(|limit| {
                    limit
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .filter(|limit| *limit > 0)
                        .ok_or_else(|| anyhow::anyhow!("MAX_BODY_BYTES must be a positive integer"))
                })
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        };

        tracing::debug!("Server Host: {}", config.host);
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Max body bytes: {}", config.max_body_bytes);

        Ok(config)
    }

    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
