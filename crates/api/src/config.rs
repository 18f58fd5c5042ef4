/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upstream PokéAPI base URL, no trailing slash (default: the public
    /// deployment).
    pub pokeapi_url: String,
    /// Timeout for individual PokéAPI requests in seconds (default: `10`).
    pub pokeapi_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                          |
    /// |-------------------------|----------------------------------|
    /// | `HOST`                  | `0.0.0.0`                        |
    /// | `PORT`                  | `5000`                           |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                             |
    /// | `POKEAPI_URL`           | `https://pokeapi.co/api/v2`      |
    /// | `POKEAPI_TIMEOUT_SECS`  | `10`                             |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let pokeapi_url = std::env::var("POKEAPI_URL")
            .unwrap_or_else(|_| pokecompanion_pokeapi::client::DEFAULT_BASE_URL.into());

        let pokeapi_timeout_secs: u64 = std::env::var("POKEAPI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("POKEAPI_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            pokeapi_url,
            pokeapi_timeout_secs,
        }
    }
}
