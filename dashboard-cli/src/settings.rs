use anyhow::{Context, Result, anyhow};
use dashboard_client::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) api_url: String,
    pub(crate) log_level: String,
    pub(crate) connect_timeout_secs: u64,
    pub(crate) request_timeout_secs: u64,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("DASHBOARD_API_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(normalize_server)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let connect_timeout_secs = parse_u64(&lookup, "HTTP_CONNECT_TIMEOUT_SECS", 5)?;
        let request_timeout_secs = parse_u64(&lookup, "HTTP_REQUEST_TIMEOUT_SECS", 15)?;

        Ok(Self {
            api_url,
            log_level,
            connect_timeout_secs,
            request_timeout_secs,
        })
    }
}

/// Добавляет `http://`, если схема не указана.
pub(crate) fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<u64> {
    let value = lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
