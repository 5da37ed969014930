/// Runtime configuration, sourced from the environment with sensible
/// defaults so the service starts with no setup at all.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Simulated feed latency applied to the initial holdings load.
    pub load_delay_ms: u64,
    /// Simulated delay applied to each price refresh.
    pub refresh_delay_ms: u64,
    pub holdings_source: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            load_delay_ms: std::env::var("LOAD_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            refresh_delay_ms: std::env::var("REFRESH_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            holdings_source: std::env::var("HOLDINGS_SOURCE")
                .unwrap_or_else(|_| "mock".to_string()),
        }
    }
}
