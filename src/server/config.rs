use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Endpoint of the remote sentiment service; fallback mode when unset.
    pub ai_endpoint: Option<String>,
    /// Credential for the remote sentiment service; fallback mode when unset.
    pub ai_key: Option<String>,
}

// Partial config for layering
#[derive(Deserialize, Default, Debug)]
struct PartialServerConfig {
    listen_addr: Option<String>,
    ai_endpoint: Option<String>,
    ai_key: Option<String>,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl ServerConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self, String> {
        dotenv::dotenv().ok();

        // 1. Load from file (optional)
        let file_config: PartialServerConfig = if let Some(path_str) = config_path {
            let path = Path::new(path_str);
            if path.exists() {
                let contents = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config file at {path:?}: {e}"))?;
                toml::from_str(&contents)
                    .map_err(|e| format!("Failed to parse TOML from config file at {path:?}: {e}"))?
            } else {
                PartialServerConfig::default()
            }
        } else {
            PartialServerConfig::default()
        };

        // 2. Merge with environment variables: environment overrides file
        let final_config = ServerConfig {
            listen_addr: env::var("LISTEN_ADDR")
                .ok()
                .or(file_config.listen_addr)
                .unwrap_or_else(default_listen_addr),
            ai_endpoint: env::var("AI_SERVICE_ENDPOINT").ok().or(file_config.ai_endpoint),
            ai_key: env::var("AI_SERVICE_KEY").ok().or(file_config.ai_key),
        };

        Ok(final_config)
    }
}
