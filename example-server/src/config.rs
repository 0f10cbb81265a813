use axum_db_browser::BrowserConfig;
use serde::Deserialize;
use std::path::Path;

/// Environment variable that overrides the `activate` setting
pub const ACTIVATE_VARIABLE: &str = "ACTIVATE_DB_BROWSER";

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub logging: LoggingSection,

    #[serde(flatten)]
    pub browser: BrowserConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_base_path")]
    pub base_path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_listen() -> String {
    "127.0.0.1:3000".into()
}

fn default_base_path() -> String {
    "/db".into()
}

fn default_level() -> String {
    "info".into()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            base_path: default_base_path(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl ServerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let mut config = Self::parse(&content)?;
        if let Ok(value) = std::env::var(ACTIVATE_VARIABLE) {
            config.apply_activation_override(&value)?;
        }

        Ok(config)
    }

    fn parse(content: &str) -> anyhow::Result<Self> {
        let config: ServerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config: {}", e))?;
        config.browser.validate()?;
        Ok(config)
    }

    fn apply_activation_override(&mut self, value: &str) -> anyhow::Result<()> {
        self.browser.activate = match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" | "" => false,
            other => anyhow::bail!("{} must be a boolean, got '{}'", ACTIVATE_VARIABLE, other),
        };
        Ok(())
    }
}
