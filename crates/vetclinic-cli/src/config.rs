use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use vetclinic_client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use crate::presentation::formatters::DateLocale;

pub const CONFIG_ENV: &str = "VETCLINIC_CONFIG";
pub const API_BASE_ENV: &str = "VETCLINIC_API_BASE";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. VETCLINIC_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (recommended default)
/// 4. ~/.vetclinic/config.toml (fallback)
pub fn resolve_config_path(
    explicit_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    // Priority 2: VETCLINIC_CONFIG environment variable
    if let Some(env_path) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: platform config directory
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("vetclinic").join("config.toml"));
    }

    // Priority 4: ~/.vetclinic
    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".vetclinic").join("config.toml"));
    }

    Err(anyhow!(
        "Could not determine config path: no home directory or config directory found"
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Seconds before a request is abandoned; 0 waits forever.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub locale: String,
    /// 0 follows the terminal width.
    pub chart_width: u16,
    pub chart_height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: DateLocale::default().tag().to_string(),
            chart_width: 0,
            chart_height: 20,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Values given on the command line; each one wins over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
    pub locale: Option<DateLocale>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None, |name| std::env::var(name).ok())
    }

    /// Environment first, then the command line.
    pub fn apply_overrides(
        &mut self,
        env: impl Fn(&str) -> Option<String>,
        overrides: &Overrides,
    ) {
        if let Some(base) = env(API_BASE_ENV).filter(|b| !b.is_empty()) {
            self.api.base_url = base;
        }
        if let Some(base) = &overrides.api_base {
            self.api.base_url = base.clone();
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.api.timeout_secs = timeout;
        }
        if let Some(locale) = overrides.locale {
            self.display.locale = locale.tag().to_string();
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let timeout = match self.api.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        ClientConfig::new(self.api.base_url.clone()).with_timeout(timeout)
    }

    pub fn date_locale(&self) -> Result<DateLocale> {
        self.display
            .locale
            .parse()
            .with_context(|| "Invalid [display] locale in config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.display.locale, "ru-RU");
        assert_eq!(config.display.chart_width, 0);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.base_url = "http://vet.local/api".to_string();
        config.display.locale = "en-GB".to_string();
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api]\ntimeout_secs = 3\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.display, DisplayConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_invalid_toml_names_the_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
        Ok(())
    }

    #[test]
    fn test_path_priority() -> Result<()> {
        let explicit = resolve_config_path(
            Some(Path::new("/etc/vet.toml")),
            env(&[(CONFIG_ENV, "/tmp/env.toml")]),
        )?;
        assert_eq!(explicit, PathBuf::from("/etc/vet.toml"));

        let from_env = resolve_config_path(None, env(&[(CONFIG_ENV, "/tmp/env.toml")]))?;
        assert_eq!(from_env, PathBuf::from("/tmp/env.toml"));

        let fallback = resolve_config_path(None, env(&[]))?;
        assert!(fallback.ends_with("config.toml"));
        Ok(())
    }

    #[test]
    fn test_flags_win_over_environment() {
        let mut config = Config::default();
        config.apply_overrides(
            env(&[(API_BASE_ENV, "http://env/api")]),
            &Overrides::default(),
        );
        assert_eq!(config.api.base_url, "http://env/api");

        config.apply_overrides(
            env(&[(API_BASE_ENV, "http://env/api")]),
            &Overrides {
                api_base: Some("http://flag/api".to_string()),
                timeout_secs: Some(0),
                locale: Some(DateLocale::Iso),
            },
        );
        assert_eq!(config.api.base_url, "http://flag/api");
        assert_eq!(config.client_config().timeout, None);
        assert_eq!(config.date_locale().unwrap(), DateLocale::Iso);
    }

    #[test]
    fn test_unknown_locale_is_an_error() {
        let mut config = Config::default();
        config.display.locale = "xx-YY".to_string();
        assert!(config.date_locale().is_err());
    }
}
