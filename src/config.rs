use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "references.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Settings read from `refcat.toml`. Every field is optional; CLI flags win.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RefcatConfig {
    pub database: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
}

impl RefcatConfig {
    /// The config written by `refcat init`, with every default spelled out
    pub fn with_defaults() -> Self {
        Self {
            database: Some(DEFAULT_DATABASE.to_string()),
            host: Some(DEFAULT_HOST.to_string()),
            port: Some(DEFAULT_PORT),
            static_dir: Some(DEFAULT_STATIC_DIR.to_string()),
        }
    }

    pub fn database_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.database.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub fn host(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn port(&self, flag: Option<u16>) -> u16 {
        flag.or(self.port).unwrap_or(DEFAULT_PORT)
    }

    pub fn static_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.static_dir.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("refcat.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<RefcatConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: RefcatConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &RefcatConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load_config(Some(&dir.path().join("refcat.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("refcat.toml");

        write_config(&path, &RefcatConfig::with_defaults(), false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded, RefcatConfig::with_defaults());

        assert!(write_config(&path, &RefcatConfig::default(), false).is_err());
        write_config(&path, &RefcatConfig::default(), true).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap().unwrap(), RefcatConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("refcat.toml");
        std::fs::write(&path, "port = 8080\n").unwrap();

        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.port(None), 8080);
        assert_eq!(config.port(Some(9000)), 9000);
        assert_eq!(config.host(None), DEFAULT_HOST);
        assert_eq!(config.database_path(None), PathBuf::from(DEFAULT_DATABASE));
    }
}
