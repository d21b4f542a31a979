use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON document holding every stored object.
    #[serde(default = "default_file_path")]
    pub file_path: String,
    /// Re-read the backing file after every request.
    #[serde(default = "default_refresh")]
    pub refresh_after_request: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { file_path: default_file_path(), refresh_after_request: default_refresh() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 5000 }
fn default_file_path() -> String { "file.json".into() }
fn default_refresh() -> bool { true }

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

/// True when `err` is the file simply not existing, as opposed to a read or
/// parse failure.
fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .map(|e| e.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl AppConfig {
    /// Defaults with the `HBNB_*` / `TOKIO_WORKER_THREADS` overrides applied.
    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        cfg.apply_env_overrides();
        cfg
    }

    /// Override file or default values with `HBNB_*` environment variables.
    /// Unset or unparsable variables leave the current value.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("HBNB_API_HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("HBNB_API_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Ok(path) = std::env::var("HBNB_FILE_PATH") {
            self.storage.file_path = path;
        }
    }

    /// Load `config.toml` (or `CONFIG_PATH`), apply env overrides, then
    /// normalize and validate.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_and_validate_from(&path)
    }

    /// A missing file means defaults; an unreadable or malformed one is an error.
    pub fn load_and_validate_from(path: &str) -> Result<Self> {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => AppConfig::default(),
            Err(e) => return Err(e.context(format!("failed to load {path}"))),
        };
        cfg.apply_env_overrides();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.file_path.trim().is_empty() {
            return Err(anyhow!("storage.file_path must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() -> Result<()> {
        let mut cfg: AppConfig = toml::from_str("")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.storage.file_path, "file.json");
        assert!(cfg.storage.refresh_after_request);
        assert!(!cfg.logging.json);
        Ok(())
    }

    #[test]
    fn sections_override_defaults() -> Result<()> {
        let doc = r#"
            [server]
            host = "127.0.0.1"
            port = 8081
            worker_threads = 0

            [storage]
            file_path = "data/catalog.json"
            refresh_after_request = false

            [logging]
            json = true
        "#;
        let mut cfg: AppConfig = toml::from_str(doc)?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8081");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.storage.file_path, "data/catalog.json");
        assert!(!cfg.storage.refresh_after_request);
        assert!(cfg.logging.json);
        Ok(())
    }

    #[test]
    fn rejects_port_zero_and_blank_file_path() -> Result<()> {
        let mut cfg: AppConfig = toml::from_str("[server]\nport = 0\n")?;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg: AppConfig = toml::from_str("[storage]\nfile_path = \"  \"\n")?;
        assert!(cfg.normalize_and_validate().is_err());
        Ok(())
    }

    #[test]
    fn blank_host_is_normalized() -> Result<()> {
        let mut cfg: AppConfig = toml::from_str("[server]\nhost = \"\"\n")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error_not_a_fallback() -> Result<()> {
        let path = std::env::temp_dir().join(format!("catalog_config_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[server]\nport = \"not-a-number\"\n[storage]\nfile_path = \"custom.json\"\n")?;
        let res = AppConfig::load_and_validate_from(&path.to_string_lossy());
        let _ = std::fs::remove_file(&path);
        assert!(res.is_err());
        Ok(())
    }

    #[test]
    fn missing_file_falls_back_to_defaults() -> Result<()> {
        let path = std::env::temp_dir().join(format!("catalog_config_{}.toml", uuid::Uuid::new_v4()));
        let err = load_from_file(&path.to_string_lossy()).unwrap_err();
        assert!(is_missing_file(&err));
        assert!(AppConfig::load_and_validate_from(&path.to_string_lossy()).is_ok());
        Ok(())
    }

    #[test]
    fn load_from_file_reads_toml() -> Result<()> {
        let path = std::env::temp_dir().join(format!("catalog_config_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[server]\nport = 6000\n")?;
        let cfg = load_from_file(&path.to_string_lossy())?;
        assert_eq!(cfg.server.port, 6000);
        let _ = std::fs::remove_file(&path);
        Ok(())
    }
}
