use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub views: ViewsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret accepted by `POST /api/login`
    pub admin_password: String,
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewsConfig {
    #[serde(default = "default_index_template")]
    pub index_template: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            num_threads: default_num_threads(),
        }
    }
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            index_template: default_index_template(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_session_ttl_hours() -> i64 {
    24
}

fn default_index_template() -> PathBuf {
    PathBuf::from("views/index.html")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        // An empty secret would match the empty password sent by a
        // malformed login body
        if self.auth.admin_password.is_empty() {
            bail!("admin_password must not be empty");
        }

        if self.auth.session_ttl_hours <= 0 {
            bail!("session_ttl_hours must be greater than 0");
        }

        if self.views.index_template.as_os_str().is_empty() {
            bail!("index_template must not be empty");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [auth]
            admin_password = "admin123"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(config.server.num_threads > 0);
        assert_eq!(config.auth.admin_password, "admin123");
        assert_eq!(config.auth.session_ttl_hours, 24);
        assert_eq!(config.views.index_template, PathBuf::from("views/index.html"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert!(!config.logging.console);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 9000
            num_threads = 2

            [auth]
            admin_password = "s3cret"
            session_ttl_hours = 1

            [views]
            index_template = "templates/admin.html"

            [logging]
            level = "debug"
            format = "console"
            console = true
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.num_threads, 2);
        assert_eq!(config.auth.session_ttl_hours, 1);
        assert_eq!(config.views.index_template, PathBuf::from("templates/admin.html"));
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_missing_auth_section_rejected() {
        assert!(Config::from_toml("[server]\nport = 8080\n").is_err());
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = Config::from_toml("[auth]\nadmin_password = \"\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_port_rejected() {
        let result = Config::from_toml(
            "[server]\nport = 0\n[auth]\nadmin_password = \"x\"\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let result = Config::from_toml(
            "[auth]\nadmin_password = \"x\"\nsession_ttl_hours = 0\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = Config::from_toml(
            "[auth]\nadmin_password = \"x\"\n[logging]\nlevel = \"loud\"\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[auth]\nadmin_password = \"from-file\"").unwrap();

        let config = Config::from_file(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.auth.admin_password, "from-file");
    }

    #[test]
    fn test_from_file_missing() {
        let path = PathBuf::from("does-not-exist.toml");
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_shipped_config_loads() {
        let path = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml"));
        let config = Config::from_file(&path).expect("Failed to load config");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.admin_password, "admin123");
    }
}
