use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde_str;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where check events are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Csv,
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_backend")]
    pub backend: Backend,
    #[serde(default = "default_admin_pin")]
    pub admin_pin: String,
    /// Seconds between dashboard refreshes in `admin --watch`.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("checkin_log.csv")
        .to_string_lossy()
        .to_string()
}
fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_backend() -> Backend {
    Backend::Csv
}
fn default_admin_pin() -> String {
    "2025".to_string()
}
fn default_refresh_interval() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            database: default_database(),
            backend: default_backend(),
            admin_pin: default_admin_pin(),
            refresh_interval: default_refresh_interval(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ctc-checkin")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".ctc-checkin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ctc-checkin.conf")
    }

    /// Return the full path of the SQLite database (internal log, sqlite backend)
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ctc-checkin.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!(
                "failed to parse configuration file {}: {e}",
                path.display()
            ))
        })
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Apply `--data` / `--db`. `~` is expanded and relative names
    /// land in the config directory.
    pub fn with_overrides(mut self, data: Option<&str>, db: Option<&str>) -> Self {
        let dir = Self::config_dir();
        if let Some(data) = data {
            self.data_file = resolve_in(&dir, &expand_tilde_str(data));
        }
        if let Some(db) = db {
            self.database = resolve_in(&dir, &expand_tilde_str(db));
        }
        self
    }

    /// Initialize the config directory and file.
    ///
    /// Overrides from the command line are written into the config, so a
    /// later run without `--data` / `--db` keeps using the same files.
    pub fn init_all(
        data_override: Option<&str>,
        db_override: Option<&str>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        let config = Self::default().with_overrides(data_override, db_override);

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}

fn resolve_in(dir: &Path, name: &str) -> String {
    let p = Path::new(name);
    if p.is_absolute() {
        p.to_string_lossy().to_string()
    } else {
        dir.join(p).to_string_lossy().to_string()
    }
}
