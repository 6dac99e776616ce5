use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::time::clock_pattern;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// "12h" or "24h", clock style for start/end times in history.
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Print the gap since the previous session in history views.
    #[serde(default = "default_show_gaps")]
    pub show_gaps: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_time_format() -> String {
    "12h".to_string()
}
fn default_show_gaps() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            time_format: default_time_format(),
            show_gaps: default_show_gaps(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("feedlogger")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".feedlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("feedlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("feedlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        clock_pattern(&self.time_format)?;
        if self.database.trim().is_empty() {
            return Err(AppError::Config("'database' must not be empty".into()));
        }
        Ok(())
    }

    /// strftime pattern matching `time_format`.
    pub fn clock_pattern(&self) -> &'static str {
        clock_pattern(&self.time_format).unwrap_or("%H:%M")
    }

    /// Resolve the database path for `init`: absolute paths are kept,
    /// bare names land in the config directory.
    pub fn resolve_db_path(custom_name: Option<&str>) -> PathBuf {
        let dir = Self::config_dir();
        match custom_name {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        }
    }

    /// Create the configuration directory and file. In test mode the file
    /// is left untouched.
    pub fn init_all(custom_name: Option<&str>, is_test: bool) -> AppResult<Config> {
        let db_path = Self::resolve_db_path(custom_name);

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Default::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
