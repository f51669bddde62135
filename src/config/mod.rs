use crate::core::gate::MAX_ATTEMPTS;
use crate::errors::{AppError, AppResult};
use crate::timetable::columns::DEFAULT_PERIOD_COUNT;
use crate::timetable::loader::LOCAL_FILENAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_timetable_file")]
    pub timetable_file: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_period_count")]
    pub default_period_count: usize,
}

fn default_timetable_file() -> String {
    LOCAL_FILENAME.to_string()
}
fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_max_attempts() -> u32 {
    MAX_ATTEMPTS
}
fn default_period_count() -> usize {
    DEFAULT_PERIOD_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timetable_file: default_timetable_file(),
            database: default_database(),
            sheet: None,
            max_attempts: default_max_attempts(),
            default_period_count: default_period_count(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let base = base.unwrap_or_else(|| PathBuf::from("."));
        if cfg!(target_os = "windows") {
            base.join("ttviewer")
        } else {
            base.join(".ttviewer")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ttviewer.conf")
    }

    /// Return the full path of the SQLite session database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ttviewer.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.max_attempts == 0 {
            return Err(AppError::Config("max_attempts must be at least 1".into()));
        }
        if self.default_period_count == 0 {
            return Err(AppError::Config(
                "default_period_count must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Create the config directory and file; returns the resulting config.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
