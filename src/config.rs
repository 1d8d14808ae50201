use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use eframe::egui::Visuals;
use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find config directory")]
    NoConfigDir,
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Light => Visuals::light(),
            Theme::Dark => Visuals::dark(),
        }
    }
}

/// Configuração lida de `config.toml`. Todos os campos são opcionais.
///
/// ```toml
/// theme = "light"
/// swatch_columns = 4
/// window_width = 640.0
/// window_height = 900.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub swatch_columns: usize,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            swatch_columns: GUI_SWATCH_COLUMNS,
            window_width: GUI_WINDOW_WIDTH,
            window_height: GUI_WINDOW_HEIGHT,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Arquivo ausente não é erro: usa os valores padrão.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("{e}; using default config");
            Self::default()
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }

    fn validate_and_clamp(&mut self) {
        if !(1..=GUI_MAX_SWATCH_COLUMNS).contains(&self.swatch_columns) {
            warn!(
                "swatch_columns {} out of range, clamping to 1..={}",
                self.swatch_columns, GUI_MAX_SWATCH_COLUMNS
            );
            self.swatch_columns = self.swatch_columns.clamp(1, GUI_MAX_SWATCH_COLUMNS);
        }

        if !valid_window_size(self.window_width) {
            warn!("window_width {} invalid, using {}", self.window_width, GUI_MIN_WINDOW_SIZE);
            self.window_width = GUI_MIN_WINDOW_SIZE;
        }
        if !valid_window_size(self.window_height) {
            warn!("window_height {} invalid, using {}", self.window_height, GUI_MIN_WINDOW_SIZE);
            self.window_height = GUI_MIN_WINDOW_SIZE;
        }
    }
}

// NaN e infinito também são rejeitados
fn valid_window_size(size: f32) -> bool {
    size.is_finite() && size >= GUI_MIN_WINDOW_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml("theme = \"light\"").unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.swatch_columns, GUI_SWATCH_COLUMNS);
        assert_eq!(config.window_width, GUI_WINDOW_WIDTH);
    }

    #[test]
    fn full_file() {
        let text = "theme = \"dark\"\nswatch_columns = 4\nwindow_width = 640.0\nwindow_height = 900.0\n";
        let config = Config::from_toml(text).unwrap();
        assert_eq!(
            config,
            Config {
                theme: Theme::Dark,
                swatch_columns: 4,
                window_width: 640.0,
                window_height: 900.0,
            }
        );
    }

    #[test]
    fn columns_are_clamped() {
        assert_eq!(Config::from_toml("swatch_columns = 0").unwrap().swatch_columns, 1);
        assert_eq!(Config::from_toml("swatch_columns = 99").unwrap().swatch_columns, 16);
    }

    #[test]
    fn tiny_window_is_raised() {
        let config = Config::from_toml("window_width = 10.0\nwindow_height = -5.0").unwrap();
        assert_eq!(config.window_width, GUI_MIN_WINDOW_SIZE);
        assert_eq!(config.window_height, GUI_MIN_WINDOW_SIZE);
    }

    #[test]
    fn non_finite_window_is_replaced() {
        let config = Config::from_toml("window_width = inf\nwindow_height = nan").unwrap();
        assert_eq!(config.window_width, GUI_MIN_WINDOW_SIZE);
        assert_eq!(config.window_height, GUI_MIN_WINDOW_SIZE);

        let config = Config::from_toml("window_width = -inf").unwrap();
        assert_eq!(config.window_width, GUI_MIN_WINDOW_SIZE);
    }

    #[test]
    fn bad_theme_is_an_error() {
        assert!(Config::from_toml("theme = \"sepia\"").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("rgb-picker-test-does-not-exist.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn malformed_file_reports_path() {
        let path = std::env::temp_dir().join(format!("rgb-picker-test-{}.toml", std::process::id()));
        fs::write(&path, "swatch_columns = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("rgb-picker-test-"));
    }
}
