// Configuration management for tuneshell
// Handles loading/saving settings, with sensible defaults when config is missing

use crate::error::{Result, ShellError};
use crate::theme::Theme;
use crate::views::ViewKind;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const APP_DIR: &str = "tuneshell";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub library: LibraryConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Roots browsed by the Album and Artist views
    pub music_directories: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub sidebar_width: u16,
    pub tick_rate_ms: u64,
    pub theme: Theme,
    /// View opened on start-up, if any
    pub start_view: Option<ViewKind>,
    /// Capture the mouse for clicks and scrolling; off leaves text selection to the terminal
    pub mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            music_directories: vec![
                dirs::audio_dir().unwrap_or_else(|| PathBuf::from("~/Music")),
            ],
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: 24,
            tick_rate_ms: 250,
            theme: Theme::Default,
            start_view: None,
            mouse: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let directory = dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR).join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"));
        Self { directory }
    }
}

impl Config {
    /// Loads the config from the default location, writing defaults there on first run.
    pub fn load() -> Result<Self> {
        Self::load_or_create(&Self::config_path()?)
    }

    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            info!("wrote default config to {}", path.display());
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ShellError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ShellError::ConfigWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = self.to_toml()?;
        fs::write(path, content).map_err(|source| ShellError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = config_dir().ok_or(ShellError::NoConfigDir)?.join(APP_DIR);
        Ok(config_dir.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\nsidebar_width = 30\n").unwrap();

        let config = Config::load_from(&path).expect("load");
        assert_eq!(config.ui.sidebar_width, 30);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.ui.theme, Theme::Default);
        assert_eq!(config.library, LibraryConfig::default());
    }

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_or_create(&path).expect("create");
        assert!(path.exists());
        let reloaded = Config::load_from(&path).expect("reload");
        assert_eq!(created, reloaded);
    }

    #[test]
    fn parses_start_view_and_theme() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[ui]\ntheme = \"mono\"\nstart_view = \"play-music\"\n\n[library]\nmusic_directories = [\"/srv/music\"]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).expect("load");
        assert_eq!(config.ui.theme, Theme::Mono);
        assert_eq!(config.ui.start_view, Some(ViewKind::PlayMusic));
        assert_eq!(
            config.library.music_directories,
            vec![PathBuf::from("/srv/music")]
        );
    }

    #[test]
    fn mouse_capture_defaults_on_and_can_be_disabled() {
        assert!(Config::default().ui.mouse);

        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\nmouse = false\n").unwrap();
        let config = Config::load_from(&path).expect("load");
        assert!(!config.ui.mouse);
        assert_eq!(config.ui.sidebar_width, 24);
    }

    #[test]
    fn broken_file_reports_its_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ShellError::ConfigParse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
