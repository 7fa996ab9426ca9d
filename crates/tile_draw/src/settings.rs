use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fs, io::Write, path::PathBuf};
use tile_engine::DEFAULT_MAP_FILE;
use tile_engine_edit::KeyBindings;

// =============================================================================
// Project directory constants
// =============================================================================

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "tile_draw";

/// Lazily initialized project directories (computed once on first access)
pub(crate) static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

/// User options, persisted in `settings.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Map file used when no path is given on the command line
    pub map_file: String,

    /// How long the main loop waits for input before redrawing
    pub frame_interval_ms: u64,

    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map_file: DEFAULT_MAP_FILE.to_string(),
            frame_interval_ms: 16,
            keys: KeyBindings::default(),
        }
    }
}

impl Settings {
    pub const FILE_NAME: &'static str = "settings.toml";

    /// Loads the settings file, falling back to defaults on any error.
    ///
    /// On first start the defaults are written out so they can be edited.
    pub fn load() -> Self {
        let Some(config_dir) = Self::config_dir() else {
            return Self::default();
        };

        if !config_dir.exists() {
            if let Err(err) = fs::create_dir_all(&config_dir) {
                log::error!("Can't create configuration directory {:?}: {}", config_dir, err);
                return Self::default();
            }
        }

        let settings_file = config_dir.join(Self::FILE_NAME);
        if !settings_file.exists() {
            let settings = Self::default();
            settings.store();
            return settings;
        }

        match fs::read_to_string(&settings_file) {
            Ok(txt) => Self::parse(&txt),
            Err(err) => {
                log::error!("Error reading settings file: {}", err);
                Self::default()
            }
        }
    }

    fn parse(txt: &str) -> Self {
        match toml::from_str::<Settings>(txt) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("Error parsing settings file: {}", err);
                Self::default()
            }
        }
    }

    /// Atomically write settings to file (write to temp, then rename).
    pub fn store(&self) {
        let Some(config_dir) = Self::config_dir() else {
            log::error!("Cannot determine config directory for saving settings");
            return;
        };

        let file_path = config_dir.join(Self::FILE_NAME);
        let temp_path = config_dir.join(format!(".{}.tmp", Self::FILE_NAME));

        match toml::to_string_pretty(self) {
            Ok(text) => {
                let write_result = (|| -> std::io::Result<()> {
                    let mut file = fs::File::create(&temp_path)?;
                    file.write_all(text.as_bytes())?;
                    file.sync_all()?;
                    Ok(())
                })();

                if let Err(err) = write_result {
                    log::error!("Error writing temp settings file: {}", err);
                    let _ = fs::remove_file(&temp_path);
                    return;
                }

                if let Err(err) = fs::rename(&temp_path, &file_path) {
                    log::error!("Error renaming settings file: {}", err);
                    let _ = fs::remove_file(&temp_path);
                }
            }
            Err(err) => log::error!("Error serializing settings: {}", err),
        }
    }

    pub fn config_dir() -> Option<PathBuf> {
        PROJECT_DIRS.as_ref().map(|p| p.config_dir().to_path_buf())
    }
}
