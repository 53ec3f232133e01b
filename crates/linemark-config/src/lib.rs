use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

const DEFAULT_CONFIG_DIR: &str = "~/.config/linemark";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Cannot write config {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Cannot encode config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Which rendering of the document to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    /// The parsed document structure as JSON.
    Tree,
}

/// Closing-tag form of the HTML rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosingTagStyle {
    /// `<\p>`
    #[default]
    Backslash,
    /// `</p>`
    Slash,
}

/// Rendering preferences. Every key is optional in the file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    pub closing_tag: ClosingTagStyle,
    pub escape_html: bool,
}

impl Config {
    /// Reads the file at `path`. A file that does not exist is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Settings from the file at `path`, or the defaults when it is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(path)?.unwrap_or_default())
    }

    /// Writes the settings as TOML, creating parent directories as needed.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let write_error = |source: io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, content).map_err(write_error)
    }

    /// `~/.config/linemark/config.toml`, expanded.
    pub fn config_path() -> PathBuf {
        Self::expand_path(Path::new(DEFAULT_CONFIG_DIR)).join(CONFIG_FILE_NAME)
    }

    /// The file to use: `explicit` expanded when given, else [`Config::config_path`].
    pub fn locate(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(Self::config_path, Self::expand_path)
    }

    /// Expands `~` and environment variables in a user-supplied path.
    ///
    /// Falls back to the path as given when expansion fails.
    pub fn expand_path(path: &Path) -> PathBuf {
        let raw = path.to_string_lossy();
        shellexpand::full(&raw).map_or_else(
            |_| path.to_path_buf(),
            |expanded| PathBuf::from(expanded.into_owned()),
        )
    }
}
