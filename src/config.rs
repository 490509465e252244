use std::{error::Error, fs::File, path::Path};

use serde_derive::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "conf.yaml";

/// Window geometry. Nothing else about the drill is configurable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
#[serde(default)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    /// Position of the window's top left corner on the screen. If absent, the platform decides.
    pub position: Option<[f32; 2]>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1800.0,
            height: 180.0,
            position: None {},
        }
    }
}

impl Config {
    pub fn from_yaml(s: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_yml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_yml::from_reader(File::open(path)?)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the file at `path` if given. Otherwise reads [DEFAULT_CONFIG_PATH] if it exists, and
    /// falls back to the defaults if it doesn't.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => {
                log::info!("reading configuration from {}", path.display());
                Self::from_file(path)
            }
            None {} => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    log::info!("reading configuration from {}", path.display());
                    Self::from_file(path)
                } else {
                    log::debug!("no {} found, using default configuration", DEFAULT_CONFIG_PATH);
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<(), Box<dyn Error>> {
        // the keyboard gets `width - height`, which must be positive
        if !(self.height > 0.0 && self.width > self.height) {
            return Err(format!(
                "window size {}x{} is too small: the height must be positive and the width larger than the height",
                self.width, self.height
            )
            .into());
        }
        Ok(())
    }
}
