// std imports
use std::path::{Path, PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use once_cell::sync::Lazy;

// local imports
use crate::{
    error::Result,
    settings::{DEFAULT_SETTINGS, Settings},
};

// ---

pub const APP_NAME: &str = "fastwild";

static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns the built-in settings.
pub fn default() -> &'static Settings {
    &DEFAULT
}

/// Prepares loading of settings with additional files layered on top, in order.
pub fn at<I>(paths: I) -> Loader
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    Loader {
        paths: paths.into_iter().map(|path| path.as_ref().to_owned()).collect(),
        no_default: false,
    }
}

/// Location of the optional user settings file.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml"))
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    /// Skips the user settings file, only the built-in settings and the given files are used.
    pub fn no_default(mut self, value: bool) -> Self {
        self.no_default = value;
        self
    }

    pub fn load(self) -> Result<Settings> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        if !self.no_default {
            if let Some(path) = user_config_path() {
                log::debug!("user settings file: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        for path in self.paths {
            log::debug!("settings file: {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}
