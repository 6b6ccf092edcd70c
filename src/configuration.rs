//! Runtime configuration of the binary.
//!
//! The configuration is loaded from the file `configuration.toml`, relative to the working
//! directory, unless another path is given on the command line. Every option has a default value,
//! allowing to run without a configuration file.

use config::Config;
use config::ConfigError;
use config::File;
use config::FileFormat;
use config::Source;
use serde::Deserialize;

const DEFAULT_PATH: &str = "configuration.toml";

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Log {
    #[serde(default)]
    pub level: LogLevel,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    #[serde(default)]
    pub log: Log,
}

impl Configuration {
    /// Load the configuration from the given file, or from `configuration.toml` when no path is
    /// given. The default file may be missing, but an explicitly given one is required. It returns
    /// a properly instantiated configuration tree in case of success, or a message describing the
    /// error in case of error.
    pub fn new(path: Option<&str>) -> Result<Self, String> {
        let file = match path {
            Some(path) => File::with_name(path).format(FileFormat::Toml).required(true),
            None => File::with_name(DEFAULT_PATH).format(FileFormat::Toml).required(false),
        };

        Self::load(file).map_err(|error| error.to_string())
    }

    #[cfg(test)]
    fn parse(content: &str) -> Result<Self, String> {
        Self::load(File::from_str(content, FileFormat::Toml)).map_err(|error| error.to_string())
    }

    fn load<S: Source + Send + Sync + 'static>(source: S) -> Result<Self, ConfigError> {
        let mut configuration = Config::default();
        configuration.merge(source)?;

        configuration.try_into()
    }
}
