//! Global logging system.
//!
//! The binary uses the standard [log](https://docs.rs/log/0.4.14/log/) crate, with the
//! [simple_logger](https://docs.rs/simple_logger/1.13.0/simple_logger/) implementation. This
//! module only provides an encapsulation of their initialization.

use log::Level as LogLevel;
use crate::configuration::LogLevel as ConfiguredLevel;

pub enum Level {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<ConfiguredLevel> for Level {
    fn from(level: ConfiguredLevel) -> Self {
        match level {
            ConfiguredLevel::Off => Level::Off,
            ConfiguredLevel::Error => Level::Error,
            ConfiguredLevel::Warn => Level::Warn,
            ConfiguredLevel::Info => Level::Info,
            ConfiguredLevel::Debug => Level::Debug,
            ConfiguredLevel::Trace => Level::Trace,
        }
    }
}

pub struct Logger {}

impl Logger {
    /// Initialize the global logger with the given level. In case of failure, this method panicks.
    /// It must only be used once, since all subsequent calls will result in a failure.
    pub fn initialize(level: Level) {
        let level = match level {
            Level::Off => return,
            Level::Error => LogLevel::Error,
            Level::Warn => LogLevel::Warn,
            Level::Info => LogLevel::Info,
            Level::Debug => LogLevel::Debug,
            Level::Trace => LogLevel::Trace,
        };

        simple_logger::init_with_level(level).unwrap();
    }
}
