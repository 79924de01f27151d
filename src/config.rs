// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Declarative configuration consumed by [`Builder`](crate::Builder).

use std::path::Path;
use std::path::PathBuf;

use crate::Level;

/// Switches for the four levels that can be turned off.
///
/// Fatal has no switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelSwitches {
    pub debug: bool,
    pub info: bool,
    pub warning: bool,
    pub error: bool,
}

impl LevelSwitches {
    /// Every switchable level on.
    pub const fn all() -> Self {
        Self {
            debug: true,
            info: true,
            warning: true,
            error: true,
        }
    }

    /// Whether records of `level` should be routed anywhere.
    pub const fn is_enabled(&self, level: Level) -> bool {
        match level {
            Level::Debug => self.debug,
            Level::Info => self.info,
            Level::Warning => self.warning,
            Level::Error => self.error,
            Level::Fatal => true,
        }
    }
}

/// Configuration of a [`Logger`](crate::Logger).
///
/// [`LogConfig::default`] logs every level to the console and nowhere else. Start from
/// [`LogConfig::none`] to opt levels in one by one.
///
/// # Examples
///
/// ```
/// use logroute::LogConfig;
///
/// let config = LogConfig::none()
///     .info(true)
///     .error(true)
///     .suppress_console(true)
///     .file_path("logs/app.log");
/// assert!(config.level_switches().info);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    levels: LevelSwitches,
    suppress_console: bool,
    file_path: Option<PathBuf>,
    create_log_dir: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            levels: LevelSwitches::all(),
            ..Self::none()
        }
    }
}

impl LogConfig {
    /// A configuration with every level off, the console on and no file.
    pub const fn none() -> Self {
        Self {
            levels: LevelSwitches {
                debug: false,
                info: false,
                warning: false,
                error: false,
            },
            suppress_console: false,
            file_path: None,
            create_log_dir: false,
        }
    }

    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.levels.debug = enabled;
        self
    }

    #[must_use]
    pub fn info(mut self, enabled: bool) -> Self {
        self.levels.info = enabled;
        self
    }

    #[must_use]
    pub fn warning(mut self, enabled: bool) -> Self {
        self.levels.warning = enabled;
        self
    }

    #[must_use]
    pub fn error(mut self, enabled: bool) -> Self {
        self.levels.error = enabled;
        self
    }

    /// Replaces all four level switches at once.
    #[must_use]
    pub fn levels(mut self, levels: LevelSwitches) -> Self {
        self.levels = levels;
        self
    }

    /// When set, nothing is written to stdout or stderr. File output is unaffected.
    #[must_use]
    pub fn suppress_console(mut self, suppress: bool) -> Self {
        self.suppress_console = suppress;
        self
    }

    /// Sets the base path of the log file.
    ///
    /// The file actually opened has the current local date prepended to its name, so
    /// `logs/app.log` becomes `logs/2024-03-05_app.log`. An empty path disables the file.
    #[must_use]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.file_path = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        };
        self
    }

    /// Creates the log file's directory if it does not exist.
    ///
    /// Off by default: a missing directory fails configuration.
    #[must_use]
    pub fn create_log_dir(mut self, create: bool) -> Self {
        self.create_log_dir = create;
        self
    }

    pub fn level_switches(&self) -> &LevelSwitches {
        &self.levels
    }

    pub fn console_suppressed(&self) -> bool {
        self.suppress_console
    }

    pub fn log_file_path(&self) -> Option<&Path> {
        self.file_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    pub fn creates_log_dir(&self) -> bool {
        self.create_log_dir
    }
}
