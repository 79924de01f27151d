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

use std::sync::Arc;

use crate::Error;
use crate::Level;
use crate::LogConfig;
use crate::append;
use crate::append::Append;
use crate::append::DatedFileBuilder;
use crate::clock::Clock;
use crate::layout::TextLayout;
use crate::logger::Logger;
use crate::logger::dispatch::Dispatch;

/// Creates a [`Logger`] from `config`, or from [`LogConfig::default`] when `None`.
///
/// # Errors
///
/// Fails if a log file is configured and cannot be opened. No logger is returned in that
/// case; callers decide whether to abort or fall back to another configuration.
///
/// # Examples
///
/// ```
/// let logger = logroute::configure(None).unwrap();
/// logger.info_line(&[&"service started"]);
/// ```
pub fn configure(config: Option<LogConfig>) -> Result<Logger, Error> {
    builder(config.unwrap_or_default()).build()
}

/// Creates a [`Builder`] for `config`.
pub fn builder(config: LogConfig) -> Builder {
    Builder::new(config)
}

/// Resolves a [`LogConfig`] into the five level writers of a [`Logger`].
///
/// Routing, per level:
///
/// - a disabled level writes nowhere;
/// - debug, info and warning write to the file (if any) and stdout;
/// - error writes to the file (if any) and stderr;
/// - fatal always writes to the file (if any) and stderr.
///
/// With `suppress_console`, stdout and stderr are dropped from every level.
#[must_use = "call `build` to open the sinks and create the logger"]
#[derive(Debug)]
pub struct Builder {
    config: LogConfig,
    stdout: Arc<dyn Append>,
    stderr: Arc<dyn Append>,
    layout: TextLayout,
    clock: Clock,
}

impl Builder {
    /// Create a new [`Builder`] that writes to the real console streams.
    pub fn new(config: LogConfig) -> Self {
        Self {
            config,
            stdout: Arc::new(append::Stdout::default()),
            stderr: Arc::new(append::Stderr::default()),
            layout: TextLayout::default(),
            clock: Clock::DefaultClock,
        }
    }

    /// Replaces the destination used as standard output.
    pub fn stdout(mut self, append: impl Append) -> Self {
        self.stdout = Arc::new(append);
        self
    }

    /// Replaces the destination used as standard error.
    pub fn stderr(mut self, append: impl Append) -> Self {
        self.stderr = Arc::new(append);
        self
    }

    /// Sets the layout for every level. Default to [`TextLayout`] in the system timezone.
    pub fn layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }

    #[cfg(test)]
    fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Opens the file sink, if any, and binds every level to its destinations.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    pub fn build(self) -> Result<Logger, Error> {
        let Builder {
            config,
            stdout,
            stderr,
            layout,
            clock,
        } = self;

        let file = match config.log_file_path() {
            Some(path) => Some(Arc::new(
                DatedFileBuilder::new(path)
                    .create_dir(config.creates_log_dir())
                    .clock(clock.clone())
                    .build()?,
            )),
            None => None,
        };
        let file_path = file.as_ref().map(|file| file.path().to_path_buf());
        let file = file.map(|file| file as Arc<dyn Append>);

        let (stdout, stderr) = if config.console_suppressed() {
            (None, None)
        } else {
            (Some(stdout), Some(stderr))
        };

        let switches = *config.level_switches();
        let dispatches = Level::ALL.map(|level| {
            let enabled = switches.is_enabled(level);
            let appends = if enabled {
                let console = match level {
                    Level::Debug | Level::Info | Level::Warning => stdout.clone(),
                    Level::Error | Level::Fatal => stderr.clone(),
                };
                file.iter().cloned().chain(console).collect()
            } else {
                vec![]
            };
            Dispatch::new(level, enabled, layout.clone(), clock.clone(), appends)
        });

        Ok(Logger::new(dispatches, file_path))
    }
}
