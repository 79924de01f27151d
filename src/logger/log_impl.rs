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

use log::LevelFilter;
use log::Metadata;
use log::Record;

use crate::Error;
use crate::Level;
use crate::logger::Logger;

impl Logger {
    /// Installs a clone of this logger as the global logger of the [`log`] crate.
    ///
    /// Records from `log::error!`, `log::warn!`, `log::info!`, `log::debug!` and
    /// `log::trace!` are routed to error, warning, info, debug and debug respectively.
    ///
    /// # Errors
    ///
    /// An error is returned if the global logger has already been set.
    pub fn apply(&self) -> Result<(), Error> {
        let max_level = self.max_level();
        log::set_boxed_logger(Box::new(self.clone()))?;
        log::set_max_level(max_level);
        Ok(())
    }

    fn max_level(&self) -> LevelFilter {
        if self.enabled(Level::Debug) {
            LevelFilter::Trace
        } else if self.enabled(Level::Info) {
            LevelFilter::Info
        } else if self.enabled(Level::Warning) {
            LevelFilter::Warn
        } else if self.enabled(Level::Error) {
            LevelFilter::Error
        } else {
            LevelFilter::Off
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &Record) {
        self.log_fmt(record.level().into(), *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use log::Log;

    use super::*;
    use crate::LogConfig;
    use crate::append::Memory;
    use crate::builder;

    fn record<'a>(level: log::Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).args(args).build()
    }

    #[test]
    fn test_routes_by_mapped_level() {
        let stdout = Memory::default();
        let stderr = Memory::default();
        let logger = builder(LogConfig::none().debug(true).error(true))
            .stdout(stdout.clone())
            .stderr(stderr.clone())
            .build()
            .unwrap();

        Log::log(&logger, &record(log::Level::Trace, format_args!("traced")));
        Log::log(&logger, &record(log::Level::Info, format_args!("dropped")));
        Log::log(&logger, &record(log::Level::Error, format_args!("failed")));

        assert!(stdout.contents().starts_with("DEBUG: "));
        assert!(stdout.contents().contains("traced"));
        assert!(!stdout.contents().contains("dropped"));
        assert!(stderr.contents().starts_with("ERROR: "));
        assert!(stderr.contents().contains("failed"));
    }

    #[test]
    fn test_metadata_enabled() {
        let logger = builder(LogConfig::none().warning(true))
            .stdout(Memory::default())
            .build()
            .unwrap();

        let warn = Metadata::builder().level(log::Level::Warn).build();
        let info = Metadata::builder().level(log::Level::Info).build();
        assert!(Log::enabled(&logger, &warn));
        assert!(!Log::enabled(&logger, &info));
    }

    #[test]
    fn test_max_level() {
        let logger = |config: LogConfig| builder(config).build().unwrap();
        assert_eq!(logger(LogConfig::default()).max_level(), LevelFilter::Trace);
        assert_eq!(
            logger(LogConfig::none().info(true).error(true)).max_level(),
            LevelFilter::Info
        );
        assert_eq!(
            logger(LogConfig::none().error(true)).max_level(),
            LevelFilter::Error
        );
        assert_eq!(logger(LogConfig::none()).max_level(), LevelFilter::Off);
        assert_eq!(
            logger(LogConfig::none().warning(true).suppress_console(true)).max_level(),
            LevelFilter::Warn
        );
    }
}
