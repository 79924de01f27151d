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

//! Format-string and space-joined shorthands for the [`Logger`](crate::Logger) methods.
//!
//! The `*f!` macros take a logger followed by [`format!`] arguments; the `*ln!` macros take a
//! logger followed by any number of [`Display`](std::fmt::Display) values joined by spaces.
//!
//! ```
//! use logroute::LogConfig;
//!
//! let logger = logroute::configure(Some(LogConfig::none().error(true))).unwrap();
//! logroute::errorf!(logger, "code={}", 42);
//! logroute::errorln!(logger, "code", 42);
//! ```

/// Writes a formatted debug line.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug_fmt(::std::format_args!($($arg)+))
    };
}

/// Writes a formatted info line.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info_fmt(::std::format_args!($($arg)+))
    };
}

/// Writes a formatted warning line.
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning_fmt(::std::format_args!($($arg)+))
    };
}

/// Writes a formatted error line.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error_fmt(::std::format_args!($($arg)+))
    };
}

/// Writes a formatted fatal line and exits the process with status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_fmt(::std::format_args!($($arg)+))
    };
}

/// Writes the values joined by spaces as a debug line.
#[macro_export]
macro_rules! debugln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.debug_line(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Writes the values joined by spaces as an info line.
#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.info_line(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Writes the values joined by spaces as a warning line.
#[macro_export]
macro_rules! warningln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.warning_line(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Writes the values joined by spaces as an error line.
#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.error_line(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Writes the values joined by spaces as a fatal line and exits the process with status 1.
#[macro_export]
macro_rules! fatalln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.fatal_line(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::LogConfig;
    use crate::append::Memory;
    use crate::builder;

    #[test]
    fn test_macros_route_to_their_level() {
        let stdout = Memory::default();
        let stderr = Memory::default();
        let logger = builder(LogConfig::default())
            .stdout(stdout.clone())
            .stderr(stderr.clone())
            .build()
            .unwrap();

        debugf!(logger, "d={}", 1);
        infoln!(logger, "hello", 2);
        warningf!(logger, "w");
        errorf!(logger, "code={}", 42);
        errorln!(logger);

        let out = stdout.contents();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("DEBUG: ") && lines[0].ends_with(" d=1"));
        assert!(lines[1].starts_with("INFO: ") && lines[1].ends_with(" hello 2"));
        assert!(lines[2].starts_with("WARNING: ") && lines[2].ends_with(" w"));

        let err = stderr.contents();
        let lines: Vec<&str> = err.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ERROR: ") && lines[0].contains("code=42"));
    }
}
