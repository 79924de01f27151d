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

use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use crate::Level;
use crate::layout::Joined;

pub use self::builder::Builder;
pub use self::builder::builder;
pub use self::builder::configure;

mod builder;
mod dispatch;
mod log_impl;

use self::dispatch::Dispatch;

/// A configured logger: one writer per [`Level`], fixed at configuration time.
///
/// Cloning is cheap and every clone writes to the same destinations. Each call emits one
/// complete line, so concurrent callers never interleave within a line.
///
/// Every level offers three forms:
///
/// - `info(&[..])` concatenates the values with no separator, whatever their types, so
///   `info(&[&1, &2, &"x"])` writes `12x`;
/// - `info_line(&[..])` joins the values with single spaces;
/// - `info_fmt(format_args!(..))` writes formatted text, see [`infof!`](crate::infof).
///
/// Emitting never fails and never panics. Calls at a disabled level write nothing.
#[derive(Debug, Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    dispatches: [Dispatch; 5],
    file_path: Option<PathBuf>,
}

impl Logger {
    pub(crate) fn new(dispatches: [Dispatch; 5], file_path: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(Inner {
                dispatches,
                file_path,
            }),
        }
    }

    fn dispatch(&self, level: Level) -> &Dispatch {
        &self.inner.dispatches[level.index()]
    }

    /// Whether `level` is switched on. Always true for [`Level::Fatal`].
    pub fn enabled(&self, level: Level) -> bool {
        self.dispatch(level).enabled()
    }

    /// The dated log file opened at configuration time, if any.
    pub fn log_file(&self) -> Option<&Path> {
        self.inner.file_path.as_deref()
    }

    /// Flushes every destination.
    pub fn flush(&self) {
        for dispatch in &self.inner.dispatches {
            dispatch.flush();
        }
    }

    pub fn log(&self, level: Level, values: &[&dyn fmt::Display]) {
        self.log_fmt(level, format_args!("{}", Joined::concat(values)));
    }

    pub fn log_line(&self, level: Level, values: &[&dyn fmt::Display]) {
        self.log_fmt(level, format_args!("{}", Joined::spaced(values)));
    }

    /// Writes `message` at `level`.
    ///
    /// At [`Level::Fatal`] this only writes; use [`Logger::fatal_fmt`] to also exit.
    pub fn log_fmt(&self, level: Level, message: fmt::Arguments) {
        self.dispatch(level).log(message);
    }

    pub fn debug(&self, values: &[&dyn fmt::Display]) {
        self.log(Level::Debug, values);
    }

    pub fn debug_line(&self, values: &[&dyn fmt::Display]) {
        self.log_line(Level::Debug, values);
    }

    pub fn debug_fmt(&self, message: fmt::Arguments) {
        self.log_fmt(Level::Debug, message);
    }

    pub fn info(&self, values: &[&dyn fmt::Display]) {
        self.log(Level::Info, values);
    }

    pub fn info_line(&self, values: &[&dyn fmt::Display]) {
        self.log_line(Level::Info, values);
    }

    pub fn info_fmt(&self, message: fmt::Arguments) {
        self.log_fmt(Level::Info, message);
    }

    pub fn warning(&self, values: &[&dyn fmt::Display]) {
        self.log(Level::Warning, values);
    }

    pub fn warning_line(&self, values: &[&dyn fmt::Display]) {
        self.log_line(Level::Warning, values);
    }

    pub fn warning_fmt(&self, message: fmt::Arguments) {
        self.log_fmt(Level::Warning, message);
    }

    pub fn error(&self, values: &[&dyn fmt::Display]) {
        self.log(Level::Error, values);
    }

    pub fn error_line(&self, values: &[&dyn fmt::Display]) {
        self.log_line(Level::Error, values);
    }

    pub fn error_fmt(&self, message: fmt::Arguments) {
        self.log_fmt(Level::Error, message);
    }

    /// Writes at [`Level::Fatal`], then exits the process with status 1.
    pub fn fatal(&self, values: &[&dyn fmt::Display]) -> ! {
        self.fatal_fmt(format_args!("{}", Joined::concat(values)))
    }

    /// Writes at [`Level::Fatal`], then exits the process with status 1.
    pub fn fatal_line(&self, values: &[&dyn fmt::Display]) -> ! {
        self.fatal_fmt(format_args!("{}", Joined::spaced(values)))
    }

    /// Writes at [`Level::Fatal`], flushes every destination, then exits the process with
    /// status 1.
    ///
    /// Fatal is written whatever the level switches say.
    pub fn fatal_fmt(&self, message: fmt::Arguments) -> ! {
        self.log_fmt(Level::Fatal, message);
        self.flush();
        std::process::exit(1)
    }
}
