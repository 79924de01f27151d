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

//! Logroute is a small leveled logger that routes debug, info, warning, error and fatal
//! records to a dated log file and the console.
//!
//! # Overview
//!
//! A [`LogConfig`] says which levels are on, whether the console is used at all and where
//! the log file lives. [`configure`] resolves it once into a [`Logger`] that owns one writer
//! per level:
//!
//! | Level   | Console | File | Can be disabled |
//! |---------|---------|------|-----------------|
//! | debug   | stdout  | yes  | yes             |
//! | info    | stdout  | yes  | yes             |
//! | warning | stdout  | yes  | yes             |
//! | error   | stderr  | yes  | yes             |
//! | fatal   | stderr  | yes  | no              |
//!
//! The log file name is stamped with the local date of configuration, so `logs/app.log`
//! becomes `logs/2024-03-05_app.log`. Every line looks like
//! `INFO: 2024/03/05 22:44:57 message`.
//!
//! # Examples
//!
//! Log every level to the console:
//!
//! ```
//! let logger = logroute::configure(None).unwrap();
//!
//! logger.debug_line(&[&"cache size", &512]);
//! logroute::infof!(logger, "listening on {}", "0.0.0.0:8080");
//! ```
//!
//! Log only warnings and errors, to a file:
//!
//! ```no_run
//! use logroute::LogConfig;
//!
//! let config = LogConfig::none()
//!     .warning(true)
//!     .error(true)
//!     .suppress_console(true)
//!     .file_path("logs/app.log");
//!
//! let logger = logroute::configure(Some(config)).unwrap();
//! logroute::errorf!(logger, "code={}", 42);
//! ```
//!
//! Route the [`log`] crate's macros through the same writers:
//!
//! ```
//! let logger = logroute::configure(None).unwrap();
//! logger.apply().unwrap();
//!
//! log::warn!("disk almost full");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod config;
pub mod layout;

mod clock;
mod error;
mod level;
mod logger;
mod macros;

pub use append::Append;
pub use config::LevelSwitches;
pub use config::LogConfig;
pub use error::Error;
pub use layout::TextLayout;
pub use level::Level;
pub use logger::*;
