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

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;

/// Errors raised while configuring a [`Logger`](crate::Logger).
///
/// Emitting records never fails; only configuration does.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("log file path {} has no file name", .0.display())]
    InvalidLogPath(PathBuf),
    #[error("failed to create log directory {}: {source}", .path.display())]
    CreateLogDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open log file {}: {source}", .path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to set up logger: {0}")]
    SetLogger(#[from] SetLoggerError),
}
