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

use std::ffi::OsString;
use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::PoisonError;

use jiff::Zoned;

use crate::Error;
use crate::append::Append;
use crate::clock::Clock;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// An appender that writes lines to a file whose name is stamped with the date it was opened.
///
/// The file is opened once, in create-or-append mode, and kept open for the lifetime of the
/// appender. Runs on the same calendar day share one file.
#[derive(Debug)]
pub struct DatedFile {
    path: PathBuf,
    writer: Mutex<File>,
}

impl DatedFile {
    /// Creates a new [`DatedFileBuilder`] for the given base path.
    #[must_use]
    pub fn builder(base_path: impl Into<PathBuf>) -> DatedFileBuilder {
        DatedFileBuilder::new(base_path)
    }

    /// The path of the file actually opened.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Append for DatedFile {
    fn append(&self, line: &[u8]) -> anyhow::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line)?;
        Ok(())
    }

    fn flush(&self) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}

/// A builder for configuring [`DatedFile`].
///
/// # Examples
///
/// ```no_run
/// use logroute::append::DatedFile;
///
/// // opens logs/<yyyy-mm-dd>_app.log
/// let file = DatedFile::builder("logs/app.log")
///     .create_dir(true)
///     .build()
///     .unwrap();
/// println!("logging to {}", file.path().display());
/// ```
#[derive(Debug)]
pub struct DatedFileBuilder {
    base_path: PathBuf,
    create_dir: bool,
    clock: Clock,
}

impl DatedFileBuilder {
    /// Creates a new [`DatedFileBuilder`].
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            create_dir: false,
            clock: Clock::DefaultClock,
        }
    }

    /// Creates the parent directory when it is missing. Off by default.
    #[must_use]
    pub fn create_dir(mut self, create_dir: bool) -> Self {
        self.create_dir = create_dir;
        self
    }

    pub(crate) fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Opens the dated file.
    ///
    /// # Errors
    ///
    /// Returns an error if the base path has no file name or the file cannot be opened.
    pub fn build(self) -> Result<DatedFile, Error> {
        let path = dated_path(&self.base_path, &self.clock.now())?;

        if self.create_dir {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(dir).map_err(|source| Error::CreateLogDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let writer = options
            .open(&path)
            .map_err(|source| Error::OpenLogFile {
                path: path.clone(),
                source,
            })?;

        Ok(DatedFile {
            path,
            writer: Mutex::new(writer),
        })
    }
}

/// Prefixes the file name of `base` with the date of `now`, keeping its directory.
///
/// `logs/app.log` on 2024-03-05 becomes `logs/2024-03-05_app.log`.
pub(crate) fn dated_path(base: &Path, now: &Zoned) -> Result<PathBuf, Error> {
    let Some(file_name) = base.file_name() else {
        return Err(Error::InvalidLogPath(base.to_path_buf()));
    };

    let mut dated = OsString::from(format!("{}_", now.strftime(DATE_FORMAT)));
    dated.push(file_name);
    Ok(base.with_file_name(dated))
}
