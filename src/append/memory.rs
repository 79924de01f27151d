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
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::append::Append;

/// An appender that keeps every line in a shared in-memory buffer.
///
/// Clones share the same buffer, so a clone can be handed to a
/// [`Builder`](crate::Builder) while the original is kept to inspect the output.
///
/// # Examples
///
/// ```
/// use logroute::LogConfig;
/// use logroute::append::Memory;
///
/// let stdout = Memory::default();
/// let logger = logroute::builder(LogConfig::default())
///     .stdout(stdout.clone())
///     .build()
///     .unwrap();
///
/// logger.info_line(&[&"hello"]);
/// assert!(stdout.contents().contains("INFO: "));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Memory {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Memory {
    /// Returns everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn clear(&self) {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Append for Memory {
    fn append(&self, line: &[u8]) -> anyhow::Result<()> {
        let mut buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        buf.extend_from_slice(line);
        Ok(())
    }
}
