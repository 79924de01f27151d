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

//! Destinations a level writer can fan out to.

use std::fmt;

pub use self::file::DatedFile;
pub use self::file::DatedFileBuilder;
pub use self::memory::Memory;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;

mod file;
mod memory;
mod stdio;

/// A trait representing a destination that accepts fully formatted lines.
///
/// Every call carries one complete line. Implementors must write it as a single contiguous
/// chunk so that lines from concurrent callers never interleave.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Writes one formatted line.
    fn append(&self, line: &[u8]) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    fn flush(&self) {}
}
