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

//! Line layout shared by every level writer.

use std::fmt;
use std::fmt::Write;

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::Level;

/// A layout that formats one record as one line of text.
///
/// Output format:
///
/// ```text
/// DEBUG: 2024/03/05 22:44:57 cache warmed
/// INFO: 2024/03/05 22:44:57 listening on 0.0.0.0:8080
/// WARNING: 2024/03/05 22:44:57 slow response
/// ERROR: 2024/03/05 22:44:57 code=42
/// FATAL:2024/03/05 22:44:57 cannot continue
/// ```
///
/// A newline is appended unless the message already ends with one.
///
/// The timestamp is rendered in the system timezone unless `tz` is set.
#[derive(Default, Debug, Clone)]
pub struct TextLayout {
    pub tz: Option<TimeZone>,
}

impl TextLayout {
    pub(crate) fn format(&self, level: Level, now: Zoned, message: fmt::Arguments) -> Vec<u8> {
        let now = match self.tz.clone() {
            Some(tz) => now.with_time_zone(tz),
            None => now,
        };
        let time = now.strftime("%Y/%m/%d %H:%M:%S");

        let mut text = String::new();
        // SAFETY: write to a string always succeeds
        write!(&mut text, "{tag}{time} {message}", tag = level.tag()).unwrap();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text.into_bytes()
    }
}

/// Displays a list of values back to back, with `sep` between each pair.
pub(crate) struct Joined<'a> {
    values: &'a [&'a dyn fmt::Display],
    sep: &'static str,
}

impl<'a> Joined<'a> {
    pub(crate) fn concat(values: &'a [&'a dyn fmt::Display]) -> Self {
        Self { values, sep: "" }
    }

    pub(crate) fn spaced(values: &'a [&'a dyn fmt::Display]) -> Self {
        Self { values, sep: " " }
    }
}

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(self.sep)?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
