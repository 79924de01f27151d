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
use std::io::Write;
use std::sync::Arc;

use crate::Level;
use crate::append::Append;
use crate::clock::Clock;
use crate::layout::TextLayout;

/// The writer bound to one level: a layout and the union of its destinations.
///
/// A switched-off level writes nowhere. A switched-on level with no destinations (console
/// suppressed and no file) is still enabled, its lines are just discarded.
#[derive(Debug)]
pub(crate) struct Dispatch {
    level: Level,
    enabled: bool,
    layout: TextLayout,
    clock: Clock,
    appends: Vec<Arc<dyn Append>>,
}

impl Dispatch {
    pub(crate) fn new(
        level: Level,
        enabled: bool,
        layout: TextLayout,
        clock: Clock,
        appends: Vec<Arc<dyn Append>>,
    ) -> Self {
        Self {
            level,
            enabled,
            layout,
            clock,
            appends,
        }
    }

    pub(crate) fn enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn log(&self, message: fmt::Arguments) {
        if !self.enabled || self.appends.is_empty() {
            return;
        }

        let line = self.layout.format(self.level, self.clock.now(), message);
        for append in &self.appends {
            if let Err(err) = append.append(&line) {
                handle_error(self.level, &line, err);
            }
        }
    }

    pub(crate) fn flush(&self) {
        for append in &self.appends {
            append.flush();
        }
    }
}

// Sink failures never reach the caller. The process's stderr is the last resort, and a
// failure there is dropped.
fn handle_error(level: Level, line: &[u8], error: anyhow::Error) {
    let _ = write!(
        std::io::stderr(),
        r###"
Error perform logging.
    Attempted to log: {line}
    Level: {level}
    Error: {error:#}
"###,
        line = String::from_utf8_lossy(line).trim_end(),
    );
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::Zoned;

    use super::*;
    use crate::append::Memory;
    use crate::clock::ManualClock;

    #[derive(Debug)]
    struct Broken;

    impl Append for Broken {
        fn append(&self, _: &[u8]) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }
    }

    fn clock() -> Clock {
        Clock::ManualClock(ManualClock::new(
            Zoned::from_str("2024-03-05T10:00:00[UTC]").unwrap(),
        ))
    }

    #[test]
    fn test_fans_out_to_every_append() {
        let first = Memory::default();
        let second = Memory::default();
        let dispatch = Dispatch::new(
            Level::Warning,
            true,
            TextLayout::default(),
            clock(),
            vec![Arc::new(first.clone()), Arc::new(second.clone())],
        );

        dispatch.log(format_args!("low disk"));
        assert!(first.contents().starts_with("WARNING: "));
        assert!(first.contents().ends_with(" low disk\n"));
        assert_eq!(first.contents(), second.contents());
    }

    #[test]
    fn test_empty_dispatch_discards() {
        let dispatch = Dispatch::new(Level::Debug, true, TextLayout::default(), clock(), vec![]);
        assert!(dispatch.enabled());
        dispatch.log(format_args!("dropped"));
        dispatch.flush();
    }

    #[test]
    fn test_switched_off_dispatch_writes_nothing() {
        let memory = Memory::default();
        let dispatch = Dispatch::new(
            Level::Info,
            false,
            TextLayout::default(),
            clock(),
            vec![Arc::new(memory.clone())],
        );
        assert!(!dispatch.enabled());
        dispatch.log(format_args!("dropped"));
        assert!(memory.is_empty());
    }

    #[test]
    fn test_failing_append_does_not_stop_others() {
        let memory = Memory::default();
        let dispatch = Dispatch::new(
            Level::Error,
            true,
            TextLayout::default(),
            clock(),
            vec![Arc::new(Broken), Arc::new(memory.clone())],
        );

        dispatch.log(format_args!("still delivered"));
        assert!(memory.contents().contains("still delivered"));
    }
}
