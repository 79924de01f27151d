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

use std::fs;

use logroute::LogConfig;
use tempfile::TempDir;

// A single test per binary: the `log` facade logger can only be installed once.
#[test]
fn test_log_facade_routes_through_level_writers() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let config = LogConfig::none()
        .info(true)
        .error(true)
        .suppress_console(true)
        .file_path(temp_dir.path().join("facade.log"));
    let logger = logroute::configure(Some(config)).unwrap();
    logger.apply().unwrap();

    assert!(matches!(
        logger.apply(),
        Err(logroute::Error::SetLogger(_))
    ));

    log::trace!("trace dropped");
    log::debug!("debug dropped");
    log::info!("info kept {}", 1);
    log::warn!("warn dropped");
    log::error!("error kept {}", 2);
    log::logger().flush();

    let contents = fs::read_to_string(logger.log_file().unwrap()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2, "{contents}");
    assert!(lines[0].starts_with("INFO: ") && lines[0].ends_with(" info kept 1"));
    assert!(lines[1].starts_with("ERROR: ") && lines[1].ends_with(" error kept 2"));
}
