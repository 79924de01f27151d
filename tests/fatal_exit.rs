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

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

use logroute::LogConfig;
use tempfile::TempDir;

const CHILD_DIR: &str = "LOGROUTE_FATAL_CHILD_DIR";

fn run_child(test_name: &str, dir: &Path) -> std::process::Output {
    Command::new(env::current_exe().unwrap())
        .args(["--exact", test_name, "--nocapture"])
        .env(CHILD_DIR, dir)
        .output()
        .unwrap()
}

#[test]
fn fatal_writes_then_exits_with_status_one() {
    if let Ok(dir) = env::var(CHILD_DIR) {
        // every switchable level off: fatal is written anyway
        let config = LogConfig::none().file_path(Path::new(&dir).join("fatal.log"));
        let logger = logroute::configure(Some(config)).unwrap();
        logger.info_line(&[&"not written"]);
        logroute::fatalf!(logger, "cannot continue: {}", 7);
    }

    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let output = run_child("fatal_writes_then_exits_with_status_one", temp_dir.path());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FATAL:"), "{stderr}");
    assert!(stderr.contains("cannot continue: 7"), "{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("not written"), "{stdout}");

    let files = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect::<Vec<_>>();
    assert_eq!(files.len(), 1);
    assert!(files[0].to_str().unwrap().ends_with("_fatal.log"));

    let contents = fs::read_to_string(&files[0]).unwrap();
    assert!(contents.starts_with("FATAL:"), "{contents}");
    assert!(contents.ends_with("cannot continue: 7\n"), "{contents}");
}

#[test]
fn fatal_with_suppressed_console_writes_only_the_file() {
    if let Ok(dir) = env::var(CHILD_DIR) {
        let config = LogConfig::default()
            .suppress_console(true)
            .file_path(Path::new(&dir).join("quiet.log"));
        let logger = logroute::configure(Some(config)).unwrap();
        logroute::fatalln!(logger, "quiet", "exit");
    }

    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let output = run_child(
        "fatal_with_suppressed_console_writes_only_the_file",
        temp_dir.path(),
    );
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("FATAL:"), "{stderr}");

    let file = fs::read_dir(temp_dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let contents = fs::read_to_string(file).unwrap();
    assert!(contents.starts_with("FATAL:"), "{contents}");
    assert!(contents.ends_with(" quiet exit\n"), "{contents}");
}
