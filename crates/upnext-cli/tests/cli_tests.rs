//! End-to-end tests for the upnext binary
//!
//! Output is captured, so the binary never sees a terminal and prints the
//! static list instead of starting the interactive view.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
    project: PathBuf,
    elsewhere: PathBuf,
    data_file: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        let project = home.path().join("work").join("project");
        let elsewhere = home.path().join("other");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::create_dir_all(&elsewhere).unwrap();
        let data_file = home.path().join("data").join("todos.json");
        Self {
            home,
            project,
            elsewhere,
            data_file,
        }
    }

    fn run_in(&self, dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_upnext"))
            .args(args)
            .arg("--data-file")
            .arg(&self.data_file)
            .current_dir(dir)
            .env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("XDG_DATA_HOME")
            .env_remove("RUST_LOG")
            .env_remove("UPNEXT_DATA_FILE")
            .env_remove("UPNEXT_SHOW_ALL")
            .env_remove("UPNEXT_DEFAULT_PRIORITY")
            .env_remove("UPNEXT_CELEBRATION_SECS")
            .env_remove("UPNEXT_LOG_LEVEL")
            .env_remove("UPNEXT_LOG_FILE")
            .output()
            .expect("Failed to run upnext")
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_in(&self.project, args)
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_empty_list() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--plain"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim_end(),
        "No tasks. Add one with: upnext add \"your task\""
    );
    assert!(!sandbox.data_file.exists());
}

#[test]
fn test_add_and_list() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["add", "Write report", "-p", "high"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "Added here: Write report");

    let output = sandbox.run(&["add", "-g", "Call mom", "-d", "Sunday evening"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "Added globally: Call mom");

    // Not a terminal: plain output without --plain
    let output = sandbox.run(&[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Tasks:");
    assert_eq!(lines[2], "1. [!!] Call mom");
    assert_eq!(lines[3], "      Sunday evening");
    assert_eq!(lines[4], "2. [!!!] Write report");
    assert_eq!(lines[6], "2 items | 0 completed total");
}

#[test]
fn test_static_list_ignores_directory() {
    let sandbox = Sandbox::new();
    assert!(sandbox.run(&["add", "Project task"]).status.success());
    assert!(sandbox.run(&["add", "-g", "Global task"]).status.success());

    for dir in [sandbox.elsewhere.as_path(), sandbox.home.path()] {
        let output = sandbox.run_in(dir, &["--plain"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let text = stdout(&output);
        assert!(text.contains("Global task"));
        assert!(text.contains("Project task"));
    }

    let output = sandbox.run_in(&sandbox.elsewhere, &["--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["items"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_json_output() {
    let sandbox = Sandbox::new();
    assert!(
        sandbox
            .run(&["add", "Ship it", "-p", "low", "--desc", "before friday"])
            .status
            .success()
    );

    let output = sandbox.run(&["--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    let item = &value["items"][0];
    assert_eq!(item["text"], "Ship it");
    assert_eq!(item["priority"], "Low");
    assert_eq!(item["description"], "before friday");
    assert_eq!(item["position"], 0);
    assert_eq!(
        item["context"].as_str().map(PathBuf::from),
        Some(sandbox.project.canonicalize().unwrap())
    );
    assert_eq!(value["stats"]["total_completed"], 0);
}

#[test]
fn test_empty_json_list() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["items"], serde_json::json!([]));
}

#[test]
fn test_blank_task_is_not_added() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["add", "   "]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!sandbox.data_file.exists());
}

#[test]
fn test_unknown_priority_fails() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["add", "Something", "-p", "urgent"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("urgent"));
    assert!(!sandbox.data_file.exists());
}

#[test]
fn test_corrupt_data_file_is_reported_and_kept() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.data_file.parent().unwrap()).unwrap();
    std::fs::write(&sandbox.data_file, "{ not json").unwrap();

    let output = sandbox.run(&["--plain"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        std::fs::read_to_string(&sandbox.data_file).unwrap(),
        "{ not json"
    );

    let output = sandbox.run(&["add", "More"]);
    assert!(!output.status.success());
    assert_eq!(
        std::fs::read_to_string(&sandbox.data_file).unwrap(),
        "{ not json"
    );
}

#[test]
fn test_config_init_and_path() {
    let sandbox = Sandbox::new();
    let config_file = sandbox.home.path().join("upnext.json");
    let config_arg = config_file.to_str().unwrap();

    let output = sandbox.run(&["config", "init", "--config-file", config_arg]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(config_file.exists());

    let output = sandbox.run(&["config", "init", "--config-file", config_arg]);
    assert!(!output.status.success());

    let output = sandbox.run(&["config", "path", "--config-file", config_arg]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains(config_arg));
    assert!(text.contains(sandbox.data_file.to_str().unwrap()));
}
