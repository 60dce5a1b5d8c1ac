//! Shared integration-test harness for spawning the `pokenews` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};

/// Default timeout for reading a single line from the process.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Short cycle used by most tests: 200 ticks (10 s), announcements at
/// 150 / 100 / 80 / 60 / 0 remaining.
#[must_use]
pub fn short_cycle() -> Value {
    json!({
        "cycleLength": 200,
        "preEventOffset": 150,
        "finalCountdownOffset": 60,
        "pendingThreshold": 100,
        "terminalAction": "pokekill",
        "debug": false,
        "messagePrefix": "[PN] ",
        "messagePreEvent": "soon",
        "messageFinal3": "3",
        "messageFinal2": "2",
        "messageFinal1": "1",
        "messageStolen": "gone",
        "messageGracePeriod": "grace {time}",
        "messagePending": "pending {time}"
    })
}

/// Writes `config` as `pokenews_config.json` in `dir` and returns its path.
#[allow(clippy::missing_panics_doc)]
pub fn write_config(dir: &Path, config: &Value) -> PathBuf {
    let path = dir.join("pokenews_config.json");
    std::fs::write(&path, serde_json::to_string_pretty(config).unwrap())
        .expect("failed to write config");
    path
}

/// Runs the binary to completion with `args`.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command(args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_pokenews"))
        .args(args)
        .env_remove("POKENEWS_CONFIG")
        .env_remove("POKENEWS_LOG_LEVEL")
        .output()
        .expect("failed to run pokenews")
}

/// Stdout of a successful run, split into lines.
#[allow(clippy::missing_panics_doc)]
pub fn stdout_lines(output: &Output) -> Vec<String> {
    assert!(
        output.status.success(),
        "pokenews failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

/// A running `pokenews run` process.
///
/// The child process is killed on drop via `kill_on_drop(true)`.
pub struct PokeNewsProcess {
    child: Child,
    stdin: tokio::process::ChildStdin,
    reader: BufReader<tokio::process::ChildStdout>,
}

impl PokeNewsProcess {
    /// Spawns `pokenews run --render plain` with extra arguments.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_run(config_path: &Path, extra_args: &[&str]) -> Self {
        let mut args = vec![
            "run",
            "--config",
            config_path.to_str().expect("non-UTF-8 config path"),
            "--render",
            "plain",
            "--quiet",
        ];
        args.extend_from_slice(extra_args);

        let mut child = Command::new(env!("CARGO_BIN_EXE_pokenews"))
            .args(&args)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .expect("failed to spawn pokenews");

        let stdin = child.stdin.take().expect("stdin not captured");
        let stdout = child.stdout.take().expect("stdout not captured");

        Self {
            child,
            stdin,
            reader: BufReader::new(stdout),
        }
    }

    /// Types one chat command.
    #[allow(clippy::missing_panics_doc)]
    pub async fn send_line(&mut self, line: &str) {
        self.stdin
            .write_all(format!("{line}\n").as_bytes())
            .await
            .expect("failed to write to stdin");
        self.stdin.flush().await.expect("failed to flush stdin");
    }

    /// Reads one non-empty line from stdout.
    ///
    /// Panics on EOF or if nothing arrives within `timeout`.
    #[allow(clippy::missing_panics_doc)]
    pub async fn read_line(&mut self, timeout: Duration) -> String {
        let mut line = String::new();
        tokio::time::timeout(timeout, async {
            loop {
                line.clear();
                let n = self
                    .reader
                    .read_line(&mut line)
                    .await
                    .expect("read_line I/O error");
                assert!(n > 0, "unexpected EOF from pokenews");
                if !line.trim().is_empty() {
                    return line.trim_end().to_owned();
                }
            }
        })
        .await
        .expect("timed out waiting for output")
    }

    /// Reads lines until one satisfies `pred`, returning it.
    #[allow(clippy::missing_panics_doc)]
    pub async fn read_until(&mut self, pred: impl Fn(&str) -> bool) -> String {
        loop {
            let line = self.read_line(DEFAULT_TIMEOUT).await;
            if pred(&line) {
                return line;
            }
        }
    }

    /// Kills the process and waits for it.
    #[allow(clippy::missing_panics_doc)]
    pub async fn shutdown(mut self) {
        self.child.kill().await.expect("failed to kill child");
    }
}
