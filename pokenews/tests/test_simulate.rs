mod common;

use common::{short_cycle, spawn_command, stdout_lines, write_config};

fn simulate(config: &serde_json::Value, extra: &[&str]) -> Vec<String> {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_config(tmp.path(), config);
    let mut args = vec!["simulate", "--config", path.to_str().unwrap()];
    args.extend_from_slice(extra);
    stdout_lines(&spawn_command(&args))
}

#[test]
fn one_cycle_in_order() {
    let lines = simulate(&short_cycle(), &["--ticks", "200"]);
    assert_eq!(
        lines,
        [
            "50\t[PN] soon",
            "100\t[PN] 3",
            "120\t[PN] 2",
            "140\t[PN] 1",
            "200\t[PN] gone",
            "200\t$ pokekill",
        ]
    );
}

#[test]
fn next_cycle_starts_after_stolen() {
    let lines = simulate(&short_cycle(), &["--ticks", "450"]);
    let stolen: Vec<&String> = lines.iter().filter(|l| l.ends_with("gone")).collect();
    assert_eq!(stolen, ["200\t[PN] gone", "400\t[PN] gone"]);
    assert!(lines.contains(&"250\t[PN] soon".to_owned()));
    assert_eq!(lines.last().unwrap(), "450\t[PN] soon");
}

#[test]
fn default_cycle_fires_on_expected_ticks() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("fresh").join("pokenews_config.json");
    let output = spawn_command(&[
        "simulate",
        "--ticks",
        "36000",
        "--config",
        path.to_str().unwrap(),
    ]);
    let lines = stdout_lines(&output);
    let ticks: Vec<&str> = lines
        .iter()
        .filter_map(|l| l.split('\t').next())
        .collect();
    assert_eq!(ticks, ["35400", "35900", "35920", "35940", "36000", "36000"]);
    // Missing file was created with defaults
    assert!(path.exists());
}

#[test]
fn queries_report_grace_then_pending() {
    let lines = simulate(
        &short_cycle(),
        &["--ticks", "120", "--query-at", "0", "--query-at", "120"],
    );
    assert_eq!(lines.first().unwrap(), "0\t[@Server] [PN] grace 0m 10s");
    assert_eq!(lines.last().unwrap(), "120\t[@Server] [PN] pending 0m 4s");
}

#[test]
fn debug_events_written_to_file() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = short_cycle();
    config["debug"] = serde_json::Value::Bool(true);
    let path = write_config(tmp.path(), &config);
    let events_path = tmp.path().join("events.jsonl");

    let output = spawn_command(&[
        "simulate",
        "--ticks",
        "200",
        "--config",
        path.to_str().unwrap(),
        "--events-file",
        events_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let events: Vec<serde_json::Value> = std::fs::read_to_string(&events_path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let sequences: Vec<u64> = events
        .iter()
        .map(|e| e["sequence"].as_u64().unwrap())
        .collect();
    assert!(sequences.windows(2).all(|w| w[1] > w[0]));
    assert!(events.iter().any(|e| e["type"] == "TerminalActionExecuted"));
    assert_eq!(
        events.iter().filter(|e| e["type"] == "CountdownTick").count(),
        10
    );
}

#[test]
fn broken_config_is_replaced_and_run_continues() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("pokenews_config.json");
    std::fs::write(&path, "{{{").unwrap();
    let output = spawn_command(&["simulate", "--ticks", "10", "--config", path.to_str().unwrap()]);
    assert!(output.status.success());
    let restored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(restored["cycleLength"], 36_000);
}
