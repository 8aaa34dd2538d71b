use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LAYOUT: &str = r#"
name = "TrainJob"

[[fields]]
key = "name"
title = "NAME"

[[fields]]
key = "phase"
title = "PHASE"
default = "Unknown"

[[fields]]
key = "usage"
group = { name = "USAGE" }

[[fields.fields]]
key = "memory"
title = "MEM"
format = "byte-size"

[[fields.fields]]
key = "elapsed"
title = "ELAPSED"
format = "duration"
"#;

const JOBS: &str = r#"[
  {"name": "trainer-0", "phase": "Running", "usage": {"memory": 1536, "elapsed": 3661}},
  {"name": "trainer-1", "usage": {"memory": 500}}
]"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn kreport(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kreport").unwrap();
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    kreport(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("table"))
        .stdout(predicate::str::contains("detail"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_table_from_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "layout.toml", LAYOUT);
    write(dir.path(), "jobs.json", JOBS);

    kreport(&dir)
        .args(["table", "--layout", "layout.toml", "--input", "jobs.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME       PHASE    MEM      ELAPSED"))
        .stdout(predicate::str::contains("trainer-0  Running  1.5 KiB  01:01:01"))
        .stdout(predicate::str::contains("trainer-1  Unknown  500 B\n"));
}

#[test]
fn test_table_from_yaml_stdin() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "layout.toml", LAYOUT);

    kreport(&dir)
        .args(["table", "-l", "layout.toml", "--show", "name"])
        .write_stdin("- name: from-yaml\n  phase: Done\n")
        .assert()
        .success()
        .stdout("NAME\n----\nfrom-yaml\n");
}

#[test]
fn test_detail_selects_index() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "layout.toml", LAYOUT);
    write(dir.path(), "jobs.json", JOBS);

    kreport(&dir)
        .args(["detail", "-l", "layout.toml", "-i", "jobs.json", "--index", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME:"))
        .stdout(predicate::str::contains("trainer-1"))
        .stdout(predicate::str::contains("USAGE:\n  MEM:"))
        .stdout(predicate::str::contains("ELAPSED").not());
}

#[test]
fn test_detail_index_out_of_range() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "layout.toml", LAYOUT);
    write(dir.path(), "jobs.json", JOBS);

    kreport(&dir)
        .args(["detail", "-l", "layout.toml", "-i", "jobs.json", "--index", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_config_hides_fields() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "layout.toml", LAYOUT);
    write(dir.path(), "jobs.json", JOBS);
    write(dir.path(), ".kreport.toml", "[view]\nhide = [\"usage\"]\n");

    kreport(&dir)
        .args(["table", "-l", "layout.toml", "-i", "jobs.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MEM").not())
        .stdout(predicate::str::contains("trainer-1  Unknown\n"));
}

#[test]
fn test_formatter_error_keeps_partial_output() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "layout.toml", LAYOUT);
    write(
        dir.path(),
        "jobs.json",
        r#"[{"name": "good", "usage": {"elapsed": 5}}, {"name": "bad", "usage": {"elapsed": -5}}]"#,
    );

    kreport(&dir)
        .args(["table", "-l", "layout.toml", "-i", "jobs.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("good"))
        .stdout(predicate::str::contains("bad").not())
        .stderr(predicate::str::contains("usage.elapsed"));
}

#[test]
fn test_check_rejects_unknown_formatter() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "layout.toml",
        "[[fields]]\nkey = \"age\"\nformat = \"relative\"\n",
    );

    kreport(&dir)
        .args(["check", "-l", "layout.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown formatter 'relative'"));
}

#[test]
fn test_check_with_formatter_alias() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "layout.toml",
        "name = \"Pod\"\n[[fields]]\nkey = \"mem\"\nformat = \"bytes\"\n",
    );
    let config = write(dir.path(), "custom.toml", "[formatters]\nbytes = \"byte-size\"\n");

    kreport(&dir)
        .arg("check")
        .arg("-l")
        .arg("layout.toml")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("bytes"))
        .stdout(predicate::str::contains("Layout 'Pod' is valid: 1 visible column(s)"));
}
