use std::{fs, path::Path};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn event_sender(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("event-sender");
    cmd.current_dir(dir)
        .env_remove("EVENT_SENDER_LEDGER")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_invoke_query_round() {
    let tmp = tempdir().expect("tempdir");
    let ledger = tmp.path().join("ledger.json");
    let ledger_arg = ledger.to_str().expect("utf-8 path");

    event_sender(tmp.path())
        .args(["init", "--ledger", ledger_arg])
        .assert()
        .success()
        .stderr(predicate::str::contains("EventSender deployed"));
    assert!(ledger.exists());

    event_sender(tmp.path())
        .args(["--ledger", ledger_arg, "invoke", "invoke", "x", "y"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Event 0,x,y"));

    event_sender(tmp.path())
        .args(["--ledger", ledger_arg, "invoke", "invoke"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Event 1"));

    event_sender(tmp.path())
        .args(["query", "--ledger", ledger_arg])
        .assert()
        .success()
        .stdout("{\"NoEvents\":2}\n");

    event_sender(tmp.path())
        .args(["events", "--json", "--ledger", ledger_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"event_name\":\"evtsender\"").count(2));

    event_sender(tmp.path())
        .args(["check", "--ledger", ledger_arg])
        .assert()
        .success()
        .stderr(predicate::str::contains("All checks passed"));
}

#[test]
fn unknown_function_is_rejected() {
    let tmp = tempdir().expect("tempdir");

    event_sender(tmp.path()).arg("init").assert().success();

    event_sender(tmp.path())
        .args(["invoke", "delete"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown function: delete"));

    event_sender(tmp.path())
        .arg("query")
        .assert()
        .success()
        .stdout("{\"NoEvents\":0}\n");
}

#[test]
fn init_refuses_to_overwrite() {
    let tmp = tempdir().expect("tempdir");

    event_sender(tmp.path()).arg("init").assert().success();
    event_sender(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ledger already exists"));
    event_sender(tmp.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn query_without_ledger_fails() {
    let tmp = tempdir().expect("tempdir");

    event_sender(tmp.path())
        .arg("query")
        .assert()
        .failure()
        .stderr(predicate::str::contains("run `event-sender init` first"));
}

#[test]
fn corrupted_counter_is_internal_error() {
    let tmp = tempdir().expect("tempdir");
    event_sender(tmp.path()).arg("init").assert().success();

    let ledger = tmp.path().join(".event-sender/ledger.json");
    let content = fs::read_to_string(&ledger).expect("read ledger");
    fs::write(&ledger, content.replace("\"noevents\": \"0\"", "\"noevents\": \"zero\""))
        .expect("write ledger");

    event_sender(tmp.path())
        .args(["invoke", "invoke"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("500 INTERNAL_SERVER_ERROR"))
        .stderr(predicate::str::contains("invalid counter value 'zero'"));

    event_sender(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("check failed"));
}

#[test]
fn config_file_sets_ledger_path() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join("event-sender.toml"),
        "[ledger]\npath = \"state/chain.json\"\n",
    )
    .expect("write config");

    event_sender(tmp.path()).arg("init").assert().success();
    assert!(tmp.path().join("state/chain.json").exists());
}

#[test]
fn schema_lists_functions() {
    let tmp = tempdir().expect("tempdir");

    event_sender(tmp.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"EventSender\""))
        .stdout(predicate::str::contains("\"name\":\"query\""));
}

#[test]
fn invoke_passes_hyphenated_arguments_through() {
    let tmp = tempdir().expect("tempdir");
    event_sender(tmp.path()).arg("init").assert().success();

    event_sender(tmp.path())
        .args(["invoke", "invoke", "-x", "--y"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Event 0,-x,--y"));
}
