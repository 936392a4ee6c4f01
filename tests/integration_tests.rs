use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_store_with_data, rl, setup_test_store};

#[test]
fn test_init_creates_store() {
    let store = setup_test_store("init_creates_store");

    rl().args(["--db", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialized"));

    assert!(std::path::Path::new(&store).exists());
}

#[test]
fn test_add_and_list_round_trip() {
    let store = setup_test_store("add_list_round_trip");
    init_store_with_data(&store);

    rl().args(["--db", &store, "list"])
        .assert()
        .success()
        .stdout(contains("Morning Run"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("Evening Jog"))
        .stdout(contains("2025-09-15"));
}

#[test]
fn test_add_assigns_sequential_ids() {
    let store = setup_test_store("add_sequential_ids");
    init_store_with_data(&store);

    rl().args(["--db", &store, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Morning Run"));

    rl().args(["--db", &store, "show", "2"])
        .assert()
        .success()
        .stdout(contains("Evening Jog"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let store = setup_test_store("add_invalid_date");

    rl().args(["--db", &store, "--test", "init"])
        .assert()
        .success();

    rl().args(["--db", &store, "add", "Bad Run", "--date", "01/05/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_rejects_invalid_time() {
    let store = setup_test_store("add_invalid_time");

    rl().args(["--db", &store, "--test", "init"])
        .assert()
        .success();

    rl().args([
        "--db", &store, "add", "Bad Run", "--date", "2024-05-01", "--time", "7h30",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));
}

#[test]
fn test_show_missing_id_fails() {
    let store = setup_test_store("show_missing");

    rl().args(["--db", &store, "--test", "init"])
        .assert()
        .success();

    rl().args(["--db", &store, "show", "99"])
        .assert()
        .failure()
        .stderr(contains("❌"))
        .stderr(contains("No log found with id 99"));
}

#[test]
fn test_del_then_show_fails() {
    let store = setup_test_store("del_then_show");
    init_store_with_data(&store);

    rl().args(["--db", &store, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    rl().args(["--db", &store, "show", "1"])
        .assert()
        .failure()
        .stderr(contains("No log found with id 1"));

    // second delete on the same id reports not found
    rl().args(["--db", &store, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No log found with id 1"));

    // the other log keeps its id and stays retrievable
    rl().args(["--db", &store, "show", "2"])
        .assert()
        .success()
        .stdout(contains("Evening Jog"));
}

#[test]
fn test_edit_updates_fields() {
    let store = setup_test_store("edit_updates_fields");
    init_store_with_data(&store);

    rl().args([
        "--db",
        &store,
        "edit",
        "1",
        "--title",
        "Tempo Run",
        "--time",
        "06:45",
    ])
    .assert()
    .success()
    .stdout(contains("Log #1 updated"));

    rl().args(["--db", &store, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Tempo Run"))
        .stdout(contains("2025-09-01T06:45:00"));
}

#[test]
fn test_edit_missing_id_fails() {
    let store = setup_test_store("edit_missing");

    rl().args(["--db", &store, "--test", "init"])
        .assert()
        .success();

    rl().args(["--db", &store, "edit", "7", "--title", "Ghost"])
        .assert()
        .failure()
        .stderr(contains("No log found with id 7"));
}

#[test]
fn test_list_empty_store() {
    let store = setup_test_store("list_empty");

    rl().args(["--db", &store, "--test", "init"])
        .assert()
        .success();

    rl().args(["--db", &store, "list"])
        .assert()
        .success()
        .stdout(contains("No logs recorded."));
}

#[test]
fn test_list_period_filter() {
    let store = setup_test_store("list_period_filter");
    init_store_with_data(&store);

    rl().args(["--db", &store, "list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Morning Run").and(contains("Evening Jog").not()));

    rl().args(["--db", &store, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Morning Run"))
        .stdout(contains("Evening Jog"));
}

#[test]
fn test_list_multibyte_period_fails_cleanly() {
    let store = setup_test_store("list_multibyte_period");
    init_store_with_data(&store);

    rl().args(["--db", &store, "list", "--period", "abcdéf"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_commands_fail_without_store() {
    let store = setup_test_store("no_store_yet");

    rl().args(["--db", &store, "list"])
        .assert()
        .failure()
        .stderr(contains("Document store not found"));
}

#[test]
fn test_oplog_records_operations() {
    let store = setup_test_store("oplog_records");
    init_store_with_data(&store);

    rl().args(["--db", &store, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_backup_copies_store() {
    let store = setup_test_store("backup_copies");
    init_store_with_data(&store);

    let dest = common::temp_out("backup_copies", "json");

    rl().args(["--db", &store, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}

#[test]
fn test_backup_compress() {
    let store = setup_test_store("backup_compress");
    init_store_with_data(&store);

    let dest = common::temp_out("backup_compress", "json");
    let gz = format!("{}.gz", dest);
    std::fs::remove_file(&gz).ok();

    rl().args(["--db", &store, "backup", "--file", &dest, "--compress"])
        .assert()
        .success()
        .stdout(contains("Backup compressed"));

    assert!(std::path::Path::new(&gz).exists());
    assert!(!std::path::Path::new(&dest).exists());
}
