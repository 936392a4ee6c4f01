use predicates::str::contains;
use std::fs;

mod common;
use common::{init_store_with_data, rl, setup_test_store, temp_out};

#[test]
fn test_export_json_all() {
    let store = setup_test_store("export_json_all");
    init_store_with_data(&store);

    let out = temp_out("export_json_all", "json");

    rl().args([
        "--db", &store, "export", "--format", "json", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("export file exists");
    assert!(content.contains("Morning Run"));
    assert!(content.contains("2025-09-01T07:30:00"));
    assert!(content.contains("\"id\""));
}

#[test]
fn test_export_csv_all() {
    let store = setup_test_store("export_csv_all");
    init_store_with_data(&store);

    let out = temp_out("export_csv_all", "csv");

    rl().args([
        "--db", &store, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("export file exists");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("id,title,date,notes"));
    assert!(content.contains("Morning Run"));
    assert!(content.contains("Evening Jog"));
}

#[test]
fn test_export_range_filters_logs() {
    let store = setup_test_store("export_range_filter");
    init_store_with_data(&store);

    let out = temp_out("export_range_filter", "json");

    rl().args([
        "--db",
        &store,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--range",
        "2025-09-01:2025-09-10",
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("export file exists");
    assert!(content.contains("Morning Run"));
    assert!(!content.contains("Evening Jog"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let store = setup_test_store("export_empty_range");
    init_store_with_data(&store);

    let out = temp_out("export_empty_range", "json");

    rl().args([
        "--db",
        &store,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--range",
        "2020",
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("No logs found for selected range."));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rejects_relative_path() {
    let store = setup_test_store("export_relative_path");
    init_store_with_data(&store);

    rl().args([
        "--db",
        &store,
        "export",
        "--format",
        "json",
        "--file",
        "relative_out.json",
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_invalid_range_fails() {
    let store = setup_test_store("export_invalid_range");
    init_store_with_data(&store);

    let out = temp_out("export_invalid_range", "json");

    rl().args([
        "--db",
        &store,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--range",
        "septemberish",
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid period"));
}
