use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `roster` command isolated from the user's config and environment.
fn roster(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_demo_lists_every_ordering() {
    let home = tempfile::tempdir().unwrap();
    let output = roster(&home).arg("demo").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let by_id = stdout.find("--- Ordering by id ---").unwrap();
    let by_name = stdout.find("--- Ordering by name ---").unwrap();
    let by_age = stdout.find("--- Ordering by age ---").unwrap();
    assert!(by_id < by_name && by_name < by_age);

    // id listing: 1, 2, 3
    let id_section = &stdout[by_id..by_name];
    let ana = id_section.find("Ana").unwrap();
    let bernardo = id_section.find("Bernardo").unwrap();
    let carlos = id_section.find("Carlos").unwrap();
    assert!(ana < bernardo && bernardo < carlos);

    // age listing: Ana(22), Carlos(25), Bernardo(30)
    let age_section = &stdout[by_age..];
    let ana = age_section.find("Ana").unwrap();
    let bernardo = age_section.find("Bernardo").unwrap();
    let carlos = age_section.find("Carlos").unwrap();
    assert!(ana < carlos && carlos < bernardo);
}

#[test]
fn test_shell_session_crud() {
    let home = tempfile::tempdir().unwrap();
    let script = "\
create 3 Carlos 25
create 1 \"Ana María\" 22
edit 3 Carla 26
delete 1
find 3
find 1
";

    roster(&home)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Student created: 3 - Carlos - 25"))
        .stdout(predicate::str::contains("Student created: 1 - Ana María - 22"))
        .stdout(predicate::str::contains("Student updated: 3"))
        .stdout(predicate::str::contains("Student deleted: 1"))
        .stdout(predicate::str::contains("3 - Carla - 26"))
        .stdout(predicate::str::contains("No student with id 1"));
}

#[test]
fn test_shell_errors_do_not_end_session() {
    let home = tempfile::tempdir().unwrap();
    let script = "\
create 1 Ana 22
create 1 Otra 30
create 2 R2D2 30
create 3 Beto 0
create 4 Beto twenty
delete 9
create 5 Beto 40
";

    roster(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stderr(predicate::str::contains("Student id already exists: 1"))
        .stderr(predicate::str::contains("name cannot contain digits"))
        .stderr(predicate::str::contains("age must be greater than zero"))
        .stderr(predicate::str::contains("age must be a whole number"))
        .stderr(predicate::str::contains("Student not found: 9"))
        .stdout(predicate::str::contains("Student created: 5 - Beto - 40"));
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    let home = tempfile::tempdir().unwrap();
    let mut script = b"create 1 Ana 22\n".to_vec();
    script.extend_from_slice(b"\xff\xfe bogus\n");
    script.extend_from_slice(b"create 2 Beto 30\n");

    roster(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Student created: 1 - Ana - 22"))
        .stdout(predicate::str::contains("Student created: 2 - Beto - 30"));
}

#[test]
fn test_padded_id_is_the_same_student() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .write_stdin("create 1 Ana 22\ncreate \" 1\" \" Ana \" 22\nfind \" 1 \"\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Student id already exists: 1"))
        .stdout(predicate::str::contains("1 - Ana - 22"));
}

#[test]
fn test_order_switch_and_json_listing() {
    let home = tempfile::tempdir().unwrap();
    let script = "\
create 3 Carlos 25
create 1 Ana 22
create 2 Bernardo 30
order age
list
";

    let output = roster(&home)
        .args(["shell", "--json"])
        .write_stdin(script)
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let json_start = stdout.find('[').unwrap();
    let listed: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    let ages: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["age"].as_i64().unwrap())
        .collect();
    assert_eq!(ages, vec![22, 25, 30]);
}

#[test]
fn test_quit_stops_reading() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .write_stdin("create 1 Ana 22\nquit\ncreate 2 Beto 30\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student created: 1"))
        .stdout(predicate::str::contains("Student created: 2").not());
}

#[test]
fn test_snapshot_edit_shows_both_versions() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .write_stdin("create 2 Bernardo 30\nsnapshot-edit 2 Bernarda 31\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("before: 2 - Bernardo - 30"))
        .stdout(predicate::str::contains("2 - Bernarda - 31"));
}

#[test]
fn test_config_file_sets_default_order() {
    let home = tempfile::tempdir().unwrap();
    let config_path = home.path().join("roster.json");
    std::fs::write(&config_path, r#"{"default_order": "name"}"#).unwrap();

    let output = roster(&home)
        .arg("--config")
        .arg(&config_path)
        .write_stdin("create 1 Zoe 20\ncreate 2 Ana 30\nlist\n")
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let table = &stdout[stdout.find("NAME").unwrap()..];
    assert!(table.find("Ana").unwrap() < table.find("Zoe").unwrap());
}

#[test]
fn test_order_flag_overrides_config() {
    let home = tempfile::tempdir().unwrap();
    let config_path = home.path().join("roster.json");
    std::fs::write(&config_path, r#"{"default_order": "name"}"#).unwrap();

    let output = roster(&home)
        .args(["--order", "age", "--config"])
        .arg(&config_path)
        .write_stdin("create 1 Zoe 20\ncreate 2 Ana 30\nlist\n")
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let table = &stdout[stdout.find("NAME").unwrap()..];
    assert!(table.find("Zoe").unwrap() < table.find("Ana").unwrap());
}

#[test]
fn test_missing_config_file_fails() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .args(["--config", "/definitely/not/here.json", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}
