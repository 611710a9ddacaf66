use predicates::str::contains;

mod common;
use common::{flog, setup_entries_file, setup_identity_file, setup_test_db};

#[test]
fn local_add_list_del_cycle() {
    let file = setup_entries_file("cli_local_cycle");

    flog()
        .args(["--store", "local", "--file", &file, "--test", "init"])
        .assert()
        .success();

    flog()
        .args([
            "--store",
            "local",
            "--file",
            &file,
            "add",
            "--date",
            "2025-09-01",
            "--type",
            "yellow",
            "--actual",
            "40",
            "--energy",
            "same",
            "--notes",
            "solid block",
        ])
        .assert()
        .success();

    flog()
        .args(["--store", "local", "--file", &file, "list", "--notes"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("Yellow"))
        .stdout(contains("solid block"));

    // First locally generated id is 1.
    flog()
        .args(["--store", "local", "--file", &file, "del", "1"])
        .assert()
        .success();

    flog()
        .args(["--store", "local", "--file", &file, "list"])
        .assert()
        .success()
        .stdout(contains("No sessions recorded yet."));
}

#[test]
fn add_without_actual_minutes_is_rejected() {
    let file = setup_entries_file("cli_missing_actual");

    flog()
        .args(["--store", "local", "--file", &file, "--test", "init"])
        .assert()
        .success();

    flog()
        .args([
            "--store",
            "local",
            "--file",
            &file,
            "add",
            "--date",
            "2025-09-01",
        ])
        .assert()
        .failure()
        .stderr(contains("actual minutes is required"));

    flog()
        .args(["--store", "local", "--file", &file, "list"])
        .assert()
        .success()
        .stdout(contains("No sessions recorded yet."));
}

#[test]
fn planned_minutes_default_follows_the_tier() {
    let file = setup_entries_file("cli_tier_default");

    flog()
        .args([
            "--store", "local", "--file", &file, "add", "--type", "red", "--actual", "10",
        ])
        .assert()
        .success();

    flog()
        .args(["--store", "local", "--file", &file, "list"])
        .assert()
        .success()
        .stdout(contains("15"))
        .stdout(contains("Red"));
}

#[test]
fn remote_requires_sign_in() {
    let db = setup_test_db("cli_remote_unauth");
    let identity = setup_identity_file("cli_remote_unauth");

    flog()
        .args([
            "--store",
            "remote",
            "--db",
            &db,
            "--identity-file",
            &identity,
            "--test",
            "init",
        ])
        .assert()
        .success();

    flog()
        .args([
            "--store",
            "remote",
            "--db",
            &db,
            "--identity-file",
            &identity,
            "add",
            "--actual",
            "30",
        ])
        .assert()
        .failure()
        .stderr(contains("Sign in required"));

    flog()
        .args([
            "--store",
            "remote",
            "--db",
            &db,
            "--identity-file",
            &identity,
            "list",
        ])
        .assert()
        .failure()
        .stderr(contains("Sign in required"));
}

#[test]
fn remote_add_list_del_cycle_after_login() {
    let db = setup_test_db("cli_remote_cycle");
    let identity = setup_identity_file("cli_remote_cycle");
    let base = [
        "--store",
        "remote",
        "--db",
        db.as_str(),
        "--identity-file",
        identity.as_str(),
    ];

    flog().args(base).args(["--test", "init"]).assert().success();
    flog().args(base).args(["login", "alice"]).assert().success();

    flog()
        .args(base)
        .args([
            "add",
            "--date",
            "2025-09-02",
            "--type",
            "green",
            "--actual",
            "75",
            "--tasks-done",
            "2",
            "--task",
            "write draft",
            "--task",
            "review notes",
        ])
        .assert()
        .success();

    flog()
        .args(base)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("2025-09-02"))
        .stdout(contains("Green"));

    flog()
        .args(base)
        .args(["whoami"])
        .assert()
        .success()
        .stdout(contains("alice"));

    // The audit log recorded the create.
    flog()
        .args(base)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("create_session"));

    flog().args(base).args(["del", "1"]).assert().success();

    flog()
        .args(base)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("No sessions recorded yet."));
}

#[test]
fn logout_signs_the_user_out() {
    let db = setup_test_db("cli_logout");
    let identity = setup_identity_file("cli_logout");
    let base = [
        "--store",
        "remote",
        "--db",
        db.as_str(),
        "--identity-file",
        identity.as_str(),
    ];

    flog().args(base).args(["--test", "init"]).assert().success();
    flog().args(base).args(["login", "alice"]).assert().success();
    flog().args(base).args(["logout"]).assert().success();

    flog()
        .args(base)
        .args(["whoami"])
        .assert()
        .success()
        .stdout(contains("Not signed in"));

    flog()
        .args(base)
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("Sign in required"));
}
