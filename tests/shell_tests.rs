use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{setup_test_db, tv, write_csv_fixture};
use ttviewer::cli::commands::shell::ShellCommand;

#[test]
fn test_parse_shell_commands() {
    assert_eq!(ShellCommand::parse("  "), ShellCommand::Empty);
    assert_eq!(
        ShellCommand::parse("view  a sharma "),
        ShellCommand::View("a sharma".into())
    );
    assert_eq!(ShellCommand::parse("VIEW"), ShellCommand::View(String::new()));
    assert_eq!(ShellCommand::parse("names"), ShellCommand::Names(None));
    assert_eq!(
        ShellCommand::parse("names sha"),
        ShellCommand::Names(Some("sha".into()))
    );
    assert_eq!(ShellCommand::parse("clear"), ShellCommand::Clear);
    assert_eq!(ShellCommand::parse("reset"), ShellCommand::Reset);
    assert_eq!(ShellCommand::parse("exit"), ShellCommand::Quit);
    assert_eq!(
        ShellCommand::parse("dance"),
        ShellCommand::Unknown("dance".into())
    );
}

#[test]
fn test_shell_session_locks_after_five_views() {
    let db_path = setup_test_db("shell_lock");
    let file = write_csv_fixture("shell_lock");

    let script = "view b verma\n".repeat(6) + "status\nquit\n";

    tv().args(["--db", &db_path, "--file", &file, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Attempts used this session: 5 / 5"))
        .stderr(contains("maximum number of timetable views"));
}

#[test]
fn test_shell_clear_and_reset_are_independent() {
    let db_path = setup_test_db("shell_reset");
    let file = write_csv_fixture("shell_reset");

    let script = "view a sharma\nclear\nclear\nview a sharma\nreset\nstatus\n";

    tv().args(["--db", &db_path, "--file", &file, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Counter cleared. Attempts used this session: 0 / 5"))
        .stdout(contains("Attempts used this session: 1 / 5"));
}

#[test]
fn test_shell_errors_do_not_end_session() {
    let db_path = setup_test_db("shell_errors");
    let file = write_csv_fixture("shell_errors");

    let script = "view\nview nobody\nnames verma\nview b verma\n";

    tv().args(["--db", &db_path, "--file", &file, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Please select your name"))
        .stdout(contains("Name not found"))
        .stdout(contains("Found timetable for: B Verma"))
        .stdout(contains("A Sharma").not());
}

#[test]
fn test_shell_sessions_do_not_persist() {
    let db_path = setup_test_db("shell_fresh");
    let file = write_csv_fixture("shell_fresh");

    tv().args(["--db", &db_path, "--file", &file, "shell"])
        .write_stdin("view b verma\n")
        .assert()
        .success();

    tv().args(["--db", &db_path, "--file", &file, "shell"])
        .write_stdin("status\n")
        .assert()
        .success()
        .stdout(contains("0 / 5"));
}

#[test]
fn test_shell_clear_and_reset_are_logged_separately() {
    let db_path = setup_test_db("shell_log_ops");
    let file = write_csv_fixture("shell_log_ops");

    tv().args(["--db", &db_path, "--file", &file, "shell"])
        .write_stdin("view a sharma\nclear\nreset\nquit\n")
        .assert()
        .success();

    tv().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Counter cleared after a view"))
        .stdout(contains("Counter reset"));
}
