use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("zpass-check").unwrap();
    cmd.env_remove("ZPASS_LOG").env_remove("NO_COLOR");
    cmd
}

#[test]
fn oneshot_report_is_masked() {
    cmd()
        .args(["-n", "-p", "password"])
        .assert()
        .success()
        .stdout(contains("Password: ********\n"))
        .stdout(contains("Score: 0 / 4 ["))
        .stdout(contains("Estimated crack time (offline slow hash): "));
}

#[test]
fn oneshot_short() {
    cmd()
        .args(["-p", "password", "-s", "-n"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn oneshot_short_with_emoji() {
    cmd()
        .args(["--emoji", "-s", "-n", "-p", "password"])
        .assert()
        .success()
        .stdout("🔴 0\n");
}

#[test]
fn oneshot_json() {
    let out = cmd()
        .args(["--json", "-p", "password"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["score"], 0);
    assert!(value["guesses"].as_u64().unwrap() > 0);
    assert!(value["crack_times_display"]["offline_slow_hashing_1e4_per_second"].is_string());
    assert!(value["feedback"]["suggestions"].is_array());
}

#[test]
fn strong_passphrase_scores_high() {
    cmd()
        .args(["-s", "-p", "correct-horse-battery-staple-velvet-quasar"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn piped_output_has_no_escapes() {
    cmd()
        .args(["-p", "hunter2"])
        .assert()
        .success()
        .stdout(contains("\x1b[").not())
        .stdout(contains("hunter2").not());
    cmd()
        .env("NO_COLOR", "1")
        .args(["--emoji", "-p", "hunter2"])
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}

#[test]
fn config_file_enables_short_mode() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "[display]\nshort = true\nemoji = true\n").unwrap();
    cmd()
        .arg("--config")
        .arg(file.path())
        .args(["-p", "password"])
        .assert()
        .success()
        .stdout("🔴 0\n");
}

#[test]
fn interactive_requires_tty() {
    cmd()
        .write_stdin("")
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains(
            "Interactive mode requires a TTY. Use -p/--password for non-interactive.",
        ));
}

fn json_guesses(args: &[&str]) -> u64 {
    let out = cmd().arg("--json").args(args).assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    value["guesses"].as_u64().unwrap()
}

#[test]
fn user_inputs_make_matching_passwords_weaker() {
    let plain = json_guesses(&["-p", "quokkaventure"]);
    let known = json_guesses(&["-p", "quokkaventure", "-u", "quokkaventure"]);
    assert!(known < plain, "{known} !< {plain}");
    let repeated = json_guesses(&[
        "-p",
        "quokkaventure",
        "--user-input",
        "alice",
        "--user-input",
        "quokkaventure",
    ]);
    assert!(repeated < plain, "{repeated} !< {plain}");
}

#[test]
fn help_describes_every_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Disable colored output"))
        .stdout(contains("--user-input <WORD>"));
}
