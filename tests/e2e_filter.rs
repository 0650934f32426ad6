#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

const INPUT: &str = "src/tui/input.rs\nsrc/utils/mod.rs\nsrc/util.rs\nsrc/engine/util.rs\nREADME.md\n";

fn qo_bin() -> &'static str {
    env!("CARGO_BIN_EXE_qo")
}

fn run_qo(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(qo_bin())
        .args(args)
        .env("QUICKOPEN_DEFAULT_OPTIONS", "")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn qo");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("run qo")
}

#[test]
fn filter_mode_prints_ranked_matches() {
    let output = run_qo(&["-q", "util", "--highlight", "brackets"], INPUT);

    assert!(output.status.success(), "qo failed: status={:?}", output.status.code());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "src/[util].rs\nsrc/engine/[util].rs\nsrc/[util]s/mod.rs\n");
}

#[test]
fn filter_mode_without_query_lists_everything() {
    let output = run_qo(&[], INPUT);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), INPUT);
}

#[test]
fn filter_mode_exit_code_is_one_on_no_match() {
    let output = run_qo(&["-q", "zzz"], INPUT);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn filter_mode_appends_location_and_scores() {
    let output = run_qo(&["-q", "util:12", "--print-score", "--print-query", "-n", "1"], INPUT);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "util\n1090\tsrc/util.rs:12\n850\tsrc/utils/mod.rs:12\n1090\tsrc/engine/util.rs:12\n"
    );
}

#[test]
fn filter_mode_reads_default_options_and_nul_input() {
    let mut child = Command::new(qo_bin())
        .args(["-q", "rd", "--read0", "--print0"])
        .env("QUICKOPEN_DEFAULT_OPTIONS", "--highlight brackets")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn qo");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"README.md\0docs/guide.md\0")
        .expect("write stdin");
    let output = child.wait_with_output().expect("run qo");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[R]EA[D]ME.md\0");
}

#[test]
fn filter_mode_reads_input_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(INPUT.as_bytes()).expect("write temp file");

    let output = Command::new(qo_bin())
        .args(["-q", "readme", "--input"])
        .arg(file.path())
        .env("QUICKOPEN_DEFAULT_OPTIONS", "")
        .stdin(Stdio::null())
        .output()
        .expect("run qo");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "README.md\n");
}

#[test]
fn filter_mode_missing_input_file_is_an_error() {
    let output = Command::new(qo_bin())
        .args(["-q", "a", "--input", "/nonexistent/quickopen/input.txt"])
        .env("QUICKOPEN_DEFAULT_OPTIONS", "")
        .stdin(Stdio::null())
        .output()
        .expect("run qo");

    assert_eq!(output.status.code(), Some(2));
}
