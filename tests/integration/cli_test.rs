//! Integration tests for the ansi-html binary (CLI)

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{document, fixtures_dir, load_fixture};

/// Command for the ansi-html binary with a clean logging environment.
fn ansi_html() -> Command {
    let mut cmd = Command::cargo_bin("ansi-html").expect("binary should be built");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    ansi_html()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert ANSI-styled terminal output into HTML"))
        .stdout(predicate::str::contains("[INPUT]"))
        .stdout(predicate::str::contains("--stylesheet <HREF>"));
}

#[test]
fn unknown_flag_is_usage_error() {
    ansi_html()
        .arg("--no-such-flag")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--no-such-flag"));
}

// ============================================================================
// Pipe Tests
// ============================================================================

#[test]
fn stdin_plain_text_is_wrapped() {
    ansi_html()
        .write_stdin("hello\nworld\n")
        .assert()
        .success()
        .stdout(document("hello\nworld\n"));
}

#[test]
fn stdin_empty_input_emits_framing_only() {
    ansi_html().write_stdin("").assert().success().stdout(document(""));
}

#[test]
fn stdin_styled_text() {
    ansi_html()
        .write_stdin("\x1b[31mred\x1b[0m plain")
        .assert()
        .success()
        .stdout(document(r#"<span class="ansi ansi-fg-red">red</span> plain"#));
}

#[test]
fn dash_reads_stdin() {
    ansi_html()
        .arg("-")
        .write_stdin("\x1b[1mb")
        .assert()
        .success()
        .stdout(document(r#"<span class="ansi ansi-bold">b</span>"#));
}

#[test]
fn input_file_argument() {
    ansi_html()
        .arg(fixtures_dir().join("git_diff.ansi"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<span class="ansi ansi-fg-red">-old</span>"#,
        ));
}

#[test]
fn file_and_stdin_produce_same_output() {
    let from_file = ansi_html()
        .arg(fixtures_dir().join("ls_colors.ansi"))
        .output()
        .unwrap();
    let from_stdin = ansi_html()
        .write_stdin(load_fixture("ls_colors.ansi"))
        .output()
        .unwrap();
    assert!(from_file.status.success());
    assert_eq!(from_file.stdout, from_stdin.stdout);
}

#[test]
fn verbose_logging_stays_off_stdout() {
    ansi_html()
        .arg("-vv")
        .write_stdin("\x1b[99mx\x1b(B")
        .assert()
        .success()
        .stdout(document("x\x1b(B"));
}

// ============================================================================
// Option Tests
// ============================================================================

#[test]
fn output_flag_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("out.html");

    ansi_html()
        .arg("--output")
        .arg(&out_path)
        .write_stdin("\x1b[3mi")
        .assert()
        .success()
        .stdout("");

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        written,
        document(r#"<span class="ansi ansi-italic">i</span>"#)
    );
}

#[test]
fn fragment_flag_omits_framing() {
    ansi_html()
        .arg("--fragment")
        .write_stdin("\x1b[4mu")
        .assert()
        .success()
        .stdout(r#"<span class="ansi ansi-underline">u</span>"#);
}

#[test]
fn stylesheet_flag_changes_link() {
    ansi_html()
        .args(["--stylesheet", "/static/term.css"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<link rel=\"stylesheet\" href=\"/static/term.css\" />\n",
        ));
}

#[test]
fn escape_html_flag() {
    ansi_html()
        .args(["--fragment", "--escape-html"])
        .write_stdin("a < b && c")
        .assert()
        .success()
        .stdout("a &lt; b &amp;&amp; c");
}

#[test]
fn config_file_is_applied() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ansi-html.toml");
    std::fs::write(&config_path, "stylesheet = \"solarized.css\"\nescape_html = true\n").unwrap();

    ansi_html()
        .arg("--config")
        .arg(&config_path)
        .write_stdin("<x>")
        .assert()
        .success()
        .stdout(
            "<link rel=\"stylesheet\" href=\"solarized.css\" />\n\
             <pre><code class=\"ansi\">&lt;x&gt;</code></pre>\n",
        );
}

#[test]
fn flag_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ansi-html.toml");
    std::fs::write(&config_path, "stylesheet = \"solarized.css\"\n").unwrap();

    ansi_html()
        .arg("--config")
        .arg(&config_path)
        .args(["--stylesheet", "mono.css"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("href=\"mono.css\""));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn missing_input_file_exits_1() {
    ansi_html()
        .arg("/nonexistent/input.ansi")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to open input file"))
        .stderr(predicate::str::contains("/nonexistent/input.ansi"));
}

#[test]
fn missing_config_file_reports_cause_once() {
    let output = ansi_html()
        .args(["--config", "/nonexistent/ansi-html.toml"])
        .write_stdin("x")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file /nonexistent/ansi-html.toml"));
    assert_eq!(
        stderr.matches("os error").count(),
        1,
        "cause should be printed once, got: {}",
        stderr
    );
}

#[test]
fn invalid_config_exits_1() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "fragment = \"yes\"\n").unwrap();

    ansi_html()
        .arg("--config")
        .arg(&config_path)
        .write_stdin("x")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn escape_at_end_of_input_exits_1() {
    ansi_html()
        .write_stdin("text\x1b")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed escape sequence"));
}
