mod common;

use common::TestContext;
use predicates::prelude::*;

const FRUIT: [&str; 6] = ["--choice", "apple", "--choice", "bear", "--choice", "orange"];

#[test]
fn ci_choice_in_list_is_accepted() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ask", "--ci", "--input", "bear"])
        .args(FRUIT)
        .assert()
        .success()
        .stdout("Outcome: true, Input: bear\n");
}

#[test]
fn ci_choice_not_in_list_exits_one() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ask", "--ci", "--input", "kiwi"])
        .args(FRUIT)
        .assert()
        .code(1)
        .stdout("Outcome: false, Input: kiwi\n");
}

#[test]
fn ci_pattern_is_a_substring_search() {
    let ctx = TestContext::new();

    ctx.cli().args(["ask", "--ci", "--match", "y", "--input", "yes"]).assert().success();
    ctx.cli().args(["ask", "--ci", "--match", "^y$", "--input", "no"]).assert().code(1);
}

#[test]
fn ci_is_the_default_mode() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ask", "--input", "y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outcome: true"));
}

#[test]
fn json_output() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ask", "--ci", "--input", "bear", "--json"])
        .args(FRUIT)
        .assert()
        .success()
        .stdout("{\"outcome\":true,\"input\":\"bear\"}\n");
}

#[test]
fn invalid_pattern_exits_two() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ask", "--ci", "--match", "(", "--input", "y"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Error: Invalid match pattern '('"));
}

#[test]
fn config_file_in_work_dir_is_used() {
    let ctx = TestContext::new();
    ctx.write_config(
        r#"
[prompt]
ci = true
input = "production"
choices = ["staging", "production"]
"#,
    );

    ctx.cli()
        .arg("ask")
        .assert()
        .success()
        .stdout("Outcome: true, Input: production\n");

    ctx.cli()
        .args(["ask", "--input", "qa"])
        .assert()
        .code(1)
        .stdout("Outcome: false, Input: qa\n");
}

#[test]
fn explicit_missing_config_exits_two() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ask", "--config", "missing.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn attended_choice_reads_operator_selection() {
    let ctx = TestContext::new();

    ctx.attended_local()
        .args(["--msg", "Pick a fruit"])
        .args(FRUIT)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout("Outcome: true, Input: orange\n")
        .stderr(predicate::str::contains("Pick a fruit (^C to abort)"));

    assert!(ctx.session_dirs().is_empty(), "session cache was not released");
}

#[test]
fn attended_choice_reprompts_after_invalid_selection() {
    let ctx = TestContext::new();

    ctx.attended_local()
        .args(FRUIT)
        .write_stdin("9\n2\n")
        .assert()
        .success()
        .stdout("Outcome: true, Input: bear\n")
        .stderr(predicate::str::contains("Invalid choice. Please try again."));
}

#[test]
fn attended_text_matches_reply() {
    let ctx = TestContext::new();

    ctx.attended_local()
        .args(["--match", "^y"])
        .write_stdin("yes please\n")
        .assert()
        .success()
        .stdout("Outcome: true, Input: yes please\n");
}

#[test]
fn attended_session_without_answer_is_an_error() {
    let ctx = TestContext::new();

    ctx.attended_local()
        .args(FRUIT)
        .write_stdin("")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Error: Execution environment error"));

    assert!(ctx.session_dirs().is_empty(), "aborted session cache was not released");
}

#[test]
fn attended_text_without_answer_is_an_error() {
    let ctx = TestContext::new();

    ctx.attended_local()
        .args(["--match", "^y"])
        .write_stdin("")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Error: Execution environment error"));

    assert!(ctx.session_dirs().is_empty());
}

#[test]
fn consecutive_attended_sessions_leave_no_cache_behind() {
    let ctx = TestContext::new();

    ctx.attended_local()
        .args(FRUIT)
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout("Outcome: true, Input: apple\n");
    ctx.attended_local()
        .args(FRUIT)
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("Outcome: true, Input: bear\n");

    assert!(ctx.session_dirs().is_empty());
}

#[test]
fn attended_choice_keeps_padded_entry() {
    let ctx = TestContext::new();

    ctx.attended_local()
        .args(["--choice", "apple", "--choice", " bear"])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("Outcome: true, Input:  bear\n");
}
