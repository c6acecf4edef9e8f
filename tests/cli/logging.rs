use crate::cli::support::shortpath;
use predicates::prelude::*;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    shortpath()
        .args(["--log-level", "debug", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("solve_complete"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    shortpath()
        .args(["--log-level", "warn", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    shortpath()
        .args(["--verbose", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_is_quiet_on_stderr() {
    shortpath()
        .arg("demo")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_emits_json_lines() {
    shortpath()
        .args(["--log-level", "debug", "--log-json", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_shortpath_log_env_filter() {
    shortpath()
        .env("SHORTPATH_LOG", "shortpath_core=trace")
        .arg("demo")
        .assert()
        .success()
        .stderr(predicate::str::contains("pop"));
}
