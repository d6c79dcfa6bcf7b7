use appseed::cli::Args;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("appseed")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert!(!parsed.verbose);
    assert!(!parsed.stdin);
}

#[test]
fn test_all_flags() {
    let args = make_args(&["--verbose", "--stdin", "--templates-dir", "./my-templates"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert!(parsed.stdin);
    assert_eq!(parsed.templates_dir, Some(PathBuf::from("./my-templates")));
    assert_eq!(parsed.templates_root(), PathBuf::from("./my-templates"));
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-v", "-s", "-t", "tpl"])).unwrap();

    assert!(parsed.verbose);
    assert!(parsed.stdin);
    assert_eq!(parsed.templates_dir, Some(PathBuf::from("tpl")));
}

#[test]
fn test_positional_args_rejected() {
    assert!(Args::try_parse_from(make_args(&["my_app"])).is_err());
}

#[test]
fn test_help_documents_template_lookup() {
    let help = Args::command().render_long_help().to_string();

    assert!(help.contains("next to the executable"));
    assert!(help.contains("APPSEED_TEMPLATES"));
}

#[test]
fn test_missing_templates_fail_before_reading_answers() {
    let workdir = TempDir::new().unwrap();

    // Empty stdin would be an answers error if answers were read first.
    let output = Command::new(env!("CARGO_BIN_EXE_appseed"))
        .args(["--stdin", "--templates-dir"])
        .arg(workdir.path().join("missing"))
        .env_remove("APPSEED_TEMPLATES")
        .current_dir(workdir.path())
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Template error"), "stderr: {}", stderr);
    assert_eq!(std::fs::read_dir(workdir.path()).unwrap().count(), 0);
}
