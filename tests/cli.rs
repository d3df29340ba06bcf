use std::{
    path::PathBuf,
    process::{Command, Output},
};

const LONE_KING_AND_KNIGHT: &str = "\
xx xx xx xx xx xx xx xx
xx xx xx xx xx xx xx xx
xx xx xx xx xx xx xx xx
xx xx xx xx xx xx xx xx
xx xx xx xx xx xx xx xx
xx xx xx as xx xx xx xx
xx xx xx xx xx xx xx xx
xx xx xx xx sb xx xx xx
";

fn position_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("threatscore-{}-{name}.txt", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

fn threatscore(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_threatscore")).args(args).output().unwrap()
}

fn run_on(name: &str, contents: &str) -> Output {
    let path = position_file(name, contents);
    let output = threatscore(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();
    output
}

#[test]
fn prints_both_scores() {
    let output = run_on("king-and-knight", LONE_KING_AND_KNIGHT);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "White's score is 89.0\nBlack's score is 139.0\n");
}

#[test]
fn empty_file_keeps_the_base_score() {
    let output = run_on("empty", "");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "White's score is 139.0\nBlack's score is 139.0\n");
}

#[test]
fn missing_argument() {
    let output = threatscore(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: threatscore <position-file>"));
}

#[test]
fn unreadable_file() {
    let path = std::env::temp_dir().join(format!("threatscore-{}-does-not-exist.txt", std::process::id()));
    let output = threatscore(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unable to read"));
}

#[test]
fn unrecognized_token() {
    let output = run_on("unrecognized", "xx zz\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unrecognized token 'zz' on b8"));
}

#[test]
#[cfg(not(feature = "all-bishops"))]
fn lone_bishop_fails_the_evaluation() {
    let output = run_on("lone-bishop", "xx xx xx xx xx xx xx xx\nxx fs\n\nxx xx xx vb\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}
