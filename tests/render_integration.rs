//! Integration tests driving the `hypa` binary with piped stdin.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_hypa(args: &[&str], input: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hypa"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run hypa");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to wait for hypa");
    assert!(output.status.success(), "hypa should exit successfully");
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

#[test]
fn renders_full_page_with_default_title() {
    let html = run_hypa(&[], "@ https://example.com\n? Example\n\nSome text.\n");

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<title>Some hypertext</title>"));
    assert!(html.contains("<a href=\"https://example.com\">Example</a>"));
    assert!(html.contains("<p>Some text.</p>"));
}

#[test]
fn title_flag_overrides_default() {
    let html = run_hypa(&["--title", "My links"], "hello\n");
    assert!(html.contains("<title>My links</title>"));

    let html = run_hypa(&["-t", "Short flag"], "hello\n");
    assert!(html.contains("<title>Short flag</title>"));
}

#[test]
fn comments_never_reach_the_output() {
    let html = run_hypa(&[], "# note\n###\nsecret @ fake link\n###\nvisible\n");
    assert!(!html.contains("note"));
    assert!(!html.contains("secret"));
    assert!(html.contains("<p>visible</p>"));
}

#[test]
fn json_format_dumps_block_sequence() {
    let out = run_hypa(&["--format", "json"], "@ https://example.com\n? Example\ntext\n");

    let blocks: serde_json::Value = serde_json::from_str(&out).expect("output should be JSON");
    let blocks = blocks.as_array().expect("top level should be an array");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["kind"], "link");
    assert_eq!(blocks[0]["url"], "https://example.com");
    assert_eq!(blocks[0]["label"], "Example");
    assert_eq!(blocks[1]["kind"], "text");
    assert_eq!(blocks[1]["content"], "text");
}

#[test]
fn empty_input_still_renders_a_page() {
    let html = run_hypa(&[], "");
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<main></main>"));
}
