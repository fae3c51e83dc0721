//! Runs the compiled `textdraw` binary end to end, mirroring the corpus's
//! own `tests/e2e/test_binary.rs` (invoke the built binary, assert on its
//! stdout).

use std::io::Write;
use std::process::{Command, Stdio};

fn textdraw() -> Command {
    Command::new(env!("CARGO_BIN_EXE_textdraw"))
}

#[test]
fn demo_boxes_runs_and_prints_something() {
    let output = textdraw()
        .args(["--demo", "boxes"])
        .output()
        .expect("failed to run the textdraw binary");
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

#[test]
fn demo_pixels_contains_the_group_glyphs() {
    let output = textdraw()
        .args(["--demo", "pixels"])
        .output()
        .expect("failed to run the textdraw binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains('O'));
}

#[test]
fn unknown_demo_name_exits_nonzero() {
    let output = textdraw()
        .args(["--demo", "not-a-real-demo"])
        .output()
        .expect("failed to run the textdraw binary");
    assert!(!output.status.success());
}

#[test]
fn stdin_mode_frames_the_piped_label() {
    let mut child = textdraw()
        .arg("--stdin")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn the textdraw binary");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"hi")
        .expect("failed to write to stdin");
    let output = child.wait_with_output().expect("failed to wait on child");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains('h'));
    assert!(stdout.contains('┌'));
}

#[test]
fn no_arguments_exits_nonzero_with_a_usage_hint() {
    let output = textdraw().output().expect("failed to run the textdraw binary");
    assert!(!output.status.success());
}

#[test]
fn ascii_flag_drops_unicode_box_drawing() {
    let output = textdraw()
        .args(["--demo", "boxes", "--ascii"])
        .output()
        .expect("failed to run the textdraw binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains('+'));
    assert!(!stdout.contains('┌'));
}
