use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn create_source_tree(base_dir: &Path) -> std::path::PathBuf {
    let source = base_dir.join("presentations");

    fs::create_dir_all(source.join("shared")).expect("Failed to create shared dir");
    fs::write(
        source.join("shared/style.css"),
        "body { font-family: Arial, sans-serif; }",
    )
    .expect("Failed to write shared css");

    let deck = source.join("demo-deck");
    fs::create_dir_all(deck.join("slides")).expect("Failed to create slides dir");
    fs::create_dir_all(deck.join("assets")).expect("Failed to create assets dir");
    fs::write(
        deck.join("index.html"),
        "<!DOCTYPE html>\n<html><head><title>Demo</title></head><body></body></html>",
    )
    .expect("Failed to write entry page");
    fs::write(
        deck.join("slides/intro.md"),
        "---\ntitle: Intro\n---\n\n# Hello\n\nWorld",
    )
    .expect("Failed to write slide");
    fs::write(deck.join("slides/outro.md"), "# Thanks\n\n* Questions?")
        .expect("Failed to write slide");
    fs::write(deck.join("assets/notes.txt"), "speaker notes").expect("Failed to write asset");

    source
}

#[test]
fn test_build_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = create_source_tree(temp_dir.path());
    let output_dir = temp_dir.path().join("dist");

    let output = run_command(&[
        "build",
        "-s",
        source.to_str().unwrap(),
        "-o",
        output_dir.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "build command failed: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Build completed successfully!"),
        "Missing success line in output: {}",
        stdout
    );

    // Mirrored output layout
    assert!(output_dir.join("shared/style.css").exists());
    assert!(output_dir.join("demo-deck/index.html").exists());
    assert!(output_dir.join("demo-deck/slides/intro.html").exists());
    assert!(output_dir.join("demo-deck/slides/outro.html").exists());
    assert!(output_dir.join("demo-deck/assets/notes.txt").exists());

    // Converted slide carries the expected HTML
    let intro = fs::read_to_string(output_dir.join("demo-deck/slides/intro.html"))
        .expect("Failed to read converted slide");
    assert!(intro.contains("<h1>Hello</h1>"));
    assert!(intro.contains("<p>World</p>"));

    // Entry page and shared css are verbatim copies
    assert_eq!(
        fs::read(output_dir.join("demo-deck/index.html")).unwrap(),
        fs::read(source.join("demo-deck/index.html")).unwrap()
    );
    assert_eq!(
        fs::read(output_dir.join("shared/style.css")).unwrap(),
        fs::read(source.join("shared/style.css")).unwrap()
    );
}

#[test]
fn test_build_command_rebuild_removes_stale_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = create_source_tree(temp_dir.path());
    let output_dir = temp_dir.path().join("dist");

    fs::create_dir_all(&output_dir).expect("Failed to pre-create output dir");
    fs::write(output_dir.join("stale.html"), "old build artifact")
        .expect("Failed to write stale file");

    let output = run_command(&[
        "build",
        "-s",
        source.to_str().unwrap(),
        "-o",
        output_dir.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "build command failed");
    assert!(
        !output_dir.join("stale.html").exists(),
        "Stale file survived the rebuild"
    );
}

#[test]
fn test_build_command_missing_source_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("no-such-dir");
    let output_dir = temp_dir.path().join("dist");

    let output = run_command(&[
        "build",
        "-s",
        missing.to_str().unwrap(),
        "-o",
        output_dir.to_str().unwrap(),
    ]);

    assert!(
        !output.status.success(),
        "build against a missing source tree should fail"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error:"),
        "Expected error report on stderr, got: {}",
        stderr
    );
}

#[test]
fn test_build_command_malformed_front_matter_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = create_source_tree(temp_dir.path());
    let output_dir = temp_dir.path().join("dist");

    fs::write(
        source.join("demo-deck/slides/broken.md"),
        "---\ntitle: Broken\n# never closed",
    )
    .expect("Failed to write broken slide");

    let output = run_command(&[
        "build",
        "-s",
        source.to_str().unwrap(),
        "-o",
        output_dir.to_str().unwrap(),
    ]);

    assert!(
        !output.status.success(),
        "malformed front matter should abort the build"
    );
}
