// tests/integration_test.rs
use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn changelog_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_changelog"));
    // keep user/project config files out of the way
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(dir: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = changelog_cmd(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    // the binary may exit on bad arguments before reading stdin
    if let Err(e) = child.stdin.take().unwrap().write_all(stdin.as_bytes()) {
        assert_eq!(e.kind(), ErrorKind::BrokenPipe, "unexpected stdin error: {}", e);
    }
    child.wait_with_output().unwrap()
}

#[test]
fn test_changelog_help() {
    let dir = TempDir::new().unwrap();
    let output = changelog_cmd(&dir).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Manipulate and validate a Markdown changelog"));
    assert!(stdout.contains("release"));
}

#[test]
fn test_init_to_stdout() {
    let dir = TempDir::new().unwrap();
    let output = changelog_cmd(&dir).arg("init").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# Changelog\n\n"));
    assert!(stdout.contains("## [Unreleased]\n### Added\n- First commit.\n"));
}

#[test]
fn test_add_from_stdin() {
    let dir = TempDir::new().unwrap();
    let input = "# Changelog\n\nNotes here.\n\n## [Unreleased]\n\n### Added\n- First commit.\n";
    let output = run_with_stdin(&dir, &["added", "-m", "Second commit."], input);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "# Changelog\n\nNotes here.\n\n## [Unreleased]\n### Added\n- Second commit.\n- First commit.\n\n"
    );
}

#[test]
fn test_release_file_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CHANGELOG.md");
    std::fs::write(
        &path,
        "# Changelog\n\nNotes here.\n\n## [Unreleased]\n\n### Fixed\n- A bug.\n",
    )
    .unwrap();

    let output = changelog_cmd(&dir)
        .args(["release", "v1.0.0", "-d", "2024-03-01", "-f", "CHANGELOG.md", "-o", "CHANGELOG.md"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "# Changelog\n\nNotes here.\n\n## [Unreleased]\n\n## [1.0.0] - 2024-03-01\n### Fixed\n- A bug.\n\n"
    );
}

#[test]
fn test_unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    let input = "# Changelog\n\n## [Unreleased]\n\n### Broken\n- x\n";
    let output = run_with_stdin(&dir, &["fixed", "-m", "y"], input);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Broken"));
}

#[test]
fn test_invalid_release_version_fails() {
    let dir = TempDir::new().unwrap();
    let input = "# Changelog\n\n## [Unreleased]\n";
    let output = run_with_stdin(&dir, &["release", "1.0"], input);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid version"));
}
