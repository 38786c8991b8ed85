//! handle-probe tests.

use std::path::Path;

use probe_sys::handle::{AT_FDCWD, FileHandle, Lookup, name_to_handle_at};
use tempfile::{NamedTempFile, TempDir};

use crate::common::{
    HANDLE_PROBE, assert_failed_with, assert_usage_error, run_probe, run_probe_in,
};

/// The filesystem under `path` can encode file handles.
fn supports_handles(path: &Path) -> bool {
    let mut handle = FileHandle::empty();
    match name_to_handle_at(AT_FDCWD, path, &mut handle, 0) {
        Ok(Lookup::NeedsCapacity(size)) if size > 0 => true,
        other => {
            eprintln!("Skipping: filesystem does not support file handles ({other:?})");
            false
        }
    }
}

#[test]
fn test_handle_no_arguments() {
    let output = run_probe(HANDLE_PROBE, [] as [&str; 0]);
    assert_usage_error(&output);
}

#[test]
fn test_handle_two_arguments() {
    let output = run_probe(HANDLE_PROBE, ["/", "/tmp"]);
    assert_usage_error(&output);
}

#[test]
fn test_handle_nonexistent_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let output = run_probe(HANDLE_PROBE, [&missing]);
    assert_failed_with(
        &output,
        "name_to_handle_at failed: No such file or directory",
    );
}

/// Arguments that look like flags are still paths.
#[test]
fn test_handle_hyphen_path_is_not_a_flag() {
    let dir = TempDir::new().unwrap();

    for arg in ["--help", "--version", "-x"] {
        let output = run_probe_in(HANDLE_PROBE, dir.path(), [arg]);
        assert_failed_with(
            &output,
            "name_to_handle_at failed: No such file or directory",
        );
        assert!(output.stdout.is_empty(), "{arg} should not print help");
    }
}

#[test]
fn test_handle_existing_hyphen_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("-x"), b"").unwrap();
    if !supports_handles(&dir.path().join("-x")) {
        return;
    }

    let output = run_probe_in(HANDLE_PROBE, dir.path(), ["-x"]);
    assert!(
        output.status.success(),
        "handle-probe -x should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_handle_existing_file() {
    let file = NamedTempFile::new().unwrap();
    if !supports_handles(file.path()) {
        return;
    }

    let output = run_probe(HANDLE_PROBE, [file.path()]);
    assert!(
        output.status.success(),
        "handle-probe should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stderr.is_empty(), "success should be silent");
    assert!(output.stdout.is_empty(), "success should be silent");
}

#[test]
fn test_handle_existing_directory() {
    let dir = TempDir::new().unwrap();
    if !supports_handles(dir.path()) {
        return;
    }

    let output = run_probe(HANDLE_PROBE, [dir.path()]);
    assert!(output.status.success());
}

/// The second call fills exactly the size the first call reported.
#[test]
fn test_handle_size_is_stable_across_calls() {
    let file = NamedTempFile::new().unwrap();
    if !supports_handles(file.path()) {
        return;
    }

    let resolution = syscall_probes::probes::handle::run(file.path()).unwrap();
    assert_eq!(resolution.handle.handle_bytes(), resolution.reported_size);
    assert!(!resolution.handle.bytes().is_empty());
}
