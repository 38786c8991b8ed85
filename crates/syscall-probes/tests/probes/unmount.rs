//! unmount-probe tests.

use probe_sys::Capability;
use probe_sys::mount::{mount_proc, unmount};
use rustix::io::Errno;
use rustix::mount::UnmountFlags;
use tempfile::TempDir;

use crate::common::{
    UNMOUNT_PROBE, assert_failed_with, assert_usage_error, requires, run_probe, run_probe_in,
    stderr_str,
};

#[test]
fn test_unmount_no_arguments() {
    let output = run_probe(UNMOUNT_PROBE, [] as [&str; 0]);
    assert_usage_error(&output);
}

#[test]
fn test_unmount_two_arguments() {
    let output = run_probe(UNMOUNT_PROBE, ["/mnt", "/media"]);
    assert_usage_error(&output);
}

#[test]
fn test_unmount_nonexistent_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let output = run_probe(UNMOUNT_PROBE, [&missing]);
    assert_failed_with(&output, "umount failed: No such file or directory");
}

#[test]
fn test_unmount_not_a_mount_point() {
    let dir = TempDir::new().unwrap();

    let output = run_probe(UNMOUNT_PROBE, [dir.path()]);
    let stderr = assert_failed_with(&output, "umount failed: ");
    assert!(
        stderr.contains("Invalid argument") || stderr.contains("Operation not permitted"),
        "Expected EINVAL or EPERM, got: {stderr}"
    );
}

/// A directory named like a flag is still the unmount target.
#[test]
fn test_unmount_hyphen_target_is_not_a_flag() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("-m")).unwrap();

    let output = run_probe_in(UNMOUNT_PROBE, dir.path(), ["-m"]);
    let stderr = assert_failed_with(&output, "umount failed: ");
    assert!(
        stderr.contains("Invalid argument") || stderr.contains("Operation not permitted"),
        "Expected EINVAL or EPERM, got: {stderr}"
    );

    let output = run_probe_in(UNMOUNT_PROBE, dir.path(), ["--help"]);
    assert_failed_with(&output, "umount failed: No such file or directory");
}

#[test]
#[ignore]
fn test_unmount_mounted_path() {
    if !requires(Capability::SysAdmin, true) {
        return;
    }
    let dir = TempDir::new().unwrap();
    if let Err(e) = mount_proc(dir.path()) {
        eprintln!("Skipping: cannot mount proc for the test: {e}");
        return;
    }

    let output = run_probe(UNMOUNT_PROBE, [dir.path()]);
    if !output.status.success() {
        let _ = unmount(dir.path(), UnmountFlags::DETACH);
        panic!("unmount-probe should succeed, stderr: {}", stderr_str(&output));
    }

    // Nothing is mounted there anymore.
    assert_eq!(unmount(dir.path(), UnmountFlags::empty()), Err(Errno::INVAL));
}
