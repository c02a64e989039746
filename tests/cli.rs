//! Black-box tests for the `fastyz` binary: argument handling, mode
//! auto-detection, output-path inference, and exit codes.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn fastyz_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fastyz"))
}

fn sample_file(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    let content = b"A field of grass, a field of grass, and more grass. ".repeat(80);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn encode_then_decode_round_trips_through_files() {
    let dir = TempDir::new().unwrap();
    let input = sample_file(&dir, "field.bin");
    let original = fs::read(&input).unwrap();

    let status = Command::new(fastyz_bin())
        .args(["-c", input.to_str().unwrap()])
        .status()
        .expect("failed to run fastyz -c");
    assert!(status.success());

    let packed = dir.path().join("field.bin.yaz0");
    assert!(packed.exists(), "default output should gain .yaz0");
    let packed_bytes = fs::read(&packed).unwrap();
    assert!(packed_bytes.starts_with(b"Yaz0"));
    assert!(packed_bytes.len() < original.len());

    let restored = dir.path().join("restored.bin");
    let status = Command::new(fastyz_bin())
        .args([
            "-d",
            packed.to_str().unwrap(),
            "-o",
            restored.to_str().unwrap(),
        ])
        .status()
        .expect("failed to run fastyz -d");
    assert!(status.success());
    assert_eq!(fs::read(&restored).unwrap(), original);
}

#[test]
fn szs_extension_auto_decodes_without_flags() {
    let dir = TempDir::new().unwrap();
    let input = sample_file(&dir, "course.bin");
    let original = fs::read(&input).unwrap();
    let packed = fastyz::encode(&original).unwrap();
    let szs = dir.path().join("course.szs");
    fs::write(&szs, packed).unwrap();

    let status = Command::new(fastyz_bin())
        .arg(szs.to_str().unwrap())
        .status()
        .expect("failed to run fastyz");
    assert!(status.success());
    assert_eq!(fs::read(dir.path().join("course")).unwrap(), original);
}

#[test]
fn corrupt_input_exits_nonzero_with_stderr_diagnostic() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("bogus.szs");
    fs::write(&bogus, b"not a yaz0 stream at all").unwrap();

    let output = Command::new(fastyz_bin())
        .arg(bogus.to_str().unwrap())
        .output()
        .expect("failed to run fastyz");
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn bad_usage_exits_nonzero() {
    for args in [&["-x"][..], &[][..], &["a", "b"][..]] {
        let output = Command::new(fastyz_bin())
            .args(args)
            .output()
            .expect("failed to run fastyz");
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
    }
}

#[test]
fn help_and_version_exit_zero() {
    for flag in ["--help", "-h", "--version", "-v"] {
        let output = Command::new(fastyz_bin())
            .arg(flag)
            .output()
            .expect("failed to run fastyz");
        assert!(output.status.success(), "{} should exit 0", flag);
        assert!(!output.stdout.is_empty());
    }
}
