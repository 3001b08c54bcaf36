use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

// Helper function to get the path to the compiled binary
fn vidshrink_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vidshrink").expect("Failed to find vidshrink binary");
    cmd.env_remove("RUST_LOG").env_remove("VIDSHRINK_FFMPEG");
    cmd
}

fn create_file(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, vec![1u8; len]).expect("Failed to write input file");
    path
}

/// A stand-in converter. It appends its arguments to `calls.log`, exits 1
/// for inputs whose name starts with `bad`, and otherwise writes a
/// 10-byte file at the last argument.
#[cfg(unix)]
struct FakeFfmpeg {
    dir: TempDir,
}

#[cfg(unix)]
impl FakeFfmpeg {
    fn new() -> Result<Self, Box<dyn Error>> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir()?;
        let script = dir.path().join("ffmpeg");
        let log = dir.path().join("calls.log");
        let body = format!(
            "#!/bin/sh\n\
             for last; do :; done\n\
             echo \"$@\" >> '{}'\n\
             case \"$(basename \"$2\")\" in bad*) echo 'simulated failure' >&2; exit 1;; esac\n\
             printf '0123456789' > \"$last\"\n",
            log.display()
        );
        fs::write(&script, body)?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
        Ok(Self { dir })
    }

    fn path(&self) -> PathBuf {
        self.dir.path().join("ffmpeg")
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[test]
fn test_missing_output_is_usage_error() {
    let input_dir = tempdir().unwrap();

    vidshrink_cmd()
        .arg("--input")
        .arg(input_dir.path())
        .assert()
        .code(2)
        .stderr(contains("--output"));
}

#[test]
fn test_missing_input_is_usage_error() {
    let output_dir = tempdir().unwrap();

    vidshrink_cmd()
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .code(2)
        .stderr(contains("--input"));
}

#[test]
fn test_missing_converter_is_fatal() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let target = output_dir.path().join("never");
    create_file(input_dir.path(), "a.mp4", 10);

    vidshrink_cmd()
        .arg("--input")
        .arg(input_dir.path())
        .arg("--output")
        .arg(&target)
        .arg("--ffmpeg")
        .arg("/surely/this/does/not/exist/ffmpeg")
        .assert()
        .code(1)
        .stderr(contains("not found"));

    // Startup failed before the output directory was touched.
    assert!(!target.exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_non_existent_input_is_fatal() -> Result<(), Box<dyn Error>> {
    let fake = FakeFfmpeg::new()?;
    let output_dir = tempdir()?;

    vidshrink_cmd()
        .arg("--input")
        .arg("surely/this/does/not/exist")
        .arg("--output")
        .arg(output_dir.path())
        .arg("--ffmpeg")
        .arg(fake.path())
        .assert()
        .code(1)
        .stderr(contains("does not exist"));

    assert!(fake.calls().is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_end_to_end_mixed_directory() -> Result<(), Box<dyn Error>> {
    let fake = FakeFfmpeg::new()?;
    let input_dir = tempdir()?;
    let output_root = tempdir()?;
    let output_dir = output_root.path().join("converted");

    create_file(input_dir.path(), "a.mp4", 2048);
    create_file(input_dir.path(), "b.txt", 100);
    create_file(input_dir.path(), "c.mkv", 4096);

    vidshrink_cmd()
        .arg("--input")
        .arg(input_dir.path())
        .arg("--output")
        .arg(&output_dir)
        .arg("--ffmpeg")
        .arg(fake.path())
        .assert()
        .success()
        .stderr(contains("Creating output folder"))
        .stdout(contains("File: a.mp4"))
        .stdout(contains("File: c.mkv"))
        .stdout(contains("Input file size: 2.0 KiB"))
        .stdout(contains("Input file size: 4.0 KiB"))
        .stdout(contains("Output file size: 10 B"))
        .stdout(contains("Converted: 2, Skipped: 0, Failed: 0"))
        .stdout(contains("b.txt").not());

    let calls = fake.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].contains("a.mp4"));
    assert!(calls[0].contains("-vf scale=640:480 -c:a aac -strict experimental -b:a 128k"));
    assert!(calls[1].contains("c.mkv"));
    assert!(output_dir.join("a.mp4").is_file());
    assert!(!output_dir.join("b.txt").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_second_run_skips_converted_files() -> Result<(), Box<dyn Error>> {
    let fake = FakeFfmpeg::new()?;
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    create_file(input_dir.path(), "a.mp4", 2048);
    create_file(input_dir.path(), "c.mkv", 4096);

    for _ in 0..2 {
        vidshrink_cmd()
            .arg("-i")
            .arg(input_dir.path())
            .arg("-o")
            .arg(output_dir.path())
            .arg("--ffmpeg")
            .arg(fake.path())
            .assert()
            .success();
    }

    assert_eq!(fake.calls().len(), 2);

    vidshrink_cmd()
        .arg("-i")
        .arg(input_dir.path())
        .arg("-o")
        .arg(output_dir.path())
        .arg("--ffmpeg")
        .arg(fake.path())
        .assert()
        .success()
        .stdout(contains("Status: skipped"))
        .stdout(contains("Saved:").not())
        .stdout(contains("Converted: 0, Skipped: 2, Failed: 0"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_failed_file_does_not_stop_batch() -> Result<(), Box<dyn Error>> {
    let fake = FakeFfmpeg::new()?;
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    create_file(input_dir.path(), "bad.mp4", 100);
    create_file(input_dir.path(), "good.mp4", 100);

    vidshrink_cmd()
        .arg("-i")
        .arg(input_dir.path())
        .arg("-o")
        .arg(output_dir.path())
        .arg("--ffmpeg")
        .arg(fake.path())
        .assert()
        .code(3)
        .stdout(contains("File: bad.mp4"))
        .stdout(contains("Status: failed"))
        .stdout(contains("File: good.mp4"))
        .stdout(contains("Converted: 1, Skipped: 0, Failed: 1"));

    assert_eq!(fake.calls().len(), 2);
    assert!(!output_dir.path().join("bad.mp4").exists());
    assert!(output_dir.path().join("good.mp4").is_file());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_json_report() -> Result<(), Box<dyn Error>> {
    let fake = FakeFfmpeg::new()?;
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let file = create_file(input_dir.path(), "solo.webm", 64);

    let assert = vidshrink_cmd()
        .arg("-i")
        .arg(&file)
        .arg("-o")
        .arg(output_dir.path())
        .arg("--ffmpeg")
        .arg(fake.path())
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let report: serde_json::Value = serde_json::from_str(&stdout)?;
    let records = report["records"].as_array().expect("records array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["file_name"], "solo.webm");
    assert_eq!(records[0]["status"], "converted");
    assert_eq!(records[0]["input_size"], 64);
    assert_eq!(records[0]["output_size"], 10);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_output_same_as_input_is_fatal() -> Result<(), Box<dyn Error>> {
    let fake = FakeFfmpeg::new()?;
    let dir = tempdir()?;
    create_file(dir.path(), "a.mp4", 10);
    create_file(dir.path(), "b.mkv", 10);

    vidshrink_cmd()
        .arg("-i")
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path())
        .arg("--ffmpeg")
        .arg(fake.path())
        .assert()
        .code(1)
        .stderr(contains("same as the input directory"));

    assert!(fake.calls().is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_video_is_converted() -> Result<(), Box<dyn Error>> {
    let fake = FakeFfmpeg::new()?;
    let input_dir = tempdir()?;
    let store = tempdir()?;
    let output_dir = tempdir()?;
    let real = create_file(store.path(), "real.bin", 100);
    std::os::unix::fs::symlink(&real, input_dir.path().join("clip.mp4"))?;

    vidshrink_cmd()
        .arg("-i")
        .arg(input_dir.path())
        .arg("-o")
        .arg(output_dir.path())
        .arg("--ffmpeg")
        .arg(fake.path())
        .assert()
        .success()
        .stdout(contains("File: clip.mp4"))
        .stdout(contains("Input file size: 100 B"));

    assert_eq!(fake.calls().len(), 1);
    Ok(())
}
