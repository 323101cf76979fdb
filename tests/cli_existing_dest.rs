use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn existing_destination_file_is_skipped_without_error() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let src = base.join("src");
    let dst = base.join("dst");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dst).unwrap();
    fs::write(src.join("a.txt"), b"new contents").unwrap();
    fs::write(src.join("b.log"), b"b").unwrap();
    fs::write(dst.join("a.txt"), b"old contents").unwrap();

    let me = cargo::cargo_bin!("randcp");
    let out = Command::new(me)
        .arg("--limit")
        .arg("2")
        .arg(&src)
        .arg(&dst)
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "run should succeed: {:?}", out);
    let stdout = String::from_utf8_lossy(&out.stdout);
    // a.txt is skipped (already present), iteration moves on to b.log
    assert!(stdout.contains("Copied 1 files."), "unexpected summary: {stdout}");
    assert_eq!(fs::read(dst.join("a.txt")).unwrap(), b"old contents");
    assert!(dst.join("b.log").exists());
}

#[test]
fn run_ends_short_when_candidates_run_out() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let src = base.join("src");
    let dst = base.join("dst");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dst).unwrap();
    fs::write(src.join("only.txt"), b"x").unwrap();
    fs::write(src.join("noise.log"), b"y").unwrap();

    let me = cargo::cargo_bin!("randcp");
    let out = Command::new(me)
        .arg("--limit")
        .arg("3")
        .arg("--pattern")
        .arg(r"\.txt$")
        .arg(&src)
        .arg(&dst)
        .output()
        .expect("spawn binary");

    // the reporter is cancelled (target never reached) and the process still
    // exits cleanly with an honest summary
    assert!(out.status.success(), "run should succeed: {:?}", out);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Copied 1 files."), "unexpected summary: {stdout}");
    assert_eq!(fs::read_dir(&dst).unwrap().count(), 1);
}
