use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn dry_run_reports_the_selection_but_creates_nothing() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let src = base.join("src");
    let dst = base.join("dst");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dst).unwrap();
    fs::write(src.join("a.txt"), b"a").unwrap();
    fs::write(src.join("b.txt"), b"b").unwrap();

    let me = cargo::cargo_bin!("randcp");
    let out = Command::new(me)
        .arg("--dry-run")
        .arg("--limit")
        .arg("2")
        .arg(&src)
        .arg(&dst)
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "run should succeed: {:?}", out);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Copied 2 files."), "unexpected summary: {stdout}");
    assert_eq!(fs::read_dir(&dst).unwrap().count(), 0, "dry-run must not create files");
}

#[test]
fn echo_prints_source_relative_paths() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let src = base.join("src");
    let dst = base.join("dst");
    fs::create_dir_all(src.join("sub")).unwrap();
    fs::create_dir_all(&dst).unwrap();
    fs::write(src.join("sub").join("c.txt"), b"c").unwrap();

    let me = cargo::cargo_bin!("randcp");
    let out = Command::new(me)
        .arg("--echo")
        .arg("--recursive")
        .arg("--dry-run")
        .arg(&src)
        .arg(&dst)
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let rel = std::path::Path::new("sub").join("c.txt");
    assert!(
        stdout.contains(&rel.display().to_string()),
        "echo output missing relative path: {stdout}"
    );
}
