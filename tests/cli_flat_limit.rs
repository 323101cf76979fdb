use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn non_recursive_run_samples_only_the_top_level() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let src = base.join("src");
    let dst = base.join("dst");
    fs::create_dir_all(src.join("sub")).unwrap();
    fs::create_dir_all(&dst).unwrap();
    fs::write(src.join("a.txt"), b"a").unwrap();
    fs::write(src.join("b.log"), b"b").unwrap();
    fs::write(src.join("sub").join("c.txt"), b"c").unwrap();

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
    assert!(stdout.contains("Copied 2 files."), "unexpected summary: {stdout}");

    // only the two top-level files are candidates; sub/ is never copied or created
    assert!(dst.join("a.txt").exists());
    assert!(dst.join("b.log").exists());
    assert!(!dst.join("sub").exists());
    assert!(!dst.join("c.txt").exists());
    assert_eq!(fs::read_dir(&dst).unwrap().count(), 2);
}

#[test]
fn limit_defaults_to_one() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let src = base.join("src");
    let dst = base.join("dst");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dst).unwrap();
    for i in 0..5 {
        fs::write(src.join(format!("f{i}.bin")), b"x").unwrap();
    }

    let me = cargo::cargo_bin!("randcp");
    let out = Command::new(me).arg(&src).arg(&dst).output().expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Copied 1 files."), "unexpected summary: {stdout}");
    assert_eq!(fs::read_dir(&dst).unwrap().count(), 1);
}
