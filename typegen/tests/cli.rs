//! End-to-end tests running the typegen binary.

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

fn typegen(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_typegen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run typegen")
}

fn write_manifest(dir: &Path, content: &str) {
    fs::write(dir.join("typegen.toml"), content).expect("Failed to write typegen.toml");
}

#[test]
fn test_generate_with_overrides() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "[options]\nfile_heading = \"\"\n\n[interfaces.Point]\nproperties.x = \"number\"\n",
    );

    let output = typegen(
        temp.path(),
        &["generate", "-o", "out", "--tab-width", "4", "--quote-style", "single"],
    );
    assert!(output.status.success(), "{:?}", output);

    let point = fs::read_to_string(temp.path().join("out/point.ts")).unwrap();
    assert_eq!(point, "export interface Point {\n    x: number;\n}\n");
    let index = fs::read_to_string(temp.path().join("out/index.ts")).unwrap();
    assert_eq!(index, "export * from './point';\n");
}

#[test]
fn test_dry_run_prints_files() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "[enums.Color]\nvalues = [\"Red\"]\n");

    let output = typegen(temp.path(), &["generate", "--dry-run"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("── color.ts ──"));
    assert!(stdout.contains("2 files would be generated"));
    assert!(!temp.path().join("color.ts").exists());
}

#[test]
fn test_invalid_manifest_fails() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "[classes.class]\n");

    let output = typegen(temp.path(), &["check"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_check_strict_template_typo_fails() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("templates")).unwrap();
    fs::write(temp.path().join("templates/index.tpl"), "$tg{export}").unwrap();
    write_manifest(
        temp.path(),
        "[options]\nstrict = true\ntemplates_dir = \"templates\"\n\n[classes.User]\n",
    );

    let output = typegen(temp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("$tg{export}"));
}

#[test]
fn test_check_valid_manifest() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "[classes.User]\n[enums.Role]\nvalues = [\"Admin\"]\n");

    let output = typegen(temp.path(), &["check"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("is valid"));
}

#[test]
fn test_templates_single() {
    let temp = TempDir::new().unwrap();
    let output = typegen(temp.path(), &["templates", "--name", "enumValue"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("── enumValue (enum_value.tpl) ──"));
    assert!(stdout.contains("$tg{name} = $tg{value},"));
}
