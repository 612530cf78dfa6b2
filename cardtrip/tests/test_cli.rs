// Allow deprecated APIs (assert_cmd::cargo_bin is deprecated but still works)
#![allow(deprecated)]

use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use rstest::rstest;
use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::{tempdir, NamedTempFile};

fn attributes_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_print_rounded_path() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("cardtrip")?
        .args(["-W", "200", "-H", "120", "--corner-value", "20", "--print-path"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("M21 115 Q1 115 1 95 L1 21"))
        .stdout(predicate::str::contains("Z"));
    Ok(())
}

#[test]
fn test_print_path_from_attributes_file() -> Result<(), Box<dyn std::error::Error>> {
    let attrs = attributes_file(r#"{"cornerValue": 10, "allCornerType": 1}"#);
    Command::cargo_bin("cardtrip")?
        .args(["-W", "100", "-H", "100", "--print-path", "-a"])
        .arg(attrs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("L1 100 A5 5 0 0 0 1 90"));
    Ok(())
}

#[rstest]
#[case("special", "card.png")]
#[case("trip-header", "header.png")]
#[case("trip-content", "content.png")]
fn test_png_output(#[case] kind: &str, #[case] name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join(name);

    Command::cargo_bin("cardtrip")?
        .args(["-k", kind, "-W", "300", "-H", "100", "-o"])
        .arg(&output)
        .assert()
        .success();

    let data = fs::read(&output)?;
    assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");
    Ok(())
}

#[test]
fn test_svg_output_with_explicit_format() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("card.out");

    Command::cargo_bin("cardtrip")?
        .args(["-W", "160", "-H", "90", "--corner-type", "cut", "--format", "svg"])
        .args(["--border-color", "#ff0000", "-o"])
        .arg(&output)
        .assert()
        .success();

    let svg = fs::read_to_string(&output)?;
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r##"stroke="#ff0000""##));
    Ok(())
}

#[test]
fn test_unknown_extension_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    Command::cargo_bin("cardtrip")?
        .args(["-W", "100", "-H", "100", "-o"])
        .arg(dir.path().join("card.bmp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot infer output format"));
    Ok(())
}

#[test]
fn test_nothing_to_do_fails() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("cardtrip")?
        .args(["-W", "100", "-H", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to do"));
    Ok(())
}

#[test]
fn test_negative_radius_rejected() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("cardtrip")?
        .args(["-W", "100", "-H", "100", "--corner-value=-4", "--print-path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid top-left radius"));
    Ok(())
}

#[test]
fn test_unknown_ordinal_in_attributes_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let attrs = attributes_file(r#"{"allCornerType": 7}"#);
    Command::cargo_bin("cardtrip")?
        .args(["-W", "100", "-H", "100", "--print-path", "-a"])
        .arg(attrs.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown corner style ordinal: 7"));
    Ok(())
}

#[test]
fn test_unknown_attribute_key_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let attrs = attributes_file(r#"{"cornerRadius": 7}"#);
    Command::cargo_bin("cardtrip")?
        .args(["-W", "100", "-H", "100", "--print-path", "-a"])
        .arg(attrs.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse attributes file"));
    Ok(())
}

#[test]
fn test_invalid_corner_type_flag() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("cardtrip")?
        .args(["-W", "100", "-H", "100", "--corner-type", "wavy", "--print-path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wavy"));
    Ok(())
}
