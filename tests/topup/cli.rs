use std::io::Write;
use std::process::Command;

use crate::common::*;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quota-pricing"));
    cmd.env("USD_EXCHANGE_RATE", "7")
        .env("PRICE_RATIO", "1")
        .env("DISPLAY_CURRENCY", "USD")
        .env("RUST_LOG", "off");
    cmd
}

fn info_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sample_topup_info().to_string().as_bytes())
        .unwrap();
    file
}

#[test]
fn test_quote_command() {
    let output = cli()
        .args(["quote", "--amount", "100", "--discount", "100=0.9", "--currency", "CNY"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"discounted_price\": 90.0"));
    assert!(stdout.contains("pay:     ¥90.00"));
    assert!(stdout.contains("save:    ¥10.00"));
}

#[test]
fn test_convert_command() {
    let output = cli()
        .args(["convert", "--amount", "90", "--currency", "cny"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "¥630.00");
}

#[test]
fn test_methods_command() {
    let file = info_file();
    let output = cli()
        .args(["methods", "--amount", "15", "--info"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("alipay") && lines[0].ends_with("available"));
    assert!(lines[2].starts_with("stripe") && lines[2].ends_with("minimum top-up is 20"));
}

#[test]
fn test_presets_command_with_banner() {
    let file = info_file();
    let output = cli()
        .args(["presets", "--currency", "CNY", "--info"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("(1 $ = 7.00 ¥)"));
    assert_eq!(lines.count(), 3);
}

#[test]
fn test_missing_info_file_fails() {
    let output = cli()
        .args(["presets", "--info", "/nonexistent/topup.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
