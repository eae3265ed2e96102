#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

fn dcep(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dcep"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("dcep should run")
}

fn unique_temp_file(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "dcepcli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir.join("open.bin")
}

#[test]
fn encode_outputs_expected_wire_bytes() {
    let output = dcep(&[
        "--format",
        "json",
        "encode",
        "--label",
        "chat",
        "--priority",
        "0x1234",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["hex"], "03001234000000000004000063686174");
    assert_eq!(json["wire_size"], 16);
    assert_eq!(json["message_type"], 3);
}

#[test]
fn encode_raw_writes_binary() {
    let output = dcep(&["--format", "raw", "encode", "--label", "abc", "--protocol", "de"]);
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        vec![
            0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x02, 0x61, 0x62,
            0x63, 0x64, 0x65,
        ]
    );
}

#[test]
fn decode_hex_outputs_fields() {
    let output = dcep(&[
        "--format",
        "json",
        "decode",
        "03 82 00 01 00 00 01 f4 00 03 00 02 61 62 63 64 65",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["channel_type"], 0x82);
    assert_eq!(json["channel_type_name"], "PARTIAL_RELIABLE_TIMED_UNORDERED");
    assert_eq!(json["priority"], 1);
    assert_eq!(json["reliability_parameter"], 500);
    assert_eq!(json["label"], "abc");
    assert_eq!(json["protocol"], "de");
    assert_eq!(json["wire_size"], 17);
}

#[test]
fn decode_file_roundtrips_encode_output() {
    let path = unique_temp_file("roundtrip");
    let encoded = dcep(&["--format", "raw", "encode", "--label", "files", "--reliability", "7"]);
    assert!(encoded.status.success());
    std::fs::write(&path, &encoded.stdout).expect("message file should be writable");

    let output = dcep(&["--format", "json", "decode", "--file", path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["label"], "files");
    assert_eq!(json["protocol"], "");
    assert_eq!(json["reliability_parameter"], 7);
}

#[test]
fn decode_rejects_trailing_bytes_with_data_invalid() {
    let output = dcep(&["--format", "json", "decode", "030000000000000000000000ff"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("length mismatch"), "stderr: {stderr}");
}

#[test]
fn decode_rejects_short_header_with_data_invalid() {
    let output = dcep(&["decode", "0300"]);
    assert_eq!(output.status.code(), Some(60));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("header too short (2 bytes"), "stderr: {stderr}");
}

#[test]
fn decode_missing_file_fails() {
    let path = unique_temp_file("missing");
    let output = dcep(&["decode", "--file", path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn version_prints_crate_version() {
    let output = dcep(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("dcep {}", env!("CARGO_PKG_VERSION")));
}
