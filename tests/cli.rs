//! Binary-level behavior: exit codes and the unknown-task path.

use std::process::Command;

const KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn binary() -> Command {
    let binary_path = assert_cmd::cargo::cargo_bin!("union-transfer");
    let mut command = Command::new(binary_path);
    command
        .env_remove("EVM_PRIVATE_KEY")
        .env_remove("COSMOS_MNEMONIC");
    command
}

#[test]
fn missing_secrets_exit_nonzero_before_any_transfer() {
    let output = binary().output().expect("cli runs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot load secrets"), "stderr: {}", stderr);
    // The secret values must never appear in output
    assert!(!stderr.contains(KEY));
}

#[test]
fn malformed_private_key_is_fatal() {
    let output = binary()
        .env("EVM_PRIVATE_KEY", "deadbeef")
        .env("COSMOS_MNEMONIC", MNEMONIC)
        .output()
        .expect("cli runs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("0x"), "stderr: {}", stderr);
}

#[test]
fn short_mnemonic_is_fatal() {
    let output = binary()
        .env("EVM_PRIVATE_KEY", KEY)
        .env("COSMOS_MNEMONIC", "too short")
        .output()
        .expect("cli runs");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unknown_task_warns_and_exits_cleanly() {
    let output = binary()
        .env("EVM_PRIVATE_KEY", KEY)
        .env("COSMOS_MNEMONIC", MNEMONIC)
        .arg("--task")
        .arg("definitely-not-a-task")
        .output()
        .expect("cli runs");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown task"), "stderr: {}", stderr);
    assert!(stderr.contains("Run complete"), "stderr: {}", stderr);
    // The mnemonic must never be echoed
    assert!(!stderr.contains("abandon"));
}
