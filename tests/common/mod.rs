// Shared test helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

pub const ASSOCIATED_DOMAINS_KEY: &str = "com.apple.developer.associated-domains";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_ios-entitlements-hook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the binary with the given args and stdin.
/// Returns (stdout, stderr, exit_code).
pub fn run(args: &[&str], stdin_input: &str) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::{ErrorKind, Write};
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Runs `hook` with a context naming `root` and the given platforms.
pub fn run_hook(root: &Path, platforms: &[&str], extra_args: &[&str]) -> (String, String, i32) {
    let context = serde_json::json!({
        "hook": "after_prepare",
        "opts": {
            "projectRoot": root,
            "platforms": platforms,
        }
    })
    .to_string();
    let mut args = vec!["hook"];
    args.extend_from_slice(extra_args);
    run(&args, &context)
}

/// Runs `generate --project-root <root>`.
pub fn run_generate(root: &Path, extra_args: &[&str]) -> (String, String, i32) {
    let root = root.to_str().unwrap();
    let mut args = vec!["generate", "--project-root", root];
    args.extend_from_slice(extra_args);
    run(&args, "")
}

pub fn write_config(root: &Path, content: &str) {
    std::fs::write(root.join("entitlements.kdl"), content).expect("failed to write config");
}

pub fn debug_path(root: &Path, project: &str) -> PathBuf {
    root.join("platforms/ios")
        .join(project)
        .join("Entitlements-Debug.plist")
}

pub fn release_path(root: &Path, project: &str) -> PathBuf {
    root.join("platforms/ios")
        .join(project)
        .join("Entitlements-Release.plist")
}

pub fn read_plist(path: &Path) -> plist::Dictionary {
    plist::Value::from_file(path)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
        .into_dictionary()
        .expect("root must be a dictionary")
}

pub fn domains(path: &Path) -> Vec<String> {
    read_plist(path)
        .get(ASSOCIATED_DOMAINS_KEY)
        .and_then(plist::Value::as_array)
        .expect("associated domains must be an array")
        .iter()
        .map(|v| v.as_string().expect("entries must be strings").to_string())
        .collect()
}

pub fn parse_report(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}
