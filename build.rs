/*
 * Responsibility
 * - Capture the rustc version at build time (runtime version identifier)
 * - Exposed to the crate as env!("DEVOPS_RUSTC_VERSION")
 */
use std::process::Command;

fn main() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    // "rustc 1.85.0 (4d91de4e4 2025-02-17)" -> "rustc 1.85.0"
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|s| {
            let mut parts = s.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(name), Some(ver)) => Some(format!("{name} {ver}")),
                _ => None,
            }
        })
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=DEVOPS_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-env-changed=RUSTC");
}
