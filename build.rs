//! Embeds the package version, commit and build date for the version label.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Short commit of the checkout, or `None` outside a git work tree.
fn git_short_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let commit = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!commit.is_empty()).then_some(commit)
}

/// A set, non-blank environment override.
fn env_override(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let commit = env_override("BUILD_COMMIT")
        .or_else(git_short_commit)
        .unwrap_or_else(|| "unknown".to_string());
    let date = env_override("BUILD_DATE")
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let dest_path = Path::new(&out_dir).join("build_info.rs");
    let contents = format!(
        "pub const BUILD_VERSION: &str = {:?};\n\
         pub const BUILD_COMMIT: &str = {:?};\n\
         pub const BUILD_DATE: &str = {:?};\n",
        version, commit, date
    );
    fs::write(&dest_path, contents).expect("write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
