//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Short version string shown on the welcome screen and by `--version`,
/// e.g. `v0.1.0 (1a2b3c4, 2026-10-19)`.
pub fn version_label() -> String {
    format!("v{} ({}, {})", BUILD_VERSION, BUILD_COMMIT, BUILD_DATE)
}
