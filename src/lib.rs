pub mod growth;
pub mod profiler;

/// Global debug flag controlled by VECBENCH_DEBUG.
/// When true, the binary reports extra allocation diagnostics on stderr.
pub fn debug_enabled() -> bool {
    let raw = std::env::var("VECBENCH_DEBUG").unwrap_or_else(|_| "0".to_string());
    raw == "1" || raw.to_lowercase() == "true"
}
