//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture as text, panicking with the path on failure.
pub fn fixture_text(name: &str) -> String {
	let path = fixture_path(name);
	std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("read fixture {}: {err}", path.display()))
}

/// Read a fixture through `serde_json`, for comparing against an independent DOM.
pub fn fixture_json(name: &str) -> serde_json::Value {
	serde_json::from_str(&fixture_text(name)).unwrap_or_else(|err| panic!("fixture {name} is not standard JSON: {err}"))
}

/// Install a test-captured `fmt` subscriber filtered by `RUST_LOG` (default `info`); later calls are no-ops.
pub fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_test_writer()
		.try_init();
}

/// JSON text of `depth` nested arrays around a single `0`, e.g. `[[0]]` for depth 2.
pub fn nested_arrays(depth: usize) -> String {
	format!("{}0{}", "[".repeat(depth), "]".repeat(depth))
}
