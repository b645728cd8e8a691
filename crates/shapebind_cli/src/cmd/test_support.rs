use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use shapebind_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static SHAPEBIND_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn fixture_arg(name: &str) -> String {
	fixture_path(name).display().to_string()
}

pub(crate) fn run_shapebind(args: &[&str]) -> Output {
	Command::new(shapebind_bin()).args(args).output().expect("shapebind command executes")
}

pub(crate) fn run_shapebind_json(args: &[&str]) -> serde_json::Value {
	let output = run_shapebind(args);
	assert!(
		output.status.success(),
		"shapebind command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn shapebind_bin() -> &'static PathBuf {
	SHAPEBIND_BIN.get_or_init(resolve_shapebind_bin)
}

fn resolve_shapebind_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_shapebind") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "shapebind.exe" } else { "shapebind" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "shapebind"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build shapebind binary at {}", bin.display());

	bin
}
