use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use objsel_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static OBJSEL_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn run_objsel(args: &[&str]) -> Output {
	Command::new(objsel_bin()).args(args).output().expect("objsel command executes")
}

pub(crate) fn run_objsel_json(args: &[&str]) -> serde_json::Value {
	let output = run_objsel(args);
	assert!(
		output.status.success(),
		"objsel command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn objsel_bin() -> &'static PathBuf {
	OBJSEL_BIN.get_or_init(resolve_objsel_bin)
}

fn resolve_objsel_bin() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_objsel") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let mut bin = workspace_target_dir().join("debug");
	bin.push(if cfg!(windows) { "objsel.exe" } else { "objsel" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "objsel"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build objsel binary at {}", bin.display());

	bin
}
