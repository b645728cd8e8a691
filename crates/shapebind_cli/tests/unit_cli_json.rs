#![allow(missing_docs)]

use std::process::{Command, Output};

use serde_json::Value;
use shapebind_testkit::{fixture_json, fixture_path};

#[test]
fn inspect_json_reports_plain_tree() {
	let json = run_json(&["inspect", &fixture("shapes.json"), "--json"]);

	assert_eq!(json["compression"], "none");
	assert_eq!(json["root"], "array");
	assert_eq!(json["entries"], 4);
	assert_eq!(json["value"], fixture_json("shapes.json"));
}

#[test]
fn schema_json_lists_types_in_order() {
	let json = run_json(&["schema", &fixture("inventory.schema.json"), "--json"]);

	let names: Vec<_> = json["types"].as_array().expect("types array").iter().map(|item| item["name"].as_str()).collect();
	assert_eq!(names, [Some("Inventory"), Some("Item"), Some("Location")]);
	assert_eq!(json["types"][0]["fields"][2]["kind"], "[Item]");
	assert_eq!(json["types"][0]["ignored"][0], "scratch");
}

#[test]
fn schema_type_filter_rejects_unknown_names() {
	let json = run_json(&["schema", &fixture("inventory.schema.json"), "--type", "Location", "--json"]);
	assert_eq!(json["types"].as_array().map(Vec::len), Some(1));

	let output = run(&["schema", &fixture("inventory.schema.json"), "--type", "Warehouse"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: schema declares no type named Warehouse"));
}

#[test]
fn bind_json_selects_tightest_shapes() {
	let json = run_json(&["bind", &fixture("shapes.json"), "--schema", &fixture("shapes.schema.json"), "--json"]);

	let types: Vec<_> = json["value"].as_array().expect("array root").iter().map(|item| item["type"].as_str()).collect();
	assert_eq!(types, [Some("TypeA"), Some("TypeB"), None, Some("TypeB")]);
	assert_eq!(json["value"][2], serde_json::json!({ "x": 1, "q": 9 }));
}

#[test]
fn unbind_round_trips_through_stdout() {
	let output = run(&["unbind", &fixture("inventory.json"), "--schema", &fixture("inventory.schema.json")]);
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	let mut expected = fixture_json("inventory.json");
	expected.as_object_mut().expect("object fixture").remove("notes");
	assert_eq!(json, expected);
}

#[test]
fn unbind_writes_compressed_output() {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = dir.path().join("shapes.json.zst");
	let path_arg = path.display().to_string();

	let output = run(&["unbind", &fixture("shapes.json"), "--schema", &fixture("shapes.schema.json"), "--output", &path_arg, "--zstd"]);
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

	let json = run_json(&["inspect", &path_arg, "--json"]);
	assert_eq!(json["compression"], "zstd");
	assert_eq!(
		json["value"],
		serde_json::json!([{ "x": 1, "y": 2, "z": 3 }, { "x": 1, "y": 2 }, { "x": 1, "q": 9 }, { "x": 1, "y": 2 }])
	);
}

#[test]
fn malformed_document_exits_with_error() {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = dir.path().join("broken.json");
	std::fs::write(&path, b"{\"x\": ").expect("write fixture");

	let output = run(&["inspect", &path.display().to_string()]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: "));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_shapebind")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}
