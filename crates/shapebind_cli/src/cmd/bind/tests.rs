use crate::cmd::test_support::{fixture_arg, run_shapebind, run_shapebind_json};

#[test]
fn bind_json_reports_root_type() {
	let json = run_shapebind_json(&["bind", &fixture_arg("inventory.json"), "--schema", &fixture_arg("inventory.schema.json"), "--json"]);

	assert_eq!(json["root"], "object Inventory");
	assert_eq!(json["value"]["type"], "Inventory");
	assert_eq!(json["value"]["fields"]["location"]["type"], "Location");
	assert!(json.get("explain").is_none());
}

#[test]
fn bind_explain_lists_every_candidate() {
	let json = run_shapebind_json(&[
		"bind",
		&fixture_arg("inventory.json"),
		"--schema",
		&fixture_arg("inventory.schema.json"),
		"--json",
		"--explain",
	]);

	let rows = json["explain"].as_array().expect("explain rows");
	let verdicts: Vec<_> = rows.iter().map(|row| (row["candidate"].as_str(), row["verdict"].as_str())).collect();
	assert_eq!(
		verdicts,
		[
			(Some("Inventory"), Some("accepted")),
			(Some("Item"), Some("missing")),
			(Some("Location"), Some("missing")),
		]
	);
	assert_eq!(rows[0]["extra_keys"], 1);
	assert_eq!(rows[0]["selected"], true);
}

#[test]
fn explain_rejects_array_roots() {
	let output = run_shapebind(&["bind", &fixture_arg("shapes.json"), "--schema", &fixture_arg("shapes.schema.json"), "--explain"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: cannot explain a document whose root is array"), "{stderr}");
}
