use crate::bind::Value;
use crate::bind::test_support::map;
use crate::codec::{Compression, Document};

fn sample_tree() -> Value {
	map([("name", Value::from("doc")), ("sizes", Value::Array(vec![Value::I64(1), Value::I64(2)]))])
}

#[test]
fn write_then_open_preserves_value_and_compression() {
	let dir = tempfile::tempdir().expect("temp dir");
	for (name, compression) in [("plain.json", Compression::None), ("packed.json.zst", Compression::Zstd)] {
		let path = dir.path().join(name);
		Document::write(&path, &sample_tree(), compression, false).expect("write succeeds");

		let document = Document::open(&path).expect("open succeeds");
		assert_eq!(document.compression, compression);
		assert_eq!(document.value, sample_tree());
	}
}

#[test]
fn from_bytes_accepts_pretty_json() {
	let bytes = Document::encode(&sample_tree(), Compression::None, true).expect("encode succeeds");
	let document = Document::from_bytes(bytes).expect("decode succeeds");
	assert_eq!(document.value, sample_tree());
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = tempfile::tempdir().expect("temp dir");
	let err = Document::open(dir.path().join("absent.json")).expect_err("missing file");
	assert!(matches!(err, crate::codec::CodecError::Io(_)));
}
