use crate::codec::{Compression, ZSTD_MAGIC, decode_bytes, encode_bytes};

#[test]
fn plain_bytes_pass_through() {
	let (compression, bytes) = decode_bytes(b"{}".to_vec()).expect("decode succeeds");
	assert_eq!(compression, Compression::None);
	assert_eq!(bytes, b"{}");
}

#[test]
fn zstd_round_trip_is_detected_by_magic() {
	let payload = br#"{"values": [1, 2, 3]}"#.repeat(64);
	let packed = encode_bytes(payload.clone(), Compression::Zstd).expect("encode succeeds");
	assert!(packed.starts_with(&ZSTD_MAGIC));
	assert!(packed.len() < payload.len());

	let (compression, bytes) = decode_bytes(packed).expect("decode succeeds");
	assert_eq!(compression, Compression::Zstd);
	assert_eq!(bytes, payload);
}

#[test]
fn corrupt_zstd_frame_is_an_error() {
	let mut raw = ZSTD_MAGIC.to_vec();
	raw.extend_from_slice(&[0xFF; 16]);
	assert!(decode_bytes(raw).is_err());
}

#[test]
fn labels_are_stable() {
	assert_eq!(Compression::None.as_str(), "none");
	assert_eq!(Compression::Zstd.as_str(), "zstd");
}
