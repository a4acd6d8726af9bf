//! Test vector parsing.

use std::fs::File;
use std::sync::LazyLock;

use serde::Deserialize;

/// Parsed test vectors cache.
pub(super) static TEST_VECTORS: LazyLock<Vec<TestVector>> = LazyLock::new(|| {
	serde_json::from_reader(File::open("tests/test_vectors/vectors.json").unwrap()).unwrap()
});

/// Fixed key material of one ciphersuite.
#[derive(Deserialize)]
pub(super) struct TestVector {
	/// Ciphersuite identifier.
	pub(super) identifier: String,
	/// The secret key.
	#[serde(with = "hex::serde", rename = "skSm")]
	pub(super) secret_key: Vec<u8>,
	/// The public key.
	#[serde(with = "hex::serde", rename = "pkSm")]
	pub(super) public_key: Vec<u8>,
	/// Child test vectors.
	pub(super) vectors: Vec<Vector>,
}

/// A single protocol run with a fixed blind.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct Vector {
	#[serde(with = "hex::serde")]
	pub(super) input: Vec<u8>,
	#[serde(with = "hex::serde")]
	pub(super) aux: Vec<u8>,
	#[serde(with = "hex::serde")]
	pub(super) blind: Vec<u8>,
	#[serde(with = "hex::serde")]
	pub(super) blinded_element: Vec<u8>,
	#[serde(with = "hex::serde")]
	pub(super) evaluation_element: Vec<u8>,
	#[serde(with = "hex::serde")]
	pub(super) unblinded_element: Vec<u8>,
	#[serde(with = "hex::serde")]
	pub(super) output: Vec<u8>,
}
