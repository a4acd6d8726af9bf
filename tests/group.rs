//! Tests [`ecoprf::group`] related functionality.

#![cfg(test)]
#![expect(clippy::cargo_common_metadata, reason = "tests")]

use ecoprf::group::GroupKind;
use ecoprf::hash_to_curve::Coordinates;
use ecoprf::{Error, Scalar};
use ecoprf_test::{INPUT, test_ciphersuites};
use hex_literal::hex;
use num_bigint::BigUint;
use rand_core::OsRng;

/// Compressed x-coordinate for which `x³ - 3·x + B` is not a square.
fn off_curve(group: GroupKind) -> Vec<u8> {
	let mut bytes = vec![0; group.element_len()];
	bytes[0] = 0x02;
	*bytes.last_mut().unwrap() = match group {
		GroupKind::P384 => 1,
		GroupKind::P521 => 3,
	};
	bytes
}

fn other(group: GroupKind) -> GroupKind {
	match group {
		GroupKind::P384 => GroupKind::P521,
		GroupKind::P521 => GroupKind::P384,
	}
}

#[test]
fn constants() {
	assert_eq!(GroupKind::P384.element_len(), 49);
	assert_eq!(GroupKind::P384.scalar_len(), 48);
	assert_eq!(
		GroupKind::P384.order(),
		&BigUint::from_bytes_be(&hex!(
			"ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973"
		))
	);
	assert_eq!(
		GroupKind::P384.generator().to_bytes(),
		hex!(
			"03aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7"
		)
	);

	assert_eq!(GroupKind::P521.element_len(), 67);
	assert_eq!(GroupKind::P521.scalar_len(), 66);
	assert_eq!(
		GroupKind::P521.order(),
		&BigUint::from_bytes_be(&hex!(
			"01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"
		))
	);
	assert_eq!(
		GroupKind::P521.generator().to_bytes(),
		hex!(
			"0200c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66"
		)
	);
}

#[test]
fn names() {
	for group in [GroupKind::P384, GroupKind::P521] {
		assert_eq!(GroupKind::from_name(group.name()), Ok(group));
		assert_eq!(group.to_string(), group.name());
	}

	assert_eq!(GroupKind::from_name("P256"), Err(Error::UnsupportedGroup));
	assert_eq!(GroupKind::from_name("p384"), Err(Error::UnsupportedGroup));
}

test_ciphersuites!(validity);

/// Tests that every produced element is valid.
fn validity(group: GroupKind) {
	let scalar = group.random_scalar(&mut OsRng).unwrap();

	let generated = group.generator_mult(&scalar).unwrap();
	let multiplied = group.encode_to_group(INPUT).unwrap().scalar_mult(&scalar).unwrap();
	let encoded = group.encode_to_group(INPUT).unwrap();
	let deserialized = group.deserialize(&generated.to_bytes()).unwrap();

	for element in [generated, multiplied, encoded, deserialized] {
		assert_eq!(element.group(), group);
		assert!(element.is_valid());
		assert!(group.is_valid(&element.coordinates()));
	}

	assert_eq!(generated, group.generator().scalar_mult(&scalar).unwrap());
}

test_ciphersuites!(serialization);

/// Tests `Deserialize(Serialize(P)) == P`.
fn serialization(group: GroupKind) {
	for _ in 0..8 {
		let scalar = group.random_scalar(&mut OsRng).unwrap();
		let element = group.generator_mult(&scalar).unwrap();
		let bytes = element.to_bytes();

		assert_eq!(bytes.len(), group.element_len());
		assert!(matches!(bytes[0], 0x02 | 0x03));
		assert_eq!(group.deserialize(&bytes).unwrap(), element);
		assert_eq!(
			group.element_from_coordinates(&element.coordinates()).unwrap(),
			element
		);

		let bytes = scalar.to_bytes();
		assert_eq!(bytes.len(), group.scalar_len());
		assert_eq!(group.scalar_from_bytes(&bytes).unwrap(), scalar);
	}
}

test_ciphersuites!(malformed);

/// Tests rejection of malformed encodings.
fn malformed(group: GroupKind) {
	let element = group.encode_to_group(INPUT).unwrap();
	let bytes = element.to_bytes();

	// Identity.
	assert_eq!(group.deserialize(&[0]), Err(Error::InvalidGroupElement));
	// Empty.
	assert_eq!(group.deserialize(&[]), Err(Error::InvalidGroupElement));
	// Truncated.
	assert_eq!(
		group.deserialize(&bytes[..bytes.len() - 1]),
		Err(Error::InvalidGroupElement)
	);
	// Invalid tag.
	let mut tagged = bytes.clone();
	tagged[0] = 0x05;
	assert_eq!(group.deserialize(&tagged), Err(Error::InvalidGroupElement));
	// Not on the curve.
	assert_eq!(
		group.deserialize(&off_curve(group)),
		Err(Error::InvalidGroupElement)
	);
	// `x ≥ p`.
	let mut large = vec![0xff; group.element_len()];
	large[0] = 0x02;
	assert_eq!(group.deserialize(&large), Err(Error::InvalidGroupElement));
	// Element of the other group.
	assert_eq!(
		other(group).deserialize(&bytes),
		Err(Error::InvalidGroupElement)
	);

	// Uncompressed encodings are not canonical.
	let Coordinates { x, y } = element.coordinates();
	let field = group.hash_to_curve().field();
	let mut uncompressed = vec![0x04];
	uncompressed.extend(field.to_bytes(&x));
	uncompressed.extend(field.to_bytes(&y));
	assert_eq!(
		group.deserialize(&uncompressed),
		Err(Error::InvalidGroupElement)
	);

	// Coordinates not satisfying the curve equation.
	let invalid = Coordinates {
		y: field.add(&y, &BigUint::from(1_u8)),
		x,
	};
	assert!(!group.is_valid(&invalid));
	assert_eq!(
		group.element_from_coordinates(&invalid),
		Err(Error::InvalidGroupElement)
	);
}

test_ciphersuites!(scalars);

/// Tests scalar arithmetic and validation.
fn scalars(group: GroupKind) {
	let scalar = group.random_scalar(&mut OsRng).unwrap();
	let element = group.encode_to_group(INPUT).unwrap();

	// `r⁻¹ · (r · P) = P`.
	let blinded = element.scalar_mult(&scalar).unwrap();
	assert_ne!(blinded, element);
	assert_eq!(blinded.scalar_mult(&scalar.invert()).unwrap(), element);
	assert_eq!(scalar.invert().invert(), scalar);

	let len = group.scalar_len();
	assert_eq!(
		group.scalar_from_bytes(&vec![0; len]),
		Err(Error::InvalidScalar)
	);
	assert_eq!(
		group.scalar_from_bytes(&group.order().to_bytes_be()),
		Err(Error::InvalidScalar)
	);
	assert_eq!(group.scalar_from_bytes(&[1]), Err(Error::InvalidScalar));

	// `p - 1` is the largest valid scalar.
	let max = group.order() - BigUint::from(1_u8);
	let max: Scalar = group.scalar_from_bytes(&max.to_bytes_be()).unwrap();
	assert_eq!(
		group.generator().scalar_mult(&max).unwrap().to_bytes()[1..],
		group.generator().to_bytes()[1..]
	);

	// Scalars of the other group are rejected.
	let foreign = other(group).random_scalar(&mut OsRng).unwrap();
	assert_ne!(foreign, scalar);
	assert_eq!(element.scalar_mult(&foreign), Err(Error::InvalidScalar));
	assert_eq!(group.generator_mult(&foreign), Err(Error::InvalidScalar));
}

test_ciphersuites!(redacted);

/// Tests that [`Debug`] does not show scalars.
fn redacted(group: GroupKind) {
	let scalar = group.scalar_from_bytes(&{
		let mut bytes = vec![0; group.scalar_len()];
		*bytes.last_mut().unwrap() = 0x2a;
		bytes
	});

	let debug = format!("{:?}", scalar.unwrap());
	assert!(debug.starts_with("Scalar("));
	assert!(!debug.contains("2a"));
	assert!(!debug.contains("42"));
}
