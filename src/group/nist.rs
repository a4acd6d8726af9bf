//! NIST curves implementation.

use std::sync::LazyLock;

use elliptic_curve::PrimeField;
use elliptic_curve::ops::Invert;
use elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};

use super::{GroupKind, PrimeOrderGroup};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::hash_to_curve::{Coordinates, HashToCurve, MapToCurve};

/// Constants of a short Weierstrass curve `y² = x³ - 3·x + B`.
struct CurveParams {
	/// [`HashToCurve`] with the curve constants.
	hash_to_curve: HashToCurve,
	/// Prime order of the group.
	order: BigUint,
	/// Length of a serialized scalar.
	scalar_len: usize,
	/// Clears the bits of the most significant byte above the order's bit
	/// length.
	scalar_mask: u8,
}

impl CurveParams {
	/// `A` is fixed to `-3`, `Z` is `-minus_z`.
	fn new(
		p: &[u8],
		b: &[u8],
		minus_z: u8,
		order: &[u8],
		security_len: usize,
		dst: &'static [u8],
	) -> Self {
		let p = BigUint::from_bytes_be(p);
		let a = &p - BigUint::from(3_u8);
		let z = &p - BigUint::from(minus_z);
		let b = BigUint::from_bytes_be(b);

		Self {
			hash_to_curve: HashToCurve::new(
				Field::new(p),
				[a, b, z],
				MapToCurve::Sswu,
				security_len,
				dst,
			),
			order: BigUint::from_bytes_be(order),
			scalar_len: order.len(),
			scalar_mask: order
				.first()
				.map_or(u8::MAX, |byte| u8::MAX >> byte.leading_zeros()),
		}
	}
}

/// NIST P-384.
static P384: LazyLock<CurveParams> = LazyLock::new(|| {
	CurveParams::new(
		&hex!(
			"fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff"
		),
		&hex!(
			"b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef"
		),
		12,
		&hex!(
			"ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973"
		),
		24,
		b"RFCXXXX-VOPRF-P384_XMD:SHA-512_SSWU_RO_",
	)
});

/// NIST P-521.
static P521: LazyLock<CurveParams> = LazyLock::new(|| {
	CurveParams::new(
		&hex!(
			"01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
		),
		&hex!(
			"0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00"
		),
		4,
		&hex!(
			"01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"
		),
		32,
		b"RFCXXXX-VOPRF-P521_XMD:SHA-512_SSWU_RO_",
	)
});

/// Implements [`PrimeOrderGroup`] for a RustCrypto curve backed by its
/// [`CurveParams`].
macro_rules! impl_prime_order_group {
	($curve:ident::$group:ident, $kind:ident, $params:ident) => {
		impl PrimeOrderGroup for $curve::$group {
			const KIND: GroupKind = GroupKind::$kind;

			type Element = $curve::AffinePoint;
			type Scalar = $curve::NonZeroScalar;

			fn hash_to_curve() -> &'static HashToCurve {
				&$params.hash_to_curve
			}

			fn order() -> &'static BigUint {
				&$params.order
			}

			fn element_len() -> usize {
				Self::hash_to_curve().field().byte_len() + 1
			}

			fn scalar_len() -> usize {
				$params.scalar_len
			}

			fn element_from_coordinates(point: &Coordinates) -> Result<Self::Element> {
				if !Self::is_valid(point) {
					return Err(Error::InvalidGroupElement);
				}

				let field = Self::hash_to_curve().field();
				let x = $curve::FieldBytes::from_exact_iter(field.to_bytes(&point.x))
					.ok_or(Error::InvalidGroupElement)?;
				let y = $curve::FieldBytes::from_exact_iter(field.to_bytes(&point.y))
					.ok_or(Error::InvalidGroupElement)?;
				let encoded = $curve::EncodedPoint::from_affine_coordinates(&x, &y, false);

				$curve::AffinePoint::from_encoded_point(&encoded)
					.into_option()
					.ok_or(Error::InvalidGroupElement)
			}

			fn element_to_coordinates(element: &Self::Element) -> Coordinates {
				let field = Self::hash_to_curve().field();
				let encoded = element.to_encoded_point(false);

				Coordinates {
					x: encoded
						.x()
						.map_or_else(BigUint::zero, |x| field.from_bytes(x)),
					y: encoded
						.y()
						.map_or_else(BigUint::zero, |y| field.from_bytes(y)),
				}
			}

			fn element_to_bytes(element: &Self::Element) -> Vec<u8> {
				element.to_encoded_point(true).as_bytes().to_vec()
			}

			fn element_from_bytes(bytes: &[u8]) -> Result<Self::Element> {
				let encoded = $curve::EncodedPoint::from_bytes(bytes)
					.map_err(|_| Error::InvalidGroupElement)?;

				// Also rules out the identity, which only has a one-byte encoding.
				if !encoded.is_compressed() {
					return Err(Error::InvalidGroupElement);
				}

				$curve::AffinePoint::from_encoded_point(&encoded)
					.into_option()
					.ok_or(Error::InvalidGroupElement)
			}

			fn scalar_mult(element: &Self::Element, scalar: &Self::Scalar) -> Result<Self::Element> {
				let result = $curve::AffinePoint::from($curve::ProjectivePoint::from(*element) * **scalar);

				if result == $curve::AffinePoint::IDENTITY {
					Err(Error::InvalidGroupElement)
				} else {
					Ok(result)
				}
			}

			fn generator_mult(scalar: &Self::Scalar) -> Self::Element {
				$curve::AffinePoint::from($curve::ProjectivePoint::GENERATOR * **scalar)
			}

			fn random_scalar<R>(rng: &mut R) -> Result<Self::Scalar>
			where
				R: CryptoRng + RngCore + ?Sized,
			{
				let mut bytes = $curve::FieldBytes::default();

				loop {
					rng.try_fill_bytes(&mut bytes)?;

					if let Some(byte) = bytes.first_mut() {
						*byte &= $params.scalar_mask;
					}

					if let Some(scalar) = $curve::NonZeroScalar::from_repr(bytes).into_option() {
						break Ok(scalar);
					}
				}
			}

			fn scalar_invert(scalar: &Self::Scalar) -> Self::Scalar {
				scalar.invert()
			}

			fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8> {
				scalar.to_repr().to_vec()
			}

			fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar> {
				let bytes = $curve::FieldBytes::from_exact_iter(bytes.iter().copied())
					.ok_or(Error::InvalidScalar)?;

				$curve::NonZeroScalar::from_repr(bytes)
					.into_option()
					.ok_or(Error::InvalidScalar)
			}
		}
	};
}

impl_prime_order_group!(p384::NistP384, P384, P384);
impl_prime_order_group!(p521::NistP521, P521, P521);
