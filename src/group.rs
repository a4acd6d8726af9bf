//! The [`PrimeOrderGroup`] trait and its runtime dispatch over the supported
//! curves.

mod nist;

use core::fmt::{self, Debug, Display, Formatter};

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::hash_to_curve::{Coordinates, HashToCurve, MapToCurve};

/// Prime-order group generated by the points of an elliptic curve.
///
/// Elements and scalars of an implementation are always valid: elements are
/// points on the curve other than the identity, scalars are in `[1, p - 1]`.
pub trait PrimeOrderGroup {
	/// Runtime identifier of this group.
	const KIND: GroupKind;

	/// Non-identity element type.
	type Element: Copy + Debug + Eq;

	/// Non-zero scalar type.
	type Scalar: Copy + Zeroize;

	/// Hash-to-curve configuration with this group's curve constants and DST.
	fn hash_to_curve() -> &'static HashToCurve;

	/// The prime order `p` of the group.
	fn order() -> &'static BigUint;

	/// Length of a serialized element.
	fn element_len() -> usize;

	/// Length of a serialized scalar.
	fn scalar_len() -> usize;

	/// Returns `true` if `point` satisfies the curve equation with both
	/// coordinates reduced. Prime-order curves have no further subgroup
	/// check.
	fn is_valid(point: &Coordinates) -> bool {
		let field = Self::hash_to_curve().field();

		point.x < *field.modulus()
			&& point.y < *field.modulus()
			&& Self::hash_to_curve().is_on_curve(point).into()
	}

	/// Converts validated affine coordinates into an element.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if `point` is not on the curve.
	fn element_from_coordinates(point: &Coordinates) -> Result<Self::Element>;

	/// Affine coordinates of `element`.
	fn element_to_coordinates(element: &Self::Element) -> Coordinates;

	/// Serializes `element` in SEC1 compressed form.
	fn element_to_bytes(element: &Self::Element) -> Vec<u8>;

	/// Deserializes a SEC1 compressed element.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if `bytes` is not a compressed
	/// encoding of a point on the curve.
	fn element_from_bytes(bytes: &[u8]) -> Result<Self::Element>;

	/// Computes `scalar · element`.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if the result is the identity.
	fn scalar_mult(element: &Self::Element, scalar: &Self::Scalar) -> Result<Self::Element>;

	/// Computes `scalar · G`.
	fn generator_mult(scalar: &Self::Scalar) -> Self::Element;

	/// Samples a uniform scalar in `[1, p - 1]`.
	///
	/// # Errors
	///
	/// Returns [`Error::RandomnessFailure`] if `rng` fails.
	fn random_scalar<R>(rng: &mut R) -> Result<Self::Scalar>
	where
		R: CryptoRng + RngCore + ?Sized;

	/// Computes `scalar⁻¹ mod p`.
	fn scalar_invert(scalar: &Self::Scalar) -> Self::Scalar;

	/// Fixed-length big-endian encoding of `scalar`.
	fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8>;

	/// Parses a fixed-length big-endian scalar.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidScalar`] if `bytes` has the wrong length or
	/// encodes `0` or a value not smaller than the order.
	fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar>;

	/// Hashes `msg` onto the group.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if the mapped point fails
	/// validation.
	fn encode_to_group(msg: &[u8]) -> Result<Self::Element> {
		let point = Self::hash_to_curve().encode_to_curve(msg)?;
		Self::element_from_coordinates(&point)
	}
}

/// The supported prime-order groups.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GroupKind {
	/// NIST P-384.
	P384,
	/// NIST P-521.
	P521,
}

/// Calls `$f` on the [`PrimeOrderGroup`] implementation matching `$kind`.
macro_rules! dispatch {
	($kind:expr, $group:ident => $body:expr) => {
		match $kind {
			GroupKind::P384 => {
				type $group = p384::NistP384;
				$body
			}
			GroupKind::P521 => {
				type $group = p521::NistP521;
				$body
			}
		}
	};
}

impl GroupKind {
	/// Name of the group as it appears in ciphersuite identifiers.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::P384 => "P384",
			Self::P521 => "P521",
		}
	}

	/// Looks up a group by its ciphersuite name.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedGroup`] if `name` is not a supported group.
	pub fn from_name(name: &str) -> Result<Self> {
		match name {
			"P384" => Ok(Self::P384),
			"P521" => Ok(Self::P521),
			_ => Err(Error::UnsupportedGroup),
		}
	}

	/// The curve mapping this group hashes with.
	#[must_use]
	pub fn map(self) -> MapToCurve {
		self.hash_to_curve().map()
	}

	/// See [`PrimeOrderGroup::hash_to_curve()`].
	#[must_use]
	pub fn hash_to_curve(self) -> &'static HashToCurve {
		dispatch!(self, G => G::hash_to_curve())
	}

	/// See [`PrimeOrderGroup::order()`].
	#[must_use]
	pub fn order(self) -> &'static BigUint {
		dispatch!(self, G => G::order())
	}

	/// See [`PrimeOrderGroup::element_len()`].
	#[must_use]
	pub fn element_len(self) -> usize {
		dispatch!(self, G => G::element_len())
	}

	/// See [`PrimeOrderGroup::scalar_len()`].
	#[must_use]
	pub fn scalar_len(self) -> usize {
		dispatch!(self, G => G::scalar_len())
	}

	/// See [`PrimeOrderGroup::is_valid()`].
	#[must_use]
	pub fn is_valid(self, point: &Coordinates) -> bool {
		dispatch!(self, G => G::is_valid(point))
	}

	/// Converts affine coordinates into an element of this group.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if `point` is not on the curve.
	pub fn element_from_coordinates(self, point: &Coordinates) -> Result<GroupElement> {
		match self {
			Self::P384 => {
				<p384::NistP384 as PrimeOrderGroup>::element_from_coordinates(point)
					.map(ElementRepr::P384)
			}
			Self::P521 => {
				<p521::NistP521 as PrimeOrderGroup>::element_from_coordinates(point)
					.map(ElementRepr::P521)
			}
		}
		.map(GroupElement)
	}

	/// Deserializes an element of this group.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if `bytes` is not a valid
	/// compressed point.
	pub fn deserialize(self, bytes: &[u8]) -> Result<GroupElement> {
		match self {
			Self::P384 => {
				<p384::NistP384 as PrimeOrderGroup>::element_from_bytes(bytes).map(ElementRepr::P384)
			}
			Self::P521 => {
				<p521::NistP521 as PrimeOrderGroup>::element_from_bytes(bytes).map(ElementRepr::P521)
			}
		}
		.map(GroupElement)
	}

	/// Hashes `msg` onto this group.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if the mapped point fails
	/// validation.
	pub fn encode_to_group(self, msg: &[u8]) -> Result<GroupElement> {
		match self {
			Self::P384 => {
				<p384::NistP384 as PrimeOrderGroup>::encode_to_group(msg).map(ElementRepr::P384)
			}
			Self::P521 => {
				<p521::NistP521 as PrimeOrderGroup>::encode_to_group(msg).map(ElementRepr::P521)
			}
		}
		.map(GroupElement)
	}

	/// The generator `G` of this group.
	#[must_use]
	pub fn generator(self) -> GroupElement {
		GroupElement(match self {
			Self::P384 => ElementRepr::P384(p384::AffinePoint::GENERATOR),
			Self::P521 => ElementRepr::P521(p521::AffinePoint::GENERATOR),
		})
	}

	/// Computes `scalar · G`.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidScalar`] if `scalar` belongs to another group.
	pub fn generator_mult(self, scalar: &Scalar) -> Result<GroupElement> {
		match (self, &scalar.0) {
			(Self::P384, ScalarRepr::P384(scalar)) => Ok(ElementRepr::P384(
				<p384::NistP384 as PrimeOrderGroup>::generator_mult(scalar),
			)),
			(Self::P521, ScalarRepr::P521(scalar)) => Ok(ElementRepr::P521(
				<p521::NistP521 as PrimeOrderGroup>::generator_mult(scalar),
			)),
			_ => Err(Error::InvalidScalar),
		}
		.map(GroupElement)
	}

	/// Samples a uniform scalar of this group in `[1, p - 1]`.
	///
	/// # Errors
	///
	/// Returns [`Error::RandomnessFailure`] if `rng` fails.
	pub fn random_scalar<R>(self, rng: &mut R) -> Result<Scalar>
	where
		R: CryptoRng + RngCore + ?Sized,
	{
		match self {
			Self::P384 => {
				<p384::NistP384 as PrimeOrderGroup>::random_scalar(rng).map(ScalarRepr::P384)
			}
			Self::P521 => {
				<p521::NistP521 as PrimeOrderGroup>::random_scalar(rng).map(ScalarRepr::P521)
			}
		}
		.map(Scalar)
	}

	/// Parses a fixed-length big-endian scalar of this group.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidScalar`] if `bytes` has the wrong length or
	/// encodes `0` or a value not smaller than the order.
	pub fn scalar_from_bytes(self, bytes: &[u8]) -> Result<Scalar> {
		match self {
			Self::P384 => {
				<p384::NistP384 as PrimeOrderGroup>::scalar_from_bytes(bytes).map(ScalarRepr::P384)
			}
			Self::P521 => {
				<p521::NistP521 as PrimeOrderGroup>::scalar_from_bytes(bytes).map(ScalarRepr::P521)
			}
		}
		.map(Scalar)
	}
}

impl Display for GroupKind {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(self.name())
	}
}

/// Curve point per [`GroupKind`].
#[derive(Clone, Copy, Eq, PartialEq)]
enum ElementRepr {
	P384(p384::AffinePoint),
	P521(p521::AffinePoint),
}

/// A non-identity point of one of the supported groups.
///
/// Every value has been validated against its curve, so operations on it
/// only fail when mixed with values of another group.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct GroupElement(ElementRepr);

impl GroupElement {
	/// The group this element belongs to.
	#[must_use]
	pub const fn group(&self) -> GroupKind {
		match self.0 {
			ElementRepr::P384(_) => GroupKind::P384,
			ElementRepr::P521(_) => GroupKind::P521,
		}
	}

	/// Affine coordinates of this element.
	#[must_use]
	pub fn coordinates(&self) -> Coordinates {
		match &self.0 {
			ElementRepr::P384(element) => {
				<p384::NistP384 as PrimeOrderGroup>::element_to_coordinates(element)
			}
			ElementRepr::P521(element) => {
				<p521::NistP521 as PrimeOrderGroup>::element_to_coordinates(element)
			}
		}
	}

	/// Returns `true` if this element satisfies its curve equation.
	#[must_use]
	pub fn is_valid(&self) -> bool {
		self.group().is_valid(&self.coordinates())
	}

	/// Canonical SEC1 compressed encoding.
	#[must_use]
	pub fn to_bytes(&self) -> Vec<u8> {
		match &self.0 {
			ElementRepr::P384(element) => {
				<p384::NistP384 as PrimeOrderGroup>::element_to_bytes(element)
			}
			ElementRepr::P521(element) => {
				<p521::NistP521 as PrimeOrderGroup>::element_to_bytes(element)
			}
		}
	}

	/// Computes `scalar · self`.
	///
	/// # Errors
	///
	/// - [`Error::InvalidScalar`] if `scalar` belongs to another group.
	/// - [`Error::InvalidGroupElement`] if the result is the identity.
	pub fn scalar_mult(&self, scalar: &Scalar) -> Result<Self> {
		match (&self.0, &scalar.0) {
			(ElementRepr::P384(element), ScalarRepr::P384(scalar)) => {
				<p384::NistP384 as PrimeOrderGroup>::scalar_mult(element, scalar)
					.map(ElementRepr::P384)
			}
			(ElementRepr::P521(element), ScalarRepr::P521(scalar)) => {
				<p521::NistP521 as PrimeOrderGroup>::scalar_mult(element, scalar)
					.map(ElementRepr::P521)
			}
			_ => Err(Error::InvalidScalar),
		}
		.map(Self)
	}
}

impl Debug for GroupElement {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("GroupElement")
			.field(&self.group())
			.field(&hex::encode(self.to_bytes()))
			.finish()
	}
}

/// Curve scalar per [`GroupKind`].
#[derive(Clone, Copy)]
enum ScalarRepr {
	P384(p384::NonZeroScalar),
	P521(p521::NonZeroScalar),
}

/// A non-zero scalar of one of the supported groups, used for secret keys and
/// blinds.
///
/// The value is zeroized on drop and never shown by [`Debug`].
#[derive(Clone)]
pub struct Scalar(ScalarRepr);

impl Scalar {
	/// The group this scalar belongs to.
	#[must_use]
	pub const fn group(&self) -> GroupKind {
		match self.0 {
			ScalarRepr::P384(_) => GroupKind::P384,
			ScalarRepr::P521(_) => GroupKind::P521,
		}
	}

	/// Fixed-length big-endian encoding.
	#[must_use]
	pub fn to_bytes(&self) -> Vec<u8> {
		match &self.0 {
			ScalarRepr::P384(scalar) => <p384::NistP384 as PrimeOrderGroup>::scalar_to_bytes(scalar),
			ScalarRepr::P521(scalar) => <p521::NistP521 as PrimeOrderGroup>::scalar_to_bytes(scalar),
		}
	}

	/// Computes `self⁻¹ mod p`.
	#[must_use]
	pub fn invert(&self) -> Self {
		Self(match &self.0 {
			ScalarRepr::P384(scalar) => {
				ScalarRepr::P384(<p384::NistP384 as PrimeOrderGroup>::scalar_invert(scalar))
			}
			ScalarRepr::P521(scalar) => {
				ScalarRepr::P521(<p521::NistP521 as PrimeOrderGroup>::scalar_invert(scalar))
			}
		})
	}
}

impl ConstantTimeEq for Scalar {
	fn ct_eq(&self, other: &Self) -> Choice {
		if self.group() == other.group() {
			self.to_bytes().ct_eq(&other.to_bytes())
		} else {
			Choice::from(0)
		}
	}
}

impl PartialEq for Scalar {
	fn eq(&self, other: &Self) -> bool {
		self.ct_eq(other).into()
	}
}

impl Eq for Scalar {}

impl Debug for Scalar {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Scalar")
			.field(&self.group())
			.finish_non_exhaustive()
	}
}

impl Drop for Scalar {
	fn drop(&mut self) {
		match &mut self.0 {
			ScalarRepr::P384(scalar) => scalar.zeroize(),
			ScalarRepr::P521(scalar) => scalar.zeroize(),
		}
	}
}
