//! Deterministic hashing of byte strings onto curve points.
//!
//! An input is expanded with `expand_message_xmd` into field elements, which
//! are then mapped onto the curve with the single [`MapToCurve`] the curve
//! is configured with. Every branch of the mappings is resolved with
//! [`cmov()`], so which candidate was taken does not show in the control
//! flow.

use elliptic_curve::hash2curve::{ExpandMsg, ExpandMsgXmd, Expander};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use sha2::Sha512;
use subtle::Choice;

use crate::error::{Error, Result};
use crate::field::{Field, cmov};

/// Curve mapping of a [`HashToCurve`] configuration. Exactly one is fixed per
/// curve.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MapToCurve {
	/// Simplified Shallue-van de Woestijne-Ulas, for short Weierstrass curves
	/// `y² = x³ + A·x + B` with `A·B ≠ 0`.
	Sswu,
	/// Elligator 2, for Montgomery-form curves `y² = x³ + A·x² + B·x`.
	Elligator2,
}

impl MapToCurve {
	/// Name of the mapping as it appears in ciphersuite identifiers.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Sswu => "SSWU",
			Self::Elligator2 => "ELL2",
		}
	}
}

/// Affine coordinates produced by a [`MapToCurve`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coordinates {
	/// `x`.
	pub x: BigUint,
	/// `y`.
	pub y: BigUint,
}

/// Hash-to-curve configuration of a single curve.
#[derive(Clone, Debug)]
pub struct HashToCurve {
	/// Base field `GF(p)`.
	field: Field,
	/// Curve coefficient `A`.
	a: BigUint,
	/// Curve coefficient `B`.
	b: BigUint,
	/// Non-square `Z` of the mapping.
	z: BigUint,
	/// `-B / A`.
	sswu_c1: BigUint,
	/// `-1 / Z`.
	sswu_c2: BigUint,
	/// [`MapToCurve`].
	map: MapToCurve,
	/// `L`, the number of expanded bytes reduced into one field element.
	element_len: usize,
	/// Domain separation tag.
	dst: &'static [u8],
}

impl HashToCurve {
	/// Creates a configuration for the curve with coefficients `a` and `b` over
	/// `field`, mapped with `map` and its non-square constant `z`.
	///
	/// `security_len` is the target security level in bytes; each field
	/// element is reduced from `ceil((log2(p) + k) / 8)` bytes.
	#[must_use]
	pub fn new(
		field: Field,
		[a, b, z]: [BigUint; 3],
		map: MapToCurve,
		security_len: usize,
		dst: &'static [u8],
	) -> Self {
		let sswu_c1 = field.neg(&field.div(&b, &a));
		let sswu_c2 = field.neg(&field.inv0(&z));

		Self {
			element_len: field.byte_len() + security_len,
			a: field.reduce(&a),
			b: field.reduce(&b),
			z: field.reduce(&z),
			sswu_c1,
			sswu_c2,
			field,
			map,
			dst,
		}
	}

	/// The base field of the curve.
	#[must_use]
	pub const fn field(&self) -> &Field {
		&self.field
	}

	/// The mapping used by [`HashToCurve::map_to_curve()`].
	#[must_use]
	pub const fn map(&self) -> MapToCurve {
		self.map
	}

	/// The domain separation tag.
	#[must_use]
	pub const fn dst(&self) -> &'static [u8] {
		self.dst
	}

	/// Hashes `msg` to `count` field elements.
	///
	/// # Errors
	///
	/// Returns [`Error::IncompatibleGroupParams`] if `count` is `0` or the
	/// requested output is too long for `expand_message_xmd`.
	pub fn hash_to_field(&self, msg: &[u8], count: usize) -> Result<Vec<BigUint>> {
		if count == 0 {
			return Err(Error::IncompatibleGroupParams);
		}

		let len_in_bytes = self
			.element_len
			.checked_mul(count)
			.ok_or(Error::IncompatibleGroupParams)?;
		let dsts = [self.dst];
		let mut expander = ExpandMsgXmd::<Sha512>::expand_message(&[msg], &dsts, len_in_bytes)
			.map_err(|_| Error::IncompatibleGroupParams)?;

		let mut okm = vec![0; self.element_len];

		Ok((0..count)
			.map(|_| {
				expander.fill_bytes(&mut okm);
				self.field.from_bytes(&okm)
			})
			.collect())
	}

	/// Encodes `msg` as a single field element and maps it onto the curve.
	///
	/// # Errors
	///
	/// - [`Error::IncompatibleGroupParams`] if the configuration can't expand
	///   `msg`.
	/// - [`Error::InvalidGroupElement`] if the mapped point is not on the
	///   curve.
	pub fn encode_to_curve(&self, msg: &[u8]) -> Result<Coordinates> {
		let u = self.hash_to_field(msg, 1)?;
		self.map_to_curve(&u)
	}

	/// Maps the field elements `u` onto the curve and checks the result against
	/// the curve equation.
	///
	/// # Errors
	///
	/// - [`Error::IncompatibleGroupParams`] if `u` doesn't hold exactly one
	///   field element.
	/// - [`Error::InvalidGroupElement`] if the mapped point is not on the
	///   curve.
	pub fn map_to_curve(&self, u: &[BigUint]) -> Result<Coordinates> {
		let [u] = u else {
			return Err(Error::IncompatibleGroupParams);
		};

		let point = match self.map {
			MapToCurve::Sswu => self.sswu(u),
			MapToCurve::Elligator2 => self.elligator2(u),
		};

		if self.is_on_curve(&point).into() {
			Ok(point)
		} else {
			Err(Error::InvalidGroupElement)
		}
	}

	/// Returns a truthy [`Choice`] if `point` satisfies the curve equation of
	/// this configuration's curve form.
	#[must_use]
	pub fn is_on_curve(&self, point: &Coordinates) -> Choice {
		let rhs = match self.map {
			MapToCurve::Sswu => self.weierstrass_rhs(&point.x),
			MapToCurve::Elligator2 => self.montgomery_rhs(&point.x),
		};

		self.field.ct_eq(&self.field.square(&point.y), &rhs)
	}

	/// `x³ + A·x + B`.
	fn weierstrass_rhs(&self, x: &BigUint) -> BigUint {
		let f = &self.field;
		let rhs = f.add(&f.square(x), &self.a);
		let rhs = f.mul(&rhs, x);
		f.add(&rhs, &self.b)
	}

	/// `x³ + A·x² + B·x`.
	fn montgomery_rhs(&self, x: &BigUint) -> BigUint {
		let f = &self.field;
		let rhs = f.add(x, &self.a);
		let rhs = f.mul(&rhs, x);
		let rhs = f.add(&rhs, &self.b);
		f.mul(&rhs, x)
	}

	/// Simplified SWU for `y² = x³ + A·x + B` with `A·B ≠ 0`.
	fn sswu(&self, u: &BigUint) -> Coordinates {
		let f = &self.field;

		let tv1 = f.mul(&self.z, &f.square(u));
		let tv2 = f.square(&tv1);
		let x1 = f.inv0(&f.add(&tv1, &tv2));
		let e1 = f.is_zero(&x1);
		let x1 = f.add(&x1, &BigUint::one());
		// `tv1 + tv2 == 0` only happens for `u == 0` or `Z·u² == -1`, then
		// `x1 = B / (Z·A)`.
		let x1 = cmov(&x1, &self.sswu_c2, e1);
		let x1 = f.mul(&x1, &self.sswu_c1);
		let gx1 = self.weierstrass_rhs(&x1);

		// `g(Z·u²·x1) = (Z·u²)³·g(x1)`.
		let x2 = f.mul(&tv1, &x1);
		let tv2 = f.mul(&tv1, &tv2);
		let gx2 = f.mul(&gx1, &tv2);

		let e2 = f.is_square(&gx1);
		let x = cmov(&x2, &x1, e2);
		let y2 = cmov(&gx2, &gx1, e2);
		let y = f.sqrt(&y2);

		let e3 = f.sgn_eq(u, &y);
		let y = cmov(&f.neg(&y), &y, e3);

		Coordinates { x, y }
	}

	/// Elligator 2 for `B·y² = x³ + A·x² + x`.
	fn elligator2(&self, u: &BigUint) -> Coordinates {
		let f = &self.field;

		let tv1 = f.mul(&self.z, &f.square(u));
		let e1 = f.ct_eq(&tv1, &f.neg(&BigUint::one()));
		let tv1 = cmov(&tv1, &BigUint::zero(), e1);
		let x1 = f.inv0(&f.add(&tv1, &BigUint::one()));
		let x1 = f.mul(&f.neg(&self.a), &x1);
		let gx1 = self.montgomery_rhs(&x1);

		// `g(-x1 - A) = Z·u²·g(x1)`.
		let x2 = f.sub(&f.neg(&x1), &self.a);
		let gx2 = f.mul(&tv1, &gx1);

		let e2 = f.is_square(&gx1);
		let x = cmov(&x2, &x1, e2);
		let y2 = cmov(&gx2, &gx1, e2);
		let y = f.sqrt(&y2);

		let e3 = f.sgn_eq(u, &y);
		let y = cmov(&f.neg(&y), &y, e3);

		Coordinates { x, y }
	}
}
