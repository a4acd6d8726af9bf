//! Arithmetic in prime base fields `GF(p)`.
//!
//! All values are arbitrary-precision integers reduced modulo `p`. Choosing
//! between two candidates never branches on the candidates themselves:
//! [`cmov()`] blends both inputs with multiply-and-add masks driven by a
//! [`Choice`], and the square test and square root are plain
//! exponentiations with public exponents.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use subtle::{Choice, ConstantTimeEq};

/// Prime base field `GF(p)` with `p ≡ 3 (mod 4)`.
///
/// The exponents used by [`Field::inv0()`], [`Field::is_square()`] and
/// [`Field::sqrt()`] are derived once on construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
	/// `p`.
	p: BigUint,
	/// Length of a big-endian encoded field element.
	byte_len: usize,
	/// `p - 2`.
	inv_exp: BigUint,
	/// `(p - 1) / 2`.
	is_square_exp: BigUint,
	/// `(p + 1) / 4`.
	sqrt_exp: BigUint,
}

impl Field {
	/// Creates the field of integers modulo `p`.
	///
	/// `p` must be a prime congruent to 3 modulo 4, otherwise
	/// [`Field::sqrt()`] does not compute square roots.
	#[must_use]
	pub fn new(p: BigUint) -> Self {
		let one = BigUint::one();
		let two = BigUint::from(2_u8);
		let four = BigUint::from(4_u8);

		debug_assert!(
			&p % &four == BigUint::from(3_u8),
			"square roots are only computed for `p ≡ 3 (mod 4)`"
		);

		Self {
			byte_len: p.to_bytes_be().len(),
			inv_exp: &p - &two,
			is_square_exp: (&p - &one) / &two,
			sqrt_exp: (&p + &one) / &four,
			p,
		}
	}

	/// The modulus `p`.
	#[must_use]
	pub const fn modulus(&self) -> &BigUint {
		&self.p
	}

	/// Length in bytes of [`Field::to_bytes()`].
	#[must_use]
	pub const fn byte_len(&self) -> usize {
		self.byte_len
	}

	/// Interprets `bytes` as a big-endian integer and reduces it modulo `p`.
	#[must_use]
	pub fn from_bytes(&self, bytes: &[u8]) -> BigUint {
		BigUint::from_bytes_be(bytes) % &self.p
	}

	/// Fixed-length big-endian encoding of `a mod p`.
	#[must_use]
	pub fn to_bytes(&self, a: &BigUint) -> Vec<u8> {
		let bytes = self.reduce(a).to_bytes_be();
		let mut out = vec![0; self.byte_len - bytes.len()];
		out.extend_from_slice(&bytes);
		out
	}

	/// `a mod p`.
	#[must_use]
	pub fn reduce(&self, a: &BigUint) -> BigUint {
		a % &self.p
	}

	/// `a + b mod p`.
	#[must_use]
	pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
		(a + b) % &self.p
	}

	/// `a - b mod p`.
	#[must_use]
	pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
		(a + &self.p - self.reduce(b)) % &self.p
	}

	/// `-a mod p`.
	#[must_use]
	pub fn neg(&self, a: &BigUint) -> BigUint {
		(&self.p - self.reduce(a)) % &self.p
	}

	/// `a · b mod p`.
	#[must_use]
	pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
		(a * b) % &self.p
	}

	/// `a² mod p`.
	#[must_use]
	pub fn square(&self, a: &BigUint) -> BigUint {
		self.mul(a, a)
	}

	/// `a^exp mod p`.
	#[must_use]
	pub fn pow(&self, a: &BigUint, exp: &BigUint) -> BigUint {
		a.modpow(exp, &self.p)
	}

	/// Multiplicative inverse of `a`, mapping `0` to `0`.
	///
	/// Computed as `a^(p - 2)`, so there is no separate zero case.
	#[must_use]
	pub fn inv0(&self, a: &BigUint) -> BigUint {
		self.pow(a, &self.inv_exp)
	}

	/// Returns `a / b`, or `0` if `b` is `0`.
	#[must_use]
	pub fn div(&self, a: &BigUint, b: &BigUint) -> BigUint {
		self.mul(a, &self.inv0(b))
	}

	/// Compares the canonical encodings of `a` and `b` in constant time.
	#[must_use]
	pub fn ct_eq(&self, a: &BigUint, b: &BigUint) -> Choice {
		self.to_bytes(a).ct_eq(&self.to_bytes(b))
	}

	/// Returns a truthy [`Choice`] if `a` is `0 mod p`.
	#[must_use]
	pub fn is_zero(&self, a: &BigUint) -> Choice {
		self.ct_eq(a, &BigUint::zero())
	}

	/// Returns a truthy [`Choice`] if `a` is a square in `GF(p)`, including
	/// `0`.
	///
	/// Euler's criterion: `a^((p - 1) / 2)` is `1` for non-zero squares and
	/// `0` for `0`.
	#[must_use]
	pub fn is_square(&self, a: &BigUint) -> Choice {
		let legendre = self.pow(a, &self.is_square_exp);

		self.ct_eq(&legendre, &BigUint::one()) | self.is_zero(&legendre)
	}

	/// A square root of `a` as `a^((p + 1) / 4)`. The result is meaningless if
	/// `a` is not a square.
	#[must_use]
	pub fn sqrt(&self, a: &BigUint) -> BigUint {
		self.pow(&self.reduce(a), &self.sqrt_exp)
	}

	/// `sgn0(a)`: the parity of `a mod p`.
	#[must_use]
	pub fn sgn0(&self, a: &BigUint) -> Choice {
		let bytes = self.reduce(a).to_bytes_le();

		Choice::from(bytes.first().map_or(0, |byte| byte & 1))
	}

	/// Returns a truthy [`Choice`] if `a` and `b` have the same [`sgn0()`](Field::sgn0).
	#[must_use]
	pub fn sgn_eq(&self, a: &BigUint, b: &BigUint) -> Choice {
		!(self.sgn0(a) ^ self.sgn0(b))
	}
}

/// `CMOV(a, b, c)`: returns `b` if `c` is truthy, `a` otherwise.
///
/// Computed as `a * (1 - c) + b * c` so both inputs always take part.
#[must_use]
pub fn cmov(a: &BigUint, b: &BigUint, c: Choice) -> BigUint {
	let take_b = BigUint::from(c.unwrap_u8());
	let take_a = BigUint::from((!c).unwrap_u8());

	a * take_a + b * take_b
}
