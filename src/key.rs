//! Server key material.

use core::fmt::{self, Debug, Formatter};

use rand_core::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::group::{GroupElement, GroupKind, Scalar};

/// Server key: the scalar `k` together with its public key `k · G`.
pub struct SecretKey {
	/// `k`.
	scalar: Scalar,
	/// [`PublicKey`] of `scalar`.
	public_key: PublicKey,
}

impl SecretKey {
	/// Generates a fresh key of `group`.
	///
	/// # Errors
	///
	/// Returns [`Error::RandomnessFailure`] if `rng` fails.
	pub fn generate<R>(group: GroupKind, rng: &mut R) -> Result<Self>
	where
		R: CryptoRng + RngCore + ?Sized,
	{
		group.random_scalar(rng).and_then(Self::from_scalar)
	}

	/// Derives the public key of `scalar`.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if `scalar · G` is the identity.
	pub fn from_scalar(scalar: Scalar) -> Result<Self> {
		let public_key = PublicKey(scalar.group().generator_mult(&scalar)?);

		Ok(Self { scalar, public_key })
	}

	/// Imports a fixed-length big-endian scalar of `group`.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidScalar`] if `bytes` is not a valid non-zero
	/// scalar.
	pub fn from_bytes(group: GroupKind, bytes: &[u8]) -> Result<Self> {
		group.scalar_from_bytes(bytes).and_then(Self::from_scalar)
	}

	/// Exports the scalar as fixed-length big-endian bytes.
	#[must_use]
	pub fn to_bytes(&self) -> Vec<u8> {
		self.scalar.to_bytes()
	}

	/// The group of this key.
	#[must_use]
	pub const fn group(&self) -> GroupKind {
		self.scalar.group()
	}

	/// The secret scalar `k`.
	pub const fn as_scalar(&self) -> &Scalar {
		&self.scalar
	}

	/// The public key `k · G`.
	pub const fn public_key(&self) -> &PublicKey {
		&self.public_key
	}
}

impl Debug for SecretKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("SecretKey")
			.field("public_key", &self.public_key)
			.finish_non_exhaustive()
	}
}

/// Public key `k · G` of a [`SecretKey`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicKey(GroupElement);

impl PublicKey {
	/// Wraps an already validated element.
	#[must_use]
	pub const fn from_element(element: GroupElement) -> Self {
		Self(element)
	}

	/// The underlying group element.
	pub const fn as_element(&self) -> &GroupElement {
		&self.0
	}

	/// The group of this key.
	#[must_use]
	pub const fn group(&self) -> GroupKind {
		self.0.group()
	}

	/// Deserializes a compressed public key of `group`.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if `bytes` is not a valid point.
	pub fn from_bytes(group: GroupKind, bytes: &[u8]) -> Result<Self> {
		group.deserialize(bytes).map(Self)
	}

	/// Compressed SEC1 encoding.
	#[must_use]
	pub fn to_bytes(&self) -> Vec<u8> {
		self.0.to_bytes()
	}

	/// Parses a hex-encoded compressed public key of `group`.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if `hex` is not valid hex or does
	/// not encode a valid point.
	pub fn from_hex(group: GroupKind, hex: &str) -> Result<Self> {
		let bytes = hex::decode(hex).map_err(|_| Error::InvalidGroupElement)?;
		Self::from_bytes(group, &bytes)
	}

	/// Lowercase hex encoding of [`PublicKey::to_bytes()`].
	#[must_use]
	pub fn to_hex(&self) -> String {
		hex::encode(self.to_bytes())
	}
}
