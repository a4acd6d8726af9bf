//! [`Ciphersuite`] and other related types.

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::error::{Error, Result};
use crate::group::GroupKind;
use crate::hash_to_curve::MapToCurve;

/// Keyed-hash construction used by the finalize step.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyedHash {
	/// HMAC-SHA512, the extraction step of HKDF-SHA512.
	HkdfSha512,
}

impl KeyedHash {
	/// Output length in bytes.
	#[must_use]
	pub const fn output_len(self) -> usize {
		match self {
			Self::HkdfSha512 => 64,
		}
	}

	/// Computes the MAC of the concatenation of `data` under `key`.
	///
	/// # Errors
	///
	/// Returns [`Error::CiphersuiteUnsupportedFunction`] if `key` is not a
	/// valid key for this construction. HMAC accepts keys of any length.
	pub fn mac(self, key: &[u8], data: &[&[u8]]) -> Result<Vec<u8>> {
		match self {
			Self::HkdfSha512 => {
				let mut mac = Hmac::<Sha512>::new_from_slice(key)
					.map_err(|_| Error::CiphersuiteUnsupportedFunction)?;

				for data in data {
					mac.update(data);
				}

				Ok(mac.finalize().into_bytes().to_vec())
			}
		}
	}
}

impl Display for KeyedHash {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::HkdfSha512 => formatter.write_str("HKDF-SHA512"),
		}
	}
}

/// OPRF ciphersuite: a prime-order group, its curve mapping, the keyed hash of
/// the finalize step and whether evaluations are verifiable.
///
/// Resolved from identifiers of the form
/// `<OPRF|VOPRF>-<GROUP>-HKDF-SHA512-<MAP>-RO`.
///
/// # Examples
///
/// ```
/// # use ecoprf::cipher_suite::Ciphersuite;
/// # use ecoprf::group::GroupKind;
/// let ciphersuite: Ciphersuite = "OPRF-P384-HKDF-SHA512-SSWU-RO".parse()?;
///
/// assert_eq!(ciphersuite.group(), GroupKind::P384);
/// assert!(!ciphersuite.verifiable());
/// # Ok::<(), ecoprf::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Ciphersuite {
	/// `VOPRF` instead of `OPRF`.
	verifiable: bool,
	/// [`GroupKind`].
	group: GroupKind,
	/// [`KeyedHash`].
	hash: KeyedHash,
}

impl Ciphersuite {
	/// Every supported ciphersuite identifier.
	pub const SUPPORTED: [&'static str; 4] = [
		"OPRF-P384-HKDF-SHA512-SSWU-RO",
		"OPRF-P521-HKDF-SHA512-SSWU-RO",
		"VOPRF-P384-HKDF-SHA512-SSWU-RO",
		"VOPRF-P521-HKDF-SHA512-SSWU-RO",
	];

	/// Resolves a ciphersuite from its identifier.
	///
	/// # Errors
	///
	/// - [`Error::UnsupportedGroup`] if the group is unknown.
	/// - [`Error::UnsupportedCiphersuite`] if any other part of `name` is not
	///   supported.
	pub fn from_name(name: &str) -> Result<Self> {
		let parts: Vec<&str> = name.split('-').collect();
		let [prefix, group, kdf, hash, map, mode] = parts.as_slice() else {
			return Err(Error::UnsupportedCiphersuite);
		};

		let verifiable = match *prefix {
			"OPRF" => false,
			"VOPRF" => true,
			_ => return Err(Error::UnsupportedCiphersuite),
		};
		let group = GroupKind::from_name(group)?;
		let hash = match (*kdf, *hash) {
			("HKDF", "SHA512") => KeyedHash::HkdfSha512,
			_ => return Err(Error::UnsupportedCiphersuite),
		};

		if *map != group.map().name() || *mode != "RO" {
			return Err(Error::UnsupportedCiphersuite);
		}

		Ok(Self {
			verifiable,
			group,
			hash,
		})
	}

	/// The canonical identifier.
	#[must_use]
	pub fn name(&self) -> String {
		self.to_string()
	}

	/// `true` for `VOPRF` ciphersuites.
	#[must_use]
	pub const fn verifiable(&self) -> bool {
		self.verifiable
	}

	/// The prime-order group.
	#[must_use]
	pub const fn group(&self) -> GroupKind {
		self.group
	}

	/// The keyed hash used by [`Client::finalize()`](crate::Client::finalize).
	#[must_use]
	pub const fn hash(&self) -> KeyedHash {
		self.hash
	}

	/// The curve mapping of [`Ciphersuite::group()`].
	#[must_use]
	pub fn map(&self) -> MapToCurve {
		self.group.map()
	}
}

impl Display for Ciphersuite {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(
			formatter,
			"{}-{}-{}-{}-RO",
			if self.verifiable { "VOPRF" } else { "OPRF" },
			self.group,
			self.hash,
			self.map().name(),
		)
	}
}

impl FromStr for Ciphersuite {
	type Err = Error;

	fn from_str(name: &str) -> Result<Self> {
		Self::from_name(name)
	}
}
