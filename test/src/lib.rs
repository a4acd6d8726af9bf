//! Test utilities.

#![expect(clippy::cargo_common_metadata, reason = "tests")]

mod rng;

use ecoprf::GroupKind;

pub use self::rng::MockRng;

/// Generates `#[test]` functions pre-fixed with the given `name` for all
/// supported [`GroupKind`]s. With a mode, passes the matching ciphersuite
/// identifier instead.
#[macro_export]
macro_rules! test_ciphersuites {
	($name:ident) => {
		::paste::paste! {
			#[test]
			fn [<$name _p384>]() {
				$name(::ecoprf::GroupKind::P384);
			}

			#[test]
			fn [<$name _p521>]() {
				$name(::ecoprf::GroupKind::P521);
			}
		}
	};
	($name:ident, Oprf) => {
		$crate::test_ciphersuites!(mode: $name, false, oprf);
	};
	($name:ident, Voprf) => {
		$crate::test_ciphersuites!(mode: $name, true, voprf);
	};
	(mode: $name:ident, $verifiable:literal, $mode_prefix:ident) => {
		::paste::paste! {
			#[test]
			fn [<$name _ $mode_prefix _p384>]() {
				$name(&$crate::ciphersuite(::ecoprf::GroupKind::P384, $verifiable));
			}

			#[test]
			fn [<$name _ $mode_prefix _p521>]() {
				$name(&$crate::ciphersuite(::ecoprf::GroupKind::P521, $verifiable));
			}
		}
	};
}

/// Identifier of the ciphersuite over `group`.
#[must_use]
pub fn ciphersuite(group: GroupKind, verifiable: bool) -> String {
	format!(
		"{}-{group}-HKDF-SHA512-{}-RO",
		if verifiable { "VOPRF" } else { "OPRF" },
		group.map().name(),
	)
}

/// Default `input`.
pub const INPUT: &[u8] = b"test input";
/// Default `aux`.
pub const AUX: &[u8] = b"test aux";
