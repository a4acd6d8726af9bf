//! Error kinds surfaced by every fallible operation.

use core::fmt::{self, Display, Formatter};
use core::{error, result};

use crate::oprf::Role;

/// [`Result`](result::Result) with [`Error`] as the default error.
pub type Result<T, E = Error> = result::Result<T, E>;

/// Errors of this crate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(clippy::error_impl_error, reason = "only one error type")]
pub enum Error {
	/// A point is off the curve, the identity, of another group or
	/// malformed.
	InvalidGroupElement,
	/// A scalar is zero, out of range, of another group or malformed.
	InvalidScalar,
	/// The ciphersuite names an unknown group.
	UnsupportedGroup,
	/// The ciphersuite identifier is malformed or names an unsupported
	/// component.
	UnsupportedCiphersuite,
	/// A curve mapping received the wrong number of field elements.
	IncompatibleGroupParams,
	/// The operation is not available for the ciphersuite.
	CiphersuiteUnsupportedFunction,
	/// The operation does not exist for the given [`Role`].
	RoleUnimplemented(Role),
	/// The random number generator failed.
	RandomnessFailure,
}

impl Display for Error {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidGroupElement => {
				formatter.write_str("the group element is not a valid point of the prime-order group")
			}
			Self::InvalidScalar => formatter.write_str("the scalar is zero or not smaller than the group order"),
			Self::UnsupportedGroup => formatter.write_str("the requested prime-order group is not supported"),
			Self::UnsupportedCiphersuite => formatter.write_str("the ciphersuite identifier is not supported"),
			Self::IncompatibleGroupParams => {
				formatter.write_str("the curve mapping received parameters of an unsupported shape")
			}
			Self::CiphersuiteUnsupportedFunction => {
				formatter.write_str("the chosen function is not yet supported for the chosen ciphersuite")
			}
			Self::RoleUnimplemented(role) => write!(formatter, "the function is unimplemented for the {role}"),
			Self::RandomnessFailure => formatter.write_str("the random number generator failed"),
		}
	}
}

impl error::Error for Error {}

impl From<rand_core::Error> for Error {
	fn from(_: rand_core::Error) -> Self {
		Self::RandomnessFailure
	}
}
