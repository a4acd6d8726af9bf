//! Base OPRF protocol between a [`Server`] holding a secret key and a
//! [`Client`] holding the input.
//!
//! ```text
//! Client                                  Server
//! blind(x) -> (M, r)
//!                      M ------>
//!                                         Z = eval(sk, M)
//!                      <------ Z
//! N = unblind(Z, r)
//! y = finalize(N, x, aux)
//! ```
//!
//! Both roles are stateless between calls apart from their keys, so a single
//! [`Server`] can answer any number of concurrent requests.

use core::fmt::{self, Display, Formatter};

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::cipher_suite::Ciphersuite;
use crate::error::{Error, Result};
use crate::group::{GroupElement, Scalar};
use crate::key::{PublicKey, SecretKey};

/// Label prepended to the input when deriving the finalize key.
const DERIVE_OUTPUT_LABEL: &[u8] = b"oprf_derive_output";

/// The two protocol roles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Role {
	/// [`Server`].
	Server,
	/// [`Client`].
	Client,
}

impl Display for Role {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Server => formatter.write_str("server"),
			Self::Client => formatter.write_str("client"),
		}
	}
}

/// Returned from [`Client::blind()`].
#[derive(Debug)]
pub struct BlindResult {
	/// `M`, to be sent to the server.
	pub element: GroupElement,
	/// `r`, to be kept for [`Client::unblind()`] and never sent.
	pub blind: Scalar,
}

/// OPRF server.
#[derive(Debug)]
pub struct Server {
	/// [`Ciphersuite`].
	ciphersuite: Ciphersuite,
	/// [`SecretKey`].
	secret_key: SecretKey,
}

impl Server {
	/// Resolves the ciphersuite `name` and generates a fresh [`SecretKey`].
	///
	/// # Errors
	///
	/// - [`Error::UnsupportedGroup`] or [`Error::UnsupportedCiphersuite`] if
	///   `name` is not a supported ciphersuite.
	/// - [`Error::RandomnessFailure`] if `rng` fails.
	pub fn setup<R>(name: &str, rng: &mut R) -> Result<Self>
	where
		R: CryptoRng + RngCore + ?Sized,
	{
		let ciphersuite: Ciphersuite = name.parse()?;
		let secret_key = SecretKey::generate(ciphersuite.group(), rng)?;

		Ok(Self {
			ciphersuite,
			secret_key,
		})
	}

	/// Resolves the ciphersuite `name` and uses the given `secret_key`.
	///
	/// # Errors
	///
	/// - [`Error::UnsupportedGroup`] or [`Error::UnsupportedCiphersuite`] if
	///   `name` is not a supported ciphersuite.
	/// - [`Error::InvalidScalar`] if `secret_key` belongs to another group.
	pub fn from_secret_key(name: &str, secret_key: SecretKey) -> Result<Self> {
		let ciphersuite: Ciphersuite = name.parse()?;

		if secret_key.group() != ciphersuite.group() {
			return Err(Error::InvalidScalar);
		}

		Ok(Self {
			ciphersuite,
			secret_key,
		})
	}

	/// The resolved ciphersuite.
	pub const fn ciphersuite(&self) -> &Ciphersuite {
		&self.ciphersuite
	}

	/// The server's secret key.
	pub const fn secret_key(&self) -> &SecretKey {
		&self.secret_key
	}

	/// The public key of [`Server::secret_key()`].
	pub const fn public_key(&self) -> &PublicKey {
		self.secret_key.public_key()
	}

	/// Evaluates the blinded element: `Z = k · M`.
	///
	/// # Errors
	///
	/// - [`Error::CiphersuiteUnsupportedFunction`] if the ciphersuite is
	///   verifiable.
	/// - [`Error::InvalidGroupElement`] if `element` belongs to another group.
	/// - [`Error::InvalidScalar`] if `secret_key` belongs to another group.
	pub fn eval(&self, secret_key: &SecretKey, element: &GroupElement) -> Result<GroupElement> {
		if self.ciphersuite.verifiable() {
			return Err(Error::CiphersuiteUnsupportedFunction);
		}

		if element.group() != self.ciphersuite.group() {
			return Err(Error::InvalidGroupElement);
		}

		element.scalar_mult(secret_key.as_scalar())
	}
}

/// OPRF client.
#[derive(Debug)]
pub struct Client {
	/// [`Ciphersuite`].
	ciphersuite: Ciphersuite,
	/// The server's [`PublicKey`], if known.
	public_key: Option<PublicKey>,
}

impl Client {
	/// Resolves the ciphersuite `name`. The client holds no key material.
	///
	/// # Errors
	///
	/// [`Error::UnsupportedGroup`] or [`Error::UnsupportedCiphersuite`] if
	/// `name` is not a supported ciphersuite.
	pub fn setup(name: &str) -> Result<Self> {
		Ok(Self {
			ciphersuite: name.parse()?,
			public_key: None,
		})
	}

	/// The resolved ciphersuite.
	pub const fn ciphersuite(&self) -> &Ciphersuite {
		&self.ciphersuite
	}

	/// The server's public key, if one was set.
	pub const fn public_key(&self) -> Option<&PublicKey> {
		self.public_key.as_ref()
	}

	/// Sets the server's public key.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidGroupElement`] if `public_key` belongs to
	/// another group.
	pub fn set_public_key(&mut self, public_key: PublicKey) -> Result<()> {
		if public_key.group() != self.ciphersuite.group() {
			return Err(Error::InvalidGroupElement);
		}

		self.public_key = Some(public_key);
		Ok(())
	}

	/// Blinds `input` with a fresh random blind.
	///
	/// # Errors
	///
	/// - [`Error::RandomnessFailure`] if `rng` fails.
	/// - [`Error::InvalidGroupElement`] if `input` could not be mapped onto the
	///   group.
	pub fn blind<R>(&self, rng: &mut R, input: &[u8]) -> Result<BlindResult>
	where
		R: CryptoRng + RngCore + ?Sized,
	{
		let blind = self.ciphersuite.group().random_scalar(rng)?;
		self.blind_with_scalar(input, blind)
	}

	/// Blinds `input` with the given `blind`: `M = r · H(x)`.
	///
	/// # Errors
	///
	/// - [`Error::InvalidScalar`] if `blind` belongs to another group.
	/// - [`Error::InvalidGroupElement`] if `input` could not be mapped onto the
	///   group.
	pub fn blind_with_scalar(&self, input: &[u8], blind: Scalar) -> Result<BlindResult> {
		let group = self.ciphersuite.group();

		if blind.group() != group {
			return Err(Error::InvalidScalar);
		}

		let element = group.encode_to_group(input)?.scalar_mult(&blind)?;

		Ok(BlindResult { element, blind })
	}

	/// Removes the blind from the server's evaluation: `N = r⁻¹ · Z`.
	///
	/// # Errors
	///
	/// - [`Error::CiphersuiteUnsupportedFunction`] if the ciphersuite is
	///   verifiable.
	/// - [`Error::InvalidGroupElement`] if `element` belongs to another group.
	/// - [`Error::InvalidScalar`] if `blind` belongs to another group.
	pub fn unblind(&self, element: &GroupElement, blind: &Scalar) -> Result<GroupElement> {
		if self.ciphersuite.verifiable() {
			return Err(Error::CiphersuiteUnsupportedFunction);
		}

		if element.group() != self.ciphersuite.group() {
			return Err(Error::InvalidGroupElement);
		}

		element.scalar_mult(&blind.invert())
	}

	/// Derives the output bound to `input` and `aux`:
	///
	/// ```text
	/// dk = KeyedHash(Serialize(N), "oprf_derive_output" || x)
	/// y  = KeyedHash(dk, aux)
	/// ```
	///
	/// # Errors
	///
	/// - [`Error::CiphersuiteUnsupportedFunction`] if the ciphersuite is
	///   verifiable.
	/// - [`Error::InvalidGroupElement`] if `element` belongs to another group.
	pub fn finalize(&self, element: &GroupElement, input: &[u8], aux: &[u8]) -> Result<Vec<u8>> {
		if self.ciphersuite.verifiable() {
			return Err(Error::CiphersuiteUnsupportedFunction);
		}

		if element.group() != self.ciphersuite.group() {
			return Err(Error::InvalidGroupElement);
		}

		let hash = self.ciphersuite.hash();
		let mut derived_key = hash.mac(&element.to_bytes(), &[DERIVE_OUTPUT_LABEL, input])?;
		let output = hash.mac(&derived_key, &[aux]);
		derived_key.zeroize();

		output
	}
}

/// Either protocol role behind one interface. Operations of the other role
/// fail with [`Error::RoleUnimplemented`].
#[derive(Debug)]
pub enum Participant {
	/// [`Server`].
	Server(Server),
	/// [`Client`].
	Client(Client),
}

impl Participant {
	/// The role of the wrapped participant.
	#[must_use]
	pub const fn role(&self) -> Role {
		match self {
			Self::Server(_) => Role::Server,
			Self::Client(_) => Role::Client,
		}
	}

	/// The resolved ciphersuite.
	pub const fn ciphersuite(&self) -> &Ciphersuite {
		match self {
			Self::Server(server) => server.ciphersuite(),
			Self::Client(client) => client.ciphersuite(),
		}
	}

	/// See [`Client::blind()`].
	///
	/// # Errors
	///
	/// Returns [`Error::RoleUnimplemented`] for a server, otherwise see
	/// [`Client::blind()`].
	pub fn blind<R>(&self, rng: &mut R, input: &[u8]) -> Result<BlindResult>
	where
		R: CryptoRng + RngCore + ?Sized,
	{
		match self {
			Self::Client(client) => client.blind(rng, input),
			Self::Server(_) => Err(Error::RoleUnimplemented(Role::Server)),
		}
	}

	/// See [`Server::eval()`].
	///
	/// # Errors
	///
	/// Returns [`Error::RoleUnimplemented`] for a client, otherwise see
	/// [`Server::eval()`].
	pub fn eval(&self, secret_key: &SecretKey, element: &GroupElement) -> Result<GroupElement> {
		match self {
			Self::Server(server) => server.eval(secret_key, element),
			Self::Client(_) => Err(Error::RoleUnimplemented(Role::Client)),
		}
	}

	/// See [`Client::unblind()`].
	///
	/// # Errors
	///
	/// Returns [`Error::RoleUnimplemented`] for a server, otherwise see
	/// [`Client::unblind()`].
	pub fn unblind(&self, element: &GroupElement, blind: &Scalar) -> Result<GroupElement> {
		match self {
			Self::Client(client) => client.unblind(element, blind),
			Self::Server(_) => Err(Error::RoleUnimplemented(Role::Server)),
		}
	}

	/// See [`Client::finalize()`].
	///
	/// # Errors
	///
	/// Returns [`Error::RoleUnimplemented`] for a server, otherwise see
	/// [`Client::finalize()`].
	pub fn finalize(&self, element: &GroupElement, input: &[u8], aux: &[u8]) -> Result<Vec<u8>> {
		match self {
			Self::Client(client) => client.finalize(element, input, aux),
			Self::Server(_) => Err(Error::RoleUnimplemented(Role::Server)),
		}
	}
}

impl From<Server> for Participant {
	fn from(server: Server) -> Self {
		Self::Server(server)
	}
}

impl From<Client> for Participant {
	fn from(client: Client) -> Self {
		Self::Client(client)
	}
}
