//! Oblivious pseudo-random function over the NIST P-384 and P-521
//! prime-order groups.
//!
//! A [`Client`] learns `F(k, x)` for its input `x` from a [`Server`] holding
//! the secret key `k`, without the server learning `x` and without the client
//! learning `k`. Ciphersuites are resolved from identifiers such as
//! `OPRF-P384-HKDF-SHA512-SSWU-RO`.
//!
//! # Examples
//!
//! ```
//! # use ecoprf::{Client, Server};
//! # use rand_core::OsRng;
//! let name = "OPRF-P384-HKDF-SHA512-SSWU-RO";
//! let server = Server::setup(name, &mut OsRng)?;
//! let client = Client::setup(name)?;
//!
//! let blinded = client.blind(&mut OsRng, b"input")?;
//! let evaluated = server.eval(server.secret_key(), &blinded.element)?;
//! let unblinded = client.unblind(&evaluated, &blinded.blind)?;
//! let output = client.finalize(&unblinded, b"input", b"aux")?;
//!
//! assert_eq!(output.len(), 64);
//! # Ok::<(), ecoprf::Error>(())
//! ```

#![expect(clippy::cargo_common_metadata, reason = "unpublished")]

pub mod cipher_suite;
pub mod error;
pub mod field;
pub mod group;
pub mod hash_to_curve;
pub mod key;
pub mod oprf;

pub use cipher_suite::Ciphersuite;
pub use error::{Error, Result};
pub use group::{GroupElement, GroupKind, Scalar};
pub use key::{PublicKey, SecretKey};
pub use oprf::{BlindResult, Client, Participant, Role, Server};
