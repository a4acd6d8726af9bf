//! Mock [`RngCore`] implementation.

use rand_core::{CryptoRng, Error, OsRng, RngCore};

/// A mock RNG replaying fixed bytes. Fails once the given `bytes` are
/// exhausted. Can function like a redirect to [`OsRng`] as well.
#[derive(Debug)]
pub struct MockRng<'bytes>(Option<&'bytes [u8]>);

impl<'bytes> MockRng<'bytes> {
	/// Creates a new [`MockRng`] which redirects to [`OsRng`].
	#[must_use]
	pub const fn new_os_rng() -> Self {
		Self(None)
	}

	/// Creates a new [`MockRng`] which fails once the given `bytes` are
	/// exhausted.
	#[must_use]
	pub const fn new(bytes: &'bytes [u8]) -> Self {
		Self(Some(bytes))
	}

	/// Returns `true` if all given bytes were consumed.
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		matches!(self.0, Some([]))
	}
}

impl RngCore for MockRng<'_> {
	fn next_u32(&mut self) -> u32 {
		let mut bytes = [0; size_of::<u32>()];
		self.fill_bytes(&mut bytes);
		u32::from_be_bytes(bytes)
	}

	fn next_u64(&mut self) -> u64 {
		let mut bytes = [0; size_of::<u64>()];
		self.fill_bytes(&mut bytes);
		u64::from_be_bytes(bytes)
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		if let Err(error) = self.try_fill_bytes(dst) {
			panic!("{error}");
		}
	}

	fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Error> {
		if let Some(bytes) = self.0.as_mut() {
			let (head, tail) = bytes
				.split_at_checked(dst.len())
				.ok_or_else(|| Error::new("mock RNG exhausted"))?;
			dst.copy_from_slice(head);
			*bytes = tail;
			Ok(())
		} else {
			OsRng.try_fill_bytes(dst)
		}
	}
}

impl CryptoRng for MockRng<'_> {}
