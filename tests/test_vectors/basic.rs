//! Fixed test vectors replayed through the deterministic hooks.

use ecoprf::{Ciphersuite, Client, GroupKind, PublicKey, SecretKey, Server};
use ecoprf_test::{MockRng, test_ciphersuites};

use super::parse::TEST_VECTORS;

test_ciphersuites!(test);

/// Tests test vectors.
fn test(group: GroupKind) {
	let mut tests = 0;

	for test_vector in TEST_VECTORS.iter().filter(|test_vector| {
		test_vector
			.identifier
			.parse::<Ciphersuite>()
			.unwrap()
			.group() == group
	}) {
		let name = test_vector.identifier.as_str();

		// Keys.
		let secret_key = SecretKey::from_bytes(group, &test_vector.secret_key).unwrap();
		assert_eq!(secret_key.to_bytes(), test_vector.secret_key);
		assert_eq!(secret_key.public_key().to_bytes(), test_vector.public_key);

		let server = Server::from_secret_key(name, secret_key).unwrap();
		let mut client = Client::setup(name).unwrap();
		client
			.set_public_key(PublicKey::from_bytes(group, &test_vector.public_key).unwrap())
			.unwrap();
		assert_eq!(client.public_key(), Some(server.public_key()));

		for vector in &test_vector.vectors {
			tests += 1;

			// Blind with injected scalar.
			let blind = group.scalar_from_bytes(&vector.blind).unwrap();
			let blinded = client
				.blind_with_scalar(&vector.input, blind.clone())
				.unwrap();
			assert_eq!(blinded.element.to_bytes(), vector.blinded_element);
			assert_eq!(blinded.blind, blind);

			// Blind with replayed randomness.
			let mut rng = MockRng::new(&vector.blind);
			let replayed = client.blind(&mut rng, &vector.input).unwrap();
			assert!(rng.is_empty());
			assert_eq!(replayed.element, blinded.element);

			// Evaluate the transported element.
			let transported = group.deserialize(&vector.blinded_element).unwrap();
			let evaluated = server.eval(server.secret_key(), &transported).unwrap();
			assert_eq!(evaluated.to_bytes(), vector.evaluation_element);

			// Unblind.
			let evaluated = group.deserialize(&vector.evaluation_element).unwrap();
			let unblinded = client.unblind(&evaluated, &blinded.blind).unwrap();
			assert_eq!(unblinded.to_bytes(), vector.unblinded_element);

			// Finalize.
			let output = client
				.finalize(&unblinded, &vector.input, &vector.aux)
				.unwrap();
			assert_eq!(output, vector.output);
		}
	}

	assert_ne!(tests, 0);
}
