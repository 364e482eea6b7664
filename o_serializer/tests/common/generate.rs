use std::ops;

use rand::Rng;
use rand_pcg::Lcg64Xsh32;

use super::{Profile, Tag, User};

pub trait Generate {
	fn generate<R: Rng>(rng: &mut R) -> Self;
}

impl<T: Generate> Generate for Option<T> {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		if rng.gen_bool(0.5) {
			Some(T::generate(rng))
		} else {
			None
		}
	}
}

impl Generate for Tag {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const NAMES: [&str; 8] = [
			"rust", "python", "json", "orm", "api", "cache", "graph", "serde",
		];
		Self {
			name: NAMES[rng.gen_range(0..NAMES.len())].to_string(),
		}
	}
}

impl Generate for Profile {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const FIRST_NAMES: [&str; 5] = ["Ada", "Grace", "Alan", "Edsger", "Barbara"];
		const LAST_NAMES: [&str; 5] = ["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov"];
		Self {
			id: <Option<()> as Generate>::generate(rng).map(|_| rng.gen()),
			first_name: FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())].to_string(),
			last_name: <Option<()> as Generate>::generate(rng)
				.map(|_| LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())].to_string()),
		}
	}
}

impl Generate for User {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		let n: u32 = rng.gen();
		Self {
			id: <Option<()> as Generate>::generate(rng).map(|_| format!("user-{n}")),
			email: format!("user{n}@example.com"),
			password: <Option<()> as Generate>::generate(rng).map(|_| "secret".to_string()),
			profile: Generate::generate(rng),
			tags: generate_vec(rng, 0..6),
		}
	}
}

impl Generate for () {
	fn generate<R: Rng>(_: &mut R) -> Self {}
}

fn generate_vec<R: Rng, T: Generate>(rng: &mut R, range: ops::Range<usize>) -> Vec<T> {
	let len = rng.gen_range(range);
	let mut result = Vec::with_capacity(len);
	for _ in 0..len {
		result.push(T::generate(rng));
	}
	result
}

/// Deterministic pseudo-random users.
pub fn generate_users(count: usize) -> Vec<User> {
	const STATE: u64 = 3141592653;
	const STREAM: u64 = 5897932384;

	let mut rng = Lcg64Xsh32::new(STATE, STREAM);
	(0..count).map(|_| User::generate(&mut rng)).collect()
}
