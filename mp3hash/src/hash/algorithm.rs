//! The built in hash algorithms
//!
//! This is a closed set, resolved by name at the edges of the program. Nothing in the tag detection or
//! range hashing depends on it, any [`HashAccumulator`] works just as well.

use super::HashAccumulator;

use std::fmt::{Display, Formatter};

use md5::Md5;
use sha1::{Digest, Sha1};
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// A supported hash algorithm
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// MD5
	Md5,
	/// SHA-1, the default
	Sha1,
	/// SHA-224
	Sha224,
	/// SHA-256
	Sha256,
	/// SHA-384
	Sha384,
	/// SHA-512
	Sha512,
	/// BLAKE3
	Blake3,
}

impl Algorithm {
	/// Every available algorithm
	pub const ALL: [Self; 7] = [
		Self::Md5,
		Self::Sha1,
		Self::Sha224,
		Self::Sha256,
		Self::Sha384,
		Self::Sha512,
		Self::Blake3,
	];

	/// Find an algorithm by name (case-insensitive)
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::hash::algorithm::Algorithm;
	///
	/// assert_eq!(Algorithm::from_name("sha1"), Some(Algorithm::Sha1));
	/// assert_eq!(Algorithm::from_name("SHA256"), Some(Algorithm::Sha256));
	/// assert_eq!(Algorithm::from_name("crc32"), None);
	/// ```
	pub fn from_name(name: &str) -> Option<Self> {
		let name = name.trim();
		Self::ALL
			.into_iter()
			.find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
	}

	/// The name used to select the algorithm
	pub fn name(self) -> &'static str {
		match self {
			Self::Md5 => "md5",
			Self::Sha1 => "sha1",
			Self::Sha224 => "sha224",
			Self::Sha256 => "sha256",
			Self::Sha384 => "sha384",
			Self::Sha512 => "sha512",
			Self::Blake3 => "blake3",
		}
	}

	/// The length of the digest in hex characters
	pub fn hex_len(self) -> usize {
		match self {
			Self::Md5 => 32,
			Self::Sha1 => 40,
			Self::Sha224 => 56,
			Self::Sha256 | Self::Blake3 => 64,
			Self::Sha384 => 96,
			Self::Sha512 => 128,
		}
	}
}

impl Display for Algorithm {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// A [`HashAccumulator`] for any of the built in [`Algorithm`]s
pub enum StreamingHasher {
	/// MD5
	Md5(Md5),
	/// SHA-1
	Sha1(Sha1),
	/// SHA-224
	Sha224(Sha224),
	/// SHA-256
	Sha256(Sha256),
	/// SHA-384
	Sha384(Sha384),
	/// SHA-512
	Sha512(Sha512),
	/// BLAKE3
	Blake3(Box<blake3::Hasher>),
}

impl StreamingHasher {
	/// Create a new hasher for `algorithm`
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::hash::HashAccumulator;
	/// use mp3hash::hash::algorithm::{Algorithm, StreamingHasher};
	///
	/// let mut hasher = StreamingHasher::new(Algorithm::Sha1);
	/// hasher.update(b"abc");
	///
	/// assert_eq!(
	/// 	hasher.hex_digest(),
	/// 	"a9993e364706816aba3e25717850c26c9cd0d89d"
	/// );
	/// ```
	pub fn new(algorithm: Algorithm) -> Self {
		match algorithm {
			Algorithm::Md5 => Self::Md5(Md5::new()),
			Algorithm::Sha1 => Self::Sha1(Sha1::new()),
			Algorithm::Sha224 => Self::Sha224(Sha224::new()),
			Algorithm::Sha256 => Self::Sha256(Sha256::new()),
			Algorithm::Sha384 => Self::Sha384(Sha384::new()),
			Algorithm::Sha512 => Self::Sha512(Sha512::new()),
			Algorithm::Blake3 => Self::Blake3(Box::new(blake3::Hasher::new())),
		}
	}
}

impl HashAccumulator for StreamingHasher {
	fn update(&mut self, data: &[u8]) {
		match self {
			Self::Md5(h) => Digest::update(h, data),
			Self::Sha1(h) => Digest::update(h, data),
			Self::Sha224(h) => Digest::update(h, data),
			Self::Sha256(h) => Digest::update(h, data),
			Self::Sha384(h) => Digest::update(h, data),
			Self::Sha512(h) => Digest::update(h, data),
			Self::Blake3(h) => {
				h.update(data);
			},
		}
	}

	fn hex_digest(self) -> String {
		match self {
			Self::Md5(h) => hex::encode(h.finalize()),
			Self::Sha1(h) => hex::encode(h.finalize()),
			Self::Sha224(h) => hex::encode(h.finalize()),
			Self::Sha256(h) => hex::encode(h.finalize()),
			Self::Sha384(h) => hex::encode(h.finalize()),
			Self::Sha512(h) => hex::encode(h.finalize()),
			Self::Blake3(h) => h.finalize().to_hex().to_string(),
		}
	}
}
