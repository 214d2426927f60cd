use crate::config::ParsingMode;
use crate::error::Result;
use crate::hash::algorithm::Algorithm;
use crate::macros::err;

/// Options to control how mp3hash locates and hashes the music of a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct HashOptions {
	pub(crate) algorithm: Algorithm,
	pub(crate) max_bytes: Option<u64>,
	pub(crate) block_size: usize,
	pub(crate) parsing_mode: ParsingMode,
}

impl Default for HashOptions {
	/// The default implementation for `HashOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// HashOptions {
	/// 	algorithm: Algorithm::Sha1,
	/// 	max_bytes: None,
	/// 	block_size: 512 * 1024,
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl HashOptions {
	/// Default hash algorithm
	pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Sha1;

	/// Default number of bytes fed to the hasher at once
	pub const DEFAULT_BLOCK_SIZE: usize = 1 << 19;

	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `HashOptions`, alias for `Default` implementation
	///
	/// See also: [`HashOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::config::HashOptions;
	///
	/// let options = HashOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			algorithm: Self::DEFAULT_ALGORITHM,
			max_bytes: None,
			block_size: Self::DEFAULT_BLOCK_SIZE,
			parsing_mode: Self::DEFAULT_PARSING_MODE,
		}
	}

	/// The algorithm used by [`mp3hash`](crate::mp3hash)
	///
	/// This has no effect on [`compute_digest`](crate::compute_digest), which is given its hasher directly.
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::config::HashOptions;
	/// use mp3hash::hash::algorithm::Algorithm;
	///
	/// let options = HashOptions::new().algorithm(Algorithm::Sha256);
	/// ```
	pub fn algorithm(&mut self, algorithm: Algorithm) -> Self {
		self.algorithm = algorithm;
		*self
	}

	/// The maximum number of music bytes to hash, counted from the start of the music
	///
	/// `Some(0)` is rejected when hashing with
	/// [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument).
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::config::HashOptions;
	///
	/// // The first megabyte of music is enough to tell my files apart
	/// let options = HashOptions::new().max_bytes(Some(1024 * 1024));
	/// ```
	pub fn max_bytes(&mut self, max_bytes: Option<u64>) -> Self {
		self.max_bytes = max_bytes;
		*self
	}

	/// Same as [`HashOptions::max_bytes`], from a signed user provided value
	///
	/// # Errors
	///
	/// `max_bytes` is zero or negative
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::config::HashOptions;
	///
	/// # fn main() -> mp3hash::error::Result<()> {
	/// let options = HashOptions::new().max_bytes_checked(4096)?;
	///
	/// assert!(HashOptions::new().max_bytes_checked(0).is_err());
	/// assert!(HashOptions::new().max_bytes_checked(-5).is_err());
	/// # Ok(()) }
	/// ```
	pub fn max_bytes_checked(&mut self, max_bytes: i64) -> Result<Self> {
		if max_bytes <= 0 {
			err!(InvalidArgument("maxbytes should be a positive integer"));
		}

		Ok(self.max_bytes(Some(max_bytes as u64)))
	}

	/// The number of bytes read and fed to the hasher at once
	///
	/// This only affects memory usage, never the resulting digest.
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::config::HashOptions;
	///
	/// // Keep memory usage low
	/// let options = HashOptions::new().block_size(64 * 1024);
	/// ```
	pub fn block_size(&mut self, block_size: usize) -> Self {
		self.block_size = block_size;
		*self
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::config::{HashOptions, ParsingMode};
	///
	/// let options = HashOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}
}
