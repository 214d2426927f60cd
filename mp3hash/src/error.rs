//! Contains the errors that can arise within mp3hash
//!
//! The primary error is [`Mp3HashError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Mp3HashError>`
pub type Result<T> = std::result::Result<T, Mp3HashError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// A caller supplied a value outside of its contract
	///
	/// This occurs when `max_bytes` is zero or negative, or a block size of zero is requested.
	InvalidArgument(&'static str),
	/// The tag sizes declared in a file are inconsistent with its length
	///
	/// This is only surfaced with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict),
	/// otherwise the music range is clamped.
	MalformedTag(MalformedTagError),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// An error that arises when the tags claim more bytes than the file has
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct MalformedTagError {
	file_size: u64,
	start_byte: u64,
	end_byte: u64,
}

impl MalformedTagError {
	/// Create a new `MalformedTagError` from the computed music boundaries
	#[must_use]
	pub const fn new(file_size: u64, start_byte: u64, end_byte: u64) -> Self {
		Self {
			file_size,
			start_byte,
			end_byte,
		}
	}

	/// The total size of the source
	pub fn file_size(&self) -> u64 {
		self.file_size
	}

	/// Where the music would start according to the ID3v2 tag
	pub fn start_byte(&self) -> u64 {
		self.start_byte
	}

	/// Where the music would end according to the ID3v1 tag
	pub fn end_byte(&self) -> u64 {
		self.end_byte
	}
}

impl Debug for MalformedTagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"MalformedTag {{ file_size: {}, start_byte: {}, end_byte: {} }}",
			self.file_size, self.start_byte, self.end_byte
		)
	}
}

impl Display for MalformedTagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Tags overlap: music would start at byte {} but end at byte {} (file size: {})",
			self.start_byte, self.end_byte, self.file_size
		)
	}
}

/// Errors that could occur within mp3hash
pub struct Mp3HashError {
	pub(crate) kind: ErrorKind,
}

impl Mp3HashError {
	/// Create a `Mp3HashError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::error::{ErrorKind, Mp3HashError};
	///
	/// let bad_argument = Mp3HashError::new(ErrorKind::InvalidArgument("nope"));
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::error::{ErrorKind, Mp3HashError};
	///
	/// let bad_argument = Mp3HashError::new(ErrorKind::InvalidArgument("nope"));
	/// if let ErrorKind::InvalidArgument(reason) = bad_argument.kind() {
	/// 	println!("Bad argument: {reason}");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for Mp3HashError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match &self.kind {
			ErrorKind::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for Mp3HashError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<MalformedTagError> for Mp3HashError {
	fn from(input: MalformedTagError) -> Self {
		Self {
			kind: ErrorKind::MalformedTag(input),
		}
	}
}

impl From<std::io::Error> for Mp3HashError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for Mp3HashError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::InvalidArgument(reason) => write!(f, "Invalid argument: {reason}"),
			ErrorKind::MalformedTag(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),
		}
	}
}
