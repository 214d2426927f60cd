use std::fmt::{Display, Formatter};
use std::ops::Range;

/// The `[start, end)` byte range of a file holding only music
///
/// # Examples
///
/// ```rust
/// use mp3hash::file::MusicRange;
///
/// let range = MusicRange::new(267, 1000);
///
/// assert_eq!(range.len(), 733);
/// assert_eq!(range.as_range(), 267..1000);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct MusicRange {
	start: u64,
	end: u64,
}

impl MusicRange {
	/// Create a new `MusicRange`
	///
	/// If `end` is less than `start`, the range is empty and starts at `end`.
	#[must_use]
	pub const fn new(start: u64, end: u64) -> Self {
		if end < start {
			return Self { start: end, end };
		}

		Self { start, end }
	}

	/// The first byte of music
	pub fn start(&self) -> u64 {
		self.start
	}

	/// One past the last byte of music
	pub fn end(&self) -> u64 {
		self.end
	}

	/// The number of bytes of music
	pub fn len(&self) -> u64 {
		self.end - self.start
	}

	/// Whether there is no music at all
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Shrink the range to at most `max_bytes`, keeping the start
	#[must_use]
	pub fn truncate(&self, max_bytes: u64) -> Self {
		Self {
			start: self.start,
			end: self.end.min(self.start.saturating_add(max_bytes)),
		}
	}

	/// The range as a [`Range`]
	pub fn as_range(&self) -> Range<u64> {
		self.start..self.end
	}
}

impl From<MusicRange> for Range<u64> {
	fn from(input: MusicRange) -> Self {
		input.as_range()
	}
}

impl Display for MusicRange {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {})", self.start, self.end)
	}
}
