//! Utilities for working with synchsafe integers
//!
//! ID3v2 stores its sizes as "synchsafe" integers: big-endian, with the most significant bit of every byte
//! always zero so the value can never be mistaken for an MPEG frame sync. A 4 byte synchsafe integer
//! therefore only holds 28 bits of information.

use crate::error::Result;
use crate::macros::err;

use byteorder::{BigEndian, ByteOrder};

/// The largest value a 4 byte synchsafe integer can hold
pub const MAX_SYNCHSAFE_U32: u32 = 0x0FFF_FFFF;

/// An integer that can be converted to and from synchsafe variants
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in 28 bits
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::id3::v2::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> mp3hash::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// The most significant bit of every byte is ignored.
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::id3::v2::synchsafe::SynchsafeInteger;
	///
	/// assert_eq!(0x0000_0201_u32.unsynch(), 257);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		if self > MAX_SYNCHSAFE_U32 {
			err!(InvalidArgument("integer does not fit in 28 bits"));
		}

		Ok((self & 0x7F)
			| ((self & (0x7F << 7)) << 1)
			| ((self & (0x7F << 14)) << 2)
			| ((self & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		((self & 0x7F00_0000) >> 3) | ((self & 0x7F_0000) >> 2) | ((self & 0x7F00) >> 1) | (self & 0x7F)
	}
}

/// Decode a 4 byte big-endian synchsafe integer
///
/// # Examples
///
/// ```rust
/// use mp3hash::id3::v2::synchsafe::decode_synchsafe;
///
/// assert_eq!(decode_synchsafe([0x08, 0x04, 0x02, 0x01]), 16_843_009);
/// ```
pub fn decode_synchsafe(bytes: [u8; 4]) -> u32 {
	BigEndian::read_u32(&bytes).unsynch()
}

#[cfg(test)]
mod tests {
	use super::{MAX_SYNCHSAFE_U32, SynchsafeInteger, decode_synchsafe};

	#[test_log::test]
	fn parses_bytes_in_big_endian_order() {
		// 0x01 << 0 + 0x02 << 7 + 0x04 << 14 + 0x08 << 21
		assert_eq!(decode_synchsafe([0x08, 0x04, 0x02, 0x01]), 16_843_009);
	}

	#[test_log::test]
	fn ignores_most_significant_bits() {
		assert_eq!(decode_synchsafe([0x80, 0x80, 0x80, 0x80]), 0);
	}

	#[test_log::test]
	fn keeps_low_bits_when_msb_set() {
		// 0xFF becomes 0x7F in every position
		assert_eq!(decode_synchsafe([0xFF, 0xFF, 0xFF, 0xFF]), 268_435_455);
		assert_eq!(decode_synchsafe([0xFF, 0xFF, 0xFF, 0xFF]), MAX_SYNCHSAFE_U32);
	}

	#[test_log::test]
	fn u32_synch() {
		assert_eq!(0xFFF_FFFF_u32.synch().unwrap(), 0x7F7F_7F7F_u32);
		assert_eq!(257_u32.synch().unwrap(), 0x0000_0201_u32);
	}

	#[test_log::test]
	fn u32_synch_too_large() {
		assert!(0x1000_0000_u32.synch().is_err());
	}

	#[test_log::test]
	fn u32_unsynch() {
		assert_eq!(0x7F7F_7F7F_u32.unsynch(), 0xFFF_FFFF_u32);
		assert_eq!(0x0000_0201_u32.unsynch(), 257);
	}
}
