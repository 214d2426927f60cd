use super::synchsafe::SynchsafeInteger;
use crate::error::Result;

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

/// The size of the fixed part of an extended header
pub const ID3V2_EXTENDED_HEADER_SIZE: u64 = 10;
/// The size of the CRC-32 that may follow an extended header
pub const ID3V2_EXTENDED_CRC_SIZE: u64 = 4;

const CRC_FLAG: u8 = 0x08;

/// An ID3v2.3 style extended header
///
/// The layout is:
///
/// ```text
/// +------------------+---------+------------------+
/// | size (synchsafe) | flags   | padding (synch.) |
/// | 4 bytes          | 2 bytes | 4 bytes          |
/// +------------------+---------+------------------+
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2ExtendedHeader {
	/// The declared extended header size
	pub size: u32,
	/// The two flag bytes
	pub flags: [u8; 2],
	/// The declared padding size
	pub padding: u32,
}

impl Id3v2ExtendedHeader {
	pub(crate) fn parse<R>(bytes: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 extended header");

		let size = bytes.read_u32::<BigEndian>()?.unsynch();

		let mut flags = [0; 2];
		bytes.read_exact(&mut flags)?;

		let padding = bytes.read_u32::<BigEndian>()?.unsynch();

		Ok(Self {
			size,
			flags,
			padding,
		})
	}

	/// Whether a CRC-32 is present
	pub fn has_crc(&self) -> bool {
		self.flags[0] & CRC_FLAG == CRC_FLAG
	}

	/// The number of bytes taken by the CRC-32, if any
	pub fn crc_size(&self) -> u64 {
		if self.has_crc() {
			ID3V2_EXTENDED_CRC_SIZE
		} else {
			0
		}
	}

	/// The total number of bytes covered by the extended header
	///
	/// This is the declared size, the CRC, the padding, and the fixed 10 byte header.
	pub fn total_size(&self) -> u64 {
		u64::from(self.size) + self.crc_size() + u64::from(self.padding) + ID3V2_EXTENDED_HEADER_SIZE
	}
}
