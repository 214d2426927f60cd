use super::synchsafe::SynchsafeInteger;
use crate::error::Result;

use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// The size of the ID3v2 header, and of the ID3v2.4 footer
pub const ID3V2_HEADER_SIZE: u64 = 10;
/// The size of the optional ID3v2.4 footer
pub const ID3V2_FOOTER_SIZE: u64 = 10;
/// The magic bytes at the start of an ID3v2 tag
pub const ID3V2_TAG_MARKER: [u8; 3] = *b"ID3";

const EXTENDED_HEADER_FLAG: u8 = 0x40;
const FOOTER_FLAG: u8 = 0x10;

/// The raw ID3v2 header found at the start of a file
///
/// This is read from any file at least [`ID3V2_HEADER_SIZE`] bytes long, whether or not it begins with
/// an ID3v2 tag. Use [`Id3v2Header::is_tagged`] to check the magic bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	/// The first 3 bytes, `"ID3"` for a tagged file
	pub magic: [u8; 3],
	/// The major version (2, 3, or 4 for known revisions of ID3v2)
	pub major_version: u8,
	/// The revision number
	pub revision: u8,
	/// The tag-wide flags
	pub flags: u8,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
}

impl Id3v2Header {
	pub(crate) fn parse<R>(bytes: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; ID3V2_HEADER_SIZE as usize];
		bytes.read_exact(&mut header)?;

		Ok(Self::from_bytes(header))
	}

	/// Build a header from its 10 raw bytes
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3hash::id3::v2::Id3v2Header;
	///
	/// let header = Id3v2Header::from_bytes(*b"ID3\x03\x00\x00\x00\x00\x02\x01");
	///
	/// assert!(header.is_tagged());
	/// assert_eq!(header.size, 257);
	/// assert_eq!(header.tag_size(), 267);
	/// ```
	pub fn from_bytes(header: [u8; 10]) -> Self {
		Self {
			magic: [header[0], header[1], header[2]],
			major_version: header[3],
			revision: header[4],
			flags: header[5],
			size: BigEndian::read_u32(&header[6..]).unsynch(),
		}
	}

	/// Whether the magic bytes are `"ID3"`
	pub fn is_tagged(&self) -> bool {
		self.magic == ID3V2_TAG_MARKER
	}

	/// Whether an ID3v2.4 footer follows the tag
	pub fn has_footer(&self) -> bool {
		self.major_version == 4 && self.flags & FOOTER_FLAG == FOOTER_FLAG
	}

	/// Whether the extended header flag is set
	pub fn extended_header_flag(&self) -> bool {
		self.flags & EXTENDED_HEADER_FLAG == EXTENDED_HEADER_FLAG
	}

	/// The total size of the tag, including the header and footer
	pub fn tag_size(&self) -> u64 {
		let footer = if self.has_footer() {
			ID3V2_FOOTER_SIZE
		} else {
			0
		};

		ID3V2_HEADER_SIZE + u64::from(self.size) + footer
	}
}
