//! ID3v2 header detection
//!
//! An ID3v2 tag is prepended to the music. Its size is declared in a 10 byte header, and may be
//! followed by an ID3v2.4 footer and an older style extended header.

mod extended;
mod header;
pub mod synchsafe;

pub use extended::{ID3V2_EXTENDED_CRC_SIZE, ID3V2_EXTENDED_HEADER_SIZE, Id3v2ExtendedHeader};
pub use header::{ID3V2_FOOTER_SIZE, ID3V2_HEADER_SIZE, ID3V2_TAG_MARKER, Id3v2Header};

use crate::error::Result;

use std::io::{Read, Seek, SeekFrom};

/// The ID3v2 region at the start of a file
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Id3v2Region {
	header: Option<Id3v2Header>,
	has_extended: bool,
	extended_header: Option<Id3v2ExtendedHeader>,
}

impl Id3v2Region {
	/// Locate the ID3v2 tag of a reader that is `file_size` bytes long
	///
	/// Nothing is considered an error unless the reader itself fails. Inputs too small to hold a header
	/// simply have no tag.
	///
	/// # Errors
	///
	/// * `reader` fails to seek or read
	pub fn detect<R>(reader: &mut R, file_size: u64) -> Result<Self>
	where
		R: Read + Seek,
	{
		log::debug!("Searching for an ID3v2 tag");

		let mut region = Self::default();

		// Reader is too small to contain an ID3v2 header
		if file_size < ID3V2_HEADER_SIZE {
			return Ok(region);
		}

		reader.seek(SeekFrom::Start(0))?;
		let header = Id3v2Header::parse(reader)?;
		region.header = Some(header);

		if !header.is_tagged() {
			log::debug!("No ID3v2 tag found");
			return Ok(region);
		}

		let tag_size = header.tag_size();
		log::debug!(
			"Found an ID3v2.{}.{} tag, size: {tag_size}",
			header.major_version,
			header.revision
		);

		region.has_extended = header.extended_header_flag() && file_size >= tag_size;
		if !region.has_extended {
			return Ok(region);
		}

		// The extended header must fit entirely, otherwise it's treated as empty
		if file_size < tag_size + ID3V2_EXTENDED_HEADER_SIZE {
			log::warn!("ID3v2 extended header flag is set, but the file is too small to hold one");
			return Ok(region);
		}

		reader.seek(SeekFrom::Start(tag_size))?;
		let extended_header = Id3v2ExtendedHeader::parse(reader)?;
		log::debug!(
			"Found an ID3v2 extended header, size: {}",
			extended_header.total_size()
		);

		region.extended_header = Some(extended_header);
		Ok(region)
	}

	/// The raw header, if the file was large enough to hold one
	pub fn header(&self) -> Option<Id3v2Header> {
		self.header
	}

	/// Whether the file starts with an ID3v2 tag
	pub fn has_tag(&self) -> bool {
		self.header.is_some_and(|header| header.is_tagged())
	}

	/// The size of the tag, including its header and footer
	pub fn size(&self) -> u64 {
		match self.header {
			Some(header) if header.is_tagged() => header.tag_size(),
			_ => 0,
		}
	}

	/// Whether the tag declares an extended header
	pub fn has_extended(&self) -> bool {
		self.has_extended
	}

	/// The raw extended header, if one could be read
	pub fn extended_header(&self) -> Option<Id3v2ExtendedHeader> {
		self.extended_header
	}

	/// The total size of the extended header, see [`Id3v2ExtendedHeader::total_size`]
	pub fn extended_size(&self) -> u64 {
		self.extended_header
			.map_or(0, |extended_header| extended_header.total_size())
	}

	/// The size of the tag and its extended header
	pub fn total_size(&self) -> u64 {
		self.size() + self.extended_size()
	}
}
