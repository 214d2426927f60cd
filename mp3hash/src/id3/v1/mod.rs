//! ID3v1 trailer detection
//!
//! ID3v1 tags have a fixed size of 128 bytes and live at the very end of a file. An "enhanced" (extended)
//! tag of 227 bytes may precede the regular tag.

mod constants;

pub use constants::{ID3V1_EXTENDED_SIZE, ID3V1_EXTENDED_TAG_MARKER, ID3V1_SIZE, ID3V1_TAG_MARKER};

use crate::error::Result;
use crate::util::io::read_exact_at;

use std::io::{Read, Seek};

/// The ID3v1 region at the end of a file
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Id3v1Trailer {
	has_tag: bool,
	has_extended: bool,
}

impl Id3v1Trailer {
	/// Locate the ID3v1 tags of a reader that is `file_size` bytes long
	///
	/// # Errors
	///
	/// * `reader` fails to seek or read
	pub fn detect<R>(reader: &mut R, file_size: u64) -> Result<Self>
	where
		R: Read + Seek,
	{
		log::debug!("Searching for an ID3v1 tag");

		let mut trailer = Self::default();

		// Reader is too small to contain an ID3v1 tag
		if file_size < ID3V1_SIZE {
			return Ok(trailer);
		}

		let mut marker = [0; 3];
		read_exact_at(reader, file_size - ID3V1_SIZE, &mut marker)?;
		trailer.has_tag = marker == ID3V1_TAG_MARKER;

		if trailer.has_tag {
			log::debug!("Found an ID3v1 tag");
		}

		if file_size < ID3V1_SIZE + ID3V1_EXTENDED_SIZE {
			return Ok(trailer);
		}

		let mut marker = [0; 4];
		read_exact_at(
			reader,
			file_size - (ID3V1_SIZE + ID3V1_EXTENDED_SIZE),
			&mut marker,
		)?;
		trailer.has_extended = marker == ID3V1_EXTENDED_TAG_MARKER;

		if trailer.has_extended {
			log::debug!("Found an extended ID3v1 tag");
		}

		Ok(trailer)
	}

	/// Whether the file ends with an ID3v1 tag
	pub fn has_tag(&self) -> bool {
		self.has_tag
	}

	/// Whether an extended ID3v1 tag precedes the regular tag position
	pub fn has_extended(&self) -> bool {
		self.has_extended
	}

	/// The size of the regular tag, 0 if absent
	pub fn size(&self) -> u64 {
		if self.has_tag { ID3V1_SIZE } else { 0 }
	}

	/// The size of the extended tag, 0 if absent
	pub fn extended_size(&self) -> u64 {
		if self.has_extended {
			ID3V1_EXTENDED_SIZE
		} else {
			0
		}
	}

	/// The number of bytes taken by both tags
	pub fn total_size(&self) -> u64 {
		self.size() + self.extended_size()
	}
}

#[cfg(test)]
mod tests {
	use super::{ID3V1_SIZE, Id3v1Trailer};

	use std::io::Cursor;

	fn tagged() -> Vec<u8> {
		let mut content = b"TAG".to_vec();
		content.resize(ID3V1_SIZE as usize, b'\n');
		content
	}

	fn detect(content: &[u8]) -> Id3v1Trailer {
		Id3v1Trailer::detect(&mut Cursor::new(content), content.len() as u64).unwrap()
	}

	#[test_log::test]
	fn detects_id3v1_tags() {
		let trailer = detect(&tagged());

		assert!(trailer.has_tag());
		assert_eq!(trailer.size(), 128);
	}

	#[test_log::test]
	fn detects_id3v1_tags_even_with_content() {
		let mut content = vec![b'\n'; 512];
		content.extend(tagged());

		assert!(detect(&content).has_tag());
	}

	#[test_log::test]
	fn detects_when_there_is_no_id3v1_tag() {
		let trailer = detect(&[b'\n'; 128]);

		assert!(!trailer.has_tag());
		assert_eq!(trailer.size(), 0);
	}

	#[test_log::test]
	fn no_tag_when_file_is_too_small() {
		assert!(!detect(&[]).has_tag());
		assert!(!detect(&tagged()[..127]).has_tag());
	}

	#[test_log::test]
	fn detects_extended_tag() {
		let mut content = vec![0; 64];
		content.extend(b"TAG+");
		content.resize(64 + 227, b' ');
		content.extend(tagged());

		let trailer = detect(&content);

		assert!(trailer.has_tag());
		assert!(trailer.has_extended());
		assert_eq!(trailer.total_size(), 128 + 227);
	}

	#[test_log::test]
	fn extended_tag_needs_enough_room() {
		// "TAG+" is at the very start, but the file is 1 byte short of 355
		let mut content = b"TAG+".to_vec();
		content.resize(226, b' ');
		content.extend(tagged());

		let trailer = detect(&content);

		assert!(!trailer.has_extended());
		assert_eq!(trailer.total_size(), 128);
	}
}
