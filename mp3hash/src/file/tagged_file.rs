use super::MusicRange;
use crate::config::ParsingMode;
use crate::error::{MalformedTagError, Result};
use crate::id3::v1::Id3v1Trailer;
use crate::id3::v2::{Id3v2ExtendedHeader, Id3v2Header, Id3v2Region};
use crate::util::io::SeekStreamLen;

use std::io::{Read, Seek};

/// The tag layout of a single file
///
/// All tag information is gathered once in [`TaggedFile::read_from`], the accessors never touch the reader
/// again. A `TaggedFile` does not keep the reader, so it can't be reused for another source by mistake.
///
/// # Examples
///
/// ```rust
/// use mp3hash::config::ParsingMode;
/// use mp3hash::file::TaggedFile;
/// use std::io::Cursor;
///
/// # fn main() -> mp3hash::error::Result<()> {
/// // 2 bytes of "music" followed by an ID3v1 tag
/// let mut content = vec![0xFF, 0xFB, b'T', b'A', b'G'];
/// content.resize(130, 0);
///
/// let tagged_file = TaggedFile::read_from(&mut Cursor::new(content), ParsingMode::BestAttempt)?;
///
/// assert!(tagged_file.has_id3v1());
/// assert!(!tagged_file.has_id3v2());
/// assert_eq!(tagged_file.music_range().as_range(), 0..2);
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TaggedFile {
	file_size: u64,
	id3v1: Id3v1Trailer,
	id3v2: Id3v2Region,
	music_range: MusicRange,
}

impl TaggedFile {
	/// Locate every ID3 tag in `reader`
	///
	/// The length of the reader is taken once, from its end. Only the reader's position is changed.
	///
	/// # Errors
	///
	/// * `reader` fails to seek or read
	/// * The tags overlap, and `parsing_mode` is [`ParsingMode::Strict`]
	pub fn read_from<R>(reader: &mut R, parsing_mode: ParsingMode) -> Result<Self>
	where
		R: Read + Seek,
	{
		let file_size = reader.stream_len_hack()?;
		log::debug!("Locating music in a source of {file_size} bytes");

		let id3v1 = Id3v1Trailer::detect(reader, file_size)?;
		let id3v2 = Id3v2Region::detect(reader, file_size)?;

		// ID3v1 detection never claims more than the file holds
		let end_byte = file_size - id3v1.total_size();
		let start_byte = id3v2.total_size();

		if start_byte > end_byte {
			if parsing_mode == ParsingMode::Strict {
				return Err(MalformedTagError::new(file_size, start_byte, end_byte).into());
			}

			log::warn!(
				"Tags overlap (music would span {start_byte}..{end_byte}), no music will be hashed"
			);
		}

		let music_range = MusicRange::new(start_byte, end_byte);
		log::debug!("Music range: {music_range}");

		Ok(Self {
			file_size,
			id3v1,
			id3v2,
			music_range,
		})
	}

	/// The total size of the source
	pub fn file_size(&self) -> u64 {
		self.file_size
	}

	/// Whether the file ends with an ID3v1 tag
	pub fn has_id3v1(&self) -> bool {
		self.id3v1.has_tag()
	}

	/// Whether an extended ID3v1 tag precedes the regular tag position
	pub fn has_id3v1_extended(&self) -> bool {
		self.id3v1.has_extended()
	}

	/// The size of the ID3v1 tag, 0 if absent
	pub fn id3v1_size(&self) -> u64 {
		self.id3v1.size()
	}

	/// The size of the extended ID3v1 tag, 0 if absent
	pub fn id3v1_extended_size(&self) -> u64 {
		self.id3v1.extended_size()
	}

	/// The number of bytes taken by ID3v1 tags at the end of the file
	pub fn id3v1_total_size(&self) -> u64 {
		self.id3v1.total_size()
	}

	/// The raw ID3v2 header, if the file is large enough to hold one
	///
	/// This is available even when the file isn't tagged, check [`TaggedFile::has_id3v2`].
	pub fn id3v2_header(&self) -> Option<Id3v2Header> {
		self.id3v2.header()
	}

	/// Whether the file starts with an ID3v2 tag
	pub fn has_id3v2(&self) -> bool {
		self.id3v2.has_tag()
	}

	/// The size of the ID3v2 tag including its header and footer, 0 if absent
	pub fn id3v2_size(&self) -> u64 {
		self.id3v2.size()
	}

	/// The raw ID3v2 extended header, if one could be read
	pub fn id3v2_extended_header(&self) -> Option<Id3v2ExtendedHeader> {
		self.id3v2.extended_header()
	}

	/// Whether the ID3v2 tag declares an extended header
	pub fn has_id3v2_extended(&self) -> bool {
		self.id3v2.has_extended()
	}

	/// The size of the ID3v2 extended header, 0 if absent
	pub fn id3v2_extended_size(&self) -> u64 {
		self.id3v2.extended_size()
	}

	/// The number of bytes taken by the ID3v2 tag at the start of the file
	pub fn id3v2_total_size(&self) -> u64 {
		self.id3v2.total_size()
	}

	/// The first byte of music
	pub fn start_byte(&self) -> u64 {
		self.music_range.start()
	}

	/// One past the last byte of music
	pub fn end_byte(&self) -> u64 {
		self.music_range.end()
	}

	/// The `[start, end)` range of music
	pub fn music_range(&self) -> MusicRange {
		self.music_range
	}

	/// The number of bytes of music
	pub fn music_size(&self) -> u64 {
		self.music_range.len()
	}
}
