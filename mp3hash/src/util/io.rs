//! Helpers for working with seekable byte sources

use crate::error::Result;

use std::io::{Read, Seek, SeekFrom};

// TODO: https://github.com/rust-lang/rust/issues/59359
pub(crate) trait SeekStreamLen: Seek {
	fn stream_len_hack(&mut self) -> Result<u64> {
		let current_pos = self.stream_position()?;
		let len = self.seek(SeekFrom::End(0))?;

		self.seek(SeekFrom::Start(current_pos))?;

		Ok(len)
	}
}

impl<T> SeekStreamLen for T where T: Seek {}

/// Seeks to `offset` and fills `buf`
///
/// Callers are expected to have checked that `offset + buf.len()` is within the stream.
pub(crate) fn read_exact_at<R>(reader: &mut R, offset: u64, buf: &mut [u8]) -> Result<()>
where
	R: Read + Seek,
{
	reader.seek(SeekFrom::Start(offset))?;
	reader.read_exact(buf)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::{SeekStreamLen, read_exact_at};

	use std::io::{Cursor, Seek};

	#[test_log::test]
	fn stream_len_keeps_position() {
		let mut reader = Cursor::new(vec![0_u8; 42]);
		reader.seek(std::io::SeekFrom::Start(7)).unwrap();

		assert_eq!(reader.stream_len_hack().unwrap(), 42);
		assert_eq!(reader.stream_position().unwrap(), 7);
	}

	#[test_log::test]
	fn read_exact_at_offset() {
		let mut reader = Cursor::new(b"....TAG+....".to_vec());

		let mut marker = [0; 4];
		read_exact_at(&mut reader, 4, &mut marker).unwrap();

		assert_eq!(&marker, b"TAG+");
	}
}
