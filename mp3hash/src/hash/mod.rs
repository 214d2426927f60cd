//! Hashing a byte range of a source
//!
//! The hasher knows nothing about tags. It is given a [`MusicRange`] and a [`HashAccumulator`], and feeds
//! the bytes of the range to the accumulator one block at a time.

pub mod algorithm;

use crate::config::HashOptions;
use crate::error::Result;
use crate::file::MusicRange;
use crate::macros::err;

use std::io::{Read, Seek, SeekFrom};

/// Something that can digest a stream of bytes
///
/// Implemented by every [`StreamingHasher`](algorithm::StreamingHasher), and by any custom checksum a
/// caller wants to use.
///
/// # Examples
///
/// ```rust
/// use mp3hash::hash::HashAccumulator;
///
/// /// A (bad) checksum, summing every byte
/// #[derive(Default)]
/// struct ByteSum(u64);
///
/// impl HashAccumulator for ByteSum {
/// 	fn update(&mut self, data: &[u8]) {
/// 		self.0 += data.iter().map(|b| u64::from(*b)).sum::<u64>();
/// 	}
///
/// 	fn hex_digest(self) -> String {
/// 		format!("{:016x}", self.0)
/// 	}
/// }
/// ```
pub trait HashAccumulator {
	/// Absorb `data`
	fn update(&mut self, data: &[u8]);

	/// Finalize the digest
	///
	/// The built in algorithms render it as lowercase hexadecimal.
	fn hex_digest(self) -> String
	where
		Self: Sized;
}

/// Hash the bytes of `range` in `reader`
///
/// With [`HashOptions::max_bytes`], at most that many bytes from the start of the range are hashed.
/// The bytes are fed to `hasher` in blocks of [`HashOptions::block_size`], the final block being whatever
/// remains. An empty range performs no reads.
///
/// The reader is left positioned after the last hashed byte.
///
/// # Errors
///
/// * `options` has a `max_bytes` or `block_size` of 0
/// * `reader` fails to seek or read
/// * `reader` ends before the range does
///
/// # Examples
///
/// ```rust
/// use mp3hash::config::HashOptions;
/// use mp3hash::file::MusicRange;
/// use mp3hash::hash::algorithm::{Algorithm, StreamingHasher};
/// use mp3hash::hash::hash_range;
/// use std::io::Cursor;
///
/// # fn main() -> mp3hash::error::Result<()> {
/// let mut reader = Cursor::new(b"ID3 skipped, music, TAG skipped".to_vec());
///
/// let digest = hash_range(
/// 	&mut reader,
/// 	MusicRange::new(13, 18),
/// 	StreamingHasher::new(Algorithm::Md5),
/// 	HashOptions::new(),
/// )?;
///
/// // The MD5 of "music"
/// assert_eq!(digest, "18d6769919266cd0bd6cd78aa405d5d0");
/// # Ok(()) }
/// ```
pub fn hash_range<R, H>(
	reader: &mut R,
	range: MusicRange,
	mut hasher: H,
	options: HashOptions,
) -> Result<String>
where
	R: Read + Seek,
	H: HashAccumulator,
{
	if options.block_size == 0 {
		err!(InvalidArgument("block size should be a positive integer"));
	}

	let range = match options.max_bytes {
		Some(0) => err!(InvalidArgument("maxbytes should be a positive integer")),
		Some(max_bytes) => range.truncate(max_bytes),
		None => range,
	};

	log::debug!("Hashing {range} ({} bytes)", range.len());

	if range.is_empty() {
		return Ok(hasher.hex_digest());
	}

	reader.seek(SeekFrom::Start(range.start()))?;

	let block_size = options.block_size as u64;
	let mut remaining = range.len();

	let mut block = vec![0; block_size.min(remaining) as usize];
	while remaining > 0 {
		let len = block_size.min(remaining) as usize;
		let block = &mut block[..len];

		reader.read_exact(block)?;
		hasher.update(block);

		remaining -= len as u64;
	}

	Ok(hasher.hex_digest())
}
