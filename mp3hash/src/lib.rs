//! Hash the audio of MP3 files, ignoring their metadata.
//!
//! Two copies of a song that only differ in their tags (title, album art, comments, ...) produce the same
//! digest. Every ID3 tag is located and skipped:
//!
//! * ID3v1 (128 bytes) and extended ID3v1 (227 bytes) at the end of the file
//! * ID3v2.2/2.3/2.4 at the start of the file, including the ID3v2.4 footer and the extended header
//!
//! Everything in between is considered music, and is fed to a hash algorithm.
//!
//! # Examples
//!
//! ## Hashing a file
//!
//! ```rust,no_run
//! # fn main() -> mp3hash::error::Result<()> {
//! use mp3hash::config::HashOptions;
//! use mp3hash::hash::algorithm::Algorithm;
//!
//! // SHA-1 by default
//! let digest = mp3hash::mp3hash("song.mp3", HashOptions::new())?;
//!
//! // Only the first megabyte of music, with SHA-256
//! let options = HashOptions::new()
//! 	.algorithm(Algorithm::Sha256)
//! 	.max_bytes(Some(1024 * 1024));
//! let digest = mp3hash::mp3hash("song.mp3", options)?;
//! # Ok(()) }
//! ```
//!
//! ## Using a custom hasher
//!
//! ```rust,no_run
//! # fn main() -> mp3hash::error::Result<()> {
//! use mp3hash::config::HashOptions;
//! use mp3hash::hash::HashAccumulator;
//!
//! struct Adler32 {
//! 	a: u32,
//! 	b: u32,
//! }
//!
//! impl HashAccumulator for Adler32 {
//! 	fn update(&mut self, data: &[u8]) {
//! 		for byte in data {
//! 			self.a = (self.a + u32::from(*byte)) % 65521;
//! 			self.b = (self.b + self.a) % 65521;
//! 		}
//! 	}
//!
//! 	fn hex_digest(self) -> String {
//! 		format!("{:08x}", (self.b << 16) | self.a)
//! 	}
//! }
//!
//! let digest = mp3hash::compute_digest("song.mp3", Adler32 { a: 1, b: 0 }, HashOptions::new())?;
//! # Ok(()) }
//! ```
//!
//! ## Inspecting the tags
//!
//! ```rust,no_run
//! # fn main() -> mp3hash::error::Result<()> {
//! use mp3hash::config::ParsingMode;
//! use mp3hash::file::TaggedFile;
//! use std::fs::File;
//!
//! let mut file = File::open("song.mp3")?;
//! let tagged_file = TaggedFile::read_from(&mut file, ParsingMode::BestAttempt)?;
//!
//! println!("ID3v2: {} bytes", tagged_file.id3v2_total_size());
//! println!("ID3v1: {} bytes", tagged_file.id3v1_total_size());
//! println!("Music: {}", tagged_file.music_range());
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod hash;
pub mod id3;
pub(crate) mod macros;
mod util;

use crate::config::{HashOptions, ParsingMode};
use crate::error::Result;
use crate::file::{MusicRange, TaggedFile};
use crate::hash::HashAccumulator;
use crate::hash::algorithm::StreamingHasher;
use crate::macros::err;

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

/// Find the `[start, end)` range of music in `reader`
///
/// Tags whose sizes don't fit in the source are clamped, see [`ParsingMode::BestAttempt`].
/// Use [`TaggedFile::read_from`] for the details of each tag.
///
/// # Errors
///
/// * `reader` fails to seek or read
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// # fn main() -> mp3hash::error::Result<()> {
/// let mut content = b"ID3\x03\x00\x00\x00\x00\x00\x02".to_vec();
/// content.extend([0, 0, 0xFF, 0xFB, 0x90, 0x64]);
///
/// let range = mp3hash::detect(&mut Cursor::new(content))?;
/// assert_eq!(range.as_range(), 12..16);
/// # Ok(()) }
/// ```
pub fn detect<R>(reader: &mut R) -> Result<MusicRange>
where
	R: Read + Seek,
{
	let tagged_file = TaggedFile::read_from(reader, ParsingMode::BestAttempt)?;
	Ok(tagged_file.music_range())
}

/// Hash the music of the file at `path` with a caller provided hasher
///
/// The file is opened, its music located and hashed, and closed again before returning.
/// [`HashOptions::algorithm`] is ignored, `hasher` is used instead.
///
/// # Errors
///
/// * `path` can't be opened or read
/// * `options` has a `max_bytes` of 0
/// * The tags overlap, and the parsing mode is [`ParsingMode::Strict`]
///
/// # Examples
///
/// ```rust,no_run
/// use mp3hash::config::HashOptions;
/// use mp3hash::hash::algorithm::{Algorithm, StreamingHasher};
///
/// # fn main() -> mp3hash::error::Result<()> {
/// let hasher = StreamingHasher::new(Algorithm::Md5);
/// let digest = mp3hash::compute_digest("song.mp3", hasher, HashOptions::new())?;
/// # Ok(()) }
/// ```
pub fn compute_digest<P, H>(path: P, hasher: H, options: HashOptions) -> Result<String>
where
	P: AsRef<Path>,
	H: HashAccumulator,
{
	if options.max_bytes == Some(0) {
		err!(InvalidArgument("maxbytes should be a positive integer"));
	}

	let path = path.as_ref();
	log::debug!("Hashing {}", path.display());

	let mut file = File::open(path)?;
	let tagged_file = TaggedFile::read_from(&mut file, options.parsing_mode)?;

	hash::hash_range(&mut file, tagged_file.music_range(), hasher, options)
}

/// Hash the music of the file at `path` with [`HashOptions::algorithm`]
///
/// # Errors
///
/// See [`compute_digest`]
///
/// # Examples
///
/// ```rust,no_run
/// use mp3hash::config::HashOptions;
///
/// # fn main() -> mp3hash::error::Result<()> {
/// let digest = mp3hash::mp3hash("song.mp3", HashOptions::new())?;
/// assert_eq!(digest.len(), 40);
/// # Ok(()) }
/// ```
pub fn mp3hash<P>(path: P, options: HashOptions) -> Result<String>
where
	P: AsRef<Path>,
{
	compute_digest(path, StreamingHasher::new(options.algorithm), options)
}
