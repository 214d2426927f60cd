#![allow(missing_docs)]

mod util;

use mp3hash::config::{HashOptions, ParsingMode};
use mp3hash::error::ErrorKind;
use mp3hash::hash::HashAccumulator;
use mp3hash::hash::algorithm::{Algorithm, StreamingHasher};

// Larger than a couple of 512 KiB blocks
const MUSIC_SIZE: usize = 1_300_000;

struct Files {
	tagged: tempfile::NamedTempFile,
	stripped: tempfile::NamedTempFile,
	music: Vec<u8>,
}

fn files() -> Files {
	let music = util::music(MUSIC_SIZE);

	Files {
		tagged: util::temp_file(&util::fully_tagged(&music)),
		stripped: util::temp_file(&music),
		music,
	}
}

/// Adler-32, as a custom accumulator
struct Adler32 {
	a: u32,
	b: u32,
}

impl Adler32 {
	fn new() -> Self {
		Self { a: 1, b: 0 }
	}
}

impl HashAccumulator for Adler32 {
	fn update(&mut self, data: &[u8]) {
		for byte in data {
			self.a = (self.a + u32::from(*byte)) % 65521;
			self.b = (self.b + self.a) % 65521;
		}
	}

	fn hex_digest(self) -> String {
		format!("{:#x}", (self.b << 16) | self.a)
	}
}

#[test_log::test]
fn tagged_and_stripped_match() {
	let files = files();

	let tagged = mp3hash::mp3hash(files.tagged.path(), HashOptions::new()).unwrap();
	let stripped = mp3hash::mp3hash(files.stripped.path(), HashOptions::new()).unwrap();

	assert_eq!(tagged, stripped);
	// SHA-1 by default
	assert_eq!(tagged.len(), 40);
}

#[test_log::test]
fn digest_is_of_the_music() {
	let files = files();

	let mut expected = StreamingHasher::new(Algorithm::Sha1);
	expected.update(&files.music);

	let digest = mp3hash::mp3hash(files.tagged.path(), HashOptions::new()).unwrap();
	assert_eq!(digest, expected.hex_digest());
}

#[test_log::test]
fn every_algorithm() {
	let files = files();

	for algorithm in Algorithm::ALL {
		let options = HashOptions::new().algorithm(algorithm);

		let tagged = mp3hash::mp3hash(files.tagged.path(), options).unwrap();
		let stripped = mp3hash::mp3hash(files.stripped.path(), options).unwrap();

		assert_eq!(tagged, stripped, "{algorithm}");
		assert_eq!(tagged.len(), algorithm.hex_len(), "{algorithm}");
	}
}

#[test_log::test]
fn custom_accumulator() {
	let files = files();

	let tagged =
		mp3hash::compute_digest(files.tagged.path(), Adler32::new(), HashOptions::new()).unwrap();
	let stripped =
		mp3hash::compute_digest(files.stripped.path(), Adler32::new(), HashOptions::new()).unwrap();

	assert_eq!(tagged, stripped);
}

#[test_log::test]
fn max_bytes() {
	let files = files();

	for max_bytes in (1..MUSIC_SIZE as u64 + 1000).step_by(250 * 1024) {
		let options = HashOptions::new().max_bytes(Some(max_bytes));

		let tagged = mp3hash::mp3hash(files.tagged.path(), options).unwrap();
		let stripped = mp3hash::mp3hash(files.stripped.path(), options).unwrap();
		assert_eq!(tagged, stripped, "max_bytes: {max_bytes}");

		let end = MUSIC_SIZE.min(max_bytes as usize);
		let mut expected = StreamingHasher::new(Algorithm::Sha1);
		expected.update(&files.music[..end]);
		assert_eq!(tagged, expected.hex_digest(), "max_bytes: {max_bytes}");
	}
}

#[test_log::test]
fn max_bytes_zero() {
	let files = files();

	let err = mp3hash::mp3hash(files.tagged.path(), HashOptions::new().max_bytes(Some(0)))
		.unwrap_err();

	assert!(matches!(err.kind(), ErrorKind::InvalidArgument(_)));
}

#[test_log::test]
fn block_size_does_not_change_digest() {
	let files = files();

	let default = mp3hash::mp3hash(files.tagged.path(), HashOptions::new()).unwrap();
	for block_size in [1, 1000, 4096, 1 << 20] {
		let options = HashOptions::new().block_size(block_size);
		assert_eq!(
			mp3hash::mp3hash(files.tagged.path(), options).unwrap(),
			default,
			"block size: {block_size}"
		);
	}
}

#[test_log::test]
fn missing_file() {
	let dir = tempfile::tempdir().unwrap();

	let err = mp3hash::mp3hash(dir.path().join("missing.mp3"), HashOptions::new()).unwrap_err();

	let ErrorKind::Io(io_err) = err.kind() else {
		panic!("expected an IO error, got {err:?}");
	};
	assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
}

#[test_log::test]
fn overlapping_tags() {
	// Declares a 1000 byte tag in a 500 byte file
	let mut content = util::id3v2(3, 0, 0);
	content[6..10].copy_from_slice(&[0x00, 0x00, 0x07, 0x68]);
	content.extend(util::music(490));
	let file = util::temp_file(&content);

	// Nothing to hash
	let digest = mp3hash::mp3hash(file.path(), HashOptions::new()).unwrap();
	assert_eq!(digest, "da39a3ee5e6b4b0d3255bfef95601890afd80709");

	let err = mp3hash::mp3hash(
		file.path(),
		HashOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedTag(_)));
}
