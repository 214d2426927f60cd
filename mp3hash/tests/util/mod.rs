#![allow(dead_code)]

use mp3hash::id3::v2::synchsafe::SynchsafeInteger;

use std::io::Write;

use tempfile::NamedTempFile;

/// Deterministic pseudo-random "MPEG frames"
pub fn music(len: usize) -> Vec<u8> {
	let mut state = 0x2545_F491_u32;
	let mut music: Vec<u8> = (0..len)
		.map(|_| {
			state ^= state << 13;
			state ^= state >> 17;
			state ^= state << 5;
			state as u8
		})
		.collect();

	// Frame sync, so the music never looks like an ID3v2 header
	music[..2].copy_from_slice(&[0xFF, 0xFB]);

	// Never look like an ID3v1 tag either
	if len >= 128 {
		music[len - 128] = 0;
	}
	if len >= 355 {
		music[len - 355] = 0;
	}

	music
}

pub fn id3v2(version: u8, flags: u8, size: u32) -> Vec<u8> {
	let mut tag = b"ID3".to_vec();
	tag.extend([version, 0x00, flags]);
	tag.extend(synch(size));

	// Some frame-like content
	tag.extend(b"TIT2");
	tag.resize(10 + size as usize, b'x');
	tag
}

pub fn id3v2_extended_header(size: u32, crc: bool, padding: u32) -> Vec<u8> {
	let mut header = synch(size).to_vec();
	header.extend([if crc { 0x08 } else { 0x00 }, 0x00]);
	header.extend(synch(padding));

	let crc_size = if crc { 4 } else { 0 };
	header.resize(10 + (size + crc_size + padding) as usize, 0);
	header
}

pub fn id3v1(title: &str) -> Vec<u8> {
	let mut tag = b"TAG".to_vec();
	tag.extend(title.as_bytes());
	tag.resize(128, 0);
	tag
}

pub fn id3v1_extended(title: &str) -> Vec<u8> {
	let mut tag = b"TAG+".to_vec();
	tag.extend(title.as_bytes());
	tag.resize(227, 0);
	tag
}

/// `music` wrapped in every kind of tag
pub fn fully_tagged(music: &[u8]) -> Vec<u8> {
	let mut content = id3v2(3, 0x40, 2048);
	content.extend(id3v2_extended_header(6, true, 300));
	content.extend(music);
	content.extend(id3v1_extended("An extended title"));
	content.extend(id3v1("A title"));
	content
}

pub fn temp_file(content: &[u8]) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(content).unwrap();
	file.flush().unwrap();
	file
}

pub fn synch(size: u32) -> [u8; 4] {
	size.synch().unwrap().to_be_bytes()
}
