/// The size of an ID3v1 tag
pub const ID3V1_SIZE: u64 = 128;
/// The size of an extended ID3v1 tag
pub const ID3V1_EXTENDED_SIZE: u64 = 227;

/// The magic bytes at the start of an ID3v1 tag
pub const ID3V1_TAG_MARKER: [u8; 3] = *b"TAG";
/// The magic bytes at the start of an extended ID3v1 tag
pub const ID3V1_EXTENDED_TAG_MARKER: [u8; 4] = *b"TAG+";
