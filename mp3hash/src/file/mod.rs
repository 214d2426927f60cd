//! Locating the music within a tagged file

mod music_range;
mod tagged_file;

pub use music_range::MusicRange;
pub use tagged_file::TaggedFile;
