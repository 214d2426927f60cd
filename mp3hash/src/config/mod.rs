//! Various configuration options to control mp3hash

mod hash_options;
mod parsing_mode;

pub use hash_options::HashOptions;
pub use parsing_mode::ParsingMode;
