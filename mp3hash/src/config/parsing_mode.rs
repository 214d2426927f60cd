/// How strictly to treat tags whose declared sizes don't fit in the file
///
/// ID3 tags are located purely by their magic bytes and declared sizes. A damaged file may declare an
/// ID3v2 tag that reaches past the start of its ID3v1 tag (or past the end of the file entirely),
/// leaving no room for any music.
///
/// # Examples
///
/// ```rust,no_run
/// use mp3hash::config::{HashOptions, ParsingMode};
///
/// # fn main() -> mp3hash::error::Result<()> {
/// // We want to know about broken files instead of hashing nothing
/// let options = HashOptions::new().parsing_mode(ParsingMode::Strict);
/// let digest = mp3hash::mp3hash("foo.mp3", options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on inconsistent tag sizes
	///
	/// If the music would start after it ends, detection fails with
	/// [`ErrorKind::MalformedTag`](crate::error::ErrorKind::MalformedTag).
	Strict,
	/// Default mode, clamps inconsistent tag sizes
	///
	/// If the music would start after it ends, the start is moved to the end, producing an empty
	/// music range. Hashing such a file yields the digest of zero bytes.
	#[default]
	BestAttempt,
}
