// Shorthand for return Err(Mp3HashError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(Mp3HashError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(Mp3HashError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::Mp3HashError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::Mp3HashError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

pub(crate) use err;
