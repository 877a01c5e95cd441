// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A value in the surrogate range or past `U+10FFFF` was decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct IllegalCodePointError {
	/// The input offset of the sequence that encoded the value.
	pub offset: u64,

	/// The illegal value.
	pub code_point: u32,
}

impl Display for IllegalCodePointError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "found illegal code point U+{:04X} at offset ({})", self.code_point, self.offset)
	}
}

impl Error for IllegalCodePointError { }
