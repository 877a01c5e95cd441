// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// The input contained a literal replacement character (`U+FFFD`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct ReplacementCharInInputError {
	/// The input offset of the replacement character.
	pub offset: u64,
}

impl Display for ReplacementCharInInputError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "found replacement character U+FFFD in input at offset ({})", self.offset)
	}
}

impl Error for ReplacementCharInInputError { }
