// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// An octet can never start a UTF-8 sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct IllegalStartOfSequenceError {
	/// The input offset of the octet.
	pub offset: u64,

	/// The octet.
	pub value: u8,
}

impl Display for IllegalStartOfSequenceError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "octet {:#04X} at offset ({}) is an illegal start of utf-8 sequence", self.value, self.offset)
	}
}

impl Error for IllegalStartOfSequenceError { }
