// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A continuation octet appeared outside of a multi-octet sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct UnexpectedContinuationByteError {
	/// The input offset of the octet.
	pub offset: u64,

	/// The octet.
	pub value: u8,
}

impl Display for UnexpectedContinuationByteError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "found unexpected continuation octet {:#04X} at offset ({})", self.value, self.offset)
	}
}

impl Error for UnexpectedContinuationByteError { }
