// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::utf8::combine_surrogates;

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A supplementary code point was encoded as two separately encoded surrogate halves.
///
/// This is how CESU-8 (and "modified UTF-8") represent such characters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct DoublyEncodedError {
	/// The input offset of the first sequence (the high half).
	pub offset: u64,

	/// The high surrogate half.
	pub high: u16,

	/// The low surrogate half.
	pub low: u16,
}

impl DoublyEncodedError {
	/// Gets the code point that the two halves jointly encode.
	#[inline(always)]
	#[must_use]
	pub const fn code_point(&self) -> Option<u32> {
		combine_surrogates(self.high, self.low)
	}
}

impl Display for DoublyEncodedError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "found doubly encoded ")?;

		if let Some(c) = self.code_point() {
			write!(f, "U+{c:04X} ")?;
		}

		write!(f, "as surrogate halves {:#06X} and {:#06X} at offset ({})", self.high, self.low, self.offset)
	}
}

impl Error for DoublyEncodedError { }
