// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::utf8::utf8_len;

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A code point was encoded using more octets than necessary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct OverlongEncodingError {
	/// The input offset of the sequence's first octet.
	pub offset: u64,

	/// The encoded code point.
	pub code_point: u32,

	/// The length of the offending sequence.
	pub encoded_len: u8,
}

impl Display for OverlongEncodingError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(
			f,
			"found overlong encoding of U+{:04X} at offset ({}) as ({}) octets instead of ({})",
			self.code_point,
			self.offset,
			self.encoded_len,
			utf8_len(self.code_point),
		)
	}
}

impl Error for OverlongEncodingError { }
