// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A code point has no encoding in the target unit width.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct UnrepresentableCharError {
	/// The input offset of the sequence that encoded the code point.
	pub offset: u64,

	/// The unrepresentable code point.
	pub code_point: u32,
}

impl Display for UnrepresentableCharError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "character U+{:04X} at offset ({}) is not representable in target encoding", self.code_point, self.offset)
	}
}

impl Error for UnrepresentableCharError { }
