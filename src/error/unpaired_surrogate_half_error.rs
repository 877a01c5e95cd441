// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A UTF-16 surrogate half was not part of a pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct UnpairedSurrogateHalfError {
	/// The input offset of the surrogate half.
	pub offset: u64,

	/// The surrogate half.
	pub half: u16,
}

impl UnpairedSurrogateHalfError {
	/// Names the half, i.e. `"high"`, `"low"`, or `"corrupt"` if the unit is not a surrogate at all.
	#[inline]
	#[must_use]
	pub const fn which(&self) -> &'static str {
		match self.half {
			0xD800..=0xDBFF => "high",
			0xDC00..=0xDFFF => "low",

			_ => "corrupt",
		}
	}
}

impl Display for UnpairedSurrogateHalfError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "found unpaired {} surrogate half {:#06X} at offset ({})", self.which(), self.half, self.offset)
	}
}

impl Error for UnpairedSurrogateHalfError { }
