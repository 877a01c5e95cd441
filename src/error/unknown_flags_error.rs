// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// Policy flags contained bits that name no switch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct UnknownFlagsError {
	/// The unknown bits.
	pub bits: u64,
}

impl Display for UnknownFlagsError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "policy flags contain unknown bits {:#018X}", self.bits)
	}
}

impl Error for UnknownFlagsError { }
