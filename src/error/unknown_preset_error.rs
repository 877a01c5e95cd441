// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A policy preset name was not recognised.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct UnknownPresetError;

impl Display for UnknownPresetError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "expected one of `strict`, `secure`, `lax`, or `negligent`")
	}
}

impl Error for UnknownPresetError { }
