// Copyright 2025 Gabriel Bjørnager Jensen.

use alloc::string::String;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// An encoding name was registered twice in the same direction.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct DuplicateNameError {
	/// The name that was already taken.
	pub name: String,
}

impl Display for DuplicateNameError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "encoding name \"{}\" is already registered", self.name)
	}
}

impl Error for DuplicateNameError { }
