// Copyright 2025 Gabriel Bjørnager Jensen.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A multi-octet sequence was interrupted.
///
/// Either an octet that is not a continuation octet appeared mid-sequence, or the input ended before the sequence was complete.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct InvalidContinuationByteError {
	/// The input offset of the offending octet.
	///
	/// For truncated sequences this is the offset at which the missing octet was expected.
	pub offset: u64,

	/// The offending octet, or [`None`] if the input ended.
	pub value: Option<u8>,

	/// The expected length of the sequence.
	pub sequence_len: u8,

	/// The zero-based position of the offending octet in the sequence.
	pub sequence_offset: u8,
}

impl InvalidContinuationByteError {
	/// Checks if the sequence was cut short by the end of input.
	#[inline(always)]
	#[must_use]
	pub const fn is_truncated(&self) -> bool {
		self.value.is_none()
	}
}

impl Display for InvalidContinuationByteError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self.value {
			Some(value) => write!(
				f,
				"found invalid continuation octet {value:#04X} at offset ({}) as octet ({}) of ({})-octet sequence",
				self.offset,
				self.sequence_offset,
				self.sequence_len,
			),

			None => write!(
				f,
				"input ended at offset ({}) after ({}) octets of ({})-octet sequence",
				self.offset,
				self.sequence_offset,
				self.sequence_len,
			),
		}
	}
}

impl Error for InvalidContinuationByteError { }
