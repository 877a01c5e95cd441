// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::policy::Flags;

use core::fmt::{self, Display, Formatter};

/// A category of malformed input.
///
/// Each category owns an independent group of [`Flags`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
	/// A code point has no encoding in the target unit width.
	UnrepresentableChar,

	/// A literal `U+FFFD` was found in the input.
	ReplacementCharInInput,

	/// A surrogate half was not part of a pair.
	UnpairedSurrogateHalf,

	/// A surrogate or out-of-range value was decoded.
	IllegalCodePoint,

	/// A sequence was longer than necessary for its value.
	OverlongEncoding,

	/// A surrogate pair was encoded as two separate sequences.
	DoublyEncoded,

	/// A multi-octet sequence was interrupted.
	InvalidContinuationByte,

	/// A continuation octet appeared without a lead octet.
	UnexpectedContinuationByte,

	/// An octet can never start a sequence.
	IllegalStartOfSequence,
}

impl Category {
	/// All categories, in the order of their flag groups.
	pub const ALL: [Self; 0x9] = [
		Self::UnrepresentableChar,
		Self::ReplacementCharInInput,
		Self::UnpairedSurrogateHalf,
		Self::IllegalCodePoint,
		Self::OverlongEncoding,
		Self::DoublyEncoded,
		Self::InvalidContinuationByte,
		Self::UnexpectedContinuationByte,
		Self::IllegalStartOfSequence,
	];

	/// Checks if anomalies of this category come in runs of consecutive octets.
	///
	/// Only these categories accept [`Switch::Repeat`].
	#[inline]
	#[must_use]
	pub const fn counts_runs(self) -> bool {
		matches!(
			self,
			Self::InvalidContinuationByte
			| Self::UnexpectedContinuationByte
			| Self::IllegalStartOfSequence,
		)
	}

	/// Gets the flag of one switch in this category's group.
	///
	/// [`Switch::Repeat`] yields an unnamed bit for categories that do not [count runs](Self::counts_runs); such a bit is never set in any preset.
	#[inline(always)]
	#[must_use]
	pub const fn flag(self, switch: Switch) -> Flags {
		let shift = self as u32 * Switch::COUNT;
		Flags::from_bits_retain((switch as u64) << shift)
	}

	/// Gets every named flag of this category's group.
	#[inline]
	#[must_use]
	pub const fn mask(self) -> Flags {
		let mut mask = self.flag(Switch::Report)
			.union(self.flag(Switch::Permanent))
			.union(self.flag(Switch::Substitute))
			.union(self.flag(Switch::High));

		if self.counts_runs() {
			mask = mask.union(self.flag(Switch::Repeat));
		}

		mask
	}

	/// Returns a human-readable name of the category.
	#[inline]
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::UnrepresentableChar        => "unrepresentable character",
			Self::ReplacementCharInInput     => "replacement character in input",
			Self::UnpairedSurrogateHalf      => "unpaired surrogate half",
			Self::IllegalCodePoint           => "illegal code point",
			Self::OverlongEncoding           => "overlong encoding",
			Self::DoublyEncoded              => "doubly encoded surrogate pair",
			Self::InvalidContinuationByte    => "invalid continuation octet",
			Self::UnexpectedContinuationByte => "unexpected continuation octet",
			Self::IllegalStartOfSequence     => "illegal start of sequence",
		}
	}
}

impl Display for Category {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// One independently configurable behaviour of a category.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u64)]
pub enum Switch {
	/// Produce a diagnostic at all.
	Report = 0b00001,

	/// Make a reported diagnostic permanent instead of transient.
	Permanent = 0b00010,

	/// Substitute a replacement unit for the malformed input.
	Substitute = 0b00100,

	/// Use the all-ones unit as the replacement when `U+FFFD` does not fit the target unit.
	///
	/// Without this switch, such targets are substituted with a null unit.
	High = 0b01000,

	/// Report every offending octet of a malformed run, not only the first.
	Repeat = 0b10000,
}

impl Switch {
	/// The amount of bits reserved per category.
	pub const COUNT: u32 = 0x5;
}
