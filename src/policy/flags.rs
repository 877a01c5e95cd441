// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::error::{UnknownFlagsError, UnknownPresetError};
use crate::policy::{Category, Switch};

use bitflags::bitflags;
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

#[cfg(feature = "oct")]
use oct::{
	decode::{self, Decode},
	encode::{self, Encode, SizedEncode},
};

bitflags! {
	/// Configuration of the [default policy](crate::policy::DefaultPolicy).
	///
	/// Every [`Category`] owns a group of five bits, one per [`Switch`].
	/// The named constants below are exactly those bits, while composite masks and the presets are found in the inherent associated constants (e.g. [`SECURE`](Self::SECURE)).
	#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
	pub struct Flags: u64 {
		const UNREPRESENTABLE_CHAR_REPORT     = 0x1 << 0x00;
		const UNREPRESENTABLE_CHAR_PERMANENT  = 0x1 << 0x01;
		const UNREPRESENTABLE_CHAR_SUBSTITUTE = 0x1 << 0x02;
		const UNREPRESENTABLE_CHAR_HIGH       = 0x1 << 0x03;

		const REPLACEMENT_CHAR_IN_INPUT_REPORT     = 0x1 << 0x05;
		const REPLACEMENT_CHAR_IN_INPUT_PERMANENT  = 0x1 << 0x06;
		const REPLACEMENT_CHAR_IN_INPUT_SUBSTITUTE = 0x1 << 0x07;
		const REPLACEMENT_CHAR_IN_INPUT_HIGH       = 0x1 << 0x08;

		const UNPAIRED_SURROGATE_HALF_REPORT     = 0x1 << 0x0A;
		const UNPAIRED_SURROGATE_HALF_PERMANENT  = 0x1 << 0x0B;
		const UNPAIRED_SURROGATE_HALF_SUBSTITUTE = 0x1 << 0x0C;
		const UNPAIRED_SURROGATE_HALF_HIGH       = 0x1 << 0x0D;

		const ILLEGAL_CODE_POINT_REPORT     = 0x1 << 0x0F;
		const ILLEGAL_CODE_POINT_PERMANENT  = 0x1 << 0x10;
		const ILLEGAL_CODE_POINT_SUBSTITUTE = 0x1 << 0x11;
		const ILLEGAL_CODE_POINT_HIGH       = 0x1 << 0x12;

		const OVERLONG_ENCODING_REPORT     = 0x1 << 0x14;
		const OVERLONG_ENCODING_PERMANENT  = 0x1 << 0x15;
		const OVERLONG_ENCODING_SUBSTITUTE = 0x1 << 0x16;
		const OVERLONG_ENCODING_HIGH       = 0x1 << 0x17;

		const DOUBLY_ENCODED_REPORT     = 0x1 << 0x19;
		const DOUBLY_ENCODED_PERMANENT  = 0x1 << 0x1A;
		const DOUBLY_ENCODED_SUBSTITUTE = 0x1 << 0x1B;
		const DOUBLY_ENCODED_HIGH       = 0x1 << 0x1C;

		const INVALID_CONTINUATION_BYTE_REPORT     = 0x1 << 0x1E;
		const INVALID_CONTINUATION_BYTE_PERMANENT  = 0x1 << 0x1F;
		const INVALID_CONTINUATION_BYTE_SUBSTITUTE = 0x1 << 0x20;
		const INVALID_CONTINUATION_BYTE_HIGH       = 0x1 << 0x21;
		const INVALID_CONTINUATION_BYTE_REPEAT     = 0x1 << 0x22;

		const UNEXPECTED_CONTINUATION_BYTE_REPORT     = 0x1 << 0x23;
		const UNEXPECTED_CONTINUATION_BYTE_PERMANENT  = 0x1 << 0x24;
		const UNEXPECTED_CONTINUATION_BYTE_SUBSTITUTE = 0x1 << 0x25;
		const UNEXPECTED_CONTINUATION_BYTE_HIGH       = 0x1 << 0x26;
		const UNEXPECTED_CONTINUATION_BYTE_REPEAT     = 0x1 << 0x27;

		const ILLEGAL_START_OF_SEQUENCE_REPORT     = 0x1 << 0x28;
		const ILLEGAL_START_OF_SEQUENCE_PERMANENT  = 0x1 << 0x29;
		const ILLEGAL_START_OF_SEQUENCE_SUBSTITUTE = 0x1 << 0x2A;
		const ILLEGAL_START_OF_SEQUENCE_HIGH       = 0x1 << 0x2B;
		const ILLEGAL_START_OF_SEQUENCE_REPEAT     = 0x1 << 0x2C;
	}
}

impl Flags {
	/// Every category reports its anomalies.
	pub const ALL_REPORT: Self = Self::every(Switch::Report);

	/// Every category reports permanently, given that it reports at all.
	pub const ALL_PERMANENT: Self = Self::every(Switch::Permanent);

	/// Every category substitutes its malformed input.
	pub const ALL_SUBSTITUTE: Self = Self::every(Switch::Substitute);

	/// Every category substitutes with the all-ones unit when `U+FFFD` does not fit.
	pub const ALL_HIGH: Self = Self::every(Switch::High);

	/// Every run-counting category reports each octet of a run.
	pub const ALL_REPEAT: Self = Self::every(Switch::Repeat);

	/// Every category is permanent and substitutes.
	pub const STRICT: Self = Self::ALL_REPORT
		.union(Self::ALL_PERMANENT)
		.union(Self::ALL_SUBSTITUTE);

	/// Every category is transient and substitutes, except that overlong and doubly encoded sequences are permanent.
	///
	/// Those two forms are classic means of smuggling characters past validation.
	pub const SECURE: Self = Self::ALL_REPORT
		.union(Self::ALL_SUBSTITUTE)
		.union(Self::OVERLONG_ENCODING_PERMANENT)
		.union(Self::DOUBLY_ENCODED_PERMANENT);

	/// Every category is transient and substitutes.
	pub const LAX: Self = Self::ALL_REPORT.union(Self::ALL_SUBSTITUTE);

	/// Every category silently substitutes.
	pub const NEGLIGENT: Self = Self::ALL_SUBSTITUTE;

	#[must_use]
	const fn every(switch: Switch) -> Self {
		let mut this = Self::empty();

		let mut i = 0x0;
		while i < Category::ALL.len() {
			let category = Category::ALL[i];

			if !matches!(switch, Switch::Repeat) || category.counts_runs() {
				this = this.union(category.flag(switch));
			}

			i += 0x1;
		}

		this
	}

	/// Clears every substitution switch, making all categories drop their malformed input.
	#[inline(always)]
	#[must_use]
	pub const fn dropping(self) -> Self {
		self.difference(Self::ALL_SUBSTITUTE)
	}

	/// Clears every report switch, making all categories ignore their anomalies.
	#[inline(always)]
	#[must_use]
	pub const fn ignoring(self) -> Self {
		self.difference(Self::ALL_REPORT)
	}

	/// Checks if a switch is set for a category.
	#[inline(always)]
	#[must_use]
	pub const fn is_set(self, category: Category, switch: Switch) -> bool {
		self.contains(category.flag(switch))
	}
}

impl Default for Flags {
	#[inline(always)]
	fn default() -> Self {
		Self::SECURE
	}
}

impl From<Preset> for Flags {
	#[inline(always)]
	fn from(value: Preset) -> Self {
		value.flags()
	}
}

impl TryFrom<u64> for Flags {
	type Error = UnknownFlagsError;

	#[inline]
	fn try_from(value: u64) -> Result<Self, Self::Error> {
		Self::from_bits(value).ok_or(UnknownFlagsError {
			bits: value & !Self::all().bits(),
		})
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl Decode for Flags {
	type Error = UnknownFlagsError;

	/// Decodes the flags from their 64-bit integer representation.
	///
	/// Bits that do not name a flag are rejected.
	#[inline]
	fn decode(input: &mut decode::Input) -> Result<Self, Self::Error> {
		let Ok(bits) = <u64 as Decode>::decode(input);

		Self::try_from(bits)
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl Encode for Flags {
	type Error = <u64 as Encode>::Error;

	/// Encodes using the same format as <code>&lt;[u64] as Encode&gt;::encode</code>.
	#[inline]
	fn encode(&self, output: &mut encode::Output) -> Result<(), Self::Error> {
		self.bits().encode(output)
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl SizedEncode for Flags {
	const MAX_ENCODED_SIZE: usize = u64::MAX_ENCODED_SIZE;
}

/// A named composition of [`Flags`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Preset {
	/// See [`Flags::STRICT`].
	Strict,

	/// See [`Flags::SECURE`].
	#[default]
	Secure,

	/// See [`Flags::LAX`].
	Lax,

	/// See [`Flags::NEGLIGENT`].
	Negligent,
}

impl Preset {
	/// Gets the flags of the preset.
	#[inline]
	#[must_use]
	pub const fn flags(self) -> Flags {
		match self {
			Self::Strict    => Flags::STRICT,
			Self::Secure    => Flags::SECURE,
			Self::Lax       => Flags::LAX,
			Self::Negligent => Flags::NEGLIGENT,
		}
	}

	/// Gets the lowercase name of the preset.
	#[inline]
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Strict    => "strict",
			Self::Secure    => "secure",
			Self::Lax       => "lax",
			Self::Negligent => "negligent",
		}
	}
}

impl Display for Preset {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Preset {
	type Err = UnknownPresetError;

	/// Parses a preset name, ignoring ASCII case.
	#[inline]
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		[Self::Strict, Self::Secure, Self::Lax, Self::Negligent]
			.into_iter()
			.find(|preset| preset.name().eq_ignore_ascii_case(s))
			.ok_or(UnknownPresetError)
	}
}
