// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::CharUnit;
use crate::error::{
	CodecError,
	DoublyEncodedError,
	IllegalCodePointError,
	IllegalStartOfSequenceError,
	InvalidContinuationByteError,
	OverlongEncodingError,
	ReplacementCharInInputError,
	UnexpectedContinuationByteError,
	UnpairedSurrogateHalfError,
	UnrepresentableCharError,
};
use crate::policy::{
	Category,
	Flags,
	NarrowingPolicy,
	Preset,
	Response,
	Switch,
	Utf8DecodePolicy,
	WideningPolicy,
};
use crate::utf8::REPLACEMENT_CHARACTER;

/// Flag-driven policy.
///
/// Each category is handled according to its own group of [`Flags`]:
///
/// * With [`Switch::Report`], a diagnostic is reported (for run-counting categories only on the first octet of a run unless [`Switch::Repeat`] is also set);
/// * With [`Switch::Permanent`], that diagnostic is latched;
/// * With [`Switch::Substitute`], one replacement unit is output.
///
/// The replacement unit is `U+FFFD` where the target can hold it.
/// Otherwise, it is the null unit, or the all-ones unit with [`Switch::High`].
///
/// # Examples
///
/// ```rust
/// use textenc::policy::{DefaultPolicy, Preset, Utf8DecodePolicy};
///
/// let mut policy = DefaultPolicy::from(Preset::Secure);
///
/// let response: textenc::policy::Response<u16> = policy.overlong_encoding(0x0, 0x2F, 0x2);
///
/// assert!(response.error.is_some());
/// assert!(response.permanent);
/// assert_eq!(response.replacement, [0xFFFD]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DefaultPolicy {
	/// The flags driving the policy.
	pub flags: Flags,
}

impl DefaultPolicy {
	/// See [`Flags::STRICT`].
	pub const STRICT: Self = Self::new(Flags::STRICT);

	/// See [`Flags::SECURE`].
	pub const SECURE: Self = Self::new(Flags::SECURE);

	/// See [`Flags::LAX`].
	pub const LAX: Self = Self::new(Flags::LAX);

	/// See [`Flags::NEGLIGENT`].
	pub const NEGLIGENT: Self = Self::new(Flags::NEGLIGENT);

	/// Constructs a new policy from flags.
	#[inline(always)]
	#[must_use]
	pub const fn new(flags: Flags) -> Self {
		Self { flags }
	}

	/// Gets the unit substituted for anomalies of the given category.
	#[inline]
	#[must_use]
	pub fn replacement_unit<U: CharUnit>(&self, category: Category) -> U {
		if U::holds(REPLACEMENT_CHARACTER) {
			U::from_u32(REPLACEMENT_CHARACTER)
		} else if self.flags.is_set(category, Switch::High) {
			U::from_u32(U::MAX)
		} else {
			U::default()
		}
	}

	fn respond<U: CharUnit>(&self, category: Category, first_in_run: bool, error: CodecError) -> Response<U> {
		let mut response = if self.flags.is_set(category, Switch::Substitute) {
			Response::substitute(self.replacement_unit(category))
		} else {
			Response::ignore()
		};

		let report = self.flags.is_set(category, Switch::Report)
			&& (first_in_run || self.flags.is_set(category, Switch::Repeat));

		if report {
			let permanent = self.flags.is_set(category, Switch::Permanent);
			response = response.with_error(error, permanent);
		}

		response
	}
}

impl From<Flags> for DefaultPolicy {
	#[inline(always)]
	fn from(value: Flags) -> Self {
		Self::new(value)
	}
}

impl From<Preset> for DefaultPolicy {
	#[inline(always)]
	fn from(value: Preset) -> Self {
		Self::new(value.flags())
	}
}

impl<U: CharUnit> NarrowingPolicy<U> for DefaultPolicy {
	#[inline]
	fn unrepresentable_char(&mut self, offset: u64, code_point: u32) -> Response<U> {
		let e = UnrepresentableCharError { offset, code_point };
		self.respond(Category::UnrepresentableChar, true, e.into())
	}
}

impl<U: CharUnit> WideningPolicy<U> for DefaultPolicy {
	#[inline]
	fn replacement_char_in_input(&mut self, offset: u64) -> Response<U> {
		let e = ReplacementCharInInputError { offset };
		self.respond(Category::ReplacementCharInInput, true, e.into())
	}

	#[inline]
	fn unpaired_surrogate_half(&mut self, offset: u64, half: u16) -> Response<U> {
		let e = UnpairedSurrogateHalfError { offset, half };
		self.respond(Category::UnpairedSurrogateHalf, true, e.into())
	}

	#[inline]
	fn illegal_code_point(&mut self, offset: u64, code_point: u32) -> Response<U> {
		let e = IllegalCodePointError { offset, code_point };
		self.respond(Category::IllegalCodePoint, true, e.into())
	}
}

impl<U: CharUnit> Utf8DecodePolicy<U> for DefaultPolicy {
	#[inline]
	fn overlong_encoding(&mut self, offset: u64, code_point: u32, encoded_len: u8) -> Response<U> {
		let e = OverlongEncodingError { offset, code_point, encoded_len };
		self.respond(Category::OverlongEncoding, true, e.into())
	}

	#[inline]
	fn doubly_encoded(&mut self, offset: u64, high: u16, low: u16) -> Response<U> {
		let e = DoublyEncodedError { offset, high, low };
		self.respond(Category::DoublyEncoded, true, e.into())
	}

	#[inline]
	fn invalid_continuation_byte(
		&mut self,
		offset:          u64,
		value:           Option<u8>,
		sequence_len:    u8,
		sequence_offset: u8,
		first_in_run:    bool,
	) -> Response<U> {
		let e = InvalidContinuationByteError { offset, value, sequence_len, sequence_offset };
		self.respond(Category::InvalidContinuationByte, first_in_run, e.into())
	}

	#[inline]
	fn unexpected_continuation_byte(&mut self, offset: u64, value: u8, first_in_run: bool) -> Response<U> {
		let e = UnexpectedContinuationByteError { offset, value };
		self.respond(Category::UnexpectedContinuationByte, first_in_run, e.into())
	}

	#[inline]
	fn illegal_start_of_sequence(&mut self, offset: u64, value: u8, first_in_run: bool) -> Response<U> {
		let e = IllegalStartOfSequenceError { offset, value };
		self.respond(Category::IllegalStartOfSequence, first_in_run, e.into())
	}
}
