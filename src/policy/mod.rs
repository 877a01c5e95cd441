// Copyright 2025 Gabriel Bjørnager Jensen.

//! Error-condition policies.
//!
//! A codec consults its policy on every malformed input it encounters.
//! The policy decides which units (if any) are substituted for the input, whether a diagnostic is reported, and whether that diagnostic poisons the codec for the rest of the stream.
//!
//! The crate provides one flag-driven implementation, [`DefaultPolicy`], configured by [`Flags`] or one of the named [`Preset`]s.
//! Callers may supply their own implementation without touching the codecs.

mod test;

mod category;
mod default;
mod flags;
mod serde;

pub use category::{Category, Switch};
pub use default::DefaultPolicy;
pub use flags::{Flags, Preset};

use crate::{CharUnit, Replacement};
use crate::error::CodecError;

/// The verdict of a policy on one anomaly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct Response<U: CharUnit> {
	/// The units to output in place of the malformed input.
	///
	/// These are queued ahead of any further output.
	pub replacement: Replacement<U>,

	/// The diagnostic to report, if any.
	pub error: Option<CodecError>,

	/// Whether the diagnostic is latched for the remainder of the stream.
	///
	/// This has no effect if `error` is [`None`].
	pub permanent: bool,
}

impl<U: CharUnit> Response<U> {
	/// Drops the malformed input silently.
	#[inline]
	pub fn ignore() -> Self {
		Self {
			replacement: Replacement::new(),
			error:       None,
			permanent:   false,
		}
	}

	/// Substitutes a single unit silently.
	#[inline]
	pub fn substitute(unit: U) -> Self {
		Self {
			replacement: Replacement::one(unit),
			error:       None,
			permanent:   false,
		}
	}

	/// Adds a diagnostic to the response.
	#[inline]
	pub fn with_error<E: Into<CodecError>>(mut self, error: E, permanent: bool) -> Self {
		self.error     = Some(error.into());
		self.permanent = permanent;

		self
	}
}

impl<U: CharUnit> Default for Response<U> {
	#[inline(always)]
	fn default() -> Self {
		Self::ignore()
	}
}

/// Anomalies of codecs whose target cannot hold every code point.
pub trait NarrowingPolicy<U: CharUnit> {
	/// A code point has no encoding in the target unit width.
	fn unrepresentable_char(&mut self, offset: u64, code_point: u32) -> Response<U>;
}

/// Anomalies of codecs that validate code points.
pub trait WideningPolicy<U: CharUnit> {
	/// A literal `U+FFFD` was found in the input.
	fn replacement_char_in_input(&mut self, offset: u64) -> Response<U>;

	/// A surrogate half was not part of a pair.
	fn unpaired_surrogate_half(&mut self, offset: u64, half: u16) -> Response<U>;

	/// A surrogate or out-of-range value was decoded.
	fn illegal_code_point(&mut self, offset: u64, code_point: u32) -> Response<U>;
}

/// Anomalies of UTF-8 decoders.
///
/// The `first_in_run` parameters tell whether the offending octet opens a run of malformed octets, or whether it continues a run that has already been reported on.
pub trait Utf8DecodePolicy<U: CharUnit>: NarrowingPolicy<U> + WideningPolicy<U> {
	/// A code point was encoded using more octets than necessary.
	///
	/// `offset` denotes the start of the sequence.
	fn overlong_encoding(&mut self, offset: u64, code_point: u32, encoded_len: u8) -> Response<U>;

	/// A surrogate pair was encoded as two separate three-octet sequences.
	///
	/// `offset` denotes the start of the first sequence.
	/// The replacement may well be the properly combined code point.
	fn doubly_encoded(&mut self, offset: u64, high: u16, low: u16) -> Response<U>;

	/// A multi-octet sequence was interrupted by `value`, or by the end of input if `value` is [`None`].
	fn invalid_continuation_byte(
		&mut self,
		offset:          u64,
		value:           Option<u8>,
		sequence_len:    u8,
		sequence_offset: u8,
		first_in_run:    bool,
	) -> Response<U>;

	/// A continuation octet appeared without a lead octet.
	fn unexpected_continuation_byte(&mut self, offset: u64, value: u8, first_in_run: bool) -> Response<U>;

	/// An octet can never start a sequence.
	fn illegal_start_of_sequence(&mut self, offset: u64, value: u8, first_in_run: bool) -> Response<U>;
}
