// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::error::{
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
use crate::policy::Category;

use core::convert::Infallible;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A diagnostic returned by a codec.
///
/// Every variant wraps an immutable record of the anomaly, including the input offset at which it occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub enum CodecError {
	/// See [`UnrepresentableCharError`].
	UnrepresentableChar(UnrepresentableCharError),

	/// See [`ReplacementCharInInputError`].
	ReplacementCharInInput(ReplacementCharInInputError),

	/// See [`UnpairedSurrogateHalfError`].
	UnpairedSurrogateHalf(UnpairedSurrogateHalfError),

	/// See [`IllegalCodePointError`].
	IllegalCodePoint(IllegalCodePointError),

	/// See [`OverlongEncodingError`].
	OverlongEncoding(OverlongEncodingError),

	/// See [`DoublyEncodedError`].
	DoublyEncoded(DoublyEncodedError),

	/// See [`InvalidContinuationByteError`].
	InvalidContinuationByte(InvalidContinuationByteError),

	/// See [`UnexpectedContinuationByteError`].
	UnexpectedContinuationByte(UnexpectedContinuationByteError),

	/// See [`IllegalStartOfSequenceError`].
	IllegalStartOfSequence(IllegalStartOfSequenceError),
}

impl CodecError {
	/// Gets the input offset at which the anomaly occurred.
	#[inline]
	#[must_use]
	pub const fn offset(&self) -> u64 {
		match *self {
			Self::UnrepresentableChar(ref e)        => e.offset,
			Self::ReplacementCharInInput(ref e)     => e.offset,
			Self::UnpairedSurrogateHalf(ref e)      => e.offset,
			Self::IllegalCodePoint(ref e)           => e.offset,
			Self::OverlongEncoding(ref e)           => e.offset,
			Self::DoublyEncoded(ref e)              => e.offset,
			Self::InvalidContinuationByte(ref e)    => e.offset,
			Self::UnexpectedContinuationByte(ref e) => e.offset,
			Self::IllegalStartOfSequence(ref e)     => e.offset,
		}
	}

	/// Gets the error category of the anomaly.
	#[inline]
	#[must_use]
	pub const fn category(&self) -> Category {
		match *self {
			Self::UnrepresentableChar(_)        => Category::UnrepresentableChar,
			Self::ReplacementCharInInput(_)     => Category::ReplacementCharInInput,
			Self::UnpairedSurrogateHalf(_)      => Category::UnpairedSurrogateHalf,
			Self::IllegalCodePoint(_)           => Category::IllegalCodePoint,
			Self::OverlongEncoding(_)           => Category::OverlongEncoding,
			Self::DoublyEncoded(_)              => Category::DoublyEncoded,
			Self::InvalidContinuationByte(_)    => Category::InvalidContinuationByte,
			Self::UnexpectedContinuationByte(_) => Category::UnexpectedContinuationByte,
			Self::IllegalStartOfSequence(_)     => Category::IllegalStartOfSequence,
		}
	}
}

impl Display for CodecError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			Self::UnrepresentableChar(ref e)        => Display::fmt(e, f),
			Self::ReplacementCharInInput(ref e)     => Display::fmt(e, f),
			Self::UnpairedSurrogateHalf(ref e)      => Display::fmt(e, f),
			Self::IllegalCodePoint(ref e)           => Display::fmt(e, f),
			Self::OverlongEncoding(ref e)           => Display::fmt(e, f),
			Self::DoublyEncoded(ref e)              => Display::fmt(e, f),
			Self::InvalidContinuationByte(ref e)    => Display::fmt(e, f),
			Self::UnexpectedContinuationByte(ref e) => Display::fmt(e, f),
			Self::IllegalStartOfSequence(ref e)     => Display::fmt(e, f),
		}
	}
}

impl Error for CodecError {
	#[inline]
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		let e: &(dyn Error + 'static) = match *self {
			Self::UnrepresentableChar(ref e)        => e,
			Self::ReplacementCharInInput(ref e)     => e,
			Self::UnpairedSurrogateHalf(ref e)      => e,
			Self::IllegalCodePoint(ref e)           => e,
			Self::OverlongEncoding(ref e)           => e,
			Self::DoublyEncoded(ref e)              => e,
			Self::InvalidContinuationByte(ref e)    => e,
			Self::UnexpectedContinuationByte(ref e) => e,
			Self::IllegalStartOfSequence(ref e)     => e,
		};

		Some(e)
	}
}

impl From<Infallible> for CodecError {
	#[inline(always)]
	fn from(_value: Infallible) -> Self {
		unreachable!()
	}
}

macro_rules! impl_from {
	{ $($variant:ident($ty:ty)),+$(,)? } => {
		$(
			impl From<$ty> for CodecError {
				#[inline(always)]
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)+
	};
}

impl_from! {
	UnrepresentableChar(UnrepresentableCharError),
	ReplacementCharInInput(ReplacementCharInInputError),
	UnpairedSurrogateHalf(UnpairedSurrogateHalfError),
	IllegalCodePoint(IllegalCodePointError),
	OverlongEncoding(OverlongEncodingError),
	DoublyEncoded(DoublyEncodedError),
	InvalidContinuationByte(InvalidContinuationByteError),
	UnexpectedContinuationByte(UnexpectedContinuationByteError),
	IllegalStartOfSequence(IllegalStartOfSequenceError),
}
