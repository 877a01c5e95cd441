// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::CharUnit;
use crate::error::CodecError;

/// A streaming transcoder from `S` units into `T` units.
///
/// One codec instance processes exactly one logical stream through strictly sequential calls to [`transcode`](Self::transcode).
/// It is restarted, whether for a new stream or after a seek in the current one, using [`restart`](Self::restart).
///
/// Codecs are pure: They perform no I/O, never block, and only buffer a bounded handful of units beyond the slices passed by the caller.
pub trait Codec<S: CharUnit, T: CharUnit> {
	/// Transcodes as much of `src` as fits into `dst`.
	///
	/// The unconsumed remainder of `src` is passed again, together with a fresh `dst`, to continue the stream.
	/// A sequence left incomplete at the end of `src` is retained by the codec unless `at_eof` is set, in which case it is malformed.
	///
	/// A transient diagnostic ends the call early so that the caller can observe the exact progress up to the anomaly.
	/// A permanent diagnostic is returned on this and every later call, which then neither consume nor produce anything.
	fn transcode(&mut self, src: &[S], dst: &mut [T], at_eof: bool) -> Transcoded;

	/// Discards all transient and latched state and resets the input offset.
	///
	/// The offset is the absolute position of the next input unit, e.g. `0x0` for a new stream.
	fn restart(&mut self, offset: u64);
}

/// The progress of a single [`transcode`](Codec::transcode) call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct Transcoded {
	/// The amount of units irrevocably consumed from the front of the source.
	pub consumed: usize,

	/// The amount of units irrevocably written to the front of the destination.
	pub produced: usize,

	/// The diagnostic that ended the call, if any.
	pub error: Option<CodecError>,
}

impl Transcoded {
	/// Constructs the result of a call on a codec that has latched a permanent diagnostic.
	#[inline(always)]
	pub const fn failed(error: CodecError) -> Self {
		Self {
			consumed: 0x0,
			produced: 0x0,
			error:    Some(error),
		}
	}

	/// Checks if the call ended without a diagnostic.
	#[inline(always)]
	#[must_use]
	pub const fn is_ok(&self) -> bool {
		self.error.is_none()
	}

	/// Converts the diagnostic into a result.
	///
	/// # Errors
	///
	/// If the call ended with a diagnostic, then that diagnostic is returned.
	#[inline]
	pub const fn result(&self) -> Result<(), CodecError> {
		match self.error {
			Some(e) => Err(e),
			None    => Ok(()),
		}
	}
}
