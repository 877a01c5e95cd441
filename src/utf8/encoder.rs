// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::{CharUnit, Codec, Transcoded, UnitKind, Units};
use crate::error::CodecError;
use crate::policy::{DefaultPolicy, Response, WideningPolicy};
use crate::utf8::{MAX_CODE_POINT, REPLACEMENT_CHARACTER, combine_surrogates, encode_utf8};

use core::marker::PhantomData;

/// Enough octets for a full replacement of four code points.
const QUEUE_LEN: usize = 0x10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
	Ready,

	/// A high surrogate half has been consumed.
	High { half: u16, offset: u64 },

	Failed(CodecError),
}

/// Streaming UTF-8 encoder.
///
/// Encodes units of type `S` into octets:
///
/// * [`u32`] provides code points, of which surrogates and values past `U+10FFFF` are [illegal](WideningPolicy::illegal_code_point);
/// * [`u16`] provides UTF-16, of which lone surrogate halves are [unpaired](WideningPolicy::unpaired_surrogate_half);
/// * [`u8`] provides code points up to `U+00FF` (i.e. ISO 8859-1).
///
/// The policy `P` substitutes *code points*, which are then encoded like any other.
/// The input offsets of diagnostics count `S` units.
///
/// # Examples
///
/// ```rust
/// use textenc::{Codec, Utf8Encoder};
///
/// let mut encoder = Utf8Encoder::<u16>::new();
/// let mut buf     = [0x00; 0x8];
///
/// let r = encoder.transcode(&[0x0041, 0xD83D, 0xDCA9], &mut buf, true);
///
/// assert!(r.is_ok());
/// assert_eq!(&buf[..r.produced], b"A\xF0\x9F\x92\xA9");
/// ```
#[derive(Clone, Debug)]
pub struct Utf8Encoder<S: CharUnit, P = DefaultPolicy> {
	policy: P,

	state:  State,
	offset: u64,
	queue:  Units<u8, QUEUE_LEN>,

	_unit: PhantomData<fn() -> S>,
}

impl<S: CharUnit> Utf8Encoder<S> {
	/// Constructs a new encoder using the secure default policy.
	#[inline]
	#[must_use]
	pub fn new() -> Self {
		Self::with_policy(DefaultPolicy::SECURE)
	}
}

impl<S: CharUnit, P: WideningPolicy<u32>> Utf8Encoder<S, P> {
	/// Constructs a new encoder using the provided policy.
	#[inline]
	#[must_use]
	pub fn with_policy(policy: P) -> Self {
		Self {
			policy,

			state:  State::Ready,
			offset: 0x0,
			queue:  Units::new(),

			_unit: PhantomData,
		}
	}

	/// Gets the input offset of the next unit.
	#[inline(always)]
	#[must_use]
	pub const fn offset(&self) -> u64 {
		self.offset
	}

	/// Gets the latched permanent diagnostic, if any.
	#[inline]
	#[must_use]
	pub const fn failure(&self) -> Option<CodecError> {
		match self.state {
			State::Failed(e) => Some(e),

			_ => None,
		}
	}

	/// Borrows the policy.
	#[inline(always)]
	#[must_use]
	pub const fn policy(&self) -> &P {
		&self.policy
	}

	/// Mutably borrows the policy.
	#[inline(always)]
	#[must_use]
	pub const fn policy_mut(&mut self) -> &mut P {
		&mut self.policy
	}

	fn flush(&mut self, dst: &mut [u8], produced: &mut usize) -> bool {
		while !self.queue.is_empty() {
			let Some(slot) = dst.get_mut(*produced) else {
				return false;
			};

			if let Some(octet) = self.queue.pop_front() {
				*slot = octet;
				*produced += 0x1;
			}
		}

		true
	}

	/// Queues the encoding of a code point.
	///
	/// The queue is always empty when a unit is consumed, and a full replacement always fits.
	fn emit(&mut self, code_point: u32) {
		let mut buf = [0x00; 0x4];
		let octets = encode_utf8(code_point, &mut buf);

		let r = self.queue.extend_from_slice(octets);
		debug_assert!(r.is_ok(), "utf-8 encoder queue overflowed");
	}

	fn settle(&mut self, response: Response<u32>) -> Result<(), CodecError> {
		let Response { replacement, error, permanent } = response;

		for &code_point in replacement.as_slice() {
			self.emit(code_point);
		}

		match error {
			Some(e) if permanent => {
				#[cfg(feature = "log")]
				log::debug!("utf-8 encoder latched permanent error: {e}");

				self.state = State::Failed(e);
				Err(e)
			}

			Some(e) => Err(e),

			None => Ok(()),
		}
	}

	fn step(&mut self, unit: S) -> Result<(), CodecError> {
		let value = unit.to_u32();

		if let State::High { half, offset } = self.state {
			self.state = State::Ready;

			// The current unit is only consumed if it
			// completes the pair.

			let Some(code_point) = u16::try_from(value).ok().and_then(|low| combine_surrogates(half, low)) else {
				let r = self.policy.unpaired_surrogate_half(offset, half);
				return self.settle(r);
			};

			self.offset += 0x1;
			self.emit(code_point);

			return Ok(());
		}

		let offset = self.offset;
		self.offset += 0x1;

		let is_utf16 = S::KIND == UnitKind::CodeUnit16;

		let r = match value {
			0xD800..=0xDBFF if is_utf16 => {
				self.state = State::High { half: value as u16, offset };
				return Ok(());
			}

			0xDC00..=0xDFFF if is_utf16 => self.policy.unpaired_surrogate_half(offset, value as u16),

			0xD800..=0xDFFF => self.policy.illegal_code_point(offset, value),

			REPLACEMENT_CHARACTER => self.policy.replacement_char_in_input(offset),

			c if c > MAX_CODE_POINT => self.policy.illegal_code_point(offset, c),

			c => {
				self.emit(c);
				return Ok(());
			}
		};

		self.settle(r)
	}

	fn finish(&mut self) -> Option<Result<(), CodecError>> {
		let State::High { half, offset } = self.state else {
			return None;
		};

		self.state = State::Ready;

		let r = self.policy.unpaired_surrogate_half(offset, half);
		Some(self.settle(r))
	}
}

impl<S: CharUnit, P: WideningPolicy<u32>> Codec<S, u8> for Utf8Encoder<S, P> {
	fn transcode(&mut self, src: &[S], dst: &mut [u8], at_eof: bool) -> Transcoded {
		if let State::Failed(e) = self.state {
			return Transcoded::failed(e);
		}

		let mut consumed = 0x0;
		let mut produced = 0x0;

		loop {
			if !self.flush(dst, &mut produced) {
				break;
			}

			let before = self.offset;

			let r = match src.get(consumed) {
				Some(&unit) if produced < dst.len() => self.step(unit),

				None if at_eof => match self.finish() {
					Some(r) => r,
					None    => break,
				},

				_ => break,
			};

			consumed += (self.offset - before) as usize;

			if let Err(e) = r {
				self.flush(dst, &mut produced);

				return Transcoded {
					consumed,
					produced,
					error: Some(e),
				};
			}
		}

		Transcoded {
			consumed,
			produced,
			error: None,
		}
	}

	fn restart(&mut self, offset: u64) {
		self.state  = State::Ready;
		self.offset = offset;
		self.queue.clear();
	}
}

impl<S: CharUnit, P: Default + WideningPolicy<u32>> Default for Utf8Encoder<S, P> {
	#[inline]
	fn default() -> Self {
		Self::with_policy(P::default())
	}
}
