// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::{CharUnit, Codec, Replacement, Transcoded, UnitKind};
use crate::error::CodecError;
use crate::policy::{DefaultPolicy, Response, Utf8DecodePolicy};
use crate::utf8::{
	MAX_CODE_POINT,
	MIN_SEQUENCE_VALUE,
	REPLACEMENT_CHARACTER,
	lead_bits,
	sequence_len,
	split_surrogates,
};

use core::marker::PhantomData;

/// The state of the decoder between two octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
	/// Expecting the lead octet of a sequence.
	Ready,

	/// Expecting a continuation octet.
	///
	/// `pos` is the amount of continuation octets consumed so far.
	InSequence { len: u8, pos: u8 },

	/// A permanent diagnostic has been latched.
	Failed(CodecError),
}

/// A decoded high surrogate waiting to see whether a doubly encoded low half follows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct HeldHigh {
	half:   u16,
	offset: u64,
}

/// Streaming UTF-8 decoder.
///
/// Decodes octets into units of type `U`:
///
/// * [`u32`] receives code points;
/// * [`u16`] receives UTF-16, with supplementary code points split into surrogate pairs;
/// * [`u8`] receives code points up to `U+00FF`, with anything greater being [unrepresentable](crate::policy::NarrowingPolicy::unrepresentable_char).
///
/// Every anomaly is handed to the policy `P`, which by default is the [secure](DefaultPolicy::SECURE) [`DefaultPolicy`].
///
/// # Examples
///
/// ```rust
/// use textenc::{Codec, Utf8Decoder};
///
/// let mut decoder = Utf8Decoder::<u16>::new();
/// let mut buf     = [0x0000; 0x8];
///
/// let r = decoder.transcode(b"A\xE2\x82\xAC\xF0\x9F\x92\xA9", &mut buf, true);
///
/// assert!(r.is_ok());
/// assert_eq!(r.consumed, 0x8);
/// assert_eq!(&buf[..r.produced], [0x0041, 0x20AC, 0xD83D, 0xDCA9]);
/// ```
#[derive(Clone, Debug)]
pub struct Utf8Decoder<U: CharUnit, P = DefaultPolicy> {
	policy: P,

	state:   State,
	partial: u32,
	start:   u64,
	offset:  u64,
	in_run:  bool,

	held_high: Option<HeldHigh>,
	low_half:  Option<u16>,
	queue:     Replacement<U>,

	_unit: PhantomData<fn() -> U>,
}

impl<U: CharUnit> Utf8Decoder<U> {
	/// Constructs a new decoder using the secure default policy.
	#[inline]
	#[must_use]
	pub fn new() -> Self {
		Self::with_policy(DefaultPolicy::SECURE)
	}
}

impl<U: CharUnit, P: Utf8DecodePolicy<U>> Utf8Decoder<U, P> {
	/// Constructs a new decoder using the provided policy.
	#[inline]
	#[must_use]
	pub fn with_policy(policy: P) -> Self {
		Self {
			policy,

			state:   State::Ready,
			partial: 0x0,
			start:   0x0,
			offset:  0x0,
			in_run:  false,

			held_high: None,
			low_half:  None,
			queue:     Replacement::new(),

			_unit: PhantomData,
		}
	}

	/// Gets the input offset of the next octet.
	///
	/// This equals the restart offset plus the amount of octets consumed since.
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

	/// Checks if the decoder is in the middle of a sequence.
	///
	/// This includes a decoded high surrogate that might yet be followed by its low half.
	#[inline]
	#[must_use]
	pub const fn is_pending(&self) -> bool {
		matches!(self.state, State::InSequence { .. }) || self.held_high.is_some()
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

	/// Destructs the decoder into its policy.
	#[inline(always)]
	#[must_use]
	pub fn into_policy(self) -> P {
		self.policy
	}

	/// Writes the pending low half and the replacement queue into `dst`.
	///
	/// Returns `false` if `dst` filled up before everything could be written.
	fn flush(&mut self, dst: &mut [U], produced: &mut usize) -> bool {
		if let Some(low) = self.low_half {
			let Some(slot) = dst.get_mut(*produced) else {
				return false;
			};

			*slot = U::from_u32(low.into());
			*produced += 0x1;

			self.low_half = None;
		}

		while !self.queue.is_empty() {
			let Some(slot) = dst.get_mut(*produced) else {
				return false;
			};

			if let Some(unit) = self.queue.pop_front() {
				*slot = unit;
				*produced += 0x1;
			}
		}

		true
	}

	/// Applies the verdict of the policy.
	///
	/// The replacement queue is always empty when the policy is consulted.
	fn settle(&mut self, response: Response<U>) -> Result<(), CodecError> {
		debug_assert!(self.queue.is_empty(), "policy consulted with units still queued");

		let Response { replacement, error, permanent } = response;

		self.queue = replacement;

		match error {
			Some(e) if permanent => {
				#[cfg(feature = "log")]
				log::debug!("utf-8 decoder latched permanent error: {e}");

				self.state = State::Failed(e);
				Err(e)
			}

			Some(e) => Err(e),

			None => Ok(()),
		}
	}

	/// Reports a held high surrogate as illegal.
	///
	/// This is done as soon as it is certain that no low half follows.
	fn release_high(&mut self) -> Result<(), CodecError> {
		let Some(high) = self.held_high.take() else {
			return Ok(());
		};

		let r = self.policy.illegal_code_point(high.offset, high.half.into());
		self.settle(r)
	}

	/// Marks the current octet as one of a malformed run.
	///
	/// Returns whether it is the first octet of that run.
	#[inline(always)]
	fn enter_run(&mut self) -> bool {
		let first = !self.in_run;
		self.in_run = true;

		first
	}

	/// Handles one octet in the current state.
	///
	/// The octet is consumed by advancing `offset`, which the caller tracks.
	fn step(&mut self, octet: u8, dst: &mut [U], produced: &mut usize) -> Result<(), CodecError> {
		match self.state {
			State::Ready => self.lead(octet, dst, produced),

			State::InSequence { len, pos } => self.continuation(octet, len, pos, dst, produced),

			State::Failed(e) => Err(e),
		}
	}

	fn lead(&mut self, octet: u8, dst: &mut [U], produced: &mut usize) -> Result<(), CodecError> {
		// Only another three-octet sequence starting
		// with `0xED` can encode the low half of a held
		// high surrogate.

		if self.held_high.is_some() && octet != 0xED {
			return self.release_high();
		}

		let offset = self.offset;

		if octet & 0b11000000 == 0b10000000 {
			self.offset += 0x1;

			let first = self.enter_run();

			let r = self.policy.unexpected_continuation_byte(offset, octet, first);
			return self.settle(r);
		}

		match sequence_len(octet) {
			Some(0x1) => {
				self.offset += 0x1;
				self.in_run  = false;

				self.write(octet.into(), dst, produced);
				Ok(())
			}

			Some(len) => {
				self.offset += 0x1;

				self.state   = State::InSequence { len, pos: 0x0 };
				self.partial = lead_bits(octet, len);
				self.start   = offset;

				Ok(())
			}

			None => {
				self.offset += 0x1;

				let first = self.enter_run();

				let r = self.policy.illegal_start_of_sequence(offset, octet, first);
				self.settle(r)
			}
		}
	}

	fn continuation(
		&mut self,
		octet:    u8,
		len:      u8,
		pos:      u8,
		dst:      &mut [U],
		produced: &mut usize,
	) -> Result<(), CodecError> {
		let is_continuation = octet & 0b11000000 == 0b10000000;

		// A held high half is only followed by a low half
		// if the second octet is at least `0xB0`.

		if self.held_high.is_some() && !(is_continuation && (pos > 0x0 || octet >= 0xB0)) {
			return self.release_high();
		}

		if !is_continuation {
			// Abandon the sequence. The offending octet
			// is not consumed and will be reclassified
			// as a lead.

			self.state = State::Ready;

			let first = self.enter_run();

			let r = self.policy.invalid_continuation_byte(self.offset, Some(octet), len, pos + 0x1, first);
			return self.settle(r);
		}

		self.offset += 0x1;

		self.partial = self.partial << 0x6 | u32::from(octet & 0b00111111);

		let pos = pos + 0x1;

		if pos + 0x1 < len {
			self.state = State::InSequence { len, pos };
			return Ok(());
		}

		self.state  = State::Ready;
		self.in_run = false;

		self.complete(self.partial, len, dst, produced)
	}

	/// Validates and emits a fully assembled code point.
	fn complete(&mut self, code_point: u32, len: u8, dst: &mut [U], produced: &mut usize) -> Result<(), CodecError> {
		let offset = self.start;

		if code_point < MIN_SEQUENCE_VALUE[usize::from(len)] {
			let r = self.policy.overlong_encoding(offset, code_point, len);
			return self.settle(r);
		}

		let r = match code_point {
			0xD800..=0xDBFF => {
				// NOTE: Any previously held half has been
				// released by now.
				self.held_high = Some(HeldHigh {
					half: code_point as u16,
					offset,
				});

				return Ok(());
			}

			0xDC00..=0xDFFF => match self.held_high.take() {
				Some(high) => self.policy.doubly_encoded(high.offset, high.half, code_point as u16),

				None => self.policy.illegal_code_point(offset, code_point),
			},

			REPLACEMENT_CHARACTER => self.policy.replacement_char_in_input(offset),

			c if c > MAX_CODE_POINT => self.policy.illegal_code_point(offset, c),

			c if !U::holds(c) && U::KIND != UnitKind::CodeUnit16 => self.policy.unrepresentable_char(offset, c),

			c => {
				self.write(c, dst, produced);
				return Ok(());
			}
		};

		self.settle(r)
	}

	/// Writes a valid code point.
	///
	/// The caller guarantees room for at least one unit.
	/// The low half of a surrogate pair is parked if necessary.
	fn write(&mut self, code_point: u32, dst: &mut [U], produced: &mut usize) {
		let unit = match split_surrogates(code_point) {
			Some((high, low)) if U::KIND == UnitKind::CodeUnit16 => {
				self.low_half = Some(low);
				high.into()
			}

			_ => code_point,
		};

		dst[*produced] = U::from_u32(unit);
		*produced += 0x1;
	}

	/// Handles the end of input.
	///
	/// Returns [`None`] once nothing is left pending.
	fn finish(&mut self) -> Option<Result<(), CodecError>> {
		if self.held_high.is_some() {
			return Some(self.release_high());
		}

		let State::InSequence { len, pos } = self.state else {
			return None;
		};

		self.state = State::Ready;

		let first = self.enter_run();

		let r = self.policy.invalid_continuation_byte(self.offset, None, len, pos + 0x1, first);
		Some(self.settle(r))
	}
}

impl<U: CharUnit, P: Utf8DecodePolicy<U>> Codec<u8, U> for Utf8Decoder<U, P> {
	fn transcode(&mut self, src: &[u8], dst: &mut [U], at_eof: bool) -> Transcoded {
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
				Some(&octet) if produced < dst.len() => self.step(octet, dst, &mut produced),

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
		self.state   = State::Ready;
		self.partial = 0x0;
		self.start   = offset;
		self.offset  = offset;
		self.in_run  = false;

		self.held_high = None;
		self.low_half  = None;
		self.queue.clear();
	}
}

impl<U: CharUnit, P: Default + Utf8DecodePolicy<U>> Default for Utf8Decoder<U, P> {
	#[inline]
	fn default() -> Self {
		Self::with_policy(P::default())
	}
}
