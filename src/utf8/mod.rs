// Copyright 2025 Gabriel Bjørnager Jensen.

//! UTF-8 codecs.


mod decoder;
mod encoder;

pub use decoder::Utf8Decoder;
pub use encoder::Utf8Encoder;

/// The replacement character `U+FFFD`.
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// The greatest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// The smallest value that needs a sequence of the indexed length.
///
/// A sequence encoding anything less is overlong.
pub(crate) const MIN_SEQUENCE_VALUE: [u32; 0x5] = [0x0, 0x0, 0x80, 0x800, 0x10000];

/// Gets the sequence length announced by a lead octet.
///
/// Returns [`None`] for continuation octets and for leads that can never start a well-formed sequence, i.e. those of five- and six-octet sequences and four-octet leads past `0xF4`.
#[inline]
#[must_use]
pub(crate) const fn sequence_len(lead: u8) -> Option<u8> {
	// The amount of leading ones directly denotes the
	// length of multi-octet sequences.

	match lead.leading_ones() {
		0x0 => Some(0x1),

		0x2 | 0x3 => Some(lead.leading_ones() as u8),

		// Anything past `0xF4` would encode a value
		// greater than `U+10FFFF`.
		0x4 if lead <= 0xF4 => Some(0x4),

		_ => None,
	}
}

/// Gets the payload bits of a lead octet.
#[inline(always)]
#[must_use]
pub(crate) const fn lead_bits(lead: u8, len: u8) -> u32 {
	let mask = 0xFF_u8 >> (len + 0x1);
	(lead & mask) as u32
}

/// Gets the amount of octets needed to encode a code point in UTF-8.
///
/// Values past `U+10FFFF` have no encoding, for which null is returned.
#[inline]
#[must_use]
pub const fn utf8_len(code_point: u32) -> u8 {
	match code_point {
		0x00000..=0x0007F => 0x1,
		0x00080..=0x007FF => 0x2,
		0x00800..=0x0FFFF => 0x3,
		0x10000..=0x10FFFF => 0x4,

		_ => 0x0,
	}
}

/// Combines a UTF-16 surrogate pair into the code point it encodes.
///
/// Returns [`None`] if `high` and `low` are not a high and a low half, respectively.
#[inline]
#[must_use]
pub const fn combine_surrogates(high: u16, low: u16) -> Option<u32> {
	if high & 0xFC00 != 0xD800 || low & 0xFC00 != 0xDC00 {
		return None;
	}

	let high = (high & 0x03FF) as u32;
	let low  = (low  & 0x03FF) as u32;

	Some(0x10000 + (high << 0xA | low))
}

/// Splits a supplementary code point into a UTF-16 surrogate pair.
///
/// Returns [`None`] if the code point is not within `U+10000` to `U+10FFFF`.
#[inline]
#[must_use]
pub const fn split_surrogates(code_point: u32) -> Option<(u16, u16)> {
	if code_point < 0x10000 || code_point > MAX_CODE_POINT {
		return None;
	}

	let v = code_point - 0x10000;

	let high = 0xD800 | (v >> 0xA) as u16;
	let low  = 0xDC00 | (v & 0x03FF) as u16;

	Some((high, low))
}

/// Encodes a code point into UTF-8.
///
/// The code point is not validated beyond its length.
/// Values past `U+10FFFF` yield an empty slice.
#[inline]
#[must_use]
pub(crate) fn encode_utf8(code_point: u32, buf: &mut [u8; 0x4]) -> &[u8] {
	let len = utf8_len(code_point);

	let c = code_point;

	match len {
		0x1 => {
			buf[0x0] = c as u8;
		}

		0x2 => {
			buf[0x0] = 0xC0 | (c >> 0x6) as u8;
			buf[0x1] = 0x80 | (c & 0x3F) as u8;
		}

		0x3 => {
			buf[0x0] = 0xE0 | (c >> 0xC) as u8;
			buf[0x1] = 0x80 | (c >> 0x6 & 0x3F) as u8;
			buf[0x2] = 0x80 | (c & 0x3F) as u8;
		}

		0x4 => {
			buf[0x0] = 0xF0 | (c >> 0x12) as u8;
			buf[0x1] = 0x80 | (c >> 0xC & 0x3F) as u8;
			buf[0x2] = 0x80 | (c >> 0x6 & 0x3F) as u8;
			buf[0x3] = 0x80 | (c & 0x3F) as u8;
		}

		_ => { }
	}

	&buf[..usize::from(len)]
}
