// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use textenc::Replacement;
use textenc::error::{
	CodecError,
	InvalidContinuationByteError,
	OverlongEncodingError,
	UnknownFlagsError,
	UnknownPresetError,
};
use textenc::policy::{
	Category,
	DefaultPolicy,
	Flags,
	NarrowingPolicy,
	Preset,
	Response,
	Switch,
	Utf8DecodePolicy,
	WideningPolicy,
};

#[test]
fn test_category_flags() {
	assert_eq!(Category::UnrepresentableChar.flag(Switch::Report),             Flags::UNREPRESENTABLE_CHAR_REPORT);
	assert_eq!(Category::ReplacementCharInInput.flag(Switch::Substitute),      Flags::REPLACEMENT_CHAR_IN_INPUT_SUBSTITUTE);
	assert_eq!(Category::UnpairedSurrogateHalf.flag(Switch::High),             Flags::UNPAIRED_SURROGATE_HALF_HIGH);
	assert_eq!(Category::IllegalCodePoint.flag(Switch::Permanent),             Flags::ILLEGAL_CODE_POINT_PERMANENT);
	assert_eq!(Category::OverlongEncoding.flag(Switch::Permanent),             Flags::OVERLONG_ENCODING_PERMANENT);
	assert_eq!(Category::DoublyEncoded.flag(Switch::Report),                   Flags::DOUBLY_ENCODED_REPORT);
	assert_eq!(Category::InvalidContinuationByte.flag(Switch::Repeat),         Flags::INVALID_CONTINUATION_BYTE_REPEAT);
	assert_eq!(Category::UnexpectedContinuationByte.flag(Switch::Substitute),  Flags::UNEXPECTED_CONTINUATION_BYTE_SUBSTITUTE);
	assert_eq!(Category::IllegalStartOfSequence.flag(Switch::Repeat),          Flags::ILLEGAL_START_OF_SEQUENCE_REPEAT);

	let mut all = Flags::empty();

	for category in Category::ALL {
		let mask = category.mask();

		// Groups never overlap.
		assert!(!all.intersects(mask));
		all |= mask;

		let len = if category.counts_runs() { 0x5 } else { 0x4 };
		assert_eq!(mask.bits().count_ones(), len);
	}

	assert_eq!(all, Flags::all());
}

#[test]
fn test_presets() {
	for category in Category::ALL {
		let strict    = Flags::STRICT;
		let secure    = Flags::SECURE;
		let lax       = Flags::LAX;
		let negligent = Flags::NEGLIGENT;

		assert!(strict.is_set(category, Switch::Report));
		assert!(strict.is_set(category, Switch::Permanent));
		assert!(strict.is_set(category, Switch::Substitute));

		let latches = matches!(category, Category::OverlongEncoding | Category::DoublyEncoded);

		assert!(secure.is_set(category, Switch::Report));
		assert_eq!(secure.is_set(category, Switch::Permanent), latches);
		assert!(secure.is_set(category, Switch::Substitute));

		assert!(lax.is_set(category, Switch::Report));
		assert!(!lax.is_set(category, Switch::Permanent));
		assert!(lax.is_set(category, Switch::Substitute));

		assert!(!negligent.is_set(category, Switch::Report));
		assert!(negligent.is_set(category, Switch::Substitute));

		for flags in [strict, secure, lax, negligent] {
			assert!(!flags.is_set(category, Switch::High));
			assert!(!flags.is_set(category, Switch::Repeat));
		}
	}

	assert_eq!(Flags::default(), Flags::SECURE);
	assert_eq!(DefaultPolicy::default(), DefaultPolicy::SECURE);
}

#[test]
fn test_preset_names() {
	for preset in [Preset::Strict, Preset::Secure, Preset::Lax, Preset::Negligent] {
		assert_eq!(preset.name().parse(), Ok(preset));
		assert_eq!(Flags::from(preset), preset.flags());
	}

	assert_eq!("SeCuRe".parse(), Ok(Preset::Secure));
	assert_eq!("paranoid".parse::<Preset>(), Err(UnknownPresetError));
	assert_eq!("".parse::<Preset>(), Err(UnknownPresetError));

	assert_eq!(Preset::default(), Preset::Secure);
	assert_eq!(DefaultPolicy::from(Preset::Lax), DefaultPolicy::LAX);
}

#[test]
fn test_flags_from_bits() {
	let bits = Flags::LAX.bits();
	assert_eq!(Flags::try_from(bits), Ok(Flags::LAX));

	// Bit 4 is the unnamed repeat switch of the
	// first category.
	let bits = Flags::LAX.bits() | 0x1 << 0x4 | 0x1 << 0x3F;
	assert_eq!(Flags::try_from(bits), Err(UnknownFlagsError { bits: 0x1 << 0x4 | 0x1 << 0x3F }));
}

#[test]
fn test_flags_modifiers() {
	let flags = Flags::STRICT.dropping();

	assert!(flags.is_set(Category::OverlongEncoding, Switch::Report));
	assert!(!flags.is_set(Category::OverlongEncoding, Switch::Substitute));

	let flags = Flags::STRICT.ignoring();

	assert!(!flags.is_set(Category::OverlongEncoding, Switch::Report));
	assert!(flags.is_set(Category::OverlongEncoding, Switch::Substitute));

	assert_eq!(Flags::LAX.ignoring(), Flags::NEGLIGENT);
}

#[test]
fn test_default_policy_response() {
	let e = CodecError::from(OverlongEncodingError { offset: 0x2, code_point: 0x2F, encoded_len: 0x2 });

	let r: Response<u32> = DefaultPolicy::SECURE.overlong_encoding(0x2, 0x2F, 0x2);

	assert_eq!(r.replacement, Replacement::one(0xFFFD));
	assert_eq!(r.error, Some(e));
	assert!(r.permanent);

	let r: Response<u32> = DefaultPolicy::LAX.overlong_encoding(0x2, 0x2F, 0x2);

	assert_eq!(r.error, Some(e));
	assert!(!r.permanent);

	let r: Response<u32> = DefaultPolicy::NEGLIGENT.overlong_encoding(0x2, 0x2F, 0x2);

	assert_eq!(r, Response::substitute(0xFFFD));

	let r: Response<u32> = DefaultPolicy::new(Flags::empty()).overlong_encoding(0x2, 0x2F, 0x2);

	assert_eq!(r, Response::ignore());
	assert!(r.replacement.is_empty());
}

#[test]
fn test_default_policy_runs() {
	let e = InvalidContinuationByteError {
		offset:          0x1,
		value:           Some(0x41),
		sequence_len:    0x2,
		sequence_offset: 0x1,
	};

	let mut policy = DefaultPolicy::SECURE;

	let r: Response<u16> = policy.invalid_continuation_byte(0x1, Some(0x41), 0x2, 0x1, true);
	assert_eq!(r.error, Some(e.into()));

	let r: Response<u16> = policy.invalid_continuation_byte(0x1, Some(0x41), 0x2, 0x1, false);
	assert_eq!(r.error, None);
	assert_eq!(r.replacement, [0xFFFD]);

	policy.flags |= Flags::INVALID_CONTINUATION_BYTE_REPEAT;

	let r: Response<u16> = policy.invalid_continuation_byte(0x1, Some(0x41), 0x2, 0x1, false);
	assert_eq!(r.error, Some(e.into()));
}

#[test]
fn test_default_policy_replacement_unit() {
	let mut policy = DefaultPolicy::SECURE;

	assert_eq!(policy.replacement_unit::<u32>(Category::IllegalCodePoint), 0xFFFD);
	assert_eq!(policy.replacement_unit::<u16>(Category::IllegalCodePoint), 0xFFFD);
	assert_eq!(policy.replacement_unit::<u8>(Category::IllegalCodePoint),  0x00);

	let r: Response<u8> = policy.unrepresentable_char(0x0, 0x20AC);
	assert_eq!(r.replacement, [0x00]);

	policy.flags |= Flags::UNREPRESENTABLE_CHAR_HIGH;

	assert_eq!(policy.replacement_unit::<u8>(Category::UnrepresentableChar), 0xFF);
	assert_eq!(policy.replacement_unit::<u8>(Category::IllegalCodePoint),    0x00);

	let r: Response<u8> = policy.unrepresentable_char(0x0, 0x20AC);
	assert_eq!(r.replacement, [0xFF]);

	let r: Response<u8> = policy.replacement_char_in_input(0x0);
	assert_eq!(r.replacement, [0x00]);
}

#[test]
fn test_preset_serde() {
	#[cfg(feature = "serde")]
	{
		use serde_test::{assert_de_tokens_error, assert_tokens, Token};

		assert_tokens(
			&Preset::Negligent,
			&[
				Token::Str("negligent"),
			],
		);

		assert_de_tokens_error::<Preset>(
			&[
				Token::Str("paranoid"),
			],
			"expected one of `strict`, `secure`, `lax`, or `negligent`",
		);
	}
}

#[test]
fn test_flags_serde() {
	#[cfg(feature = "serde")]
	{
		use serde_test::{assert_tokens, Token};

		assert_tokens(
			&(Flags::OVERLONG_ENCODING_REPORT | Flags::OVERLONG_ENCODING_PERMANENT),
			&[
				Token::Str("OVERLONG_ENCODING_REPORT | OVERLONG_ENCODING_PERMANENT"),
			],
		);
	}
}

#[test]
fn test_flags_oct() {
	#[cfg(feature = "oct")]
	{
		use oct::decode::{Decode, Input};

		let data = Flags::OVERLONG_ENCODING_REPORT.bits().to_le_bytes();

		let mut input = Input::new(&data);
		assert_eq!(Flags::decode(&mut input), Ok(Flags::OVERLONG_ENCODING_REPORT));

		let data = u64::MAX.to_le_bytes();

		let mut input = Input::new(&data);
		assert_eq!(Flags::decode(&mut input), Err(UnknownFlagsError { bits: !Flags::all().bits() }));
	}
}
