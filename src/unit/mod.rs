// Copyright 2025 Gabriel Bjørnager Jensen.

mod test;

use core::fmt::Debug;
use core::hash::Hash;

/// The width of a character unit.
///
/// Only these three widths ever occur in a stream, which is why the set is closed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UnitKind {
	/// An 8-bit octet.
	Byte,

	/// A 16-bit code unit with UTF-16 semantics.
	CodeUnit16,

	/// A 32-bit code point.
	///
	/// Values of this width may transiently hold surrogates or values past `U+10FFFF` before they are validated.
	CodePoint32,
}

impl UnitKind {
	/// Returns the width of the unit in bits.
	#[inline(always)]
	#[must_use]
	pub const fn bits(self) -> u32 {
		match self {
			Self::Byte        => 0x08,
			Self::CodeUnit16  => 0x10,
			Self::CodePoint32 => 0x20,
		}
	}
}

mod sealed {
	pub trait Sealed { }

	impl Sealed for u8  { }
	impl Sealed for u16 { }
	impl Sealed for u32 { }
}

/// A character unit that streams are made of.
///
/// This trait is sealed and is implemented for exactly [`u8`], [`u16`], and [`u32`].
pub trait CharUnit: Copy + Debug + Default + Eq + Hash + Send + Sync + sealed::Sealed + 'static {
	/// The kind of unit.
	const KIND: UnitKind;

	/// The greatest value a single unit can hold, i.e. its all-ones bit pattern.
	const MAX: u32;

	/// Truncates a value into a unit.
	///
	/// Bits above the unit's width are discarded.
	#[must_use]
	fn from_u32(value: u32) -> Self;

	/// Widens the unit into a value.
	#[must_use]
	fn to_u32(self) -> u32;

	/// Checks if `value` fits into a single unit without truncation.
	#[inline(always)]
	#[must_use]
	fn holds(value: u32) -> bool {
		value <= Self::MAX
	}
}

impl CharUnit for u8 {
	const KIND: UnitKind = UnitKind::Byte;

	const MAX: u32 = u8::MAX as u32;

	#[inline(always)]
	fn from_u32(value: u32) -> Self {
		value as Self
	}

	#[inline(always)]
	fn to_u32(self) -> u32 {
		self.into()
	}
}

impl CharUnit for u16 {
	const KIND: UnitKind = UnitKind::CodeUnit16;

	const MAX: u32 = u16::MAX as u32;

	#[inline(always)]
	fn from_u32(value: u32) -> Self {
		value as Self
	}

	#[inline(always)]
	fn to_u32(self) -> u32 {
		self.into()
	}
}

impl CharUnit for u32 {
	const KIND: UnitKind = UnitKind::CodePoint32;

	const MAX: u32 = u32::MAX;

	#[inline(always)]
	fn from_u32(value: u32) -> Self {
		value
	}

	#[inline(always)]
	fn to_u32(self) -> u32 {
		self
	}
}
