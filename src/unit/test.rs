// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use textenc::{CharUnit, UnitKind};

#[test]
fn test_unit_kind() {
	assert_eq!(<u8  as CharUnit>::KIND, UnitKind::Byte);
	assert_eq!(<u16 as CharUnit>::KIND, UnitKind::CodeUnit16);
	assert_eq!(<u32 as CharUnit>::KIND, UnitKind::CodePoint32);

	assert_eq!(UnitKind::Byte.bits(),        0x08);
	assert_eq!(UnitKind::CodeUnit16.bits(),  0x10);
	assert_eq!(UnitKind::CodePoint32.bits(), 0x20);
}

#[test]
fn test_unit_truncation() {
	assert_eq!(<u8  as CharUnit>::from_u32(0xFFFD), 0xFD);
	assert_eq!(<u16 as CharUnit>::from_u32(0x1F4A9), 0xF4A9);
	assert_eq!(<u32 as CharUnit>::from_u32(0x1F4A9), 0x1F4A9);

	assert!(!<u8  as CharUnit>::holds(0xFFFD));
	assert!( <u16 as CharUnit>::holds(0xFFFD));
	assert!(!<u16 as CharUnit>::holds(0x10000));
	assert!( <u32 as CharUnit>::holds(0x10FFFF));
}
