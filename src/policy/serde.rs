// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(feature = "serde")]

use crate::policy::{Flags, Preset};

use core::fmt::{self, Formatter};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

#[derive(Debug, Default)]
struct PresetVisitor;

impl Visitor<'_> for PresetVisitor {
	type Value = Preset;

	#[inline]
	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		write!(formatter, "the name of a policy preset")
	}

	#[inline]
	fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
		v.parse().map_err(E::custom)
	}
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for Preset {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_str(PresetVisitor)
	}
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Preset {
	#[inline]
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.name())
	}
}

/// Uses the textual `bitflags` format (e.g. `"OVERLONG_ENCODING_REPORT | OVERLONG_ENCODING_PERMANENT"`) for human-readable formats, and the plain integer otherwise.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for Flags {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		bitflags::serde::deserialize(deserializer)
	}
}

/// See the [`Deserialize`] implementation.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Flags {
	#[inline]
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		bitflags::serde::serialize(self, serializer)
	}
}
