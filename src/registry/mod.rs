// Copyright 2025 Gabriel Bjørnager Jensen.

//! Named encodings.
//!
//! Every direction (pair of source and target unit widths) has its own process-wide [`Registry`], mapping names to codec factories.
//! Registration is legal at any time and from any thread.
//! Taking a name twice is a configuration error and panics.


use crate::{CharUnit, Codec, Utf8Decoder, Utf8Encoder};
use crate::error::DuplicateNameError;

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};
use core::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, Once, PoisonError};

/// A boxed codec instance.
pub type BoxedCodec<S, T> = Box<dyn Codec<S, T> + Send>;

/// A zero-argument codec constructor.
pub type Factory<S, T> = fn() -> BoxedCodec<S, T>;

/// Octets to UTF-16.
pub static BYTE_TO_UNIT16: Registry<u8, u16> = Registry::new();

/// Octets to code points.
pub static BYTE_TO_POINT32: Registry<u8, u32> = Registry::new();

/// UTF-16 to octets.
pub static UNIT16_TO_BYTE: Registry<u16, u8> = Registry::new();

/// UTF-16 to code points.
pub static UNIT16_TO_POINT32: Registry<u16, u32> = Registry::new();

/// Code points to octets.
pub static POINT32_TO_BYTE: Registry<u32, u8> = Registry::new();

/// Code points to UTF-16.
pub static POINT32_TO_UNIT16: Registry<u32, u16> = Registry::new();

/// The identifier of a registered encoding.
///
/// Identifiers are only meaningful with the registry that issued them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EncodingId(NonZeroUsize);

impl EncodingId {
	#[inline(always)]
	#[must_use]
	const fn index(self) -> usize {
		self.0.get() - 0x1
	}

	/// Gets the raw, one-based value of the identifier.
	#[inline(always)]
	#[must_use]
	pub const fn get(self) -> usize {
		self.0.get()
	}
}

struct Entry<S: CharUnit, T: CharUnit> {
	names:   Vec<String>,
	factory: Factory<S, T>,
}

struct Inner<S: CharUnit, T: CharUnit> {
	entries: Vec<Entry<S, T>>,
	names:   BTreeMap<String, EncodingId>,
}

/// Insert-once table of codec factories for one direction.
pub struct Registry<S: CharUnit, T: CharUnit> {
	inner: Mutex<Inner<S, T>>,
}

impl<S: CharUnit, T: CharUnit> Registry<S, T> {
	/// Constructs a new, empty registry.
	#[inline]
	#[must_use]
	pub const fn new() -> Self {
		let inner = Inner {
			entries: Vec::new(),
			names:   BTreeMap::new(),
		};

		Self { inner: Mutex::new(inner) }
	}

	#[inline]
	fn lock(&self) -> MutexGuard<'_, Inner<S, T>> {
		// A panicking registrant never leaves the table
		// half-updated, so poison is ignored.
		self.inner.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Registers a factory under one or more names.
	///
	/// # Errors
	///
	/// If any of the names is already registered, then an error is returned and nothing is registered.
	pub fn try_register(&self, factory: Factory<S, T>, names: &[&str]) -> Result<EncodingId, DuplicateNameError> {
		let mut inner = self.lock();

		for (i, &name) in names.iter().enumerate() {
			if inner.names.contains_key(name) || names[..i].contains(&name) {
				return Err(DuplicateNameError { name: name.to_string() });
			}
		}

		let id = EncodingId(NonZeroUsize::MIN.saturating_add(inner.entries.len()));

		let names: Vec<String> = names.iter().map(|&name| name.to_string()).collect();

		for name in &names {
			inner.names.insert(name.clone(), id);
		}

		#[cfg(feature = "log")]
		log::debug!("registered encoding #{} as {names:?}", id.get());

		inner.entries.push(Entry { names, factory });

		Ok(id)
	}

	/// Registers a factory under one or more names.
	///
	/// # Panics
	///
	/// If any of the names is already registered, then this method will panic.
	#[track_caller]
	pub fn register(&self, factory: Factory<S, T>, names: &[&str]) -> EncodingId {
		match self.try_register(factory, names) {
			Ok(id) => id,

			Err(e) => panic!("cannot register encoding: {e}"),
		}
	}

	/// Looks up an encoding by name.
	#[must_use]
	pub fn lookup(&self, name: &str) -> Option<EncodingId> {
		self.lock().names.get(name).copied()
	}

	/// Gets the names of an encoding.
	#[must_use]
	pub fn names(&self, id: EncodingId) -> Option<Vec<String>> {
		self.lock()
			.entries
			.get(id.index())
			.map(|entry| entry.names.clone())
	}

	/// Gets the amount of registered encodings.
	#[must_use]
	pub fn len(&self) -> usize {
		self.lock().entries.len()
	}

	/// Checks if no encoding is registered.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0x0
	}

	/// Constructs a new codec of an encoding.
	#[must_use]
	pub fn create(&self, id: EncodingId) -> Option<BoxedCodec<S, T>> {
		// Don't hold the lock while calling out.
		let factory = self.lock().entries.get(id.index())?.factory;

		Some(factory())
	}

	/// Constructs a new codec of a named encoding.
	#[must_use]
	pub fn create_by_name(&self, name: &str) -> Option<BoxedCodec<S, T>> {
		let id = self.lookup(name)?;
		self.create(id)
	}
}

impl<S: CharUnit, T: CharUnit> Debug for Registry<S, T> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let inner = self.lock();

		f.debug_map()
			.entries(inner.names.iter())
			.finish()
	}
}

impl<S: CharUnit, T: CharUnit> Default for Registry<S, T> {
	#[inline(always)]
	fn default() -> Self {
		Self::new()
	}
}

/// The names under which the built-in codecs are registered.
pub const UTF8_NAMES: [&str; 0x2] = ["UTF-8", "utf8"];

/// Registers the built-in UTF-8 codecs.
///
/// The decoder is registered for octets to UTF-16 and to code points, and the encoder for UTF-16 and code points to octets, all under [`UTF8_NAMES`] and with the secure default policy.
///
/// Calling this function more than once has no further effect.
///
/// # Panics
///
/// If another encoding has already taken any of the names, then this function will panic.
pub fn register_builtin() {
	static ONCE: Once = Once::new();

	ONCE.call_once(|| {
		BYTE_TO_UNIT16.register(utf8_decoder::<u16>, &UTF8_NAMES);
		BYTE_TO_POINT32.register(utf8_decoder::<u32>, &UTF8_NAMES);

		UNIT16_TO_BYTE.register(utf8_encoder::<u16>, &UTF8_NAMES);
		POINT32_TO_BYTE.register(utf8_encoder::<u32>, &UTF8_NAMES);
	});
}

fn utf8_decoder<U: CharUnit>() -> BoxedCodec<u8, U> {
	Box::new(Utf8Decoder::<U>::new())
}

fn utf8_encoder<S: CharUnit>() -> BoxedCodec<S, u8> {
	Box::new(Utf8Encoder::<S>::new())
}
