// Copyright 2025 Gabriel Bjørnager Jensen.


use crate::CharUnit;
use crate::error::LengthError;

use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::Deref;

/// The capacity of a [`Replacement`] sequence.
pub const REPLACEMENT_LEN: usize = 0x4;

/// A sequence of units substituted for malformed input.
pub type Replacement<U> = Units<U, REPLACEMENT_LEN>;

/// Unit queue with maximum length.
///
/// Units are pushed onto the back and popped from the front.
/// The queue never allocates: its capacity `N` is fixed at compile-time, and a push past that capacity is reported as a [`LengthError`].
///
/// # Examples
///
/// ```rust
/// use textenc::Units;
///
/// let mut q = Units::<u16, 0x2>::new();
///
/// q.push(0xD83D).unwrap();
/// q.push(0xDCA9).unwrap();
///
/// assert!(q.push(0x0041).is_err());
///
/// assert_eq!(q.pop_front(), Some(0xD83D));
/// assert_eq!(q, [0xDCA9]);
/// ```
#[derive(Clone, Copy)]
pub struct Units<U: CharUnit, const N: usize> {
	start: usize,
	end:   usize,
	buf:   [U; N],
}

impl<U: CharUnit, const N: usize> Units<U, N> {
	/// Constructs a new, empty queue.
	#[inline]
	#[must_use]
	pub fn new() -> Self {
		let buf   = [U::default(); N];
		let start = 0x0;
		let end   = 0x0;

		Self { start, end, buf }
	}

	/// Constructs a queue holding a single unit.
	///
	/// # Panics
	///
	/// If `N` is null, then this constructor will panic at compile-time.
	#[inline]
	#[must_use]
	pub fn one(unit: U) -> Self {
		const { assert!(N > 0x0, "cannot construct unit queue without capacity") };

		let mut this = Self::new();

		this.buf[0x0] = unit;
		this.end      = 0x1;

		this
	}

	/// Constructs a queue from a slice of units.
	///
	/// # Errors
	///
	/// If the slice is longer than `N`, then an error is returned.
	#[inline]
	pub fn from_slice(units: &[U]) -> Result<Self, LengthError> {
		let len = units.len();

		if len > N {
			return Err(LengthError {
				remaining: N,
				count:     len,
			});
		}

		let mut this = Self::new();

		this.buf[..len].copy_from_slice(units);
		this.end = len;

		Ok(this)
	}

	/// Pushes a unit onto the back of the queue.
	///
	/// Space freed at the front by [`pop_front`](Self::pop_front) is reclaimed before the push fails.
	///
	/// # Errors
	///
	/// If the queue is already full, then an error is returned.
	#[inline]
	pub fn push(&mut self, unit: U) -> Result<(), LengthError> {
		if self.end == N {
			if self.start == 0x0 {
				return Err(LengthError {
					remaining: 0x0,
					count:     0x1,
				});
			}

			self.buf.copy_within(self.start..self.end, 0x0);

			self.end  -= self.start;
			self.start = 0x0;
		}

		self.buf[self.end] = unit;
		self.end += 0x1;

		Ok(())
	}

	/// Pushes a slice of units onto the back of the queue.
	///
	/// Either all or none of the units are pushed.
	///
	/// # Errors
	///
	/// If the queue cannot contain the entire slice, then an error is returned.
	#[inline]
	pub fn extend_from_slice(&mut self, units: &[U]) -> Result<(), LengthError> {
		let remaining = N - self.len();

		if units.len() > remaining {
			return Err(LengthError {
				remaining,
				count: units.len(),
			});
		}

		for &unit in units {
			// NOTE: This cannot fail as we have tested the
			// remaining capacity.
			self.push(unit)?;
		}

		Ok(())
	}

	/// Pops the next unit from the front of the queue.
	#[inline]
	pub fn pop_front(&mut self) -> Option<U> {
		if self.is_empty() {
			return None;
		}

		let unit = self.buf[self.start];
		self.start += 0x1;

		if self.start == self.end {
			self.clear();
		}

		Some(unit)
	}

	/// Completely clears the queue.
	#[inline(always)]
	pub const fn clear(&mut self) {
		self.start = 0x0;
		self.end   = 0x0;
	}

	/// Returns the amount of queued units.
	#[inline(always)]
	#[must_use]
	pub const fn len(&self) -> usize {
		self.end - self.start
	}

	/// Checks if the queue is empty.
	#[inline(always)]
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len() == 0x0
	}

	/// Returns the fixed capacity of the queue.
	#[inline(always)]
	#[must_use]
	pub const fn capacity(&self) -> usize {
		N
	}

	/// Borrows the queued units as a slice, front first.
	#[inline(always)]
	#[must_use]
	pub fn as_slice(&self) -> &[U] {
		&self.buf[self.start..self.end]
	}
}

impl<U: CharUnit, const N: usize> AsRef<[U]> for Units<U, N> {
	#[inline(always)]
	fn as_ref(&self) -> &[U] {
		self.as_slice()
	}
}

impl<U: CharUnit, const N: usize> Debug for Units<U, N> {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Debug::fmt(self.as_slice(), f)
	}
}

impl<U: CharUnit, const N: usize> Default for Units<U, N> {
	#[inline(always)]
	fn default() -> Self {
		Self::new()
	}
}

impl<U: CharUnit, const N: usize> Deref for Units<U, N> {
	type Target = [U];

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl<U: CharUnit, const N: usize> Eq for Units<U, N> { }

impl<U: CharUnit, const N: usize> FromIterator<U> for Units<U, N> {
	/// Collects units until the queue is full.
	///
	/// Any further units are discarded.
	#[inline]
	fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
		let mut this = Self::new();

		for unit in iter {
			if this.push(unit).is_err() {
				break;
			}
		}

		this
	}
}

impl<U: CharUnit, const N: usize> Hash for Units<U, N> {
	#[inline(always)]
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_slice().hash(state);
	}
}

impl<U: CharUnit, const N: usize, const M: usize> PartialEq<Units<U, M>> for Units<U, N> {
	#[inline(always)]
	fn eq(&self, other: &Units<U, M>) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<U: CharUnit, const N: usize> PartialEq<[U]> for Units<U, N> {
	#[inline(always)]
	fn eq(&self, other: &[U]) -> bool {
		self.as_slice() == other
	}
}

impl<U: CharUnit, const N: usize, const M: usize> PartialEq<[U; M]> for Units<U, N> {
	#[inline(always)]
	fn eq(&self, other: &[U; M]) -> bool {
		self.as_slice() == other
	}
}

impl<U: CharUnit, const N: usize> TryFrom<&[U]> for Units<U, N> {
	type Error = LengthError;

	#[inline(always)]
	fn try_from(value: &[U]) -> Result<Self, Self::Error> {
		Self::from_slice(value)
	}
}
