// Copyright 2025 Gabriel Bjørnager Jensen.

//! `textenc` is a Rust crate for streaming, policy-driven transcoding between UTF-8, UTF-16, and code points.
//!
//! Transcoding is done by [`Codec`]s, which convert a stream piece by piece from caller-provided source buffers into caller-provided destination buffers.
//! Codecs neither allocate nor abort.
//! Instead, every anomaly in the input (e.g. an overlong sequence or a lone surrogate) is handed to a [policy](policy) that decides what to substitute for it and whether to report it.
//! A report is either transient or poisons the stream for good.
//!
//! # Examples
//!
//! ```rust
//! use textenc::{Codec, Utf8Decoder};
//! use textenc::error::CodecError;
//!
//! let mut decoder = Utf8Decoder::<u32>::new();
//! let mut buf     = [0x0; 0x4];
//!
//! // The overlong encoding of '/' is rejected for good.
//! let r = decoder.transcode(b"\xC0\xAF", &mut buf, true);
//!
//! assert!(matches!(r.error, Some(CodecError::OverlongEncoding(_))));
//! assert_eq!(&buf[..r.produced], [0xFFFD]);
//!
//! let r = decoder.transcode(b"ok", &mut buf, true);
//!
//! assert_eq!((r.consumed, r.produced), (0x0, 0x0));
//! assert!(r.error.is_some());
//! ```

#![no_std]

#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate self as textenc;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod policy;
pub mod utf8;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod registry;

mod codec;
mod unit;
mod units;

pub use codec::{Codec, Transcoded};
pub use unit::{CharUnit, UnitKind};
pub use units::{REPLACEMENT_LEN, Replacement, Units};
pub use utf8::{Utf8Decoder, Utf8Encoder};
