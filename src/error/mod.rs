// Copyright 2025 Gabriel Bjørnager Jensen.

//! Error types.
//!
//! Codecs never abort: every anomaly is reported as one of the records in this module, wrapped in a [`CodecError`].


mod codec_error;
mod doubly_encoded_error;
mod illegal_code_point_error;
mod illegal_start_of_sequence_error;
mod invalid_continuation_byte_error;
mod length_error;
mod overlong_encoding_error;
mod replacement_char_in_input_error;
mod unexpected_continuation_byte_error;
mod unknown_flags_error;
mod unknown_preset_error;
mod unpaired_surrogate_half_error;
mod unrepresentable_char_error;

#[cfg(feature = "std")]
mod duplicate_name_error;

pub use codec_error::CodecError;
pub use doubly_encoded_error::DoublyEncodedError;
pub use illegal_code_point_error::IllegalCodePointError;
pub use illegal_start_of_sequence_error::IllegalStartOfSequenceError;
pub use invalid_continuation_byte_error::InvalidContinuationByteError;
pub use length_error::LengthError;
pub use overlong_encoding_error::OverlongEncodingError;
pub use replacement_char_in_input_error::ReplacementCharInInputError;
pub use unexpected_continuation_byte_error::UnexpectedContinuationByteError;
pub use unknown_flags_error::UnknownFlagsError;
pub use unknown_preset_error::UnknownPresetError;
pub use unpaired_surrogate_half_error::UnpairedSurrogateHalfError;
pub use unrepresentable_char_error::UnrepresentableCharError;

#[cfg(feature = "std")]
pub use duplicate_name_error::DuplicateNameError;
