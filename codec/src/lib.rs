//! Encode integers as variable-length, self-delimiting unit streams.
//!
//! # Overview
//!
//! A varint library designed to efficiently and safely:
//! - Encode integral values into a compact, self-delimiting sequence of
//!   "data units" (bytes by default, any wider unsigned width on request)
//! - Decode untrusted unit streams back into values, incrementally if the
//!   input arrives in pieces
//!
//! Each unit reserves its most-significant bit as a continuation flag (set
//! when more units follow) and carries the remaining bits as payload,
//! least-significant chunk first. Signed values are mapped to their unsigned
//! image by a one-bit left rotation before chunking; see [`value`] for why
//! this differs from ZigZag and why it must stay that way.
//!
//! # Supported Types
//!
//! Values: `u8`–`u128`, `i8`–`i128`, and `bool`. Units: `u8`–`u128`.
//! `usize`/`isize` are excluded so the wire format never depends on the
//! target architecture.
//!
//! # Example (One-shot)
//!
//! ```
//! use varunit_codec::{decode, encode, encoded_len};
//!
//! let mut buf = [0u8; 2];
//! let written = encode(200u8, &mut buf);
//! assert_eq!(&buf[..written], &[0xC8, 0x01]);
//! assert_eq!(written, encoded_len::<u8, u8>(200));
//! assert_eq!(decode::<u8, u8>(&buf[..written]).unwrap(), 200);
//! ```
//!
//! # Example (Incremental)
//!
//! ```
//! use varunit_codec::Decoder;
//!
//! // Feed a decoder one byte at a time, e.g. as bytes arrive off a socket.
//! let mut decoder = Decoder::<u64, u8>::new();
//! for byte in [0xC8u8, 0x01] {
//!     decoder.feed(&[byte]);
//! }
//! assert!(decoder.is_done());
//! assert_eq!(decoder.value(), 200);
//! ```
//!
//! # Example (Byte buffers)
//!
//! ```
//! use varunit_codec::{Decode, Encode, Varint};
//!
//! // `Varint` plugs varint-encoded integers into the codec trait layer.
//! let encoded = Varint(-1i8).encode();
//! assert_eq!(&encoded[..], &[0xFF, 0x01]);
//! let decoded = Varint::<i8>::decode(encoded).unwrap();
//! assert_eq!(decoded.0, -1);
//! ```

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod unit;
pub mod value;
pub mod varint;

// Re-export main types and traits
pub use codec::{Codec, Decode, Encode, EncodeSize, Read, Write};
pub use decoder::{decode, tracking_decode, Decoder};
pub use encoder::{encode, encoded_len, Encoder};
pub use error::Error;
pub use unit::{max_units, Unit};
pub use value::Value;
pub use varint::Varint;
