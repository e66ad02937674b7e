//! Variable-length integer encoding and decoding over byte buffers.
//!
//! This module is the byte-stream rendition of the codec for the ubiquitous
//! 8-bit unit. Each byte uses:
//! - 7 bits for the value
//! - 1 "continuation" bit to indicate if more bytes follow
//!
//! Signed values pass through the rotation transform of [`crate::value`]
//! before chunking, so the byte stream here is bit-identical to what
//! [`crate::Encoder`] produces with `u8` units.

use crate::{encoder, EncodeSize, Error, Read, Value, Write};
use bytes::{Buf, BufMut};

const DATA_BITS_PER_BYTE: u32 = 7;
const DATA_BITS_MASK: u8 = 0x7F;
const CONTINUATION_BIT_MASK: u8 = 0x80;

/// Encodes a value as a varint.
pub fn write<V: Value>(value: V, buf: &mut impl BufMut) {
    let mut raw = value.into_raw();
    if raw < CONTINUATION_BIT_MASK as u128 {
        // Fast path for small values (common case for lengths).
        buf.put_u8(raw as u8);
        return;
    }

    while raw >= CONTINUATION_BIT_MASK as u128 {
        buf.put_u8(raw as u8 | CONTINUATION_BIT_MASK);
        raw >>= DATA_BITS_PER_BYTE;
    }
    buf.put_u8(raw as u8);
}

/// Decodes a value from a varint, consuming exactly the encoding's bytes.
pub fn read<V: Value>(buf: &mut impl Buf) -> Result<V, Error> {
    let mut raw: u128 = 0;
    let mut shift: u32 = 0;

    // Loop over all the bytes.
    loop {
        // Read the next byte.
        if !buf.has_remaining() {
            return Err(Error::EndOfBuffer);
        }
        let byte = buf.get_u8();

        // Write the 7 bits of data to the accumulator. Bits past the
        // accumulator width are dropped; the shift saturates so a stream of
        // continuation bytes can never push it out of range.
        if shift < u128::BITS {
            raw |= ((byte & DATA_BITS_MASK) as u128) << shift;
        }
        shift = u32::min(shift + DATA_BITS_PER_BYTE, u128::BITS);

        // If the continuation bit is not set, return.
        if byte & CONTINUATION_BIT_MASK == 0 {
            return Ok(V::from_raw(raw));
        }
    }
}

/// Calculates the number of bytes needed to encode a value as a varint.
pub fn size<V: Value>(value: V) -> usize {
    encoder::encoded_len::<V, u8>(value)
}

/// An ergonomic wrapper to allow for encoding and decoding of primitive
/// integers as varints rather than the default fixed-width integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Varint<V: Value>(pub V);

impl<V: Value> Varint<V> {
    /// Reads a varint from the buffer and returns it as its original
    /// (primitive) type.
    pub fn read_into(buf: &mut impl Buf) -> Result<V, Error> {
        read::<V>(buf)
    }
}

impl<V: Value> Write for Varint<V> {
    fn write(&self, buf: &mut impl BufMut) {
        write(self.0, buf);
    }
}

impl<V: Value> Read for Varint<V> {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        read(buf).map(Varint)
    }
}

impl<V: Value> EncodeSize for Varint<V> {
    fn encode_size(&self) -> usize {
        size(self.0)
    }
}
