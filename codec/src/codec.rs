//! Core codec traits and implementations

use crate::error::Error;
use bytes::{Buf, BufMut, BytesMut};

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// Encodes this value by writing to a buffer.
    ///
    /// Implementations should panic if the buffer doesn't have enough capacity.
    fn write(&self, buf: &mut impl BufMut);
}

/// Trait for types that know their encoded length before writing.
pub trait EncodeSize {
    /// The number of bytes `write()` will produce.
    ///
    /// This method MUST return the exact number of bytes that will be written.
    fn encode_size(&self) -> usize;
}

/// Trait for types that can be encoded to a buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes a value to a `BytesMut` buffer.
    ///
    /// Panics if the `write` implementation does not write the expected number of bytes.
    ///
    /// (Provided method).
    fn encode(&self) -> BytesMut {
        let len = self.encode_size();
        let mut buffer = BytesMut::with_capacity(len);
        self.write(&mut buffer);
        assert_eq!(buffer.len(), len, "write() did not write expected bytes");
        buffer
    }
}

// Automatically implement `Encode` for types that can be written and sized.
impl<T: Write + EncodeSize> Encode for T {}

/// Trait for types that can be read/decoded from a buffer.
pub trait Read: Sized {
    /// Reads a value from the buffer, consuming the necessary bytes.
    ///
    /// Returns an error if decoding fails (e.g., not enough bytes).
    fn read(buf: &mut impl Buf) -> Result<Self, Error>;
}

/// Trait for types that can be decoded from a buffer, ensuring the entire buffer is consumed.
pub trait Decode: Read {
    /// Decodes a value from a buffer, ensuring the buffer is fully consumed.
    ///
    /// (Provided method).
    fn decode(mut buf: impl Buf) -> Result<Self, Error> {
        let result = Self::read(&mut buf)?;

        // Check that the buffer is fully consumed.
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }

        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}

/// Trait for types that can be encoded and decoded.
pub trait Codec: Encode + Decode {}

// Automatically implement `Codec` for types that implement `Encode` and `Decode`.
impl<T: Encode + Decode> Codec for T {}
