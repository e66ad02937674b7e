//! Streaming varint decoder.

use crate::{unit::max_units, Error, Unit, Value};
use std::marker::PhantomData;

/// Incremental decoder for a single value.
///
/// Input may arrive in arbitrary pieces (e.g. off a network connection):
/// [`Decoder::feed`] consumes units until the final one of the encoding and
/// leaves the rest untouched. Running out of input is not an error; the
/// caller checks [`Decoder::is_done`] and feeds more when it arrives.
pub struct Decoder<V: Value, U: Unit> {
    /// Raw bits accumulated so far.
    raw: u128,
    /// Bit position the next payload chunk lands at. Saturates at the
    /// accumulator width so a hostile stream of continuation units cannot
    /// push the shift out of range; the surplus bits are discarded.
    shift: u32,
    more: bool,
    _marker: PhantomData<(V, U)>,
}

impl<V: Value, U: Unit> Decoder<V, U> {
    /// Number of units a well-formed encoding never exceeds.
    pub const MAX_UNITS: usize = max_units(V::BITS, U::PAYLOAD_BITS);

    /// Creates a decoder awaiting the first unit of a value.
    pub fn new() -> Self {
        Self {
            raw: 0,
            shift: 0,
            more: true,
            _marker: PhantomData,
        }
    }

    /// Clears all accumulated state, ready for the next value.
    pub fn reset(&mut self) {
        self.raw = 0;
        self.shift = 0;
        self.more = true;
    }

    /// Consumes units from the front of `input`, stopping right after the
    /// final unit of the encoding (trailing units are never touched).
    /// Returns the number of units consumed.
    ///
    /// Consumes nothing once a value is complete.
    pub fn feed(&mut self, input: &[U]) -> usize {
        let mut consumed = 0;
        for &unit in input {
            if !self.more {
                break;
            }
            if self.shift < u128::BITS {
                self.raw |= (unit & U::PAYLOAD_MASK).widen() << self.shift;
            }
            self.shift = u32::min(self.shift + U::PAYLOAD_BITS, u128::BITS);
            self.more = (unit & U::CONTINUATION) == U::CONTINUATION;
            consumed += 1;
        }
        consumed
    }

    /// Whether a complete value has been assembled (the last unit consumed
    /// had a clear continuation bit).
    pub fn is_done(&self) -> bool {
        !self.more
    }

    /// The decoded value.
    ///
    /// Well-defined once [`Decoder::is_done`] is true; before that it
    /// reconstructs whatever has been accumulated so far.
    pub fn value(&self) -> V {
        V::from_raw(self.raw)
    }
}

impl<V: Value, U: Unit> Default for Decoder<V, U> {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes one value from the front of `input`. Trailing units are ignored.
///
/// Returns [`Error::EndOfBuffer`] if `input` ends before the encoding does.
pub fn decode<V: Value, U: Unit>(input: &[U]) -> Result<V, Error> {
    let mut decoder = Decoder::<V, U>::new();
    decoder.feed(input);
    if !decoder.is_done() {
        return Err(Error::EndOfBuffer);
    }
    Ok(decoder.value())
}

/// Decodes one value from the front of `*input`, advancing the slice past
/// the consumed units so further values can be read from the same buffer.
///
/// Returns [`Error::EndOfBuffer`] if `*input` ends before the encoding does
/// (the slice is then fully consumed).
pub fn tracking_decode<V: Value, U: Unit>(input: &mut &[U]) -> Result<V, Error> {
    let mut decoder = Decoder::<V, U>::new();
    let consumed = decoder.feed(*input);
    *input = &input[consumed..];
    if !decoder.is_done() {
        return Err(Error::EndOfBuffer);
    }
    Ok(decoder.value())
}
