//! Streaming varint encoder.

use crate::{unit::max_units, Unit, Value};
use std::marker::PhantomData;

/// Incremental encoder for a single value.
///
/// An encoder is loaded with a value and drained with [`Encoder::feed`],
/// which may be called repeatedly with successive output slices until
/// [`Encoder::is_done`] reports completion. Instances hold no allocation and
/// may be reused across values via [`Encoder::reset`].
pub struct Encoder<V: Value, U: Unit> {
    /// Raw bits not yet emitted.
    remaining: u128,
    more: bool,
    _marker: PhantomData<(V, U)>,
}

impl<V: Value, U: Unit> Encoder<V, U> {
    /// Number of units that always suffices to hold one encoded value.
    pub const MAX_UNITS: usize = max_units(V::BITS, U::PAYLOAD_BITS);

    /// Creates an encoder loaded with `value`.
    pub fn new(value: V) -> Self {
        Self {
            remaining: value.into_raw(),
            more: true,
            _marker: PhantomData,
        }
    }

    /// Loads a new value, discarding any unfinished one. A reset encoder
    /// behaves identically to a freshly constructed one.
    pub fn reset(&mut self, value: V) {
        self.remaining = value.into_raw();
        self.more = true;
    }

    /// Writes encoded units into the front of `out`, stopping after the
    /// final unit or when `out` is full, whichever comes first. Returns the
    /// number of units written.
    ///
    /// Writes nothing once the value is fully emitted.
    pub fn feed(&mut self, out: &mut [U]) -> usize {
        let mut written = 0;
        for slot in out.iter_mut() {
            if !self.more {
                break;
            }
            let chunk = self.remaining & U::PAYLOAD_MASK.widen();
            self.remaining >>= U::PAYLOAD_BITS;
            if self.remaining != 0 {
                *slot = U::narrow(chunk) | U::CONTINUATION;
            } else {
                *slot = U::narrow(chunk);
                self.more = false;
            }
            written += 1;
        }
        written
    }

    /// Whether the loaded value has been fully emitted.
    pub fn is_done(&self) -> bool {
        !self.more
    }
}

/// Encodes `value` into the front of `out`, returning the number of units
/// written.
///
/// # Panics
///
/// Panics if `out` cannot hold the encoding. `Encoder::<V, U>::MAX_UNITS`
/// units (or exactly [`encoded_len`]) always suffice.
pub fn encode<V: Value, U: Unit>(value: V, out: &mut [U]) -> usize {
    let mut encoder = Encoder::<V, U>::new(value);
    let written = encoder.feed(out);
    assert!(encoder.is_done(), "output buffer too small for encoding");
    written
}

/// Exact number of units `value` occupies when encoded.
pub fn encoded_len<V: Value, U: Unit>(value: V) -> usize {
    let raw = value.into_raw();
    let data_bits = (u128::BITS - raw.leading_zeros()) as usize;
    usize::max(1, data_bits.div_ceil(U::PAYLOAD_BITS as usize))
}
