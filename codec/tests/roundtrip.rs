//! Black-box tests over the public codec surface.

use std::fmt::Debug;
use varunit_codec::{
    decode, encode, encoded_len, tracking_decode, varint, Decoder, Encoder, Error, Unit, Value,
};

/// Encodes `value` and checks every universal stream property, returning the
/// encoded units.
fn check<V, U>(value: V) -> Vec<U>
where
    V: Value + PartialEq + Debug,
    U: Unit + Debug,
{
    let mut buf = vec![U::narrow(0); Encoder::<V, U>::MAX_UNITS];
    let written = encode(value, &mut buf);

    // Boundedness and exact sizing.
    assert!(written >= 1);
    assert!(written <= Encoder::<V, U>::MAX_UNITS);
    assert_eq!(written, encoded_len::<V, U>(value));
    buf.truncate(written);

    // Every unit except the last carries the continuation bit.
    for unit in &buf[..written - 1] {
        assert_eq!(*unit & U::CONTINUATION, U::CONTINUATION);
    }
    assert_eq!(buf[written - 1] & U::CONTINUATION, U::narrow(0));

    // Whole-slice decode.
    assert_eq!(decode::<V, U>(&buf).unwrap(), value);

    // Unit-at-a-time decode agrees.
    let mut decoder = Decoder::<V, U>::new();
    for (i, unit) in buf.iter().enumerate() {
        assert!(!decoder.is_done());
        assert_eq!(decoder.feed(std::slice::from_ref(unit)), 1);
        assert_eq!(decoder.is_done(), i == written - 1);
    }
    assert_eq!(decoder.value(), value);

    // Unit-at-a-time encode agrees.
    let mut encoder = Encoder::<V, U>::new(value);
    for unit in &buf {
        let mut slot = [U::narrow(0); 1];
        assert_eq!(encoder.feed(&mut slot), 1);
        assert_eq!(slot[0], *unit);
    }
    assert!(encoder.is_done());

    // Every strict prefix is detected as truncated.
    for cut in 0..written {
        assert!(matches!(
            decode::<V, U>(&buf[..cut]),
            Err(Error::EndOfBuffer)
        ));
    }

    buf
}

/// [`check`] over bytes, plus agreement with the byte-stream layer.
fn check_bytes<V>(value: V)
where
    V: Value + PartialEq + Debug,
{
    let units = check::<V, u8>(value);

    let mut bytes = Vec::new();
    varint::write(value, &mut bytes);
    assert_eq!(bytes, units);
    assert_eq!(varint::size(value), bytes.len());

    let mut read_buf = &bytes[..];
    assert_eq!(varint::read::<V>(&mut read_buf).unwrap(), value);
    assert!(read_buf.is_empty());
}

#[test]
fn wire_vectors() {
    let mut buf = [0u8; 2];

    assert_eq!(encode(0u8, &mut buf), 1);
    assert_eq!(buf[..1], [0x00]);
    assert_eq!(decode::<u8, u8>(&[0x00]).unwrap(), 0);

    assert_eq!(encode(200u8, &mut buf), 2);
    assert_eq!(buf, [0xC8, 0x01]);
    assert_eq!(decode::<u8, u8>(&[0xC8, 0x01]).unwrap(), 200);

    assert_eq!(encode(-128i8, &mut buf), 1);
    assert_eq!(buf[..1], [0x01]);
    assert_eq!(decode::<i8, u8>(&[0x01]).unwrap(), -128);

    assert_eq!(encode(-1i8, &mut buf), 2);
    assert_eq!(buf, [0xFF, 0x01]);
    assert_eq!(decode::<i8, u8>(&[0xFF, 0x01]).unwrap(), -1);

    assert_eq!(encode(127i8, &mut buf), 2);
    assert_eq!(buf, [0xFE, 0x01]);
    assert_eq!(decode::<i8, u8>(&[0xFE, 0x01]).unwrap(), 127);

    assert!(matches!(
        decode::<u8, u8>(&[0xC8]),
        Err(Error::EndOfBuffer)
    ));
}

#[test]
fn roundtrip_exhaustive_8_bit() {
    for value in 0..=u8::MAX {
        check_bytes(value);
        check::<u8, u16>(value);
        check::<u8, u32>(value);
        check::<u8, u128>(value);
    }
    for value in i8::MIN..=i8::MAX {
        check_bytes(value);
        check::<i8, u16>(value);
    }
    for value in [false, true] {
        check_bytes(value);
        check::<bool, u64>(value);
    }
}

#[test]
fn roundtrip_exhaustive_16_bit() {
    for value in 0..=u16::MAX {
        check_bytes(value);
        check::<u16, u16>(value);
    }
    for value in i16::MIN..=i16::MAX {
        check_bytes(value);
    }
}

#[test]
fn roundtrip_boundaries_wide() {
    let u32_cases = [0u32, 1, 127, 128, 0x3FFF, 0x4000, 0x1FFFFF, u32::MAX];
    for value in u32_cases {
        check_bytes(value);
        check::<u32, u16>(value);
        check::<u32, u64>(value);
    }

    let u64_cases = [
        0u64,
        127,
        128,
        0xFFFFFFFF,
        0x100000000,
        0xFFFFFFFFFFFFFF,
        u64::MAX,
    ];
    for value in u64_cases {
        check_bytes(value);
        check::<u64, u16>(value);
        check::<u64, u32>(value);
        check::<u64, u128>(value);
    }

    let u128_cases = [0u128, 1, u64::MAX as u128, u64::MAX as u128 + 1, u128::MAX];
    for value in u128_cases {
        check_bytes(value);
        check::<u128, u64>(value);
        check::<u128, u128>(value);
    }

    let i32_cases = [i32::MIN, -129, -128, -1, 0, 1, 127, 128, i32::MAX];
    for value in i32_cases {
        check_bytes(value);
        check::<i32, u16>(value);
    }

    let i64_cases = [i64::MIN, i64::from(i32::MIN), -1, 0, 1, i64::MAX];
    for value in i64_cases {
        check_bytes(value);
        check::<i64, u32>(value);
    }

    let i128_cases = [i128::MIN, i128::from(i64::MIN), -1, 0, 1, i128::MAX];
    for value in i128_cases {
        check_bytes(value);
        check::<i128, u64>(value);
    }
}

#[test]
fn decoder_split_feeds() {
    let mut buf = [0u8; 10];
    let written = encode(u64::MAX, &mut buf);
    assert_eq!(written, 10);

    for split in 0..=written {
        let mut decoder = Decoder::<u64, u8>::new();
        assert_eq!(decoder.feed(&buf[..split]), split);
        decoder.feed(&buf[split..]);
        assert!(decoder.is_done());
        assert_eq!(decoder.value(), u64::MAX);
    }
}

#[test]
fn encoder_split_output() {
    let mut whole = [0u8; 5];
    let written = encode(0xDEADBEEFu32, &mut whole);
    assert_eq!(written, 5);

    for split in 0..=written {
        let mut encoder = Encoder::<u32, u8>::new(0xDEADBEEF);
        let mut out = [0u8; 5];
        let first = encoder.feed(&mut out[..split]);
        assert_eq!(first, split);
        let second = encoder.feed(&mut out[first..]);
        assert!(encoder.is_done());
        assert_eq!(first + second, written);
        assert_eq!(out, whole);
    }
}

#[test]
fn tracking_decode_sequence() {
    let mut bytes = Vec::new();
    varint::write(0u8, &mut bytes);
    varint::write(200u8, &mut bytes);
    varint::write(-1i8, &mut bytes);
    varint::write(i8::MIN, &mut bytes);
    varint::write(true, &mut bytes);
    assert_eq!(bytes, [0x00, 0xC8, 0x01, 0xFF, 0x01, 0x01, 0x01]);

    let mut input = &bytes[..];
    assert_eq!(tracking_decode::<u8, u8>(&mut input).unwrap(), 0);
    assert_eq!(tracking_decode::<u8, u8>(&mut input).unwrap(), 200);
    assert_eq!(tracking_decode::<i8, u8>(&mut input).unwrap(), -1);
    assert_eq!(tracking_decode::<i8, u8>(&mut input).unwrap(), i8::MIN);
    assert!(tracking_decode::<bool, u8>(&mut input).unwrap());
    assert!(input.is_empty());
    assert!(matches!(
        tracking_decode::<u8, u8>(&mut input),
        Err(Error::EndOfBuffer)
    ));
}

#[test]
fn trait_layer_round_trip() {
    use varunit_codec::{Decode, Encode, EncodeSize, Varint};

    let item = Varint(300u32);
    let encoded = item.encode();
    assert_eq!(encoded.len(), item.encode_size());
    let decoded = Varint::<u32>::decode(encoded).unwrap();
    assert_eq!(decoded, item);
}
