#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::fmt::Debug;
use varunit_codec::{
    decode, encode, encoded_len, varint, Decoder, Encoder, Unit, Value,
};

#[derive(Arbitrary, Debug)]
enum Input {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Bool(bool),
    // Raw unit streams thrown at the decoder; must never panic.
    Stream(Vec<u8>),
}

fn roundtrip_units<V, U>(value: V)
where
    V: Value + PartialEq + Debug,
    U: Unit + Debug,
{
    let mut buf = vec![U::narrow(0); Encoder::<V, U>::MAX_UNITS];
    let written = encode(value, &mut buf);
    assert_eq!(written, encoded_len::<V, U>(value));

    let decoded: V = decode(&buf[..written]).expect("failed to decode a complete encoding");
    assert_eq!(decoded, value);

    // Unit-at-a-time feeding must agree with the one-shot path.
    let mut decoder = Decoder::<V, U>::new();
    for unit in &buf[..written] {
        decoder.feed(std::slice::from_ref(unit));
    }
    assert!(decoder.is_done());
    assert_eq!(decoder.value(), value);
}

fn roundtrip<V>(value: V)
where
    V: Value + PartialEq + Debug,
{
    roundtrip_units::<V, u8>(value);
    roundtrip_units::<V, u16>(value);
    roundtrip_units::<V, u64>(value);

    // The byte-stream layer must agree bit for bit with the generic encoder.
    let mut buf = vec![0u8; Encoder::<V, u8>::MAX_UNITS];
    let written = encode(value, &mut buf);
    let mut bytes = Vec::new();
    varint::write(value, &mut bytes);
    assert_eq!(bytes, buf[..written]);

    let read_back: V = varint::read(&mut &bytes[..]).expect("failed to read a written varint");
    assert_eq!(read_back, value);
}

fn consume(stream: &[u8]) {
    // Arbitrary streams (truncated, over-long, hostile) must decode to
    // something or report truncation, never panic.
    let mut decoder = Decoder::<u64, u8>::new();
    let consumed = decoder.feed(stream);
    assert!(consumed <= stream.len());
    let _ = decoder.value();
    let _ = decode::<i128, u8>(stream);
    let _ = varint::read::<u32>(&mut &stream[..]);
}

fuzz_target!(|input: Input| {
    match input {
        Input::U8(v) => roundtrip(v),
        Input::U16(v) => roundtrip(v),
        Input::U32(v) => roundtrip(v),
        Input::U64(v) => roundtrip(v),
        Input::U128(v) => roundtrip(v),
        Input::I8(v) => roundtrip(v),
        Input::I16(v) => roundtrip(v),
        Input::I32(v) => roundtrip(v),
        Input::I64(v) => roundtrip(v),
        Input::I128(v) => roundtrip(v),
        Input::Bool(v) => roundtrip(v),
        Input::Stream(stream) => consume(&stream),
    }
});
