// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate bit_io;

use bit_io::{BitRead, BitReader, BitWrite, BitWriter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Cursor;

#[test]
fn test_roundtrip() {
    /*unsigned values*/
    for bits in 1..17 {
        let max = 1 << bits;
        let mut writer = BitWriter::new(Vec::with_capacity(max));
        for value in 0..max {
            writer.write_int(true, bits, value as i32).unwrap();
        }
        writer.align(1).unwrap();

        let output = writer.into_inner();
        let mut c = Cursor::new(&output);
        let mut reader = BitReader::new(&mut c);
        for value in 0..max {
            assert_eq!(reader.read_int(true, bits).unwrap(), value as i32);
        }
    }

    /*signed values*/
    for bits in 1..17 {
        let min = -1i32 << (bits - 1);
        let max = 1i32 << (bits - 1);
        let mut writer = BitWriter::new(Vec::with_capacity(max as usize));
        for value in min..max {
            writer.write_int(false, bits, value).unwrap();
        }
        writer.align(1).unwrap();

        let output = writer.into_inner();
        let mut c = Cursor::new(&output);
        let mut reader = BitReader::new(&mut c);
        for value in min..max {
            assert_eq!(reader.read_int(false, bits).unwrap(), value);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Int(bool, u32, i32),
    Long(bool, u32, i64),
}

fn random_field(rng: &mut StdRng) -> Field {
    if rng.gen() {
        let unsigned: bool = rng.gen();
        if unsigned {
            let bits: u32 = rng.gen_range(1..=32);
            let value = rng.gen::<u32>();
            let value = if bits == 32 { value } else { value & ((1u32 << bits) - 1) };
            Field::Int(true, bits, value as i32)
        } else {
            let bits: u32 = rng.gen_range(1..=31);
            let value = rng.gen_range((-1i32 << (bits - 1))..(1i32 << (bits - 1)));
            Field::Int(false, bits, value)
        }
    } else {
        let unsigned: bool = rng.gen();
        if unsigned {
            let bits: u32 = rng.gen_range(1..=64);
            let value = rng.gen::<u64>();
            let value = if bits == 64 { value } else { value & ((1u64 << bits) - 1) };
            Field::Long(true, bits, value as i64)
        } else {
            let bits: u32 = rng.gen_range(1..=63);
            let value = rng.gen_range((-1i64 << (bits - 1))..(1i64 << (bits - 1)));
            Field::Long(false, bits, value)
        }
    }
}

#[test]
fn test_random_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0x5EED_B175);
    let fields: Vec<Field> = (0..10_000).map(|_| random_field(&mut rng)).collect();

    let mut writer = BitWriter::new(Vec::new());
    let mut total_bits = 0u64;
    for field in &fields {
        match *field {
            Field::Int(unsigned, bits, value) => {
                writer.write_int(unsigned, bits, value).unwrap();
                total_bits += u64::from(bits);
            }
            Field::Long(unsigned, bits, value) => {
                writer.write_long(unsigned, bits, value).unwrap();
                total_bits += u64::from(bits);
            }
        }
        assert_eq!(writer.byte_count() * 8 + u64::from(writer.bit_index()), total_bits);
    }
    writer.align(1).unwrap();

    let output = writer.into_inner();
    assert_eq!(output.len() as u64, total_bits.div_ceil(8));

    let mut reader = BitReader::new(output.as_slice());
    for field in &fields {
        match *field {
            Field::Int(unsigned, bits, value) => {
                assert_eq!(reader.read_int(unsigned, bits).unwrap(), value, "{:?}", field);
            }
            Field::Long(unsigned, bits, value) => {
                assert_eq!(reader.read_long(unsigned, bits).unwrap(), value, "{:?}", field);
            }
        }
    }
}

#[test]
fn test_category_boundaries() {
    let mut writer = BitWriter::new(Vec::new());
    writer.write_bool(true).unwrap();
    writer.write_byte(true, 8, i8::MIN).unwrap();
    writer.write_byte(false, 7, -64).unwrap();
    writer.write_byte(false, 1, -1).unwrap();
    writer.write_short(true, 16, -1).unwrap();
    writer.write_short(false, 15, 16383).unwrap();
    writer.write_char(16, 0xFFFE).unwrap();
    writer.write_char(1, 1).unwrap();
    writer.write_int(true, 32, i32::MIN).unwrap();
    writer.write_int(false, 31, -(1 << 30)).unwrap();
    writer.write_long(true, 64, i64::MIN).unwrap();
    writer.write_long(false, 63, (1 << 62) - 1).unwrap();
    writer.write_long(false, 1, 0).unwrap();
    writer.align(1).unwrap();

    let output = writer.into_inner();
    let mut reader = BitReader::new(output.as_slice());
    assert!(reader.read_bool().unwrap());
    assert_eq!(reader.read_byte(true, 8).unwrap(), i8::MIN);
    assert_eq!(reader.read_byte(false, 7).unwrap(), -64);
    assert_eq!(reader.read_byte(false, 1).unwrap(), -1);
    assert_eq!(reader.read_short(true, 16).unwrap(), -1);
    assert_eq!(reader.read_short(false, 15).unwrap(), 16383);
    assert_eq!(reader.read_char(16).unwrap(), 0xFFFE);
    assert_eq!(reader.read_char(1).unwrap(), 1);
    assert_eq!(reader.read_int(true, 32).unwrap(), i32::MIN);
    assert_eq!(reader.read_int(false, 31).unwrap(), -(1 << 30));
    assert_eq!(reader.read_long(true, 64).unwrap(), i64::MIN);
    assert_eq!(reader.read_long(false, 63).unwrap(), (1 << 62) - 1);
    assert_eq!(reader.read_long(false, 1).unwrap(), 0);
}

#[test]
#[allow(clippy::approx_constant)]
fn test_float_roundtrip() {
    let floats = [
        3.14f32,
        0.0,
        -0.0,
        f32::MIN_POSITIVE,
        f32::MAX,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::from_bits(0x7FC0_1234),
        f32::from_bits(1),
    ];
    let doubles = [
        3.14f64,
        -0.0,
        f64::MIN,
        f64::EPSILON,
        f64::NEG_INFINITY,
        f64::from_bits(0xFFF8_0000_DEAD_BEEF),
    ];

    /*run each set at every starting bit offset*/
    for offset in 0..8 {
        let mut writer = BitWriter::new(Vec::new());
        if offset > 0 {
            writer.write_int(true, offset, 0).unwrap();
        }
        for value in 0..1024 {
            writer.write_float(value as f32).unwrap();
            writer.write_double(f64::from(value)).unwrap();
        }
        for value in floats.iter() {
            writer.write_float(*value).unwrap();
        }
        for value in doubles.iter() {
            writer.write_double(*value).unwrap();
        }
        writer.align(1).unwrap();

        let output = writer.into_inner();
        let mut reader = BitReader::new(output.as_slice());
        if offset > 0 {
            reader.read_int(true, offset).unwrap();
        }
        for value in 0..1024 {
            assert_eq!(reader.read_float().unwrap(), value as f32);
            assert_eq!(reader.read_double().unwrap(), f64::from(value));
        }
        for value in floats.iter() {
            assert_eq!(reader.read_float().unwrap().to_bits(), value.to_bits());
        }
        for value in doubles.iter() {
            assert_eq!(reader.read_double().unwrap().to_bits(), value.to_bits());
        }
    }
}

#[test]
fn test_align_roundtrip() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut writer = BitWriter::new(Vec::new());
    let mut plan = Vec::new();
    for _ in 0..500 {
        let bits: u32 = rng.gen_range(1..=32);
        let value = rng.gen::<u32>() >> (32 - bits);
        let boundary: u64 = rng.gen_range(1..=16);
        writer.write_int(true, bits, value as i32).unwrap();
        let padded = writer.align(boundary).unwrap();
        assert_eq!(writer.byte_count() % boundary, 0);
        plan.push((bits, value, boundary, padded));
    }

    let output = writer.into_inner();
    let mut reader = BitReader::new(output.as_slice());
    for (bits, value, boundary, padded) in plan {
        assert_eq!(reader.read_int(true, bits).unwrap() as u32, value);
        assert_eq!(reader.align(boundary).unwrap(), padded);
    }
    assert!(reader.read_bool().is_err());
}
