//! GF(p) field element benchmarks

use criterion::{criterion_group, criterion_main};
use gfp::{
    Modulus64, Modulus256, bench_field,
    bigint::{U64, U256},
};

const P64: u64 = u64::MAX - 58;

const P256: U256 =
    U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

bench_field!(
    bench_gf64,
    "GF(2^64 - 59)",
    Modulus64::from_u64(P64).unwrap().reduce(&U64::from_u64(u64::MAX / 3)),
    Modulus64::from_u64(P64).unwrap().reduce(&U64::from_u64(u64::MAX / 7))
);

bench_field!(
    bench_p256,
    "P-256 base field",
    Modulus256::new(P256).unwrap().reduce(&U256::from_be_hex(
        "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
    )),
    Modulus256::new(P256).unwrap().reduce(&U256::from_be_hex(
        "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
    ))
);

criterion_group!(benches, bench_gf64, bench_p256);
criterion_main!(benches);
