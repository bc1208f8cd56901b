#![no_main]
use gfp::{
    Error, FieldElement, Modulus, Modulus64, Modulus256,
    bigint::{U64, U256},
};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

const P256: U256 =
    U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

fn test_field<const LIMBS: usize>(
    fe1: FieldElement<LIMBS>,
    fe2: FieldElement<LIMBS>,
    fe3: FieldElement<LIMBS>,
    exponent: i64,
) {
    let modulus = fe1.modulus();
    let zero = modulus.zero();
    let one = modulus.one();

    // Associativity
    assert_eq!(fe1 + (fe2 + fe3).unwrap(), (fe1 + fe2).unwrap() + fe3);
    assert_eq!(fe1 * (fe2 * fe3).unwrap(), (fe1 * fe2).unwrap() * fe3);

    // Commutativity
    assert_eq!(fe1 + fe2, fe2 + fe1);
    assert_eq!(fe1 * fe2, fe2 * fe1);

    // Identity
    assert_eq!((fe1 + zero).unwrap(), fe1);
    assert_eq!((fe1 * one).unwrap(), fe1);
    assert_eq!((fe1 - fe1).unwrap(), zero);

    // Distributivity
    assert_eq!(
        (fe1 * (fe2 + fe3).unwrap()).unwrap(),
        ((fe1 * fe2).unwrap() + (fe1 * fe3).unwrap()).unwrap()
    );

    // Inverse, square, division
    assert_eq!((fe1 + -fe1).unwrap(), zero);
    assert_eq!(fe1.square(), (fe1 * fe1).unwrap());
    assert_eq!(fe1.double(), (fe1 + fe1).unwrap());
    if bool::from(fe2.is_zero()) {
        assert_eq!(fe1 / fe2, Err(Error::DivisionByZero));
    } else {
        assert_eq!(((fe1 / fe2).unwrap() * fe2).unwrap(), fe1);
    }

    // Exponents
    match fe1.pow(exponent) {
        Ok(power) if exponent >= 0 => {
            assert_eq!(power, fe1.pow_vartime(&U64::from_u64(exponent as u64)));
        }
        Ok(power) => {
            let positive = fe1.pow_vartime(&U64::from_u64(exponent.unsigned_abs()));
            assert_eq!((power * positive).unwrap(), one);
        }
        Err(err) => {
            assert!(exponent < 0 && bool::from(fe1.is_zero()));
            assert_eq!(err, Error::DivisionByZero);
        }
    }

    // Even, odd
    assert_ne!(bool::from(fe1.is_odd()), bool::from(fe1.is_even()));
}

fn elements<const LIMBS: usize>(
    modulus: &Modulus<LIMBS>,
    nums: [gfp::bigint::Uint<LIMBS>; 2],
    rng: &mut ChaChaRng,
) -> [FieldElement<LIMBS>; 3] {
    let fe1 = modulus
        .element(nums[0])
        .unwrap_or_else(|_| modulus.reduce(&nums[0]));
    let fe2 = modulus.reduce(&nums[1]);
    let fe3 = modulus.random(rng);
    [fe1, fe2, fe3]
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());
    let exponent = i64::from_le_bytes(data[32..40].try_into().unwrap());

    //
    // 64-bit field; falls back to 2^64 - 59 for composite input
    let candidate = U64::from_le_slice(&data[40..48]);
    let modulus = Modulus64::new_prime_vartime(candidate)
        .unwrap_or_else(|_| Modulus64::from_u64(u64::MAX - 58).unwrap());
    let nums = [
        U64::from_le_slice(&data[48..56]),
        U64::from_le_slice(&data[56..64]),
    ];
    let [fe1, fe2, fe3] = elements(&modulus, nums, &mut rng);
    test_field(fe1, fe2, fe3, exponent);

    //
    // P-256 base field
    let modulus = Modulus256::new(P256).unwrap();
    let nums = [
        U256::from_le_slice(&data[64..96]),
        U256::from_le_slice(&data[96..128]),
    ];
    let [fe1, fe2, fe3] = elements(&modulus, nums, &mut rng);
    test_field(fe1, fe2, fe3, exponent);
});
