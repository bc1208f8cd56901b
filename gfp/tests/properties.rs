//! Field law property tests.

use gfp::{Error, FieldElement64, Modulus64, bigint::U64};
use proptest::prelude::*;

/// Primes of assorted sizes, up to the largest 64-bit prime.
const PRIMES: [u64; 7] = [2, 3, 13, 101, 65_537, (1 << 61) - 1, u64::MAX - 58];

prop_compose! {
    fn modulus()(index in 0..PRIMES.len()) -> Modulus64 {
        Modulus64::from_u64(PRIMES[index]).unwrap()
    }
}

prop_compose! {
    fn element(modulus: Modulus64)(num in any::<u64>()) -> FieldElement64 {
        modulus.reduce(&U64::from_u64(num))
    }
}

prop_compose! {
    fn triple()(modulus in modulus())(
        a in element(modulus),
        b in element(modulus),
        c in element(modulus),
    ) -> (FieldElement64, FieldElement64, FieldElement64) {
        (a, b, c)
    }
}

proptest! {
    #[test]
    fn construction_checks_range(num in any::<i64>(), index in 0..PRIMES.len()) {
        let prime = PRIMES[index];
        let in_range = num >= 0 && (num as u64) < prime;

        match FieldElement64::from_i64(num, prime) {
            Ok(fe) => {
                prop_assert!(in_range);
                prop_assert_eq!(fe.num(), U64::from_u64(num as u64));
                prop_assert_eq!(fe.prime(), &U64::from_u64(prime));
            }
            Err(err) => {
                prop_assert!(!in_range);
                prop_assert_eq!(err, Error::OutOfRange);
            }
        }
    }

    #[test]
    fn equality_is_reflexive((a, b, _) in triple()) {
        prop_assert_eq!(a, a);
        prop_assert_eq!(a == b, a.num() == b.num());
        prop_assert!(a != None);
    }

    #[test]
    fn addition_is_commutative((a, b, _) in triple()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn addition_is_associative((a, b, c) in triple()) {
        prop_assert_eq!(((a + b)? + c)?, (a + (b + c)?)?);
    }

    #[test]
    fn zero_is_additive_identity((a, _, _) in triple()) {
        prop_assert_eq!((a + a.modulus().zero())?, a);
        prop_assert_eq!((a + -a)?, a.modulus().zero());
    }

    #[test]
    fn subtraction_inverts_addition((a, b, _) in triple()) {
        let diff = (a - b)?;
        prop_assert!(a.modulus().contains(&diff.num()));
        prop_assert_eq!((diff + b)?, a);
        prop_assert_eq!((b - a)?, -diff);
    }

    #[test]
    fn multiplication_is_commutative((a, b, _) in triple()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn multiplication_is_associative((a, b, c) in triple()) {
        prop_assert_eq!(((a * b)? * c)?, (a * (b * c)?)?);
    }

    #[test]
    fn multiplication_distributes((a, b, c) in triple()) {
        prop_assert_eq!((a * (b + c)?)?, ((a * b)? + (a * c)?)?);
    }

    #[test]
    fn division_by_self_is_one((a, _, _) in triple()) {
        if bool::from(a.is_zero()) {
            prop_assert_eq!(a / a, Err(Error::DivisionByZero));
        } else {
            prop_assert_eq!((a / a)?, a.modulus().one());
        }
    }

    #[test]
    fn division_inverts_multiplication((a, b, _) in triple()) {
        prop_assume!(!bool::from(b.is_zero()));
        prop_assert_eq!(((a / b)? * b)?, a);
    }

    #[test]
    fn pow_is_repeated_multiplication((a, _, _) in triple(), n in 0i64..32) {
        let mut expected = a.modulus().one();
        for _ in 0..n {
            expected = (expected * a)?;
        }
        prop_assert_eq!(a.pow(n)?, expected);
    }

    #[test]
    fn negative_pow_inverts((a, _, _) in triple(), n in 1i64..1_000_000) {
        prop_assume!(!bool::from(a.is_zero()));
        let one = a.modulus().one();
        prop_assert_eq!(a.pow(-n)?, (one / a.pow(n)?)?);
    }

    #[test]
    fn pow_matches_pow_vartime((a, _, _) in triple(), n in 0i64..i64::MAX) {
        prop_assert_eq!(a.pow(n)?, a.pow_vartime(&U64::from_u64(n as u64)));
    }

    #[test]
    fn fields_never_mix(i in 0..PRIMES.len(), j in 0..PRIMES.len(), x in any::<u64>(), y in any::<u64>()) {
        prop_assume!(i != j);
        let a = Modulus64::from_u64(PRIMES[i]).unwrap().reduce(&U64::from_u64(x));
        let b = Modulus64::from_u64(PRIMES[j]).unwrap().reduce(&U64::from_u64(y));

        prop_assert_ne!(a, b);
        prop_assert_eq!(a + b, Err(Error::FieldMismatch));
        prop_assert_eq!(a - b, Err(Error::FieldMismatch));
        prop_assert_eq!(a * b, Err(Error::FieldMismatch));
        prop_assert_eq!(a / b, Err(Error::FieldMismatch));
    }
}
