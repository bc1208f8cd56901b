/// Write a series of `criterion`-based benchmarks for a field implementation.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn $name(c: &mut ::criterion::Criterion) {
            fn bench_add<M: ::criterion::measurement::Measurement>(
                group: &mut ::criterion::BenchmarkGroup<'_, M>,
            ) {
                let x = core::hint::black_box($fe_a);
                let y = core::hint::black_box($fe_b);
                group.bench_function("add", |b| b.iter(|| x.add(&y)));
            }

            fn bench_sub<M: ::criterion::measurement::Measurement>(
                group: &mut ::criterion::BenchmarkGroup<'_, M>,
            ) {
                let x = core::hint::black_box($fe_a);
                let y = core::hint::black_box($fe_b);
                group.bench_function("sub", |b| b.iter(|| x.sub(&y)));
            }

            fn bench_mul<M: ::criterion::measurement::Measurement>(
                group: &mut ::criterion::BenchmarkGroup<'_, M>,
            ) {
                let x = core::hint::black_box($fe_a);
                let y = core::hint::black_box($fe_b);
                group.bench_function("mul", |b| b.iter(|| x.multiply(&y)));
            }

            fn bench_neg<M: ::criterion::measurement::Measurement>(
                group: &mut ::criterion::BenchmarkGroup<'_, M>,
            ) {
                let x = core::hint::black_box($fe_a);
                group.bench_function("neg", |b| b.iter(|| -x));
            }

            fn bench_pow<M: ::criterion::measurement::Measurement>(
                group: &mut ::criterion::BenchmarkGroup<'_, M>,
            ) {
                let x = core::hint::black_box($fe_a);
                group.bench_function("pow", |b| b.iter(|| x.pow(-3)));
            }

            fn bench_invert<M: ::criterion::measurement::Measurement>(
                group: &mut ::criterion::BenchmarkGroup<'_, M>,
            ) {
                let x = core::hint::black_box($fe_a);
                group.bench_function("invert", |b| b.iter(|| x.invert()));
            }

            fn bench_div<M: ::criterion::measurement::Measurement>(
                group: &mut ::criterion::BenchmarkGroup<'_, M>,
            ) {
                let x = core::hint::black_box($fe_a);
                let y = core::hint::black_box($fe_b);
                group.bench_function("div", |b| b.iter(|| x.divide(&y)));
            }

            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_neg(&mut group);
            bench_pow(&mut group);
            bench_invert(&mut group);
            bench_div(&mut group);
            group.finish();
        }
    };
}

/// Implement all field law tests for a [`Modulus`](crate::Modulus).
///
/// The modulus must be a prime greater than 3.
#[macro_export]
macro_rules! test_field {
    ($modulus:expr) => {
        $crate::test_field_identity!($modulus);
        $crate::test_field_invert!($modulus);
        $crate::test_field_pow!($modulus);
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($modulus:expr) => {
        #[test]
        fn zero_is_additive_identity() {
            let modulus = $modulus;
            let zero = modulus.zero();
            let one = modulus.one();
            assert_eq!(zero.add(&zero).unwrap(), zero);
            assert_eq!(one.add(&zero).unwrap(), one);
            assert_eq!(one.sub(&zero).unwrap(), one);
            assert_eq!(one.sub(&one).unwrap(), zero);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let modulus = $modulus;
            let one = modulus.one();
            let two = one.double();
            assert_eq!(one.multiply(&one).unwrap(), one);
            assert_eq!(two.multiply(&one).unwrap(), two);
        }

        #[test]
        fn minus_one_is_largest_residue() {
            let modulus = $modulus;
            let minus_one = -modulus.one();
            assert_eq!(minus_one.num(), modulus.as_uint().wrapping_sub(&$crate::bigint::Uint::ONE));
            assert_eq!(minus_one.add(&modulus.one()).unwrap(), modulus.zero());
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($modulus:expr) => {
        #[test]
        fn invert() {
            let modulus = $modulus;
            let one = modulus.one();
            assert_eq!(one.invert().unwrap(), one);

            let three = one.add(&one.double()).unwrap();
            let inv_three = three.invert().unwrap();
            assert_eq!(three.multiply(&inv_three).unwrap(), one);

            let minus_three = -three;
            let inv_minus_three = minus_three.invert().unwrap();
            assert_eq!(inv_minus_three, -inv_three);
            assert_eq!(three.multiply(&inv_minus_three).unwrap(), -one);

            assert_eq!(modulus.zero().invert(), Err($crate::Error::DivisionByZero));
        }

        #[test]
        fn divide_by_self_is_one() {
            let modulus = $modulus;
            let three = modulus.one().add(&modulus.one().double()).unwrap();
            assert_eq!(three.divide(&three).unwrap(), modulus.one());
            assert_eq!(
                three.divide(&modulus.zero()),
                Err($crate::Error::DivisionByZero)
            );
        }
    };
}

/// Implement exponentiation tests.
#[macro_export]
macro_rules! test_field_pow {
    ($modulus:expr) => {
        #[test]
        fn pow_is_repeated_multiplication() {
            let modulus = $modulus;
            let two = modulus.one().double();
            let mut expected = modulus.one();

            for n in 0..16 {
                assert_eq!(two.pow(n).unwrap(), expected);
                expected = expected.multiply(&two).unwrap();
            }
        }

        #[test]
        fn negative_pow_is_inverse_pow() {
            let modulus = $modulus;
            let one = modulus.one();
            let three = one.add(&one.double()).unwrap();

            for n in 1..16 {
                let inverse = one.divide(&three.pow(n).unwrap()).unwrap();
                assert_eq!(three.pow(-n).unwrap(), inverse);
            }
        }

        #[test]
        fn fermat() {
            let modulus = $modulus;
            let three = modulus.one().add(&modulus.one().double()).unwrap();
            let order = modulus.as_uint().wrapping_sub(&$crate::bigint::Uint::ONE);
            assert_eq!(three.pow_vartime(&order), modulus.one());
        }
    };
}

/// Implement tests checking that elements of different fields are never combined.
#[macro_export]
macro_rules! test_field_mismatch {
    ($modulus_a:expr, $modulus_b:expr) => {
        #[test]
        fn field_mismatch() {
            let a = $modulus_a.one();
            let b = $modulus_b.one();
            assert_ne!(a, b);

            for result in [a.add(&b), a.sub(&b), a.multiply(&b), a.divide(&b)] {
                assert_eq!(result, Err($crate::Error::FieldMismatch));
            }

            for result in [b.add(&a), b.sub(&a), b.multiply(&a), b.divide(&a)] {
                assert_eq!(result, Err($crate::Error::FieldMismatch));
            }
        }
    };
}
