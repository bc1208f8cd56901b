//! Field moduli selected at runtime, along with the modular arithmetic kernels used by
//! [`FieldElement`].

use crate::{Error, FieldElement, Result};
use bigint::{Limb, NonZero, Uint};
use core::{fmt, num::NonZeroU8};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "rand_core")]
use {bigint::RandomMod, rand_core::CryptoRngCore};

/// Witnesses used by [`Modulus::is_prime_vartime`].
///
/// Testing against the first twelve primes is deterministic for all moduli below
/// `3.3 * 10^24` (Sorenson & Webster, 2015).
const MILLER_RABIN_BASES: [u8; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Radix used when printing integers in decimal.
const TEN: NonZero<Limb> = NonZero::<Limb>::from_u8(NonZeroU8::new(10).unwrap());

/// Modulus `p` of the prime field GF(p).
///
/// Arithmetic on [`FieldElement`] is only well-defined when `p` is prime. [`Modulus::new`]
/// trusts the caller on this; use [`Modulus::new_prime_vartime`] to check it.
///
/// The modulus is a public parameter: operations branch on it freely.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Modulus<const LIMBS: usize> {
    prime: NonZero<Uint<LIMBS>>,
}

impl<const LIMBS: usize> Modulus<LIMBS> {
    /// Create a new modulus.
    ///
    /// # Returns
    ///
    /// `None` if `prime` is zero.
    pub fn new(prime: Uint<LIMBS>) -> Option<Self> {
        let prime: Option<NonZero<Uint<LIMBS>>> = NonZero::new(prime).into();
        prime.map(|prime| Self { prime })
    }

    /// Create a new modulus from a `u64`.
    pub fn from_u64(prime: u64) -> Option<Self> {
        Self::new(Uint::from_u64(prime))
    }

    /// Create a new modulus, rejecting values which fail [`Modulus::is_prime_vartime`].
    pub fn new_prime_vartime(prime: Uint<LIMBS>) -> Result<Self> {
        Self::new(prime)
            .filter(Self::is_prime_vartime)
            .ok_or(Error::CompositeModulus)
    }

    /// Borrow the modulus as a [`Uint`].
    pub fn as_uint(&self) -> &Uint<LIMBS> {
        self.prime.as_ref()
    }

    /// Does `n` lie in the range `[0, p)`?
    pub fn contains(&self, n: &Uint<LIMBS>) -> bool {
        n < self.as_uint()
    }

    /// Create the field element with residue `num`.
    ///
    /// Returns [`Error::OutOfRange`] unless `num < p`.
    pub fn element(&self, num: Uint<LIMBS>) -> Result<FieldElement<LIMBS>> {
        if self.contains(&num) {
            Ok(FieldElement::from_parts(num, *self))
        } else {
            Err(Error::OutOfRange)
        }
    }

    /// Create a field element from an arbitrary integer, reducing it modulo `p`.
    pub fn reduce(&self, n: &Uint<LIMBS>) -> FieldElement<LIMBS> {
        FieldElement::from_parts(n.rem(&self.prime), *self)
    }

    /// Additive identity.
    pub fn zero(&self) -> FieldElement<LIMBS> {
        FieldElement::from_parts(Uint::ZERO, *self)
    }

    /// Multiplicative identity (zero in the degenerate ring with `p = 1`).
    pub fn one(&self) -> FieldElement<LIMBS> {
        self.reduce(&Uint::ONE)
    }

    /// Sample a uniformly random field element.
    #[cfg(feature = "rand_core")]
    pub fn random(&self, rng: &mut impl CryptoRngCore) -> FieldElement<LIMBS> {
        FieldElement::from_parts(Uint::random_mod(rng, &self.prime), *self)
    }

    /// Probabilistic primality test (Miller-Rabin).
    ///
    /// Deterministic for moduli below `3.3 * 10^24`. Above that bound a composite may pass
    /// with probability at most `4^-12`.
    ///
    /// **This operation is variable time with respect to the modulus.**
    pub fn is_prime_vartime(&self) -> bool {
        let n = self.as_uint();

        if n.bits_vartime() < 2 {
            return false;
        }

        if !n.bit_vartime(0) {
            return n == &Uint::from_u8(2);
        }

        // n - 1 = 2^s * d with d odd
        let n_minus_one = n.wrapping_sub(&Uint::ONE);
        let s = n_minus_one.trailing_zeros_vartime();
        let d = n_minus_one.shr_vartime(s);

        'witness: for base in MILLER_RABIN_BASES {
            let base = Uint::from_u8(base);
            if &base == n {
                return true;
            }

            let mut x = self.pow(&base.rem(&self.prime), &d);
            if x == Uint::ONE || x == n_minus_one {
                continue;
            }

            for _ in 1..s {
                x = self.mul(&x, &x);
                if x == n_minus_one {
                    continue 'witness;
                }
            }

            return false;
        }

        true
    }

    /// Order of the multiplicative group: `p - 1`.
    pub(crate) fn group_order(&self) -> Uint<LIMBS> {
        self.as_uint().wrapping_sub(&Uint::ONE)
    }

    /// `a + b mod p`. Operands must be reduced.
    #[inline]
    pub(crate) fn add(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.add_mod(b, self.as_uint())
    }

    /// `a - b mod p`. Operands must be reduced.
    #[inline]
    pub(crate) fn sub(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.sub_mod(b, self.as_uint())
    }

    /// `-a mod p`. Operand must be reduced.
    #[inline]
    pub(crate) fn neg(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.neg_mod(self.as_uint())
    }

    /// `a * b mod p`, reducing the double-width product.
    #[inline]
    pub(crate) fn mul(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        let (lo, hi) = a.mul_wide(b);
        Uint::const_rem_wide((lo, hi), self.as_uint()).0
    }

    /// `base^exp mod p` by left-to-right square-and-multiply.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    pub(crate) fn pow<const RHS_LIMBS: usize>(
        &self,
        base: &Uint<LIMBS>,
        exp: &Uint<RHS_LIMBS>,
    ) -> Uint<LIMBS> {
        let words = exp.as_words();
        let mut i = RHS_LIMBS - 1;

        // Ignore "leading" zeros (in little endian)
        while i > 0 && words[i] == 0 {
            i -= 1;
        }

        let mut res = Uint::ONE.rem(&self.prime);

        loop {
            let mut j = Limb::BITS;

            while j > 0 {
                j -= 1;
                res = self.mul(&res, &res);

                if ((words[i] >> j) & 1) == 1 {
                    res = self.mul(&res, base);
                }
            }

            if i == 0 {
                return res;
            }

            i -= 1;
        }
    }
}

impl<const LIMBS: usize> ConditionallySelectable for Modulus<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            prime: NonZero::conditional_select(&a.prime, &b.prime, choice),
        }
    }
}

impl<const LIMBS: usize> ConstantTimeEq for Modulus<LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.prime.ct_eq(&other.prime)
    }
}

impl<const LIMBS: usize> fmt::Debug for Modulus<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modulus({})", Decimal(self.as_uint()))
    }
}

impl<const LIMBS: usize> fmt::Display for Modulus<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Decimal(self.as_uint()), f)
    }
}

/// Formats a [`Uint`] in base 10 (its own `Display` impl is hexadecimal).
pub(crate) struct Decimal<'a, const LIMBS: usize>(pub(crate) &'a Uint<LIMBS>);

impl<const LIMBS: usize> fmt::Display for Decimal<'_, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (quotient, digit) = self.0.div_rem_limb(TEN);

        if quotient != Uint::ZERO {
            fmt::Display::fmt(&Decimal(&quotient), f)?;
        }

        write!(f, "{}", digit.0)
    }
}
