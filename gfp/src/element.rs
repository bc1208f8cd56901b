//! Elements of a prime field whose modulus is chosen at runtime.

use crate::{Error, Modulus, Result, modulus::Decimal};
use bigint::{Integer, NonZero, Uint};
use core::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Element of the prime field GF(p).
///
/// Holds a residue `num` in the range `[0, p)` together with the [`Modulus`] it belongs to.
/// Elements are immutable values: every operation returns a new element.
///
/// Binary operations are only defined between elements of the same field. Mixing fields is
/// reported as [`Error::FieldMismatch`], which is why the arithmetic operators on this type
/// return [`Result`].
#[derive(Clone, Copy)]
pub struct FieldElement<const LIMBS: usize> {
    num: Uint<LIMBS>,
    modulus: Modulus<LIMBS>,
}

impl<const LIMBS: usize> FieldElement<LIMBS> {
    /// Create the element `num` of the field with modulus `prime`.
    ///
    /// Returns [`Error::OutOfRange`] unless `num < prime`. Whether `prime` is actually prime is
    /// the caller's responsibility (see [`Modulus::new_prime_vartime`]).
    pub fn new(num: Uint<LIMBS>, prime: Uint<LIMBS>) -> Result<Self> {
        Modulus::new(prime).ok_or(Error::OutOfRange)?.element(num)
    }

    /// Create an element from machine integers.
    ///
    /// Returns [`Error::OutOfRange`] when `num` is negative or `num >= prime`.
    pub fn from_i64(num: i64, prime: u64) -> Result<Self> {
        let num = u64::try_from(num).map_err(|_| Error::OutOfRange)?;
        Self::new(Uint::from_u64(num), Uint::from_u64(prime))
    }

    /// Construct from a residue already known to be reduced.
    pub(crate) const fn from_parts(num: Uint<LIMBS>, modulus: Modulus<LIMBS>) -> Self {
        Self { num, modulus }
    }

    /// Residue of this element, in the range `[0, p)`.
    pub const fn num(&self) -> Uint<LIMBS> {
        self.num
    }

    /// Field modulus as an integer.
    pub fn prime(&self) -> &Uint<LIMBS> {
        self.modulus.as_uint()
    }

    /// Field this element belongs to.
    pub const fn modulus(&self) -> &Modulus<LIMBS> {
        &self.modulus
    }

    /// Determine if this field element is zero.
    ///
    /// # Returns
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.num.ct_eq(&Uint::ZERO)
    }

    /// Determine if the residue is odd.
    #[inline]
    pub fn is_odd(&self) -> Choice {
        self.num.is_odd()
    }

    /// Determine if the residue is even.
    #[inline]
    pub fn is_even(&self) -> Choice {
        !self.is_odd()
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.modulus == rhs.modulus {
            Ok(())
        } else {
            Err(Error::FieldMismatch)
        }
    }

    fn with_num(&self, num: Uint<LIMBS>) -> Self {
        Self::from_parts(num, self.modulus)
    }

    /// Add elements.
    #[inline]
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_num(self.modulus.add(&self.num, &rhs.num)))
    }

    /// Double element (add it to itself).
    #[inline]
    #[must_use]
    pub fn double(&self) -> Self {
        self.with_num(self.modulus.add(&self.num, &self.num))
    }

    /// Subtract elements.
    ///
    /// The result is always a residue in `[0, p)`, also when `rhs > self` as integers.
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_num(self.modulus.sub(&self.num, &rhs.num)))
    }

    /// Negate element.
    #[inline]
    pub fn neg(&self) -> Self {
        self.with_num(self.modulus.neg(&self.num))
    }

    /// Multiply elements.
    #[inline]
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_num(self.modulus.mul(&self.num, &rhs.num)))
    }

    /// Compute modular square.
    #[inline]
    #[must_use]
    pub fn square(&self) -> Self {
        self.with_num(self.modulus.mul(&self.num, &self.num))
    }

    /// Returns `self^exp`, where `exp` is a non-negative little-endian integer exponent.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    ///
    /// If `exp` is fixed, this operation is constant time. Note that `exp` will still be branched
    /// upon and should NOT be a secret.
    pub fn pow_vartime<const RHS_LIMBS: usize>(&self, exp: &Uint<RHS_LIMBS>) -> Self {
        self.with_num(self.modulus.pow(&self.num, exp))
    }

    /// Returns `self^exponent` for any signed exponent.
    ///
    /// Non-zero elements satisfy `a^(p-1) = 1` (Fermat's little theorem), so the exponent is
    /// first reduced into `[0, p - 2]`. Negative exponents therefore compute powers of the
    /// inverse. Zero raised to a negative power has no value and returns
    /// [`Error::DivisionByZero`].
    ///
    /// Zero raised to any positive power is zero, even when `p - 1` divides the exponent.
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return match exponent {
                i64::MIN..=-1 => Err(Error::DivisionByZero),
                0 => Ok(self.modulus.one()),
                _ => Ok(*self),
            };
        }

        let order: Option<NonZero<Uint<LIMBS>>> = NonZero::new(self.modulus.group_order()).into();
        let Some(order) = order else {
            // p = 1 only contains zero
            return Ok(*self);
        };

        let n = Uint::<LIMBS>::from_u64(exponent.unsigned_abs()).rem(&order);
        let n = if exponent < 0 && n != Uint::ZERO {
            order.wrapping_sub(&n)
        } else {
            n
        };

        Ok(self.pow_vartime(&n))
    }

    /// Compute field inversion: `1 / self`, as `self^(p-2)`.
    ///
    /// Returns [`Error::DivisionByZero`] when `self` is zero.
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::DivisionByZero);
        }

        let exp = self.prime().wrapping_sub(&Uint::from_u8(2));
        Ok(self.pow_vartime(&exp))
    }

    /// Divide elements: `self * rhs^-1`.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        self.multiply(&rhs.invert()?)
    }
}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait wrapper for a fallible inherent method.
macro_rules! field_element_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<const LIMBS: usize> $op for FieldElement<LIMBS> {
            type Output = Result<FieldElement<LIMBS>>;

            #[inline]
            fn $func(self, rhs: FieldElement<LIMBS>) -> Result<FieldElement<LIMBS>> {
                <FieldElement<LIMBS>>::$inner_func(&self, &rhs)
            }
        }

        impl<const LIMBS: usize> $op<&FieldElement<LIMBS>> for FieldElement<LIMBS> {
            type Output = Result<FieldElement<LIMBS>>;

            #[inline]
            fn $func(self, rhs: &FieldElement<LIMBS>) -> Result<FieldElement<LIMBS>> {
                <FieldElement<LIMBS>>::$inner_func(&self, rhs)
            }
        }

        impl<const LIMBS: usize> $op<&FieldElement<LIMBS>> for &FieldElement<LIMBS> {
            type Output = Result<FieldElement<LIMBS>>;

            #[inline]
            fn $func(self, rhs: &FieldElement<LIMBS>) -> Result<FieldElement<LIMBS>> {
                <FieldElement<LIMBS>>::$inner_func(self, rhs)
            }
        }
    };
}

field_element_op!(Add, add, add);
field_element_op!(Sub, sub, sub);
field_element_op!(Mul, mul, multiply);
field_element_op!(Div, div, divide);

impl<const LIMBS: usize> Neg for FieldElement<LIMBS> {
    type Output = FieldElement<LIMBS>;

    #[inline]
    fn neg(self) -> FieldElement<LIMBS> {
        <FieldElement<LIMBS>>::neg(&self)
    }
}

impl<const LIMBS: usize> Neg for &FieldElement<LIMBS> {
    type Output = FieldElement<LIMBS>;

    #[inline]
    fn neg(self) -> FieldElement<LIMBS> {
        <FieldElement<LIMBS>>::neg(self)
    }
}

//
// `subtle` trait impls
//

impl<const LIMBS: usize> ConditionallySelectable for FieldElement<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            num: Uint::conditional_select(&a.num, &b.num, choice),
            modulus: Modulus::conditional_select(&a.modulus, &b.modulus, choice),
        }
    }
}

impl<const LIMBS: usize> ConstantTimeEq for FieldElement<LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.num.ct_eq(&other.num) & self.modulus.ct_eq(&other.modulus)
    }
}

//
// Equality
//

impl<const LIMBS: usize> Eq for FieldElement<LIMBS> {}
impl<const LIMBS: usize> PartialEq for FieldElement<LIMBS> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

/// An element never equals an absent value, so `!=` against `None` is always `true`.
impl<const LIMBS: usize> PartialEq<Option<FieldElement<LIMBS>>> for FieldElement<LIMBS> {
    fn eq(&self, rhs: &Option<FieldElement<LIMBS>>) -> bool {
        rhs.as_ref().is_some_and(|rhs| self == rhs)
    }
}

impl<const LIMBS: usize> PartialEq<FieldElement<LIMBS>> for Option<FieldElement<LIMBS>> {
    fn eq(&self, rhs: &FieldElement<LIMBS>) -> bool {
        rhs == self
    }
}

//
// `core::fmt` trait impls
//

impl<const LIMBS: usize> fmt::Debug for FieldElement<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FieldElement<p={}>({})",
            Decimal(self.prime()),
            Decimal(&self.num)
        )
    }
}

impl<const LIMBS: usize> fmt::Display for FieldElement<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FieldElement_{}({})",
            Decimal(self.prime()),
            Decimal(&self.num)
        )
    }
}

impl<const LIMBS: usize> fmt::LowerHex for FieldElement<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.num, f)
    }
}

impl<const LIMBS: usize> fmt::UpperHex for FieldElement<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.num, f)
    }
}

//
// Miscellaneous trait impls
//

/// Clears the residue. The modulus is public and left in place.
#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> Zeroize for FieldElement<LIMBS> {
    fn zeroize(&mut self) {
        self.num.zeroize();
    }
}

impl<const LIMBS: usize> From<FieldElement<LIMBS>> for Uint<LIMBS> {
    fn from(fe: FieldElement<LIMBS>) -> Uint<LIMBS> {
        fe.num
    }
}

impl<const LIMBS: usize> From<&FieldElement<LIMBS>> for Uint<LIMBS> {
    fn from(fe: &FieldElement<LIMBS>) -> Uint<LIMBS> {
        fe.num
    }
}
