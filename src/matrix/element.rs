use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Sub};

use crate::rings::fraction::Fraction;

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Debug
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Debug
{
}

/// Integers satisfy this too; [`Widen`] picks a type whose division is exact.
pub trait Field: Element + Div<Output = Self> {}

impl<T> Field for T where T: Element + Div<Output = T> {}

/// Types that may appear on the right of `matrix * scalar`.
///
/// Never implemented for `Matrix` itself, which keeps the scalar and matrix
/// products apart.
pub trait Scalar: Element {}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $( impl Scalar for $t {} )*
    };
}

impl_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
impl_scalar!(BigInt, Fraction);

/// Element type produced when combining `Self` with `Rhs`.
///
/// The table follows the usual arithmetic conversions. Integers narrower than
/// 32 bits first become `i32`. A float operand wins, `f64` over `f32`;
/// otherwise the wider integer wins, and on equal width the unsigned one.
/// `isize` and `usize` rank as 64-bit. Exact types (`BigInt`, `Fraction`)
/// absorb every primitive integer.
///
/// Two operands of the same type keep that type, so `u8 * u8` stays `u8`.
pub trait Promote<Rhs = Self> {
    type Output: Element;

    fn lift_lhs(self) -> Self::Output;
    fn lift_rhs(rhs: Rhs) -> Self::Output;
}

impl<T: Element> Promote<T> for T {
    type Output = T;

    #[inline(always)]
    fn lift_lhs(self) -> T {
        self
    }

    #[inline(always)]
    fn lift_rhs(rhs: T) -> T {
        rhs
    }
}

macro_rules! promote_primitive {
    ($($a:ty, $b:ty => $out:ty;)*) => {$(
        impl Promote<$b> for $a {
            type Output = $out;
            #[inline(always)] fn lift_lhs(self) -> $out { self as $out }
            #[inline(always)] fn lift_rhs(rhs: $b) -> $out { rhs as $out }
        }
        impl Promote<$a> for $b {
            type Output = $out;
            #[inline(always)] fn lift_lhs(self) -> $out { self as $out }
            #[inline(always)] fn lift_rhs(rhs: $a) -> $out { rhs as $out }
        }
    )*};
}

promote_primitive! {
    i8, i16 => i32; i8, i32 => i32; i8, i64 => i64; i8, i128 => i128;
    i8, isize => isize; i8, u8 => i32; i8, u16 => i32; i8, u32 => u32;
    i8, u64 => u64; i8, u128 => u128; i8, usize => usize; i8, f32 => f32;
    i8, f64 => f64;
    i16, i32 => i32; i16, i64 => i64; i16, i128 => i128; i16, isize => isize;
    i16, u8 => i32; i16, u16 => i32; i16, u32 => u32; i16, u64 => u64;
    i16, u128 => u128; i16, usize => usize; i16, f32 => f32; i16, f64 => f64;
    i32, i64 => i64; i32, i128 => i128; i32, isize => isize; i32, u8 => i32;
    i32, u16 => i32; i32, u32 => u32; i32, u64 => u64; i32, u128 => u128;
    i32, usize => usize; i32, f32 => f32; i32, f64 => f64;
    i64, i128 => i128; i64, isize => i64; i64, u8 => i64; i64, u16 => i64;
    i64, u32 => i64; i64, u64 => u64; i64, u128 => u128; i64, usize => u64;
    i64, f32 => f32; i64, f64 => f64;
    i128, isize => i128; i128, u8 => i128; i128, u16 => i128; i128, u32 => i128;
    i128, u64 => i128; i128, u128 => u128; i128, usize => i128; i128, f32 => f32;
    i128, f64 => f64;
    isize, u8 => isize; isize, u16 => isize; isize, u32 => isize; isize, u64 => u64;
    isize, u128 => u128; isize, usize => usize; isize, f32 => f32; isize, f64 => f64;
    u8, u16 => i32; u8, u32 => u32; u8, u64 => u64; u8, u128 => u128;
    u8, usize => usize; u8, f32 => f32; u8, f64 => f64;
    u16, u32 => u32; u16, u64 => u64; u16, u128 => u128; u16, usize => usize;
    u16, f32 => f32; u16, f64 => f64;
    u32, u64 => u64; u32, u128 => u128; u32, usize => usize; u32, f32 => f32;
    u32, f64 => f64;
    u64, u128 => u128; u64, usize => u64; u64, f32 => f32; u64, f64 => f64;
    u128, usize => u128; u128, f32 => f32; u128, f64 => f64;
    usize, f32 => f32; usize, f64 => f64;
    f32, f64 => f64;
}

// Lossless lifts into the exact types.
macro_rules! promote_exact {
    ($($a:ty => $out:ty;)*) => {$(
        impl Promote<$out> for $a {
            type Output = $out;
            #[inline(always)] fn lift_lhs(self) -> $out { <$out>::from(self) }
            #[inline(always)] fn lift_rhs(rhs: $out) -> $out { rhs }
        }
        impl Promote<$a> for $out {
            type Output = $out;
            #[inline(always)] fn lift_lhs(self) -> $out { self }
            #[inline(always)] fn lift_rhs(rhs: $a) -> $out { <$out>::from(rhs) }
        }
    )*};
}

promote_exact! {
    i8 => BigInt; i16 => BigInt; i32 => BigInt; i64 => BigInt; i128 => BigInt; isize => BigInt;
    u8 => BigInt; u16 => BigInt; u32 => BigInt; u64 => BigInt; u128 => BigInt; usize => BigInt;
    i8 => Fraction; i16 => Fraction; i32 => Fraction; i64 => Fraction; i128 => Fraction; isize => Fraction;
    u8 => Fraction; u16 => Fraction; u32 => Fraction; u64 => Fraction; u128 => Fraction; usize => Fraction;
    BigInt => Fraction;
}

/// Element type used when an operation needs exact division, e.g. `inverse`.
///
/// Floats and fractions widen to themselves. Integers up to 16 bits and `i32`
/// widen to `f32`, wider primitive integers to `f64`, and big integers to
/// [`Fraction`].
pub trait Widen: Element {
    type Field: Field;

    fn widen(self) -> Self::Field;
}

macro_rules! widen_primitive {
    ($($t:ty => $f:ty),* $(,)?) => {$(
        impl Widen for $t {
            type Field = $f;
            #[inline(always)] fn widen(self) -> $f { self as $f }
        }
    )*};
}

widen_primitive! {
    i8 => f32,
    i16 => f32,
    i32 => f32,
    u8 => f32,
    u16 => f32,
    u32 => f64,
    i64 => f64,
    u64 => f64,
    i128 => f64,
    u128 => f64,
    isize => f64,
    usize => f64,
    f32 => f32,
    f64 => f64,
}

impl Widen for BigInt {
    type Field = Fraction;

    fn widen(self) -> Fraction {
        Fraction::from(self)
    }
}

impl Widen for Fraction {
    type Field = Fraction;

    fn widen(self) -> Fraction {
        self
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
