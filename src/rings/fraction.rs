use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

use crate::error::Error;

/// Exact rational number, always stored in lowest terms with a positive
/// denominator.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    /// Panics when `den` is zero; use `parse` for a fallible constructor.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = &num.gcd(&den);
        let num = num / g;
        let den = den / g;

        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn recip(&self) -> Self {
        Fraction::new(self.den.clone(), self.num.clone())
    }
}

impl FromStr for Fraction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidFraction(s.to_owned());

        let mut nums = s.split('/');
        let num = nums.next().map(str::trim).ok_or_else(invalid)?;
        let den = nums.next().map(str::trim).unwrap_or("1");
        if nums.next().is_some() {
            return Err(invalid());
        }

        let num = BigInt::parse_bytes(num.as_bytes(), 10).ok_or_else(invalid)?;
        let den = BigInt::parse_bytes(den.as_bytes(), 10).ok_or_else(invalid)?;
        if den.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(Fraction::new(num, den))
    }
}

impl From<BigInt> for Fraction {
    fn from(num: BigInt) -> Fraction {
        Fraction {
            num,
            den: BigInt::one(),
        }
    }
}

macro_rules! fraction_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Fraction {
            fn from(value: $t) -> Fraction {
                Fraction::from(BigInt::from(value))
            }
        }
    )*};
}

fraction_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(BigInt::one())
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{} / {}", self.num, self.den)
    }
}

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * BigInt::from(*rhs)
    }
}

impl Eq for Fraction {}

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        // denominators are positive, so cross multiplication keeps the order
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fr(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_fraction_normalized() {
        let f = fr("6/-4");
        assert_eq!(f.num, BigInt::from(-3));
        assert_eq!(f.den, BigInt::from(2));
        assert_eq!(f.to_string(), "-3 / 2");
        assert_eq!(fr("8/4").to_string(), "2");
    }

    #[test]
    fn test_fraction_arithmetic() {
        assert_eq!(fr("1/2") + fr("1/3"), fr("5/6"));
        assert_eq!(fr("1/2") - fr("1/3"), fr("1/6"));
        assert_eq!(fr("2/3") * fr("9/4"), fr("3/2"));
        assert_eq!(fr("2/3") / fr("4/9"), fr("3/2"));
        assert_eq!(-fr("2/3"), fr("-2/3"));
        assert_eq!(fr("-2/3").recip(), fr("-3/2"));
        assert_eq!(vec![fr("1/2"), fr("1/4"), fr("1/4")].into_iter().sum::<Fraction>(), 1i64);
        assert!(fr("1/3") < fr("1/2"));
        assert!(fr("-1/2") < fr("1/3"));
    }

    #[test]
    fn test_fraction_parse_errors() {
        assert_eq!(
            "1/0".parse::<Fraction>().unwrap_err(),
            Error::ZeroDenominator
        );
        assert_eq!(
            "x/2".parse::<Fraction>().unwrap_err(),
            Error::InvalidFraction("x/2".into())
        );
        assert_eq!(
            "1/2/3".parse::<Fraction>().unwrap_err(),
            Error::InvalidFraction("1/2/3".into())
        );
    }

    #[test]
    #[should_panic(expected = "Denominator cannot be zero")]
    fn test_fraction_zero_denominator_panics() {
        Fraction::new(BigInt::one(), BigInt::zero());
    }
}
