use std::fmt::{Display, Debug};
use std::str::FromStr;
use std::cmp;
use std::iter::{Sum, Product};
use std::ops::{Add, Sub, Neg, AddAssign, SubAssign, Mul, MulAssign, Div, DivAssign, Rem, RemAssign};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;
use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Mon, MonOps, Ring, RingOps, EucRing, EucRingOps, Field, FieldOps, Integer, IntOps, PolyError};

/// An exact fraction `numer / denom` over an integer type `T`.
///
/// Always kept reduced: `gcd(numer, denom) = 1`, `denom > 0`,
/// and zero is represented as `0/1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

impl<T> Ratio<T> {
    #[inline]
    const fn new_raw(numer: T, denom: T) -> Ratio<T> {
        Ratio { numer, denom }
    }

    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }
}

impl<T> Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    /// Panics if `denom` is zero.
    pub fn new(numer: T, denom: T) -> Ratio<T> {
        assert!(!denom.is_zero(), "zero denominator");

        let mut ret = Ratio::new_raw(numer, denom);
        ret.reduce();
        ret
    }

    pub fn try_new(numer: T, denom: T) -> Result<Ratio<T>, PolyError> {
        if denom.is_zero() {
            Err(PolyError::DivisionByZero)
        } else {
            Ok(Self::new(numer, denom))
        }
    }

    pub fn from_numer(a: T) -> Self {
        Self::new_raw(a, T::one())
    }

    pub fn is_numer(&self) -> bool {
        self.denom.is_one()
    }

    pub fn into_pair(self) -> (T, T) {
        (self.numer, self.denom)
    }

    fn reduce(&mut self) {
        if self.numer.is_zero() {
            if !self.denom.is_one() {
                self.denom.set_one();
            }
            return;
        }

        let u = self.denom.normalizing_unit();

        if !u.is_one() {
            self.numer *= &u;
            self.denom *= &u;
        }

        if self.denom.is_one() {
            return
        }

        let g = EucRing::gcd(&self.numer, &self.denom);

        if !g.is_one() {
            self.numer /= &g;
            self.denom /= &g;
        }
    }
}

impl<T> From<i32> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn from(i: i32) -> Self {
        Self::from_numer(T::from(i))
    }
}

impl<T> From<(T, T)> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn from(pair: (T, T)) -> Self {
        let (p, q) = pair;
        Self::new(p, q)
    }
}

impl<T> FromStr for Ratio<T>
where T: Integer + FromStr, for<'x> &'x T: IntOps<T> {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PolyError::Parse(s.to_string());
        let s = s.trim();

        if let Ok(a) = s.parse::<T>() {
            return Ok(Self::from_numer(a))
        }

        let (s1, s2) = s.split_once('/').ok_or_else(err)?;
        let a = s1.trim().parse::<T>().map_err(|_| err())?;
        let b = s2.trim().parse::<T>().map_err(|_| err())?;

        Self::try_new(a, b)
    }
}

impl<T> Default for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> Display for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<T> Debug for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T> Zero for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn zero() -> Self {
        Self::from_numer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn one() -> Self {
        Self::from_numer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

#[auto_ops]
impl<T> AddAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn add_assign(&mut self, rhs: &Ratio<T>) {
        if rhs.is_zero() {
            return
        }

        // a/b + c/d = (a(l/b) + c(l/d)) / l, where l = lcm(b, d).
        let l = EucRing::lcm(&self.denom, &rhs.denom);
        let a = &self.numer * &(&l / &self.denom);
        let c = &rhs.numer * &(&l / &rhs.denom);

        self.numer = a + c;
        self.denom = l;
        self.reduce()
    }
}

#[auto_ops]
impl<T> SubAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn sub_assign(&mut self, rhs: &Ratio<T>) {
        *self += -rhs
    }
}

impl<T> Neg for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-self.numer, self.denom)
    }
}

impl<T> Neg for &Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-&self.numer, self.denom.clone())
    }
}

#[auto_ops]
impl<T> MulAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn mul_assign(&mut self, rhs: &Ratio<T>) {
        if self.is_zero() || rhs.is_one() {
            return
        }

        if rhs.is_zero() {
            self.set_zero();
            return
        }

        // cross-cancel before multiplying: a/b * c/d with a = ka', d = kd', b = lb', c = lc'.
        let (a, b) = (&self.numer, &self.denom);
        let (c, d) = (&rhs.numer, &rhs.denom);

        let k = EucRing::gcd(a, d);
        let l = EucRing::gcd(b, c);

        let numer = (a / &k) * (c / &l);
        let denom = (b / &l) * (d / &k);

        self.numer = numer;
        self.denom = denom;
    }
}

#[auto_ops]
impl<T> DivAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn div_assign(&mut self, rhs: &Ratio<T>) {
        assert!(!rhs.is_zero(), "division by zero");
        let inv = Ratio::new(rhs.denom.clone(), rhs.numer.clone());
        *self *= &inv
    }
}

#[auto_ops]
impl<T> RemAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn rem_assign(&mut self, rhs: &Ratio<T>) {
        assert!(!rhs.is_zero(), "division by zero");
        self.set_zero() // every non-zero element divides.
    }
}

impl<T> Sum for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |res, r| res + r)
    }
}

impl<'a, T> Sum<&'a Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn sum<I: Iterator<Item = &'a Ratio<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |res, r| res + r)
    }
}

impl<T> Product for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |res, r| res * r)
    }
}

impl<'a, T> Product<&'a Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn product<I: Iterator<Item = &'a Ratio<T>>>(iter: I) -> Self {
        iter.fold(Self::one(), |res, r| res * r)
    }
}

macro_rules! decl_alg_ops {
    ($trait:ident) => {
        impl<T> $trait for Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {}

        impl<T> $trait<Ratio<T>> for &Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {}
    };
}

decl_alg_ops!(AddMonOps);
decl_alg_ops!(AddGrpOps);
decl_alg_ops!(MonOps);
decl_alg_ops!(RingOps);
decl_alg_ops!(EucRingOps);
decl_alg_ops!(FieldOps);

impl<T> Elem for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn math_symbol() -> String {
        let t = T::math_symbol();
        if &t == "Z" {
            String::from("Q")
        } else {
            format!("Frac({t})")
        }
    }
}

impl<T> AddMon for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> AddGrp for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> Mon for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> Ring for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            let inv = Self::new(self.denom.clone(), self.numer.clone());
            Some(inv)
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn normalizing_unit(&self) -> Self {
        self.inv().unwrap_or_else(Self::one)
    }
}

impl<T> EucRing for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> Field for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> Ord for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        // denominators are positive.
        let l = &self.numer * &other.denom;
        let r = &other.numer * &self.denom;
        l.cmp(&r)
    }
}

impl<T> PartialOrd for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        // serialized as "n" or "n/d"; integers are also accepted on input.
        impl<T> serde::Serialize for Ratio<T>
        where T: Display + One + PartialEq {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where S: serde::Serializer {
                serializer.collect_str(self)
            }
        }

        // JSON integers are read as machine integers and re-parsed,
        // so any `T: FromStr` works, including `BigInt`.
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum RatioRepr {
            Int(i64),
            UInt(u64),
            Str(String)
        }

        impl<'de, T> serde::Deserialize<'de> for Ratio<T>
        where T: Integer + FromStr, for<'x> &'x T: IntOps<T> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where D: serde::Deserializer<'de> {
                let s = match RatioRepr::deserialize(deserializer)? {
                    RatioRepr::Int(a)  => a.to_string(),
                    RatioRepr::UInt(a) => a.to_string(),
                    RatioRepr::Str(s)  => s
                };
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use super::*;

    type Q = Ratio<i64>;

    #[test]
    fn math_symbol() {
        assert_eq!(Ratio::<i32>::math_symbol(), "Q");
    }

    #[test]
    fn constants() {
        assert_eq!(Q::zero(), Ratio::new_raw(0, 1));
        assert_eq!(Q::one(),  Ratio::new_raw(1, 1));
        assert_eq!(Q::default(), Q::zero());
    }

    #[test]
    fn reduce() {
        let a = Q::new(0, -4);
        assert_eq!(a.into_pair(), (0, 1));

        let a = Q::new(-3, 1);
        assert_eq!(a.into_pair(), (-3, 1));

        let a = Q::new(1, -3);
        assert_eq!(a.into_pair(), (-1, 3));

        let a = Q::new(6, -8);
        assert_eq!(a.into_pair(), (-3, 4));
    }

    #[test]
    #[should_panic]
    fn new_zero_denom() {
        let _ = Q::new(1, 0);
    }

    #[test]
    fn try_new() {
        assert_eq!(Q::try_new(2, 4), Ok(Q::new(1, 2)));
        assert_eq!(Q::try_new(2, 0), Err(PolyError::DivisionByZero));
    }

    #[test]
    fn from_i32() {
        assert_eq!(Q::from(-5), Q::new(-5, 1));
        assert!(Q::from(-5).is_numer());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Q::new(-3, 1)), "-3");
        assert_eq!(format!("{}", Q::new(-3, 4)), "-3/4");
        assert_eq!(format!("{:?}", Q::new(6, 4)), "3/2");
    }

    #[test]
    fn from_str() {
        assert_eq!(Q::from_str("7"), Ok(Q::from(7)));
        assert_eq!(Q::from_str("-6/8"), Ok(Q::new(-3, 4)));
        assert_eq!(Q::from_str(" 1 / 3 "), Ok(Q::new(1, 3)));
        assert_eq!(Q::from_str("1/0"), Err(PolyError::DivisionByZero));
        assert_eq!(Q::from_str("x"), Err(PolyError::Parse("x".into())));
        assert_eq!(Q::from_str("1/2/3"), Err(PolyError::Parse("1/2/3".into())));
    }

    #[test]
    fn add() {
        let a = Q::new(1, 2);
        let b = Q::new(3, 5);
        assert_eq!(a + b, Q::new(11, 10));

        let o = Q::zero();
        assert_eq!(&a + &o, a);
        assert_eq!(&o + &a, a);

        let a = Q::new(1, 3);
        let b = Q::new(2, 3);
        assert_eq!(a + b, Q::one());

        let a = Q::new(1, 6);
        let b = Q::new(1, 3);
        assert_eq!(a + b, Q::new(1, 2));

        let a = Q::new(1, 6);
        let b = Q::new(-1, 6);
        assert!((a + b).is_zero());
    }

    #[test]
    fn add_assign() {
        let mut a = Q::new(1, 2);
        a += Q::new(3, 5);
        assert_eq!(a, Q::new(11, 10));
    }

    #[test]
    fn neg() {
        let a = Q::new(1, 2);
        assert_eq!(-a, Q::new(-1, 2));
        assert_eq!(-&a, Q::new(-1, 2));
    }

    #[test]
    fn sub() {
        let a = Q::new(1, 2);
        let b = Q::new(3, 5);
        assert_eq!(a - b, Q::new(-1, 10));

        let o = Q::zero();
        assert_eq!(&a - &o, a);
        assert_eq!(&o - &a, -a);
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn mul() {
        let a = Q::new(3, 10);
        let b = Q::new(-2, 7);
        assert_eq!(a * b, Q::new(-3, 35));

        let a = Q::new(3, 4);
        let e = Q::one();
        assert_eq!(&a * &e, a);
        assert_eq!(&e * &a, a);
        assert_eq!(&a * &(-e), -a);

        let o = Q::zero();
        assert_eq!(&a * &o, Q::zero());
        assert_eq!(&o * &a, Q::zero());

        let a = Q::new(4, 9);
        let b = Q::new(3, 8);
        assert_eq!(a * b, Q::new(1, 6));
    }

    #[test]
    fn div() {
        let a = Q::new(3, 10);
        let b = Q::new(2, 7);
        assert_eq!(a / b, Q::new(21, 20));

        let b = Q::new(-2, 7);
        assert_eq!(a / b, Q::new(-21, 20));
    }

    #[test]
    #[should_panic]
    fn div_by_zero() {
        let _ = Q::one() / Q::zero();
    }

    #[test]
    fn checked_div() {
        let a = Q::new(3, 10);
        assert_eq!(a.checked_div(&Q::new(2, 7)), Ok(Q::new(21, 20)));
        assert_eq!(a.checked_div(&Q::zero()), Err(PolyError::DivisionByZero));
    }

    #[test]
    fn rem() {
        let a = Q::new(3, 10);
        let b = Q::new(2, 7);
        assert_eq!(a % b, Q::zero());
    }

    #[test]
    fn inv() {
        let a = Q::new(-3, 10);
        assert_eq!(a.inv(), Some(Q::new(-10, 3)));
        assert_eq!(Q::zero().inv(), None);
        assert!(a.is_unit());
        assert!(!Q::zero().is_unit());
    }

    #[test]
    fn normalizing_unit() {
        let a = Q::new(-3, 10);
        assert_eq!(a.normalizing_unit(), Q::new(-10, 3));
        assert_eq!(Q::zero().normalizing_unit(), Q::one());
    }

    #[test]
    fn sum_product() {
        let v = vec![Q::new(1, 2), Q::new(1, 3), Q::new(1, 6)];
        assert_eq!(v.iter().sum::<Q>(), Q::one());
        assert_eq!(v.into_iter().product::<Q>(), Q::new(1, 36));
    }

    #[test]
    fn cmp() {
        assert!(Q::new(3, 5) > Q::new(4, 7));
        assert!(Q::new(-1, 2) < Q::new(1, 3));
        assert!(Q::new(-1, 2) < Q::zero());
    }

    #[test]
    fn bigint() {
        type R = Ratio<BigInt>;
        let a = R::new(BigInt::from(6), BigInt::from(-4));
        assert_eq!(a, R::new(BigInt::from(-3), BigInt::from(2)));
        assert_eq!(&a * &a, R::new(BigInt::from(9), BigInt::from(4)));
        assert_eq!(a.to_string(), "-3/2");
    }

    #[test]
    fn bigint_beyond_i64() {
        type R = Ratio<BigInt>;
        let a = R::from_numer(BigInt::from(i64::MAX));
        let b = &a * &R::from(2);
        assert_eq!(b.to_string(), "18446744073709551614");

        let c = &R::one() / &(&b * &b);
        assert_eq!(&c * &b * &b, R::one());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() {
        let a = Q::new(-3, 4);
        let ser = serde_json::to_string(&a).unwrap();
        assert_eq!(ser, "\"-3/4\"");

        let des: Q = serde_json::from_str(&ser).unwrap();
        assert_eq!(des, a);

        let des: Q = serde_json::from_str("5").unwrap();
        assert_eq!(des, Q::from(5));

        assert!(serde_json::from_str::<Q>("\"1/0\"").is_err());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserialize_bigint() {
        type R = Ratio<BigInt>;

        let des: R = serde_json::from_str("-7").unwrap();
        assert_eq!(des, R::from(-7));

        let des: R = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(des.to_string(), "18446744073709551615");

        let des: R = serde_json::from_str("\"1/295431270655083369864300\"").unwrap();
        assert_eq!(des.denom().to_string(), "295431270655083369864300");
    }
}
