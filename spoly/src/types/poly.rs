use std::fmt::{Display, Debug};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use ahash::AHashMap;
use delegate::delegate;
use itertools::{EitherOrBoth, Itertools};
use log::trace;
use num_traits::{Zero, One, Pow};
use auto_impl_ops::auto_ops;

use crate::{Elem, Ring, RingOps, Field, FieldOps, PolyError};
use crate::util::format::{lc, mono};
use super::Term;

/// A univariate polynomial in `X` over `R`.
///
/// Stored sparsely as terms of strictly decreasing degree,
/// none of them with a zero coefficient. The empty list is the zero polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Poly<const X: char, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    terms: Vec<Term<R>>
}

impl<const X: char, R> Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn new(terms: Vec<Term<R>>) -> Self {
        debug_assert!(Self::is_canonical(&terms));
        Self { terms }
    }

    /// Builds a polynomial from `(coeff, deg)` pairs given in any order.
    /// Pairs of equal degree are summed, and vanishing terms are dropped.
    pub fn from_pairs<I, C>(pairs: I) -> Self
    where I: IntoIterator<Item = (C, usize)>, C: Into<R> {
        let mut acc: AHashMap<usize, R> = AHashMap::new();

        for (c, d) in pairs {
            let c: R = c.into();
            *acc.entry(d).or_insert_with(R::zero) += c;
        }

        let terms = acc.into_iter()
            .filter(|(_, c)| !c.is_zero())
            .sorted_by(|(i, _), (j, _)| j.cmp(i))
            .map(|(d, c)| Term::new(c, d))
            .collect();

        Self::new(terms)
    }

    /// Same as `from_pairs`, but accepts signed degrees and rejects negative ones.
    pub fn try_from_pairs<I, C>(pairs: I) -> Result<Self, PolyError>
    where I: IntoIterator<Item = (C, i64)>, C: Into<R> {
        let pairs = pairs.into_iter().map(|(c, d)|
            match usize::try_from(d) {
                Ok(d)  => Ok((c, d)),
                Err(_) => Err(PolyError::NegativeDegree(d))
            }
        ).collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_pairs(pairs))
    }

    /// `(coeff, deg)` pairs in decreasing order of degree.
    pub fn to_pairs(&self) -> Vec<(R, usize)> {
        self.iter().map(|t| (t.coeff().clone(), t.deg())).collect()
    }

    pub fn into_pairs(self) -> Vec<(R, usize)> {
        self.terms.into_iter().map(Term::into_pair).collect()
    }

    pub fn from_const(r: R) -> Self {
        Self::from_pairs([(r, 0)])
    }

    pub fn variable() -> Self {
        Self::from_pairs([(R::one(), 1)])
    }

    pub fn math_symbol() -> String {
        format!("{}[{}]", R::math_symbol(), X)
    }

    delegate! {
        to self.terms {
            #[call(len)]
            pub fn nterms(&self) -> usize;
            pub fn iter(&self) -> std::slice::Iter<'_, Term<R>>;
        }
    }

    pub fn is_const(&self) -> bool {
        self.iter().all(Term::is_const)
    }

    pub fn lead_term(&self) -> Option<&Term<R>> {
        self.terms.first()
    }

    /// `None` for the zero polynomial.
    pub fn lead_deg(&self) -> Option<usize> {
        self.lead_term().map(Term::deg)
    }

    pub fn lead_coeff(&self) -> Option<&R> {
        self.lead_term().map(Term::coeff)
    }

    pub fn coeff_for(&self, d: usize) -> R {
        self.terms.binary_search_by(|t| d.cmp(&t.deg()))
            .map(|i| self.terms[i].coeff().clone())
            .unwrap_or_else(|_| R::zero())
    }

    pub fn map_coeffs<R2, F>(&self, f: F) -> Poly<X, R2>
    where
        R2: Ring, for<'x> &'x R2: RingOps<R2>,
        F: Fn(&R) -> R2
    {
        Poly::from_pairs(self.iter().map(|t| (f(t.coeff()), t.deg())))
    }

    /// `self * t`. The order of terms is kept, so no re-sorting is needed.
    pub fn mul_term(&self, t: &Term<R>) -> Self {
        let terms = self.iter()
            .map(|s| s * t)
            .filter(|s| !s.is_zero())
            .collect();
        Self::new(terms)
    }

    // linear merge of two canonical term lists.
    fn merge(lhs: &[Term<R>], rhs: &[Term<R>]) -> Vec<Term<R>> {
        lhs.iter().merge_join_by(rhs, |s, t| t.deg().cmp(&s.deg())).filter_map(|e|
            match e {
                EitherOrBoth::Left(s)  => Some(s.clone()),
                EitherOrBoth::Right(t) => Some(t.clone()),
                EitherOrBoth::Both(s, t) => {
                    let c = s.coeff() + t.coeff();
                    (!c.is_zero()).then(|| Term::new(c, s.deg()))
                }
            }
        ).collect()
    }

    fn is_canonical(terms: &[Term<R>]) -> bool {
        terms.iter().all(|t| !t.is_zero()) &&
        terms.iter().tuple_windows().all(|(s, t)| s.deg() > t.deg())
    }
}

impl<const X: char, R> From<Term<R>> for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(t: Term<R>) -> Self {
        Self::from_pairs([t.into_pair()])
    }
}

impl<const X: char, R> From<(R, usize)> for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(pair: (R, usize)) -> Self {
        Self::from_pairs([pair])
    }
}

impl<const X: char, R> FromIterator<(R, usize)> for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn from_iter<T: IntoIterator<Item = (R, usize)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

impl<const X: char, R> IntoIterator for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Item = Term<R>;
    type IntoIter = std::vec::IntoIter<Term<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a, const X: char, R> IntoIterator for &'a Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Item = &'a Term<R>;
    type IntoIter = std::slice::Iter<'a, Term<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

// `{}` gives "3x^3 - 2x^2 + 1", `{:#}` gives "3x³ - 2x² + 1".
impl<const X: char, R> Display for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unicode = f.alternate();
        let terms = self.iter().map(|t|
            (mono(X, t.deg(), unicode), t.coeff())
        );
        f.write_str(&lc(terms))
    }
}

impl<const X: char, R> Debug for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<const X: char, R> Zero for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn zero() -> Self {
        Self::new(vec![])
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<const X: char, R> One for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn one() -> Self {
        Self::from_const(R::one())
    }

    fn is_one(&self) -> bool {
        matches!(self.terms.as_slice(), [t] if t.is_const() && t.coeff().is_one())
    }
}

impl<const X: char, R> Neg for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(self.terms.into_iter().map(|t| -t).collect())
    }
}

impl<const X: char, R> Neg for &Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Poly<X, R>;
    fn neg(self) -> Self::Output {
        Poly::new(self.iter().map(|t| -t).collect())
    }
}

#[auto_ops]
impl<const X: char, R> AddAssign<&Poly<X, R>> for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn add_assign(&mut self, rhs: &Poly<X, R>) {
        self.terms = Self::merge(&self.terms, &rhs.terms)
    }
}

#[auto_ops]
impl<const X: char, R> SubAssign<&Poly<X, R>> for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn sub_assign(&mut self, rhs: &Poly<X, R>) {
        let neg = -rhs; // p - q = p + (-q)
        self.terms = Self::merge(&self.terms, &neg.terms)
    }
}

#[auto_ops]
impl<const X: char, R> MulAssign<&R> for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        let t = Term::new(rhs.clone(), 0);
        *self = self.mul_term(&t)
    }
}

#[auto_ops]
impl<const X: char, R> MulAssign<&Poly<X, R>> for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &Poly<X, R>) {
        *self = if self.is_zero() || rhs.is_zero() {
            Self::zero()
        } else if let [t] = rhs.terms.as_slice() {
            self.mul_term(t)
        } else if let [s] = self.terms.as_slice() {
            rhs.mul_term(s)
        } else {
            trace!("mul: {} x {} terms", self.nterms(), rhs.nterms());
            Self::from_pairs(
                self.iter()
                    .cartesian_product(rhs.iter())
                    .map(|(s, t)| (s * t).into_pair())
            )
        }
    }
}

impl<const X: char, R> Sum for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |res, p| res + p)
    }
}

impl<'a, const X: char, R> Sum<&'a Poly<X, R>> for Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |res, p| res + p)
    }
}

macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl<const X: char, R> Pow<$t> for &Poly<X, R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            type Output = Poly<X, R>;
            fn pow(self, n: $t) -> Self::Output {
                let mut res = Poly::one();
                for _ in 0..n {
                    res *= self
                }
                res
            }
        }
    };
}

impl_pow_unsigned!(u32);
impl_pow_unsigned!(usize);

// Division over a field.

impl<const X: char, R> Poly<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    /// Long division: returns `(q, r)` with `self = q * rhs + r`
    /// and `r = 0` or `deg(r) < deg(rhs)`.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), PolyError> {
        let lead = rhs.lead_term().ok_or(PolyError::DivisionByZero)?;

        let mut q = vec![];
        let mut r = self.clone();

        // each step cancels the leading term of r, so deg(r) strictly decreases.
        while let Some(t) = r.lead_term() {
            if t.deg() < lead.deg() {
                break
            }

            let c = t.coeff().checked_div(lead.coeff())?;
            let f = Term::new(c, t.deg() - lead.deg()); // (a/b) x^{i-j}

            trace!("div_rem: r = {r}, q += {}", Self::from(f.clone()));

            r -= rhs.mul_term(&f);
            q.push(f);
        }

        Ok((Self::new(q), r))
    }

    /// Exact division, failing unless `rhs` divides `self`.
    pub fn div_exact(&self, rhs: &Self) -> Result<Self, PolyError> {
        let (q, r) = self.div_rem(rhs)?;
        if r.is_zero() {
            Ok(q)
        } else {
            Err(PolyError::NonExactDivision)
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        // serialized as the list of (coeff, deg) pairs.
        impl<const X: char, R> serde::Serialize for Poly<X, R>
        where R: Ring + serde::Serialize, for<'x> &'x R: RingOps<R> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where S: serde::Serializer {
                serializer.collect_seq(self.iter().map(|t| (t.coeff(), t.deg())))
            }
        }

        impl<'de, const X: char, R> serde::Deserialize<'de> for Poly<X, R>
        where R: Ring + serde::Deserialize<'de>, for<'x> &'x R: RingOps<R> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where D: serde::Deserializer<'de> {
                let pairs = <Vec<(R, usize)> as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_pairs(pairs))
            }
        }
    }
}
