use std::ops::{Mul, MulAssign, Neg};
use auto_impl_ops::auto_ops;
use crate::{Ring, RingOps};

/// A single term `c x^d` of a univariate polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Term<R> {
    coeff: R,
    deg: usize,
}

impl<R> Term<R> {
    pub fn new(coeff: R, deg: usize) -> Self {
        Self { coeff, deg }
    }

    pub fn coeff(&self) -> &R {
        &self.coeff
    }

    pub fn deg(&self) -> usize {
        self.deg
    }

    pub fn into_pair(self) -> (R, usize) {
        (self.coeff, self.deg)
    }
}

impl<R> Term<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    pub fn is_const(&self) -> bool {
        self.deg == 0
    }
}

impl<R> From<(R, usize)> for Term<R> {
    fn from(pair: (R, usize)) -> Self {
        let (coeff, deg) = pair;
        Self::new(coeff, deg)
    }
}

#[auto_ops]
impl<R> MulAssign<&Term<R>> for Term<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &Term<R>) {
        self.coeff *= &rhs.coeff; // (a x^i)(b x^j) = ab x^{i+j}
        self.deg += rhs.deg;
    }
}

impl<R> Neg for Term<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Term::new(-self.coeff, self.deg)
    }
}

impl<R> Neg for &Term<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Term<R>;
    fn neg(self) -> Self::Output {
        Term::new(-&self.coeff, self.deg)
    }
}

#[cfg(test)]
mod tests {
    use crate::Ratio;
    use super::*;

    type Q = Ratio<i64>;

    #[test]
    fn init() {
        let t = Term::new(Q::new(1, 2), 3);
        assert_eq!(t.coeff(), &Q::new(1, 2));
        assert_eq!(t.deg(), 3);
        assert!(!t.is_zero());
        assert!(!t.is_const());
        assert_eq!(t.into_pair(), (Q::new(1, 2), 3));
    }

    #[test]
    fn mul() {
        let s = Term::new(Q::from(3), 2);
        let t = Term::new(Q::new(-1, 6), 1);
        assert_eq!(&s * &t, Term::new(Q::new(-1, 2), 3));
        assert_eq!(s * Term::new(Q::from(1), 0), Term::new(Q::from(3), 2));
    }

    #[test]
    fn neg() {
        let t = Term::from((2i64, 4));
        assert_eq!(-&t, Term::new(-2, 4));
        assert_eq!(-t, Term::new(-2, 4));
    }
}
