mod ratio;
mod term;
mod poly;

pub use ratio::*;
pub use term::*;
pub use poly::*;

/// Rationals with unbounded numerator and denominator.
pub type Rational = Ratio<num_bigint::BigInt>;

/// Rationals over `i64`. Arithmetic overflow is not checked.
pub type Rational64 = Ratio<i64>;

/// Polynomials in `X` over the rationals.
pub type QPoly<const X: char> = Poly<X, Rational>;
