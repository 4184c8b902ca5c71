//! Sparse univariate polynomials with exact coefficients.
//!
//! ```
//! use spoly::{QPoly, Rational};
//!
//! type P = QPoly<'x'>;
//!
//! let f = P::from_pairs([(3, 3), (-2, 2), (1, 0)]);
//! let g = P::from_pairs([(1, 1), (-1, 0)]);
//!
//! let (q, r) = f.div_rem(&g).unwrap();
//! assert_eq!(q.to_string(), "3x^2 + x + 1");
//! assert_eq!(r.to_string(), "2");
//! assert_eq!(q.coeff_for(1), Rational::from(1));
//! assert_eq!(&q * &g + &r, f);
//! ```

mod abst;
mod types;
mod misc;
mod error;

pub use abst::*;
pub use types::*;
pub use misc::*;
pub use error::PolyError;

pub mod util;
