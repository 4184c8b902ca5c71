use crate::{EucRing, EucRingOps, PolyError};

// Fields

pub trait FieldOps<T = Self>: 
    EucRingOps<T>
{}

pub trait Field: 
    EucRing + 
    FieldOps
where 
    for<'a> &'a Self: FieldOps<Self>,
{
    /// Exact division `self / rhs`, failing when `rhs` is zero.
    fn checked_div(&self, rhs: &Self) -> Result<Self, PolyError> { 
        let inv = rhs.inv().ok_or(PolyError::DivisionByZero)?;
        let mut res = self.clone();
        res *= &inv;
        Ok(res)
    }
}
