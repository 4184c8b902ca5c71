use crate::{AddGrp, AddGrpOps, Mon, MonOps};

// Commutative rings with unity

pub trait RingOps<T = Self>: 
    AddGrpOps<T> + 
    MonOps<T>
{}

pub trait Ring: 
    AddGrp + 
    Mon + 
    RingOps + 
    From<i32>
where
    for<'a> &'a Self: RingOps<Self>
{
    fn inv(&self) -> Option<Self>;
    fn is_unit(&self) -> bool;
    fn normalizing_unit(&self) -> Self;

    fn is_pm_one(&self) -> bool { 
        self.is_one() || (-self).is_one()
    }
}

#[cfg(test)]
mod tests {
    use crate::Ring;
 
    #[test]
    fn is_pm_one() { 
        assert!(1i32.is_pm_one());
        assert!((-1i32).is_pm_one());
        assert!(!2i64.is_pm_one());
        assert!(!0i64.is_pm_one());
    }
}
