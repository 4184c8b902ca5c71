use std::ops::{Neg, Sub, SubAssign};
use crate::{AddMon, AddMonOps};

// Additive Groups

pub trait AddGrpOps<T = Self>: 
    AddMonOps<T> + 
    Neg<Output = T> +                 // -S -> T
    Sub<T, Output = T> +              // S - T -> T
    for<'a> Sub<&'a T, Output = T>    // S - &T -> T
{}

pub trait AddGrp: 
    AddMon + 
    AddGrpOps + 
    SubAssign + 
    for<'a> SubAssign<&'a Self>
where 
    for<'a> &'a Self: AddGrpOps<Self>
{}
