use std::fmt::{Debug, Display};

// Common requirements for coefficients.

pub trait Elem: 
    Default + 
    PartialEq + 
    Eq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{
    fn math_symbol() -> String;
}
