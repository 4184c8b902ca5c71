use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum PolyError { 
    #[display("division by zero")]
    DivisionByZero,

    #[display("division is not exact (non-zero remainder)")]
    NonExactDivision,

    #[display("negative degree: {_0}")]
    NegativeDegree(i64),

    #[display("cannot parse '{_0}'")]
    Parse(String),
}

impl std::error::Error for PolyError {}
