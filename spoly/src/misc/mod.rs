mod int_ext;

pub use int_ext::*;
