mod ctype;
mod helper;

pub use ctype::*;
pub use helper::*;
